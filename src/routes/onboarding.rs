//! Artist onboarding wizard routes
//!
//! `GET /onboarding/artist?step=N` renders a step; each step form posts to
//! its own endpoint and redirects to the next step on success.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::auth::{CurrentUser, RequireUser, UserRejection};
use crate::domain::onboarding::{
    BasicInfoForm, OnboardingStep, ProfessionalDetailsForm, ServiceForm, Transition, WizardValues,
};
use crate::error::{AppError, AppResult};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct WizardQuery {
    pub step: Option<String>,
}

fn redirect_for(transition: Transition) -> Redirect {
    match transition {
        Transition::Advance(step) => {
            Redirect::to(&format!("/onboarding/artist?step={}", step.number()))
        }
        Transition::Complete => Redirect::to("/dashboard"),
    }
}

/// Redirect away anyone who is not an artist
fn guard(user: &CurrentUser) -> Option<Response> {
    if user.is_artist() {
        None
    } else {
        tracing::debug!(user_id = %user.id, role = %user.role, "Non-artist sent to dashboard");
        Some(Redirect::to("/dashboard").into_response())
    }
}

/// Redirect on success, otherwise show the same step again with the message
fn finish(
    user: &CurrentUser,
    step: OnboardingStep,
    result: AppResult<Transition>,
    values: &WizardValues,
    fallback: &str,
) -> Response {
    match result {
        Ok(transition) => redirect_for(transition).into_response(),
        Err(e) => {
            e.log();
            let message = e.inline_message(fallback);
            (
                e.status_code(),
                views::onboarding::wizard_page(user, step, values, Some(&message)),
            )
                .into_response()
        }
    }
}

/// The artist submitting a step, or the response that replaces the step.
///
/// A session whose profile cannot be loaded re-renders the step with the
/// step's message, keeping the submitted values.
fn submitting_artist(
    extracted: Result<RequireUser, UserRejection>,
    step: OnboardingStep,
    values: &WizardValues,
    fallback: &str,
) -> Result<CurrentUser, Response> {
    match extracted {
        Ok(RequireUser(user)) => match guard(&user) {
            Some(redirect) => Err(redirect),
            None => Ok(user),
        },
        Err(UserRejection::Unavailable { user, error }) => {
            Err(finish(&user, step, Err(error), values, fallback))
        }
        Err(rejection) => Err(rejection.into_response()),
    }
}

/// GET /onboarding/artist
pub async fn wizard(
    State(state): State<Arc<AppState>>,
    RequireUser(user): RequireUser,
    Query(query): Query<WizardQuery>,
) -> Result<Response, AppError> {
    if let Some(redirect) = guard(&user) {
        return Ok(redirect);
    }

    let requested = query.step.as_deref().and_then(|s| s.trim().parse().ok());
    let wizard = state.onboarding().wizard(&user, requested).await?;

    Ok(views::onboarding::wizard_page(&user, wizard.step, &wizard.values, None).into_response())
}

/// POST /onboarding/artist/basic-info
pub async fn save_basic_info(
    State(state): State<Arc<AppState>>,
    user: Result<RequireUser, UserRejection>,
    Form(form): Form<BasicInfoForm>,
) -> Response {
    const FALLBACK: &str = "Failed to save profile";
    let step = OnboardingStep::BasicInfo;
    let values = WizardValues {
        basic: form,
        ..Default::default()
    };
    let user = match submitting_artist(user, step, &values, FALLBACK) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let result = state.onboarding().save_basic_info(&user, &values.basic).await;
    finish(&user, step, result, &values, FALLBACK)
}

/// POST /onboarding/artist/details
pub async fn save_details(
    State(state): State<Arc<AppState>>,
    user: Result<RequireUser, UserRejection>,
    Form(form): Form<ProfessionalDetailsForm>,
) -> Response {
    const FALLBACK: &str = "Failed to save details";
    let step = OnboardingStep::ProfessionalDetails;
    let values = WizardValues {
        details: form,
        ..Default::default()
    };
    let user = match submitting_artist(user, step, &values, FALLBACK) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let result = state.onboarding().save_details(&user, &values.details).await;
    finish(&user, step, result, &values, FALLBACK)
}

/// POST /onboarding/artist/service
pub async fn add_service(
    State(state): State<Arc<AppState>>,
    user: Result<RequireUser, UserRejection>,
    Form(form): Form<ServiceForm>,
) -> Response {
    const FALLBACK: &str = "Failed to save service";
    let step = OnboardingStep::Services;
    let values = WizardValues {
        service: form,
        ..Default::default()
    };
    let user = match submitting_artist(user, step, &values, FALLBACK) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let result = state.onboarding().add_service(&user, &values.service).await;
    finish(&user, step, result, &values, FALLBACK)
}
