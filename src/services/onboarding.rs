//! Artist onboarding wizard persistence

use crate::auth::CurrentUser;
use crate::domain::onboarding::{
    BasicInfoForm, OnboardingStep, ProfessionalDetailsForm, ServiceForm, Transition, WizardValues,
};
use crate::error::{AppError, AppResult};
use crate::store::Store;

/// The step to render and the values its inputs start with
#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: OnboardingStep,
    pub values: WizardValues,
}

pub struct Onboarding<'a> {
    store: &'a dyn Store,
}

impl<'a> Onboarding<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub async fn wizard(&self, user: &CurrentUser, requested: Option<u8>) -> AppResult<WizardState> {
        let profile = self.store.find_artist_by_user(user.id).await?;
        let step = OnboardingStep::resume(requested, profile.is_some());
        let values = profile
            .as_ref()
            .map(WizardValues::from_profile)
            .unwrap_or_default();

        Ok(WizardState { step, values })
    }

    /// Step 1: create or update the artist profile
    pub async fn save_basic_info(
        &self,
        user: &CurrentUser,
        form: &BasicInfoForm,
    ) -> AppResult<Transition> {
        ensure_artist(user)?;
        let basics = form.parse()?;

        let profile = self.store.upsert_artist_basics(user.id, &basics).await?;
        tracing::info!(user_id = %user.id, artist_id = %profile.id, "Saved artist basic info");

        Ok(Transition::after(OnboardingStep::BasicInfo))
    }

    /// Step 2: bio, experience and rate
    pub async fn save_details(
        &self,
        user: &CurrentUser,
        form: &ProfessionalDetailsForm,
    ) -> AppResult<Transition> {
        ensure_artist(user)?;
        let details = form.parse()?;

        let profile = self
            .store
            .update_artist_details(user.id, &details)
            .await?
            .ok_or_else(|| AppError::not_found("Artist profile not found"))?;
        tracing::info!(user_id = %user.id, artist_id = %profile.id, "Saved artist details");

        Ok(Transition::after(OnboardingStep::ProfessionalDetails))
    }

    /// Step 3: the artist's first service
    pub async fn add_service(&self, user: &CurrentUser, form: &ServiceForm) -> AppResult<Transition> {
        ensure_artist(user)?;
        let draft = form.parse()?;

        let profile = self
            .store
            .find_artist_by_user(user.id)
            .await?
            .ok_or_else(|| AppError::not_found("Artist profile not found"))?;

        let service = self.store.insert_service(&draft.for_artist(profile.id)).await?;
        tracing::info!(artist_id = %profile.id, service_id = %service.id, "Added artist service");

        Ok(Transition::after(OnboardingStep::Services))
    }
}

fn ensure_artist(user: &CurrentUser) -> AppResult<()> {
    if user.is_artist() {
        Ok(())
    } else {
        Err(AppError::forbidden("Only artists can set up an artist profile"))
    }
}
