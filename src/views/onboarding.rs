use axum::response::Html;

use super::{error_banner, escape, layout};
use crate::auth::CurrentUser;
use crate::domain::onboarding::{OnboardingStep, WizardValues};

fn progress(current: OnboardingStep) -> String {
    OnboardingStep::ALL
        .iter()
        .map(|step| {
            let state = if current >= *step { "done" } else { "todo" };
            format!(
                r#"<li class="step-{state}"><strong>{n}</strong> {title}</li>"#,
                state = state,
                n = step.number(),
                title = step.title(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

fn back_link(step: OnboardingStep) -> String {
    match step.previous() {
        Some(previous) => format!(
            r#"<a class="button outline" href="/onboarding/artist?step={}">Back</a>"#,
            previous.number()
        ),
        None => String::new(),
    }
}

fn step_form(step: OnboardingStep, values: &WizardValues, error: Option<&str>) -> String {
    let (heading, description, action, fields, submit) = match step {
        OnboardingStep::BasicInfo => (
            "Basic Information",
            "Tell us about yourself",
            "basic-info",
            format!(
                r#"<label for="display_name">Display Name *</label>
                <input id="display_name" name="display_name" placeholder="Your artist name" value="{}" required>
                <label for="location">Location</label>
                <input id="location" name="location" placeholder="City, State/Country" value="{}">"#,
                escape(&values.basic.display_name),
                escape(&values.basic.location),
            ),
            "Next",
        ),
        OnboardingStep::ProfessionalDetails => (
            "Professional Details",
            "Share your experience and expertise",
            "details",
            format!(
                r#"<label for="bio">Bio</label>
                <textarea id="bio" name="bio" placeholder="Tell clients about your experience and style...">{}</textarea>
                <label for="years_experience">Years of Experience</label>
                <input id="years_experience" name="years_experience" type="number" min="0" placeholder="5" value="{}">
                <label for="hourly_rate">Hourly Rate ($)</label>
                <input id="hourly_rate" name="hourly_rate" type="number" min="0" step="0.01" placeholder="75.00" value="{}">"#,
                escape(&values.details.bio),
                escape(&values.details.years_experience),
                escape(&values.details.hourly_rate),
            ),
            "Next",
        ),
        OnboardingStep::Services => (
            "Add Your First Service",
            "What services do you offer?",
            "service",
            format!(
                r#"<label for="category">Category *</label>
                <input id="category" name="category" placeholder="e.g., Live Performance, Studio Recording" value="{}" required>
                <label for="title">Service Title *</label>
                <input id="title" name="title" placeholder="e.g., Wedding Performance" value="{}" required>
                <label for="price">Price ($)</label>
                <input id="price" name="price" type="number" min="0" step="0.01" placeholder="500.00" value="{}">"#,
                escape(&values.service.category),
                escape(&values.service.title),
                escape(&values.service.price),
            ),
            "Complete Setup",
        ),
    };

    format!(
        r#"        <div class="card">
            <h2>{heading}</h2>
            <p class="description">{description}</p>
            <form method="post" action="/onboarding/artist/{action}">
                {fields}
                {error}
                <div class="actions">
                    {back}
                    <button class="button" type="submit">{submit}</button>
                </div>
            </form>
        </div>"#,
        heading = heading,
        description = description,
        action = action,
        fields = fields,
        error = error_banner(error),
        back = back_link(step),
        submit = submit,
    )
}

pub fn wizard_page(
    user: &CurrentUser,
    step: OnboardingStep,
    values: &WizardValues,
    error: Option<&str>,
) -> Html<String> {
    layout(
        "Complete Your Artist Profile",
        Some(user),
        &format!(
            r#"        <div class="center">
            <h1>Complete Your Artist Profile</h1>
            <p class="subtitle">Step {n} of {total}</p>
        </div>
        <ol class="narrow muted" style="display: flex; justify-content: space-between; list-style: none; margin-bottom: 24px">
                {progress}
        </ol>
{form}"#,
            n = step.number(),
            total = OnboardingStep::ALL.len(),
            progress = progress(step),
            form = step_form(step, values, error),
        ),
    )
}
