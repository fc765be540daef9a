//! Artist onboarding wizard
//!
//! Three linear steps: basic info, professional details, first service.
//! Forward moves happen only after a successful submit; "Back" moves one
//! step toward the start. Which steps are reachable depends on whether the
//! artist profile already exists, since steps 2 and 3 operate on it.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use super::artist_services::ServiceDraft;
use super::artists::{ArtistBasics, ArtistProfile, ProfessionalDetails};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    BasicInfo,
    ProfessionalDetails,
    Services,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 3] = [
        OnboardingStep::BasicInfo,
        OnboardingStep::ProfessionalDetails,
        OnboardingStep::Services,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::ProfessionalDetails => 2,
            Self::Services => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::BasicInfo),
            2 => Some(Self::ProfessionalDetails),
            3 => Some(Self::Services),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::ProfessionalDetails => "Professional Details",
            Self::Services => "Services",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    /// Step to show for a `?step=N` request.
    ///
    /// Unknown numbers start over at step 1. Without a stored profile only
    /// step 1 is reachable.
    pub fn resume(requested: Option<u8>, has_profile: bool) -> Self {
        let requested = requested
            .and_then(Self::from_number)
            .unwrap_or(Self::BasicInfo);

        if has_profile {
            requested
        } else {
            Self::BasicInfo
        }
    }
}

/// Result of a successful step submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance(OnboardingStep),
    Complete,
}

impl Transition {
    pub fn after(step: OnboardingStep) -> Self {
        match step.next() {
            Some(next) => Self::Advance(next),
            None => Self::Complete,
        }
    }
}

/// Step 1 form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicInfoForm {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub location: String,
}

impl BasicInfoForm {
    pub fn parse(&self) -> AppResult<ArtistBasics> {
        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            return Err(AppError::validation("Display name is required"));
        }

        Ok(ArtistBasics {
            display_name: display_name.to_string(),
            location: non_empty(&self.location),
        })
    }
}

/// Step 2 form. Numbers arrive as text; empty means "not provided".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessionalDetailsForm {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub years_experience: String,
    #[serde(default)]
    pub hourly_rate: String,
}

impl ProfessionalDetailsForm {
    pub fn parse(&self) -> AppResult<ProfessionalDetails> {
        Ok(ProfessionalDetails {
            bio: non_empty(&self.bio),
            years_experience: parse_whole_number(&self.years_experience, "Years of experience")?,
            hourly_rate: parse_amount(&self.hourly_rate, "Hourly rate")?,
        })
    }
}

/// Step 3 form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
}

impl ServiceForm {
    pub fn parse(&self) -> AppResult<ServiceDraft> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(AppError::validation("Category is required"));
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Service title is required"));
        }

        Ok(ServiceDraft {
            category: category.to_string(),
            title: title.to_string(),
            price: parse_amount(&self.price, "Price")?,
        })
    }
}

/// Everything the wizard page can show, as the text the inputs hold.
#[derive(Debug, Clone, Default)]
pub struct WizardValues {
    pub basic: BasicInfoForm,
    pub details: ProfessionalDetailsForm,
    pub service: ServiceForm,
}

impl WizardValues {
    /// Prefill steps 1 and 2 from what was already saved.
    pub fn from_profile(profile: &ArtistProfile) -> Self {
        Self {
            basic: BasicInfoForm {
                display_name: profile.display_name.clone(),
                location: profile.location.clone().unwrap_or_default(),
            },
            details: ProfessionalDetailsForm {
                bio: profile.bio.clone().unwrap_or_default(),
                years_experience: profile
                    .years_experience
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
                hourly_rate: profile
                    .hourly_rate
                    .map(|r| r.normalize().to_string())
                    .unwrap_or_default(),
            },
            service: ServiceForm::default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Empty input is `None`; anything else must be a non-negative integer.
pub fn parse_whole_number(raw: &str, field: &str) -> AppResult<Option<i32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value: i32 = raw
        .parse()
        .map_err(|_| AppError::validation(format!("{} must be a whole number", field)))?;
    if value < 0 {
        return Err(AppError::validation(format!("{} cannot be negative", field)));
    }
    Ok(Some(value))
}

/// Empty input is `None`; anything else must be a non-negative amount,
/// kept to cents.
pub fn parse_amount(raw: &str, field: &str) -> AppResult<Option<Decimal>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value = Decimal::from_str(raw)
        .map_err(|_| AppError::validation(format!("{} must be a number", field)))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::validation(format!("{} cannot be negative", field)));
    }
    Ok(Some(value.round_dp(2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_move_forward_and_back() {
        assert_eq!(OnboardingStep::BasicInfo.next(), Some(OnboardingStep::ProfessionalDetails));
        assert_eq!(OnboardingStep::ProfessionalDetails.next(), Some(OnboardingStep::Services));
        assert_eq!(OnboardingStep::Services.next(), None);

        assert_eq!(OnboardingStep::BasicInfo.previous(), None);
        assert_eq!(OnboardingStep::Services.previous(), Some(OnboardingStep::ProfessionalDetails));
    }

    #[test]
    fn transitions_end_after_services() {
        assert_eq!(
            Transition::after(OnboardingStep::BasicInfo),
            Transition::Advance(OnboardingStep::ProfessionalDetails)
        );
        assert_eq!(
            Transition::after(OnboardingStep::ProfessionalDetails),
            Transition::Advance(OnboardingStep::Services)
        );
        assert_eq!(Transition::after(OnboardingStep::Services), Transition::Complete);
    }

    #[test]
    fn resume_requires_a_profile_past_step_one() {
        assert_eq!(OnboardingStep::resume(Some(3), false), OnboardingStep::BasicInfo);
        assert_eq!(OnboardingStep::resume(Some(3), true), OnboardingStep::Services);
        assert_eq!(OnboardingStep::resume(Some(2), true), OnboardingStep::ProfessionalDetails);
        assert_eq!(OnboardingStep::resume(None, true), OnboardingStep::BasicInfo);
        assert_eq!(OnboardingStep::resume(Some(9), true), OnboardingStep::BasicInfo);
    }

    #[test]
    fn basic_info_requires_display_name() {
        let form = BasicInfoForm {
            display_name: "   ".to_string(),
            location: "Austin, TX".to_string(),
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.public_message(), "Display name is required");

        let form = BasicInfoForm {
            display_name: " Jane Doe ".to_string(),
            location: "".to_string(),
        };
        let basics = form.parse().unwrap();
        assert_eq!(basics.display_name, "Jane Doe");
        assert_eq!(basics.location, None);
    }

    #[test]
    fn empty_numbers_are_absent() {
        let form = ProfessionalDetailsForm {
            bio: "".to_string(),
            years_experience: "".to_string(),
            hourly_rate: "  ".to_string(),
        };
        assert_eq!(form.parse().unwrap(), ProfessionalDetails::default());
    }

    #[test]
    fn numbers_are_parsed() {
        let form = ProfessionalDetailsForm {
            bio: "Jazz pianist".to_string(),
            years_experience: "5".to_string(),
            hourly_rate: "75.50".to_string(),
        };
        let details = form.parse().unwrap();
        assert_eq!(details.bio.as_deref(), Some("Jazz pianist"));
        assert_eq!(details.years_experience, Some(5));
        assert_eq!(details.hourly_rate, Some(Decimal::new(7550, 2)));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(parse_whole_number("five", "Years of experience").is_err());
        assert!(parse_whole_number("2.5", "Years of experience").is_err());
        assert!(parse_whole_number("-1", "Years of experience").is_err());
        assert!(parse_amount("abc", "Hourly rate").is_err());
        assert!(parse_amount("-10", "Hourly rate").is_err());
        assert_eq!(parse_amount("12.345", "Price").unwrap(), Some(Decimal::new(1234, 2)));
    }

    #[test]
    fn service_requires_category_and_title() {
        let err = ServiceForm {
            category: "".to_string(),
            title: "Wedding".to_string(),
            price: "".to_string(),
        }
        .parse()
        .unwrap_err();
        assert_eq!(err.public_message(), "Category is required");

        let err = ServiceForm {
            category: "Live".to_string(),
            title: " ".to_string(),
            price: "".to_string(),
        }
        .parse()
        .unwrap_err();
        assert_eq!(err.public_message(), "Service title is required");
    }
}
