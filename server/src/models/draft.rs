use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const EVENT_TYPES: [&str; 7] = [
    "hackathon",
    "conference",
    "workshop",
    "competition",
    "festival",
    "exhibition",
    "other",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EventDetailsForm {
    #[validate(custom(function = "non_blank", message = "Event name is required"))]
    pub name: String,
    #[validate(custom(function = "known_event_type"))]
    pub event_type: String,
    #[validate(custom(function = "non_blank", message = "University or college is required"))]
    pub university: String,
    /// Checked against the current date by the wizard, not here.
    pub date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "Expected attendees must be at least 1"))]
    pub expected_attendees: u32,
    #[validate(custom(function = "non_blank", message = "Venue or location is required"))]
    pub location: String,
    #[validate(custom(function = "non_blank", message = "Event description is required"))]
    pub description: String,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[validate(email(message = "Contact email must be a valid address"))]
    pub contact_email: String,
}

/// Reference to an image chosen in the media step. Files are never uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ImageRef {
    #[validate(length(min = 1, message = "Image file name is required"))]
    pub file_name: String,
    #[validate(custom(function = "image_content_type"))]
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MediaForm {
    #[validate(nested)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SponsorshipForm {
    #[validate(custom(function = "positive_amount"))]
    pub goal: Decimal,
    #[validate(custom(function = "non_blank", message = "Gold package benefits are required"))]
    pub gold_benefits: String,
    #[validate(custom(function = "non_blank", message = "Silver package benefits are required"))]
    pub silver_benefits: String,
    #[validate(custom(function = "non_blank", message = "Bronze package benefits are required"))]
    pub bronze_benefits: String,
    pub deadline: Option<NaiveDate>,
    pub additional_notes: Option<String>,
}

fn known_event_type(value: &str) -> Result<(), ValidationError> {
    if EVENT_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("event_type").with_message("Unknown event type".into()))
    }
}

fn image_content_type(value: &str) -> Result<(), ValidationError> {
    if value.starts_with("image/") && value.len() > "image/".len() {
        Ok(())
    } else {
        Err(ValidationError::new("content_type")
            .with_message("Only image files are accepted".into()))
    }
}

/// Required text: whitespace alone does not count.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("goal").with_message("Sponsorship goal must be positive".into()))
    }
}
