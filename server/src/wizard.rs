//! Four-step event submission wizard.
//!
//! The draft is plain data; a client may keep it between requests and post it
//! back whole. `next` refuses to leave a step whose fields do not validate, and
//! `finish` re-validates everything before producing a moderation record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::draft::{EventDetailsForm, ImageRef, MediaForm, SponsorshipForm};
use crate::models::pending::PendingEvent;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Details,
    Media,
    Sponsorship,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Details,
        WizardStep::Media,
        WizardStep::Sponsorship,
        WizardStep::Review,
    ];

    /// One-based position, as shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Media => 2,
            WizardStep::Sponsorship => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Details => "Event Details",
            WizardStep::Media => "Upload Media",
            WizardStep::Sponsorship => "Sponsorship Information",
            WizardStep::Review => "Review Your Event",
        }
    }

    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(self)
    }

    pub fn progress_percent(self) -> u8 {
        (u32::from(self.number() - 1) * 100 / 3) as u8
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub step: WizardStep,
    pub details: EventDetailsForm,
    pub media: MediaForm,
    pub sponsorship: SponsorshipForm,
    /// Organizer confirms the information is accurate (review step).
    pub confirmed: bool,
}

impl EventDraft {
    /// Validate the fields owned by `step`. Review owns the confirmation and
    /// depends on every earlier step.
    pub fn validate_step(
        &self,
        step: WizardStep,
        today: NaiveDate,
    ) -> Result<(), ValidationErrors> {
        match step {
            WizardStep::Details => self.validate_details(today),
            WizardStep::Media => self.media.validate(),
            WizardStep::Sponsorship => self.validate_sponsorship(today),
            WizardStep::Review => {
                let mut errors = ValidationErrors::new();
                for earlier in [WizardStep::Details, WizardStep::Media, WizardStep::Sponsorship] {
                    if let Err(step_errors) = self.validate_step(earlier, today) {
                        merge(&mut errors, step_errors);
                    }
                }
                if !self.confirmed {
                    errors.add(
                        "confirmed",
                        ValidationError::new("confirmed")
                            .with_message("Please confirm the information is accurate".into()),
                    );
                }
                into_result(errors)
            }
        }
    }

    /// Advance one step if the current one validates. Review is the last step.
    pub fn next(&mut self, today: NaiveDate) -> Result<WizardStep, ValidationErrors> {
        self.validate_step(self.step, today)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Go back one step. Never validates; Details is the first step.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.prev();
        self.step
    }

    pub fn add_images(&mut self, images: impl IntoIterator<Item = ImageRef>) -> usize {
        let before = self.media.images.len();
        self.media.images.extend(images);
        self.media.images.len() - before
    }

    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        if index < self.media.images.len() {
            Some(self.media.images.remove(index))
        } else {
            None
        }
    }

    /// Validate the whole draft and turn it into a pending moderation record.
    pub fn finish(&self, today: NaiveDate) -> Result<PendingEvent, ValidationErrors> {
        self.validate_step(WizardStep::Review, today)?;

        let date = self
            .details
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Ok(PendingEvent::new(
            Uuid::new_v4().to_string(),
            self.details.name.trim(),
            self.details.university.trim(),
            date,
        ))
    }

    fn validate_details(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = self.details.validate().err().unwrap_or_else(ValidationErrors::new);
        match self.details.date {
            None => errors.add(
                "date",
                ValidationError::new("required").with_message("Event date is required".into()),
            ),
            Some(date) if date < today => errors.add(
                "date",
                ValidationError::new("past")
                    .with_message("Event date cannot be in the past".into()),
            ),
            Some(_) => {}
        }
        into_result(errors)
    }

    fn validate_sponsorship(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = self
            .sponsorship
            .validate()
            .err()
            .unwrap_or_else(ValidationErrors::new);
        if let Some(deadline) = self.sponsorship.deadline {
            if deadline < today {
                errors.add(
                    "deadline",
                    ValidationError::new("past")
                        .with_message("Sponsorship deadline cannot be in the past".into()),
                );
            } else if self.details.date.is_some_and(|date| deadline > date) {
                errors.add(
                    "deadline",
                    ValidationError::new("after_event")
                        .with_message("Sponsorship deadline must not fall after the event".into()),
                );
            }
        }
        into_result(errors)
    }
}

/// Steps own disjoint fields, so their errors never collide.
fn merge(into: &mut ValidationErrors, from: ValidationErrors) {
    into.errors_mut().extend(from.into_errors());
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
