use axum::extract::State;
use axum::response::Response;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::draft::{ImageRef, MediaForm};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::extract::{ApiJson, ApiPath};
use crate::utils::response::{created, success};
use crate::wizard::{EventDraft, WizardStep};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Serialize)]
struct WizardView {
    step: WizardStep,
    step_number: u8,
    title: &'static str,
    progress_percent: u8,
    draft: EventDraft,
}

impl From<EventDraft> for WizardView {
    fn from(draft: EventDraft) -> Self {
        Self {
            step: draft.step,
            step_number: draft.step.number(),
            title: draft.step.title(),
            progress_percent: draft.step.progress_percent(),
            draft,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddImagesRequest {
    #[serde(default)]
    pub draft: EventDraft,
    pub images: Vec<ImageRef>,
}

/// Validate the draft's current step and move forward.
pub async fn next_step(ApiJson(mut draft): ApiJson<EventDraft>) -> AppResult<Response> {
    draft.next(today())?;
    Ok(success(WizardView::from(draft), "Step complete"))
}

pub async fn previous_step(ApiJson(mut draft): ApiJson<EventDraft>) -> Response {
    draft.back();
    success(WizardView::from(draft), "Moved back")
}

/// Attach image references to the draft's media step. Non-image files are
/// refused up front, as the file picker would.
pub async fn add_images(ApiJson(request): ApiJson<AddImagesRequest>) -> AppResult<Response> {
    let AddImagesRequest { mut draft, images } = request;
    MediaForm {
        images: images.clone(),
    }
    .validate()?;

    let added = draft.add_images(images);
    let message = match added {
        1 => "1 image added".to_string(),
        n => format!("{} images added", n),
    };
    Ok(success(WizardView::from(draft), message))
}

pub async fn remove_image(
    ApiPath(index): ApiPath<usize>,
    ApiJson(mut draft): ApiJson<EventDraft>,
) -> AppResult<Response> {
    let removed = draft
        .remove_image(index)
        .ok_or_else(|| AppError::NotFound(format!("No image at position {}", index)))?;
    tracing::debug!(file_name = %removed.file_name, index, "Image removed from draft");
    Ok(success(WizardView::from(draft), "Image removed"))
}

pub async fn submit_event(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<EventDraft>,
) -> AppResult<Response> {
    let pending = draft.finish(today())?;
    let queued = state.store.submit(pending).await?;
    Ok(created(
        queued,
        "We've received your event details. Our team will review it and get back to you soon.",
    ))
}
