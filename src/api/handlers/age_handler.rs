//! Age form handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{DisplayMessage, FormSubmission};
use crate::errors::{AppError, AppResult};

/// Message returned for a form submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Text to show in the message element
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
    /// CSS classes for the message element
    pub class_name: &'static str,
}

impl From<DisplayMessage> for MessageResponse {
    fn from(message: DisplayMessage) -> Self {
        let class_name = message.class_name();
        Self {
            text: message.text,
            is_error: message.is_error,
            class_name,
        }
    }
}

/// Create age form routes
pub fn age_routes() -> Router<AppState> {
    Router::new().route("/", post(submit))
}

/// Compute the age for a submitted form.
///
/// Rejected submissions still carry a displayable message, sent with 422.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(submission) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    let message = state.form_service.submit(submission);
    let status = if message.is_error {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };

    Ok((status, Json(MessageResponse::from(message))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infra::MemoryPreferenceStore;
    use crate::services::MockFormService;

    fn state_returning(message: DisplayMessage) -> AppState {
        let mut service = MockFormService::new();
        service
            .expect_submit()
            .times(1)
            .returning(move |_| message.clone());
        AppState::new(Arc::new(service), Arc::new(MemoryPreferenceStore::new()))
    }

    #[tokio::test]
    async fn test_success_is_ok() {
        let state = state_returning(DisplayMessage::success("Ann, you are 30 years old!"));
        let (status, Json(body)) = submit(State(state), Ok(Json(FormSubmission::default())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.class_name, "alert alert-success");
    }

    #[tokio::test]
    async fn test_error_message_is_unprocessable() {
        let state = state_returning(DisplayMessage::error("Please enter your name!"));
        let (status, Json(body)) = submit(State(state), Ok(Json(FormSubmission::default())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.is_error);
        assert_eq!(body.text, "Please enter your name!");
    }
}
