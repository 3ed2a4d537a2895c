//! Display message handed to whatever renders the form result.

use serde::{Deserialize, Serialize};

use crate::config::{CLASS_ERROR, CLASS_SUCCESS};

/// Text plus error classification for a single form result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessage {
    pub text: String,
    pub is_error: bool,
}

impl DisplayMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// CSS classes for the message element
    pub fn class_name(&self) -> &'static str {
        if self.is_error {
            CLASS_ERROR
        } else {
            CLASS_SUCCESS
        }
    }
}

impl std::fmt::Display for DisplayMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Raw form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
}

impl FormSubmission {
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            dob: Some(dob.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(DisplayMessage::success("ok").class_name(), "alert alert-success");
        assert_eq!(DisplayMessage::error("no").class_name(), "alert alert-danger");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DisplayMessage::error("Please enter your birthdate")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "Please enter your birthdate", "isError": true })
        );
    }

    #[test]
    fn test_submission_fields_are_optional() {
        let submission: FormSubmission = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(submission.name.as_deref(), Some("Ann"));
        assert!(submission.dob.is_none());
    }
}
