//! Task-service error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskApiError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TaskApiError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidBaseUrl(_) => "Task service URL is invalid. Check settings.".to_string(),
            Self::Status { status, .. } if *status >= 500 => {
                "The task service is experiencing issues. Please try again later.".to_string()
            }
            Self::Status { .. } => "The request failed. Please try again.".to_string(),
            Self::InvalidResponse(_) => {
                "Received an unexpected response. Please try again.".to_string()
            }
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_code() {
        let err = TaskApiError::Status {
            status: 404,
            body: "Task not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Task not found"));
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            TaskApiError::Status {
                status: 500,
                body: String::new(),
            },
            TaskApiError::Status {
                status: 400,
                body: String::new(),
            },
            TaskApiError::InvalidResponse("eof".to_string()),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_server_error_message_differs_from_client_error() {
        let server = TaskApiError::Status {
            status: 503,
            body: String::new(),
        };
        let client = TaskApiError::Status {
            status: 400,
            body: String::new(),
        };
        assert_ne!(server.user_message(), client.user_message());
    }
}
