use crate::errors::WinkError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("No on-screen windows found")]
    NoWindows,

    #[error("No window matches selector: '{token}'")]
    NotFound { token: String },
}

impl WinkError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::NoWindows => "WINDOW_NONE_ON_SCREEN",
            WindowError::NotFound { .. } => "WINDOW_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_no_windows_error() {
        let error = WindowError::NoWindows;
        assert_eq!(error.to_string(), "No on-screen windows found");
        assert_eq!(error.error_code(), "WINDOW_NONE_ON_SCREEN");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_found_error() {
        let error = WindowError::NotFound {
            token: "Safari".to_string(),
        };
        assert_eq!(error.to_string(), "No window matches selector: 'Safari'");
        assert_eq!(error.error_code(), "WINDOW_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WindowError>();
    }

    #[test]
    fn test_error_source() {
        let error = WindowError::NoWindows;
        assert!(error.source().is_none());
    }
}
