use crate::errors::WinkError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Capture service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("Window {window_id} is not capturable")]
    WindowNotFound { window_id: u32 },

    #[error("Capture timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Capture failed: {reason}")]
    CaptureFailed { reason: String },

    #[error("Failed to encode image: {reason}")]
    EncodeFailed { reason: String },

    #[error("Failed to save image to '{path}': {reason}")]
    SaveFailed { path: String, reason: String },
}

impl WinkError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::ServiceUnavailable { .. } => "CAPTURE_SERVICE_UNAVAILABLE",
            CaptureError::WindowNotFound { .. } => "CAPTURE_WINDOW_NOT_FOUND",
            CaptureError::Timeout { .. } => "CAPTURE_TIMEOUT",
            CaptureError::CaptureFailed { .. } => "CAPTURE_FAILED",
            CaptureError::EncodeFailed { .. } => "CAPTURE_ENCODE_FAILED",
            CaptureError::SaveFailed { .. } => "CAPTURE_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            CaptureError::ServiceUnavailable { .. }
                | CaptureError::WindowNotFound { .. }
                | CaptureError::SaveFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_service_unavailable_error() {
        let error = CaptureError::ServiceUnavailable {
            reason: "listing failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Capture service unavailable: listing failed"
        );
        assert_eq!(error.error_code(), "CAPTURE_SERVICE_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_window_not_found_error() {
        let error = CaptureError::WindowNotFound { window_id: 42 };
        assert_eq!(error.to_string(), "Window 42 is not capturable");
        assert_eq!(error.error_code(), "CAPTURE_WINDOW_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_timeout_error() {
        let error = CaptureError::Timeout { timeout_ms: 5000 };
        assert_eq!(error.to_string(), "Capture timed out after 5000ms");
        assert_eq!(error.error_code(), "CAPTURE_TIMEOUT");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_capture_failed_error() {
        let error = CaptureError::CaptureFailed {
            reason: "empty frame buffer".to_string(),
        };
        assert_eq!(error.to_string(), "Capture failed: empty frame buffer");
        assert_eq!(error.error_code(), "CAPTURE_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_save_failed_error() {
        let error = CaptureError::SaveFailed {
            path: "/tmp/x.png".to_string(),
            reason: "read-only".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to save image to '/tmp/x.png': read-only"
        );
        assert_eq!(error.error_code(), "CAPTURE_SAVE_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CaptureError>();
    }

    #[test]
    fn test_error_source() {
        let error = CaptureError::Timeout { timeout_ms: 100 };
        assert!(error.source().is_none());
    }
}
