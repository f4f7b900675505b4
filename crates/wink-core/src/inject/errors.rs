use crate::errors::WinkError;

#[derive(Debug, thiserror::Error)]
pub enum InjectionError {
    #[error("Failed to create event source")]
    EventSourceFailed,

    #[error("Failed to create pointer event at ({x}, {y})")]
    PointerEventFailed { x: f64, y: f64 },

    #[error("Failed to activate process {pid}: {reason}")]
    ActivationFailed { pid: u32, reason: String },
}

impl WinkError for InjectionError {
    fn error_code(&self) -> &'static str {
        match self {
            InjectionError::EventSourceFailed => "INJECTION_EVENT_SOURCE_FAILED",
            InjectionError::PointerEventFailed { .. } => "INJECTION_POINTER_EVENT_FAILED",
            InjectionError::ActivationFailed { .. } => "INJECTION_ACTIVATION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, InjectionError::ActivationFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_source_failed_error() {
        let error = InjectionError::EventSourceFailed;
        assert_eq!(error.to_string(), "Failed to create event source");
        assert_eq!(error.error_code(), "INJECTION_EVENT_SOURCE_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_pointer_event_failed_error() {
        let error = InjectionError::PointerEventFailed { x: 100.0, y: 200.0 };
        assert_eq!(
            error.to_string(),
            "Failed to create pointer event at (100, 200)"
        );
        assert_eq!(error.error_code(), "INJECTION_POINTER_EVENT_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_activation_failed_error() {
        let error = InjectionError::ActivationFailed {
            pid: 1234,
            reason: "osascript failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to activate process 1234: osascript failed"
        );
        assert_eq!(error.error_code(), "INJECTION_ACTIVATION_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InjectionError>();
    }
}
