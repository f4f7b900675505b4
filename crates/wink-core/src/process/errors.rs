use crate::errors::WinkError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Window owner query failed: {message}")]
    QueryFailed { message: String },

    #[error("No owning process for window {window_id}")]
    Unresolved { window_id: u32 },
}

impl WinkError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::QueryFailed { .. } => "PROCESS_QUERY_FAILED",
            ProcessError::Unresolved { .. } => "PROCESS_UNRESOLVED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProcessError::Unresolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_error() {
        let error = ProcessError::QueryFailed {
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Window owner query failed: permission denied"
        );
        assert_eq!(error.error_code(), "PROCESS_QUERY_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_unresolved_error() {
        let error = ProcessError::Unresolved { window_id: 42 };
        assert_eq!(error.to_string(), "No owning process for window 42");
        assert_eq!(error.error_code(), "PROCESS_UNRESOLVED");
        assert!(error.is_user_error());
    }
}
