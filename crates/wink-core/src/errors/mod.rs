/// Common behavior shared by all wink error types
pub trait WinkError: std::error::Error {
    /// Stable, machine-readable error code
    fn error_code(&self) -> &'static str;

    /// Whether this error stems from user input or environment rather than
    /// an internal failure
    fn is_user_error(&self) -> bool;
}
