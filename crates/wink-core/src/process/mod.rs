mod errors;
mod handler;

pub use errors::ProcessError;
pub use handler::{is_process_running, resolve_owner};
