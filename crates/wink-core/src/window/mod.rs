mod errors;
mod handler;
mod types;

pub use errors::WindowError;
pub use handler::{select, snapshot};
pub use types::{Bounds, WindowRecord};
