pub mod capture;
pub mod errors;
pub mod events;
pub mod inject;
pub mod logging;
pub mod process;
pub mod window;

pub use logging::init_logging;
