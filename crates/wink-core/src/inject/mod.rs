mod errors;
mod handler;
mod types;

pub use errors::InjectionError;
pub use handler::{ActivationService, PointerEventSink, activate, click, move_pointer};
pub use types::{
    ACTIVATION_SETTLE_DELAY, ClickRequest, MOUSE_EVENT_DELAY, PRE_CLICK_MOVE_DELAY, PointerEvent,
    PointerEventKind,
};

#[cfg(target_os = "macos")]
pub use handler::{HidEventSink, ProcessActivationService, accessibility_trusted};
