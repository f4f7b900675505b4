use std::thread;

use tracing::{info, warn};

use super::errors::InjectionError;
use super::types::{
    ACTIVATION_SETTLE_DELAY, ClickRequest, MOUSE_EVENT_DELAY, PRE_CLICK_MOVE_DELAY, PointerEvent,
};

/// External process activation service
pub trait ActivationService {
    /// Whether a process with this id is currently running
    fn is_running(&self, pid: u32) -> bool;

    /// Bring the process's windows to the foreground, ignoring other
    /// applications' current focus
    fn bring_to_front(&self, pid: u32) -> Result<(), InjectionError>;
}

/// Global input stream accepting synthetic pointer events
pub trait PointerEventSink {
    fn post(&self, event: PointerEvent) -> Result<(), InjectionError>;
}

/// Bring the target process to the foreground, then wait for the switch to
/// settle.
///
/// Returns false, without posting anything, when the process cannot be
/// resolved or the foreground request fails.
pub fn activate(service: &dyn ActivationService, pid: u32) -> bool {
    info!(event = "core.inject.activate_started", pid);

    if !service.is_running(pid) {
        warn!(event = "core.inject.process_not_found", pid);
        return false;
    }

    if let Err(e) = service.bring_to_front(pid) {
        warn!(event = "core.inject.activation_failed", pid, error = %e);
        return false;
    }

    thread::sleep(ACTIVATION_SETTLE_DELAY);
    info!(event = "core.inject.activate_completed", pid);
    true
}

/// Synthesize a click at the request's screen position: move, button down,
/// button up, with fixed inter-event delays.
///
/// Activation is best effort: a target that cannot be foregrounded may
/// still accept background input, so the event sequence runs regardless.
/// A false return means an event was not confirmed posted; there is no
/// acknowledgment channel from the target application, and no retries.
pub fn click(
    activation: &dyn ActivationService,
    sink: &dyn PointerEventSink,
    request: &ClickRequest,
) -> bool {
    info!(
        event = "core.inject.click_started",
        pid = request.pid(),
        x = request.x(),
        y = request.y(),
        double_click = request.double_click()
    );

    if !activate(activation, request.pid()) {
        warn!(
            event = "core.inject.proceeding_without_activation",
            pid = request.pid()
        );
    }

    let (x, y) = (request.x(), request.y());
    if let Err(e) = sink.post(PointerEvent::move_to(x, y)) {
        warn!(event = "core.inject.move_post_failed", error = %e);
        return false;
    }
    thread::sleep(PRE_CLICK_MOVE_DELAY);

    let click_count = request.click_count();
    if let Err(e) = sink.post(PointerEvent::down(x, y, click_count)) {
        warn!(event = "core.inject.down_post_failed", error = %e);
        return false;
    }
    thread::sleep(MOUSE_EVENT_DELAY);

    // The release is attempted whenever the press went out, so a failure
    // partway through does not leave the button logically held down.
    match sink.post(PointerEvent::up(x, y, click_count)) {
        Ok(()) => {
            info!(
                event = "core.inject.click_completed",
                pid = request.pid(),
                x = x,
                y = y,
                click_count = click_count
            );
            true
        }
        Err(e) => {
            warn!(event = "core.inject.up_post_failed", error = %e);
            false
        }
    }
}

/// Post a single pointer move, used for pre-positioning
pub fn move_pointer(sink: &dyn PointerEventSink, pid: u32, x: f64, y: f64) -> bool {
    info!(event = "core.inject.move_started", pid, x, y);
    match sink.post(PointerEvent::move_to(x, y)) {
        Ok(()) => {
            info!(event = "core.inject.move_completed", pid);
            true
        }
        Err(e) => {
            warn!(event = "core.inject.move_post_failed", error = %e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use core_graphics::event::{
        CGEvent, CGEventTapLocation, CGEventType, CGMouseButton, EventField,
    };
    use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
    use core_graphics::geometry::CGPoint;
    use tracing::debug;

    use super::super::errors::InjectionError;
    use super::super::types::{PointerEvent, PointerEventKind};
    use super::{ActivationService, PointerEventSink};
    use crate::process;

    // SAFETY: FFI declaration for AXIsProcessTrusted from macOS
    // ApplicationServices framework. Returns false when the process lacks
    // accessibility permissions (does not crash).
    #[link(name = "ApplicationServices", kind = "framework")]
    unsafe extern "C" {
        fn AXIsProcessTrusted() -> bool;
    }

    /// Whether this process may post events into the global input stream
    pub fn accessibility_trusted() -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    /// Foreground activation via System Events, keyed by unix process id
    #[derive(Debug, Default)]
    pub struct ProcessActivationService;

    impl ProcessActivationService {
        pub fn new() -> Self {
            Self
        }
    }

    impl ActivationService for ProcessActivationService {
        fn is_running(&self, pid: u32) -> bool {
            process::is_process_running(pid)
        }

        fn bring_to_front(&self, pid: u32) -> Result<(), InjectionError> {
            debug!(event = "core.inject.focus_started", pid);

            let script = format!(
                "tell application \"System Events\" to set frontmost of (first process whose unix id is {}) to true",
                pid
            );

            let output = std::process::Command::new("osascript")
                .arg("-e")
                .arg(&script)
                .output()
                .map_err(|e| InjectionError::ActivationFailed {
                    pid,
                    reason: format!("Failed to execute osascript: {}", e),
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(InjectionError::ActivationFailed {
                    pid,
                    reason: stderr.trim().to_string(),
                });
            }

            debug!(event = "core.inject.focus_completed", pid);
            Ok(())
        }
    }

    /// Posts pointer events to the HID event tap
    #[derive(Debug, Default)]
    pub struct HidEventSink;

    impl HidEventSink {
        pub fn new() -> Self {
            Self
        }
    }

    impl PointerEventSink for HidEventSink {
        fn post(&self, event: PointerEvent) -> Result<(), InjectionError> {
            let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
                .map_err(|()| InjectionError::EventSourceFailed)?;

            let point = CGPoint::new(event.x(), event.y());
            let event_type = match event.kind() {
                PointerEventKind::Move => CGEventType::MouseMoved,
                PointerEventKind::Down => CGEventType::LeftMouseDown,
                PointerEventKind::Up => CGEventType::LeftMouseUp,
            };

            let cg_event =
                CGEvent::new_mouse_event(source, event_type, point, CGMouseButton::Left).map_err(
                    |()| InjectionError::PointerEventFailed {
                        x: event.x(),
                        y: event.y(),
                    },
                )?;

            if event.click_count() > 1 {
                cg_event.set_integer_value_field(
                    EventField::MOUSE_EVENT_CLICK_STATE,
                    event.click_count(),
                );
            }

            cg_event.post(CGEventTapLocation::HID);
            Ok(())
        }
    }
}

#[cfg(target_os = "macos")]
pub use macos::{HidEventSink, ProcessActivationService, accessibility_trusted};
