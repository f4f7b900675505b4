use sysinfo::{Pid as SysinfoPid, ProcessesToUpdate, System};
use tracing::{info, warn};

use super::errors::ProcessError;

/// Map a window identifier to its owning process id.
///
/// Returns `Ok(None)` when the window no longer exists or the platform
/// reports no owning process; a vanished window is an expected outcome,
/// not an error. `Err` is reserved for a failed platform query.
pub fn resolve_owner(window_id: u32) -> Result<Option<u32>, ProcessError> {
    info!(event = "core.process.resolve_owner_started", window_id);

    let windows = xcap::Window::all().map_err(|e| ProcessError::QueryFailed {
        message: e.to_string(),
    })?;

    let Some(window) = windows.iter().find(|w| w.id().ok() == Some(window_id)) else {
        warn!(event = "core.process.window_vanished", window_id);
        return Ok(None);
    };

    match window.pid() {
        Ok(pid) => {
            info!(
                event = "core.process.resolve_owner_completed",
                window_id,
                pid
            );
            Ok(Some(pid))
        }
        Err(e) => {
            warn!(
                event = "core.process.owner_unavailable",
                window_id,
                error = %e
            );
            Ok(None)
        }
    }
}

/// Check if a process with the given PID is currently running
pub fn is_process_running(pid: u32) -> bool {
    let mut system = System::new();
    let pid_obj = SysinfoPid::from_u32(pid);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);
    system.process(pid_obj).is_some()
}
