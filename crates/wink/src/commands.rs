use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info};

use wink_core::capture::{self, CaptureError, GraphicsCaptureService, ImageFormat};
use wink_core::errors::WinkError;
use wink_core::events;
use wink_core::inject::ClickRequest;
use wink_core::process::{self, ProcessError};
use wink_core::window::{self, WindowError, WindowRecord};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("shot", sub_matches)) => handle_shot_command(sub_matches),
        Some(("click", sub_matches)) => handle_click_command(sub_matches),
        Some(("move", sub_matches)) => handle_move_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let records = load_directory()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("On-screen windows:");
        table::print_windows_table(&records);
    }

    info!(event = "cli.list_completed", count = records.len());
    Ok(())
}

fn handle_shot_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches.get_one::<String>("window").unwrap();
    let width = matches.get_one::<u32>("width").copied().unwrap_or(0);
    let height = matches.get_one::<u32>("height").copied().unwrap_or(0);
    let output_path = matches.get_one::<String>("output");
    let base64_flag = matches.get_flag("base64");
    let timeout_ms = *matches.get_one::<u64>("timeout").unwrap_or(&5000);
    let format_str = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("png");
    let quality = *matches.get_one::<u8>("quality").unwrap_or(&85);

    // Default to base64 output if no output path specified
    let use_base64 = base64_flag || output_path.is_none();

    let format = match format_str {
        "jpg" | "jpeg" => ImageFormat::Jpeg { quality },
        _ => ImageFormat::Png,
    };

    info!(
        event = "cli.shot_started",
        token = token.as_str(),
        width = width,
        height = height,
        format = format_str,
        timeout_ms = timeout_ms
    );

    let records = load_directory()?;
    let record = select_window(&records, token)?;

    let service = GraphicsCaptureService::new();
    match capture::capture_frame(
        &service,
        record.id(),
        width,
        height,
        Duration::from_millis(timeout_ms),
    ) {
        Ok(frame) => {
            if let Some(path) = output_path {
                let path = PathBuf::from(path);
                capture::save_to_file(&frame, &path, format)?;
                println!("Captured '{}'", record.title());
                println!("  Size: {}x{}", frame.width(), frame.height());
                println!("  Saved: {}", path.display());
            } else if use_base64 {
                println!("{}", capture::to_base64(&frame, format)?);
            }

            info!(
                event = "cli.shot_completed",
                width = frame.width(),
                height = frame.height()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Capture failed: {}", e);
            if matches!(e, CaptureError::ServiceUnavailable { .. }) {
                eprintln!("Make sure screen recording permission is granted.");
            }
            error!(event = "cli.shot_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_click_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches.get_one::<String>("window").unwrap();
    let at_str = matches.get_one::<String>("at").unwrap();
    let double = matches.get_flag("double");

    let (x, y) = parse_coordinates(at_str)?;

    info!(
        event = "cli.click_started",
        token = token.as_str(),
        x = x,
        y = y,
        double = double
    );

    let records = load_directory()?;
    let record = select_window(&records, token)?;
    validate_position(record, x, y)?;
    let pid = resolve_target_pid(record)?;

    let (screen_x, screen_y) = record.bounds().to_screen(x, y);
    warn_if_untrusted();

    println!("Target: '{}' (pid {})", record.title(), pid);
    let request = if double {
        ClickRequest::new(pid, screen_x, screen_y).with_double_click()
    } else {
        ClickRequest::new(pid, screen_x, screen_y)
    };

    if inject_click(&request) {
        println!(
            "Clicked at ({}, {}) -> screen ({}, {})",
            x, y, screen_x, screen_y
        );
        info!(event = "cli.click_completed", x = x, y = y);
        Ok(())
    } else {
        eprintln!("Click was not confirmed delivered");
        error!(event = "cli.click_failed", pid = pid);
        Err("Click was not confirmed delivered".into())
    }
}

fn handle_move_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches.get_one::<String>("window").unwrap();
    let at_str = matches.get_one::<String>("at").unwrap();

    let (x, y) = parse_coordinates(at_str)?;

    info!(event = "cli.move_started", token = token.as_str(), x = x, y = y);

    let records = load_directory()?;
    let record = select_window(&records, token)?;
    validate_position(record, x, y)?;
    let pid = resolve_target_pid(record)?;

    let (screen_x, screen_y) = record.bounds().to_screen(x, y);
    warn_if_untrusted();

    if inject_move(pid, screen_x, screen_y) {
        println!(
            "Moved pointer to ({}, {}) -> screen ({}, {})",
            x, y, screen_x, screen_y
        );
        info!(event = "cli.move_completed", x = x, y = y);
        Ok(())
    } else {
        eprintln!("Move was not confirmed delivered");
        error!(event = "cli.move_failed", pid = pid);
        Err("Move was not confirmed delivered".into())
    }
}

/// Snapshot the window directory, failing the command when it is empty
fn load_directory() -> Result<Vec<WindowRecord>, Box<dyn std::error::Error>> {
    let records = window::snapshot();
    if records.is_empty() {
        let e = WindowError::NoWindows;
        eprintln!("No windows found.");
        error!(event = "cli.directory_empty", error_code = e.error_code());
        events::log_app_error(&e);
        return Err(e.into());
    }
    Ok(records)
}

/// Resolve a selection token, failing the command when nothing matches
fn select_window<'a>(
    records: &'a [WindowRecord],
    token: &str,
) -> Result<&'a WindowRecord, Box<dyn std::error::Error>> {
    match window::select(records, token) {
        Some(record) => {
            info!(
                event = "cli.window_selected",
                window_id = record.id(),
                title = record.title()
            );
            Ok(record)
        }
        None => {
            let e = WindowError::NotFound {
                token: token.to_string(),
            };
            eprintln!("No window matches '{}'", token);
            error!(event = "cli.selection_failed", token = token, error_code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Look up the owning process of the selected window
fn resolve_target_pid(record: &WindowRecord) -> Result<u32, Box<dyn std::error::Error>> {
    match process::resolve_owner(record.id()) {
        Ok(Some(pid)) => Ok(pid),
        Ok(None) => {
            let e = ProcessError::Unresolved {
                window_id: record.id(),
            };
            eprintln!("{}", e);
            error!(event = "cli.owner_unresolved", window_id = record.id());
            events::log_app_error(&e);
            Err(e.into())
        }
        Err(e) => {
            eprintln!("Failed to resolve owning process: {}", e);
            error!(event = "cli.owner_query_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn validate_position(
    record: &WindowRecord,
    x: i32,
    y: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    if !record.bounds().contains_relative(x, y) {
        return Err(format!(
            "Position ({}, {}) is outside '{}' ({}x{})",
            x,
            y,
            record.title(),
            record.bounds().width(),
            record.bounds().height()
        )
        .into());
    }
    Ok(())
}

fn parse_coordinates(at_str: &str) -> Result<(i32, i32), Box<dyn std::error::Error>> {
    let parts: Vec<&str> = at_str.split(',').collect();
    if parts.len() != 2 {
        return Err(format!(
            "--at format must be x,y (e.g., \"100,50\"), got: '{}'",
            at_str
        )
        .into());
    }
    let x: i32 = parts[0].trim().parse().map_err(|e| {
        format!(
            "Invalid x coordinate '{}': {} (expected integer)",
            parts[0].trim(),
            e
        )
    })?;
    let y: i32 = parts[1].trim().parse().map_err(|e| {
        format!(
            "Invalid y coordinate '{}': {} (expected integer)",
            parts[1].trim(),
            e
        )
    })?;
    Ok((x, y))
}

#[cfg(target_os = "macos")]
fn warn_if_untrusted() {
    if !wink_core::inject::accessibility_trusted() {
        eprintln!(
            "Warning: accessibility permission not granted; injected events may be ignored."
        );
    }
}

#[cfg(not(target_os = "macos"))]
fn warn_if_untrusted() {}

#[cfg(target_os = "macos")]
fn inject_click(request: &ClickRequest) -> bool {
    use wink_core::inject::{HidEventSink, ProcessActivationService};

    let activation = ProcessActivationService::new();
    let sink = HidEventSink::new();
    wink_core::inject::click(&activation, &sink, request)
}

#[cfg(not(target_os = "macos"))]
fn inject_click(_request: &ClickRequest) -> bool {
    error!(event = "cli.inject_unsupported_platform");
    eprintln!("Pointer injection is only supported on macOS");
    false
}

#[cfg(target_os = "macos")]
fn inject_move(pid: u32, x: f64, y: f64) -> bool {
    use wink_core::inject::HidEventSink;

    let sink = HidEventSink::new();
    wink_core::inject::move_pointer(&sink, pid, x, y)
}

#[cfg(not(target_os = "macos"))]
fn inject_move(_pid: u32, _x: f64, _y: f64) -> bool {
    error!(event = "cli.inject_unsupported_platform");
    eprintln!("Pointer injection is only supported on macOS");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use wink_core::window::Bounds;

    fn record(id: u32, title: &str) -> WindowRecord {
        WindowRecord::new(
            id,
            title.to_string(),
            "TestApp".to_string(),
            Bounds::new(100, 200, 800, 600),
            true,
        )
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("100,50").unwrap(), (100, 50));
        assert_eq!(parse_coordinates(" 10 , 20 ").unwrap(), (10, 20));
        assert_eq!(parse_coordinates("0,0").unwrap(), (0, 0));
    }

    #[test]
    fn test_parse_coordinates_rejects_bad_input() {
        assert!(parse_coordinates("100").is_err());
        assert!(parse_coordinates("100,50,25").is_err());
        assert!(parse_coordinates("abc,50").is_err());
        assert!(parse_coordinates("100,").is_err());
    }

    #[test]
    fn test_validate_position() {
        let record = record(1, "Editor");
        assert!(validate_position(&record, 0, 0).is_ok());
        assert!(validate_position(&record, 799, 599).is_ok());
        assert!(validate_position(&record, 800, 0).is_err());
        assert!(validate_position(&record, -1, 0).is_err());
    }

    #[test]
    fn test_select_window_reports_not_found() {
        let records = vec![record(1, "Editor")];
        assert!(select_window(&records, "Zulu").is_err());
        assert!(select_window(&records, "Editor").is_ok());
    }
}
