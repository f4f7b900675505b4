use tracing::{debug, info, warn};

use super::types::{Bounds, WindowRecord};

/// Raw window properties as read from the platform query, before the
/// directory filter is applied
struct RawWindow {
    id: u32,
    title: String,
    owner: String,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    on_screen: bool,
}

/// Take a directory snapshot of the currently visible windows.
///
/// Windows with an empty title or that are not on screen are excluded.
/// The platform's enumeration order is preserved as-is; callers must not
/// read stacking-order semantics into it. A failed platform query is
/// logged and yields an empty directory.
pub fn snapshot() -> Vec<WindowRecord> {
    info!(event = "core.window.snapshot_started");

    let windows = match xcap::Window::all() {
        Ok(windows) => windows,
        Err(e) => {
            warn!(event = "core.window.query_failed", error = %e);
            return Vec::new();
        }
    };

    let raw: Vec<RawWindow> = windows.iter().filter_map(read_raw_window).collect();
    let records = build_records(raw);

    info!(event = "core.window.snapshot_completed", count = records.len());
    records
}

/// Read the properties of one platform window, skipping entries whose
/// required properties cannot be fetched
fn read_raw_window(w: &xcap::Window) -> Option<RawWindow> {
    let id = match w.id() {
        Ok(id) => id,
        Err(e) => {
            debug!(
                event = "core.window.property_access_failed",
                property = "id",
                error = %e
            );
            return None;
        }
    };

    let x = match w.x() {
        Ok(x) => x,
        Err(e) => {
            debug!(
                event = "core.window.property_access_failed",
                property = "x",
                window_id = id,
                error = %e
            );
            return None;
        }
    };

    let y = match w.y() {
        Ok(y) => y,
        Err(e) => {
            debug!(
                event = "core.window.property_access_failed",
                property = "y",
                window_id = id,
                error = %e
            );
            return None;
        }
    };

    let width = match w.width() {
        Ok(width) => width,
        Err(e) => {
            debug!(
                event = "core.window.property_access_failed",
                property = "width",
                window_id = id,
                error = %e
            );
            return None;
        }
    };

    let height = match w.height() {
        Ok(height) => height,
        Err(e) => {
            debug!(
                event = "core.window.property_access_failed",
                property = "height",
                window_id = id,
                error = %e
            );
            return None;
        }
    };

    let title = w.title().ok().unwrap_or_default();
    let owner = w.app_name().ok().unwrap_or_default();

    let minimized = w.is_minimized().unwrap_or_else(|e| {
        debug!(
            event = "core.window.is_minimized_check_failed",
            window_id = id,
            error = %e
        );
        false
    });

    Some(RawWindow {
        id,
        title,
        owner,
        x,
        y,
        width,
        height,
        on_screen: !minimized,
    })
}

/// Apply the directory filter: non-empty title, on screen
fn build_records(raw: Vec<RawWindow>) -> Vec<WindowRecord> {
    raw.into_iter()
        .filter_map(|w| {
            if w.title.is_empty() {
                debug!(event = "core.window.skipped_untitled", window_id = w.id);
                return None;
            }
            if !w.on_screen {
                debug!(event = "core.window.skipped_offscreen", window_id = w.id);
                return None;
            }
            Some(WindowRecord::new(
                w.id,
                w.title,
                w.owner,
                Bounds::new(w.x, w.y, w.width, w.height),
                true,
            ))
        })
        .collect()
}

/// Resolve a selection token against a directory snapshot.
///
/// A token that parses as a non-negative integer is positional and resolves
/// exactly or not at all: an out-of-range index returns `None` instead of
/// falling through to substring matching. Any other token is a
/// case-sensitive substring search over each record's title, then owner,
/// returning the first match in directory order.
pub fn select<'a>(records: &'a [WindowRecord], token: &str) -> Option<&'a WindowRecord> {
    if let Ok(index) = token.parse::<usize>() {
        let found = records.get(index);
        match found {
            Some(record) => info!(
                event = "core.window.selected_by_index",
                index = index,
                window_id = record.id(),
                title = record.title()
            ),
            None => warn!(
                event = "core.window.select_index_out_of_range",
                index = index,
                count = records.len()
            ),
        }
        return found;
    }

    let found = records
        .iter()
        .find(|r| r.title().contains(token) || r.owner().contains(token));
    match found {
        Some(record) => info!(
            event = "core.window.selected_by_substring",
            token = token,
            window_id = record.id(),
            title = record.title()
        ),
        None => warn!(event = "core.window.select_no_match", token = token),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u32, title: &str, owner: &str, on_screen: bool) -> RawWindow {
        RawWindow {
            id,
            title: title.to_string(),
            owner: owner.to_string(),
            x: 0,
            y: 0,
            width: 800,
            height: 600,
            on_screen,
        }
    }

    fn record(id: u32, title: &str, owner: &str) -> WindowRecord {
        WindowRecord::new(
            id,
            title.to_string(),
            owner.to_string(),
            Bounds::new(0, 0, 800, 600),
            true,
        )
    }

    #[test]
    fn test_snapshot_does_not_panic() {
        // Actual enumeration depends on the system state; either outcome
        // (windows or an empty directory) is acceptable here.
        let _ = snapshot();
    }

    #[test]
    fn test_build_records_excludes_untitled_windows() {
        let records = build_records(vec![
            raw(1, "Editor", "TextEdit", true),
            raw(2, "", "WindowServer", true),
            raw(3, "Terminal", "Ghostty", true),
        ]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.title().is_empty()));
    }

    #[test]
    fn test_build_records_excludes_offscreen_windows() {
        let records = build_records(vec![
            raw(1, "Editor", "TextEdit", true),
            raw(2, "Hidden", "TextEdit", false),
        ]);
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.on_screen()));
    }

    #[test]
    fn test_build_records_preserves_query_order() {
        let records = build_records(vec![
            raw(30, "Charlie", "A", true),
            raw(10, "Alpha", "B", true),
            raw(20, "Bravo", "C", true),
        ]);
        let ids: Vec<u32> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_select_by_index() {
        let records = vec![
            record(1, "Alpha", "A"),
            record(2, "Bravo", "B"),
            record(3, "Charlie", "C"),
        ];
        let selected = select(&records, "2").unwrap();
        assert_eq!(selected.id(), 3);
    }

    #[test]
    fn test_select_index_wins_over_substring() {
        // "2" is a valid index, so the record whose title contains "2"
        // must not be considered.
        let records = vec![
            record(1, "Window 2", "A"),
            record(2, "Bravo", "B"),
            record(3, "Charlie", "C"),
        ];
        let selected = select(&records, "2").unwrap();
        assert_eq!(selected.title(), "Charlie");
    }

    #[test]
    fn test_select_index_out_of_range_is_none() {
        // Index-exact semantics: an out-of-range index never degrades to
        // substring matching, even when a title would match.
        let records = vec![record(1, "Window 2", "A"), record(2, "Bravo", "B")];
        assert!(select(&records, "2").is_none());
        assert!(select(&records, "99").is_none());
    }

    #[test]
    fn test_select_by_title_substring() {
        let records = vec![
            record(1, "Untitled", "TextEdit"),
            record(2, "Apple - Safari", "Safari"),
            record(3, "Safari Downloads", "Safari"),
        ];
        let selected = select(&records, "Safari").unwrap();
        assert_eq!(selected.id(), 2);
    }

    #[test]
    fn test_select_by_owner_substring() {
        let records = vec![
            record(1, "Untitled", "TextEdit"),
            record(2, "Downloads", "Finder"),
        ];
        let selected = select(&records, "Finder").unwrap();
        assert_eq!(selected.id(), 2);
    }

    #[test]
    fn test_select_substring_is_case_sensitive() {
        let records = vec![record(1, "Apple - Safari", "Safari")];
        assert!(select(&records, "safari").is_none());
        assert!(select(&records, "Safari").is_some());
    }

    #[test]
    fn test_select_no_match_is_none() {
        let records = vec![record(1, "Alpha", "A")];
        assert!(select(&records, "Zulu").is_none());
    }

    #[test]
    fn test_select_on_empty_directory() {
        let records: Vec<WindowRecord> = Vec::new();
        assert!(select(&records, "0").is_none());
        assert!(select(&records, "anything").is_none());
    }
}
