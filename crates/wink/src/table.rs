use wink_core::window::WindowRecord;

pub struct TableFormatter {
    index_width: usize,
    title_width: usize,
    owner_width: usize,
    size_width: usize,
    position_width: usize,
}

impl TableFormatter {
    pub fn new(records: &[WindowRecord]) -> Self {
        let title_width = records
            .iter()
            .map(|r| r.title().chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 50); // Between "Title" header min and reasonable terminal width max

        let owner_width = records
            .iter()
            .map(|r| r.owner().chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 30);

        Self {
            index_width: 3,
            title_width,
            owner_width,
            size_width: 11,
            position_width: 14,
        }
    }

    pub fn print_table(&self, records: &[WindowRecord]) {
        self.print_header();
        for (index, record) in records.iter().enumerate() {
            self.print_row(index, record);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, index: usize, record: &WindowRecord) {
        let bounds = record.bounds();
        let size = format!("{}x{}", bounds.width(), bounds.height());
        let position = format!("({}, {})", bounds.x(), bounds.y());

        println!(
            "│ {:<width_index$} │ {:<width_title$} │ {:<width_owner$} │ {:<width_size$} │ {:<width_position$} │",
            index,
            truncate(record.title(), self.title_width),
            truncate(record.owner(), self.owner_width),
            truncate(&size, self.size_width),
            truncate(&position, self.position_width),
            width_index = self.index_width,
            width_title = self.title_width,
            width_owner = self.owner_width,
            width_size = self.size_width,
            width_position = self.position_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┬{}┬{}┐",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.owner_width + 2),
            "─".repeat(self.size_width + 2),
            "─".repeat(self.position_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_index$} │ {:<width_title$} │ {:<width_owner$} │ {:<width_size$} │ {:<width_position$} │",
            "#",
            "Title",
            "Owner",
            "Size",
            "Position",
            width_index = self.index_width,
            width_title = self.title_width,
            width_owner = self.owner_width,
            width_size = self.size_width,
            width_position = self.position_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┼{}┼{}┤",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.owner_width + 2),
            "─".repeat(self.size_width + 2),
            "─".repeat(self.position_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┴{}┴{}┘",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.owner_width + 2),
            "─".repeat(self.size_width + 2),
            "─".repeat(self.position_width + 2),
        )
    }
}

pub fn print_windows_table(records: &[WindowRecord]) {
    TableFormatter::new(records).print_table(records);
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wink_core::window::Bounds;

    fn record(title: &str, owner: &str) -> WindowRecord {
        WindowRecord::new(
            1,
            title.to_string(),
            owner.to_string(),
            Bounds::new(0, 0, 800, 600),
            true,
        )
    }

    #[test]
    fn test_truncate_short_string_pads() {
        let result = truncate("abc", 6);
        assert_eq!(result, "abc   ");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        let result = truncate("abcdefghij", 6);
        assert_eq!(result, "abc...");
    }

    #[test]
    fn test_truncate_handles_multibyte() {
        let result = truncate("日本語のタイトル", 5);
        assert_eq!(result.chars().count(), 5);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_formatter_clamps_title_width() {
        let long_title = "x".repeat(200);
        let records = vec![record(&long_title, "App")];
        let formatter = TableFormatter::new(&records);
        assert_eq!(formatter.title_width, 50);
    }

    #[test]
    fn test_formatter_uses_header_minimum() {
        let records = vec![record("ab", "cd")];
        let formatter = TableFormatter::new(&records);
        assert_eq!(formatter.title_width, 5);
        assert_eq!(formatter.owner_width, 5);
    }

    #[test]
    fn test_print_table_does_not_panic() {
        let records = vec![record("Editor", "TextEdit"), record("Terminal", "Ghostty")];
        print_windows_table(&records);
    }
}
