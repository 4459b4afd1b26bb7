use chrono::{DateTime, Utc};
use pr_core::ListingEntry;
use pr_core::todo;

pub struct TableFormatter {
    name_width: usize,
    path_width: usize,
    windows_width: usize,
    activity_width: usize,
    attached_width: usize,
    /// Present in wide mode only
    todo_width: Option<usize>,
}

impl TableFormatter {
    pub fn new(entries: &[ListingEntry], wide: bool) -> Self {
        let name_width = entries
            .iter()
            .map(|e| e.session.name.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 30); // Between "Name" header min and reasonable terminal width max

        let path_width = entries
            .iter()
            .map(|e| e.session.path.display().to_string().chars().count())
            .max()
            .unwrap_or(24)
            .clamp(4, 50);

        Self {
            name_width,
            path_width,
            windows_width: 7,
            activity_width: 8,
            attached_width: 8,
            todo_width: wide.then_some(40),
        }
    }

    pub fn print_table(&self, entries: &[ListingEntry]) {
        let now = Utc::now();
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
        for entry in entries {
            let todo = if self.todo_width.is_some() {
                todo::todo_contents(&entry.session.path)
            } else {
                String::new()
            };
            println!("{}", self.row(entry, &todo, now));
        }
        println!("{}", self.bottom_border());
    }

    fn row(&self, entry: &ListingEntry, todo: &str, now: DateTime<Utc>) -> String {
        let session = &entry.session;
        let windows = if entry.live {
            session.window_count.to_string()
        } else {
            String::new()
        };
        let attached = if session.attached { "*" } else { "" };

        let mut line = format!(
            "│ {} │ {} │ {:>width_windows$} │ {} │ {} │",
            truncate(&session.name, self.name_width),
            truncate(&session.path.display().to_string(), self.path_width),
            windows,
            truncate(&session.format_last_activity(now), self.activity_width),
            truncate(attached, self.attached_width),
            width_windows = self.windows_width,
        );
        if let Some(width) = self.todo_width {
            line.push_str(&format!(" {} │", truncate(&summarize_todo(todo), width)));
        }
        line
    }

    fn header_row(&self) -> String {
        let mut line = format!(
            "│ {:<width_name$} │ {:<width_path$} │ {:<width_windows$} │ {:<width_activity$} │ {:<width_attached$} │",
            "Name",
            "Path",
            "Windows",
            "Activity",
            "Attached",
            width_name = self.name_width,
            width_path = self.path_width,
            width_windows = self.windows_width,
            width_activity = self.activity_width,
            width_attached = self.attached_width,
        );
        if let Some(width) = self.todo_width {
            line.push_str(&format!(" {:<width$} │", "Todo", width = width));
        }
        line
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![
            self.name_width,
            self.path_width,
            self.windows_width,
            self.activity_width,
            self.attached_width,
        ];
        widths.extend(self.todo_width);
        widths
    }

    fn border(&self, left: &str, middle: &str, right: &str) -> String {
        let segments: Vec<String> = self.widths().iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(middle), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// TODO files are shown as a single line: non-empty lines joined with " | ".
fn summarize_todo(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
