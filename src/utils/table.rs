//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, truncate};
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Visible width of a cell, ignoring ANSI color sequences.
fn visible_width(s: &str) -> usize {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*m").expect("valid ANSI regex"));
    UnicodeWidthStr::width(re.replace_all(s, "").as_ref())
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if visible_width(cell) > col.width && !cell.contains('\x1b') {
                    out.push_str(&pad_right(&truncate(cell, col.width), col.width));
                } else {
                    let pad = col.width.saturating_sub(visible_width(cell));
                    out.push_str(cell);
                    out.push_str(&" ".repeat(pad));
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
