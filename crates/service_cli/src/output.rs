//! Result rendering for the terminal.
//!
//! Every command builds a serialisable report; `--format json` prints it
//! through serde_json, `--format table` through the box-drawing [`Table`].

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Box-drawing table
    #[default]
    Table,
}

/// Serialises `report` as pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Formats a float with `precision` decimals, keeping NaN and infinities readable.
pub fn number(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        value.to_string()
    }
}

/// Fixed-column text table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty, extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    /// Renders the table with box-drawing borders.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!(" {:<w$} ", cell, w = w))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.headers));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(["Greek", "Value"]);
        table.row(["price", "10.4506"]).row(["delta", "0.6368"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌───────┬─────────┐");
        assert_eq!(lines[1], "│ Greek │ Value   │");
        assert_eq!(lines[3], "│ price │ 10.4506 │");
        assert_eq!(lines[5], "└───────┴─────────┘");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["a", "b", "c"]);
        table.row(["1"]);
        assert!(table.render().contains("│ 1 │   │   │"));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(1.23456, 2), "1.23");
        assert_eq!(number(-0.5, 4), "-0.5000");
        assert_eq!(number(f64::NAN, 4), "NaN");
    }

    #[test]
    fn test_to_json() {
        #[derive(Serialize)]
        struct Report {
            price: f64,
        }
        let json = to_json(&Report { price: 1.5 }).unwrap();
        assert_eq!(json, "{\n  \"price\": 1.5\n}");
    }
}
