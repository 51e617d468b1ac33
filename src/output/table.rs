//
//  ibm-continuous-delivery
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering with `comfy_table`.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::api::tekton::PipelineRun;
use crate::api::toolchain::{Tool, Toolchain};

/// A type that renders as one row of a table.
pub trait TableRow {
    /// Column headers, in row order.
    fn headers() -> Vec<&'static str>;

    /// The cells of this row. `color` enables ANSI styling.
    fn row(&self, color: bool) -> Vec<String>;
}

/// Builds a table with the crate's preset.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    /// Creates an empty table.
    pub fn new(color: bool) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        Self { table, color }
    }

    /// Sets the header row; headers are cyan when color is enabled.
    pub fn headers(mut self, headers: &[&str]) -> Self {
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers.to_vec());
        }
        self
    }

    /// Appends a row.
    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.table.add_row(cells);
        self
    }

    /// The finished table.
    pub fn build(self) -> Table {
        self.table
    }
}

/// Renders `values` as one table.
pub fn render_rows<T: TableRow>(values: &[T], color: bool) -> Table {
    values
        .iter()
        .fold(TableBuilder::new(color).headers(&T::headers()), |builder, value| {
            builder.row(value.row(color))
        })
        .build()
}

/// Colors a pipeline run or tool state.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status.to_lowercase().as_str() {
        "running" | "configured" => style(status).green().to_string(),
        "succeeded" => style(status).blue().to_string(),
        "failed" | "error" | "misconfigured" => style(status).red().to_string(),
        "pending" | "waiting" | "queued" | "configuring" => style(status).yellow().to_string(),
        "cancelled" | "unconfigured" => style(status).dim().to_string(),
        _ => status.to_string(),
    }
}

/// Formats an optional timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

impl TableRow for Toolchain {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "LOCATION", "CREATED"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            or_dash(self.location.as_deref()),
            format_time(self.created_at.as_ref()),
        ]
    }
}

impl TableRow for Tool {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TYPE", "NAME", "STATE"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.tool_type_id.clone(),
            or_dash(self.name.as_deref()),
            self.state
                .as_deref()
                .map(|s| format_status(s, color))
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl TableRow for PipelineRun {
    fn headers() -> Vec<&'static str> {
        vec!["#", "ID", "STATUS", "TRIGGER", "CREATED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.run_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.id.clone(),
            format_status(&self.status, color),
            or_dash(self.trigger.as_ref().map(|t| t.name.as_str())),
            format_time(self.created_at.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(state: Option<&str>) -> Tool {
        serde_json::from_value(serde_json::json!({
            "id": "t1",
            "tool_type_id": "pipeline",
            "state": state,
        }))
        .unwrap()
    }

    #[test]
    fn test_format_status_without_color_is_identity() {
        assert_eq!(format_status("failed", false), "failed");
        assert_eq!(format_status("anything", true), "anything");
    }

    #[test]
    fn test_tool_row_fills_missing_cells() {
        assert_eq!(tool(None).row(false), vec!["t1", "pipeline", "-", "-"]);
        assert_eq!(tool(Some("configured")).row(false)[3], "configured");
    }

    #[test]
    fn test_render_rows_contains_headers_and_values() {
        let rendered = render_rows(&[tool(Some("configured"))], false).to_string();
        assert!(rendered.contains("TYPE"));
        assert!(rendered.contains("pipeline"));
    }

    #[test]
    fn test_format_time() {
        let time = "2024-05-01T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_time(Some(&time)), "2024-05-01 10:30");
        assert_eq!(format_time(None), "-");
    }
}
