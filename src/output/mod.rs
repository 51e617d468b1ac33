//
//  ibm-continuous-delivery
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders command results for `cdctl`:
//!
//! - **Table format**: human-readable tables for interactive use
//! - **JSON format**: pretty-printed JSON for scripting
//!
//! Status messages go to stderr so that stdout stays parseable.

mod table;

pub use table::*;

use std::io::Write;

use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables, colored when the terminal supports it.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes results and status messages in one format.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Json);
/// let mut buffer = Vec::new();
/// writer.write_to(&mut buffer, &serde_json::json!({"id": "tc1"})).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().contains("\"tc1\""));
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows the terminal's capabilities.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// The selected format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a list as one table, or as a JSON array.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        self.write_list_to(&mut stdout.lock(), values)
    }

    /// Like [`write_list`](Self::write_list), into any writer.
    pub fn write_list_to<W: Write, T: Serialize + TableRow>(
        &self,
        out: &mut W,
        values: &[T],
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_to(out, values),
            OutputFormat::Table if values.is_empty() => {
                self.write_info("No results");
                Ok(())
            }
            OutputFormat::Table => {
                writeln!(out, "{}", render_rows(values, self.color))?;
                Ok(())
            }
        }
    }

    /// Writes any serializable value as pretty JSON.
    pub fn write_to<W: Write, T: Serialize + ?Sized>(
        &self,
        out: &mut W,
        value: &T,
    ) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", console::style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes an informational message to stderr.
    pub fn write_info(&self, msg: &str) {
        if self.color {
            eprintln!("{}", console::style(msg).dim());
        } else {
            eprintln!("{}", msg);
        }
    }
}
