//! Terminal rendering of views and notifications.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::types::Notification;
use crate::views::{DashboardView, ProductTable, View};

/// Writes views in the configured [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn view(&self, out: &mut impl Write, view: &View) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, view),
            OutputFormat::Table => match view {
                View::Dashboard(dashboard) => write_dashboard(out, dashboard),
                View::Table(table) => write_table(out, table),
                View::AddProductForm { title, .. } => {
                    writeln!(out, "{title}")?;
                    writeln!(out, "Fill in each field when prompted.")
                }
                View::UpdateStockForm { title, products } => {
                    writeln!(out, "{title}")?;
                    for (i, name) in products.iter().enumerate() {
                        writeln!(out, "  {}. {name}", i + 1)?;
                    }
                    Ok(())
                }
            },
        }
    }

    pub fn notification(
        &self,
        out: &mut impl Write,
        notification: &Notification,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, notification),
            OutputFormat::Table => writeln!(out, "{notification}"),
        }
    }

    /// Plain banner line. JSON output carries only documents, so it is skipped.
    pub fn banner(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => Ok(()),
            OutputFormat::Table => writeln!(out, "{text}"),
        }
    }

    /// Input prompt, flushed so it shows before the read blocks. Skipped for JSON.
    pub fn prompt(&self, out: &mut impl Write, label: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => Ok(()),
            OutputFormat::Table => {
                write!(out, "{label}")?;
                out.flush()
            }
        }
    }

    pub fn help(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, &serde_json::json!({ "help": text })),
            OutputFormat::Table => writeln!(out, "{text}"),
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_dashboard(out: &mut impl Write, dashboard: &DashboardView) -> io::Result<()> {
    writeln!(out, "{}", dashboard.title)?;
    let cards: Vec<String> = dashboard
        .cards
        .iter()
        .map(|card| format!("{}: {}", card.title, card.value))
        .collect();
    writeln!(out, "{}", cards.join(" | "))?;
    writeln!(out)?;
    write_table(out, &dashboard.recent_activity)
}

fn write_table(out: &mut impl Write, table: &ProductTable) -> io::Result<()> {
    let rows: Vec<[String; 5]> = table.rows.iter().map(|row| row.cells()).collect();

    let mut widths = table.columns.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", table.title)?;
    write_row(out, &table.columns, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for cells in &rows {
        write_row(out, cells, &widths)?;
    }
    if rows.is_empty() {
        writeln!(out, "(no products)")?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[impl AsRef<str>], widths: &[usize]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
