//! Report rendering: plain text blocks, a table, or JSON.

use std::fmt;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adset_model::{AdsetReport, AdsetSummary, CategoryBreakdown, SaleCategory};

/// Message printed instead of an empty report.
pub const EMPTY_REPORT: &str = "No adset data found.";

/// How the summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One block of labelled lines per adset.
    #[default]
    Text,
    /// A table with one row per adset and a total row.
    Table,
    /// The summary mapping as pretty-printed JSON.
    Json,
}

/// Renders `report` in `format`.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(report: &AdsetReport, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Json => render_json(report),
    }
}

pub fn render_text(report: &AdsetReport) -> String {
    if report.is_empty() {
        return format!("{EMPTY_REPORT}\n");
    }
    let mut out = String::new();
    for (index, (adset, summary)) in report.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if write_block(&mut out, adset, summary).is_err() {
            break;
        }
    }
    out
}

fn write_block(out: &mut impl fmt::Write, adset: &str, summary: &AdsetSummary) -> fmt::Result {
    writeln!(out, "Adset: {adset}")?;
    writeln!(out, "  Leads: {}", summary.total_leads)?;
    writeln!(out, "  Total sales: {}", summary.total_sales)?;
    writeln!(out, "  Total revenue: {}", money(summary.total_revenue))?;
    writeln!(out, "  Average ticket: {}", money(summary.avg_ticket))?;
    for category in SaleCategory::ALL {
        let aggregate = summary.category(category);
        writeln!(
            out,
            "  {} sales: {} ({})",
            category.label(),
            aggregate.sales,
            money(aggregate.revenue)
        )?;
    }
    writeln!(out, "  Conversion rate: {}", percent(summary.conversion_rate))
}

pub fn render_table(report: &AdsetReport) -> String {
    if report.is_empty() {
        return format!("{EMPTY_REPORT}\n");
    }
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Adset"),
        header_cell("Leads"),
        header_cell("Sales"),
        header_cell("Revenue"),
        header_cell("Avg ticket"),
    ];
    header.extend(SaleCategory::ALL.iter().map(|c| header_cell(c.label())));
    header.push(header_cell("Conversion"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 1..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for (adset, summary) in report {
        table.add_row(summary_row(Cell::new(adset), summary));
    }
    let total = overall_summary(report);
    let label = Cell::new("TOTAL")
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold);
    let row: Vec<Cell> = summary_row(label, &total)
        .into_iter()
        .map(|cell| cell.add_attribute(Attribute::Bold))
        .collect();
    table.add_row(row);
    format!("{table}\n")
}

pub fn render_json(report: &AdsetReport) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Figures across every adset, derived the same way as per-adset ones.
pub fn overall_summary(report: &AdsetReport) -> AdsetSummary {
    let mut breakdown = CategoryBreakdown::default();
    let mut leads = 0usize;
    for summary in report.values() {
        leads += summary.total_leads;
        for category in SaleCategory::ALL {
            let aggregate = summary.category(category);
            breakdown[category].sales += aggregate.sales;
            breakdown[category].revenue += aggregate.revenue;
        }
    }
    AdsetSummary::derive(leads, &breakdown)
}

fn summary_row(label: Cell, summary: &AdsetSummary) -> Vec<Cell> {
    let mut row = vec![
        label,
        Cell::new(summary.total_leads),
        Cell::new(summary.total_sales),
        Cell::new(money(summary.total_revenue)),
        Cell::new(money(summary.avg_ticket)),
    ];
    for category in SaleCategory::ALL {
        let aggregate = summary.category(category);
        row.push(category_cell(aggregate.sales, aggregate.revenue));
    }
    row.push(Cell::new(percent(summary.conversion_rate)));
    row
}

fn category_cell(sales: usize, revenue: f64) -> Cell {
    let cell = Cell::new(format!("{sales} ({})", money(revenue)));
    if sales == 0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

pub fn money(value: f64) -> String {
    format!("R$ {value:.2}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
