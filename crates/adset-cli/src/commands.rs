use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};
use tracing::info;

use adset_cli::pipeline::{SummarizeResult, summarize_file};
use adset_cli::report::{ReportFormat, apply_table_style, header_cell, render};
use adset_ingest::{LoadOptions, read_headers};
use adset_model::LogicalField;

use crate::cli::{EncodingArgs, InspectArgs, OutputFormatArg, SummarizeArgs};

pub fn run_summarize(args: &SummarizeArgs) -> Result<SummarizeResult> {
    let options = load_options(&args.encoding);
    let result = summarize_file(&args.file, &options);
    let output = render(&result.report, report_format(args.format)).context("render report")?;
    print!("{output}");
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let options = load_options(&args.encoding);
    let inspection = read_headers(&args.file, &options)
        .with_context(|| format!("read headers of {}", args.file.display()))?;
    info!(
        path = %args.file.display(),
        encoding = %inspection.encoding,
        columns = inspection.columns.len(),
        "inspected header"
    );

    let winners: Vec<(LogicalField, &'static str)> = LogicalField::ALL
        .iter()
        .filter_map(|field| {
            field
                .aliases()
                .first_in(inspection.names())
                .map(|column| (*field, column))
        })
        .collect();

    println!("File: {}", args.file.display());
    println!("Encoding: {}", inspection.encoding);
    println!("Delimiter: {}", char::from(options.delimiter));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Column"),
        header_cell("Name"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    for column in &inspection.columns {
        let field = LogicalField::ALL
            .iter()
            .find(|field| field.aliases().names().iter().any(|alias| *alias == column.name));
        let field_cell = match field {
            Some(field)
                if winners
                    .iter()
                    .any(|(winner, name)| winner == field && *name == column.name) =>
            {
                Cell::new(field.name()).fg(Color::Green)
            }
            Some(field) => Cell::new(format!("{} (shadowed)", field.name())).fg(Color::DarkGrey),
            None => Cell::new(""),
        };
        table.add_row(vec![
            Cell::new(column.index),
            Cell::new(&column.letter),
            Cell::new(&column.name),
            field_cell,
        ]);
    }
    println!("{table}");

    for field in LogicalField::ALL {
        if !winners.iter().any(|(found, _)| *found == field) {
            println!("Missing: no column for {field}");
        }
    }
    Ok(())
}

pub fn run_aliases() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Accepted columns (in precedence order)"),
    ]);
    apply_table_style(&mut table);
    for field in LogicalField::ALL {
        table.add_row(vec![
            field.name().to_string(),
            field.aliases().names().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_options(args: &EncodingArgs) -> LoadOptions {
    LoadOptions::default().with_encodings(args.encodings.clone())
}

fn report_format(format: OutputFormatArg) -> ReportFormat {
    match format {
        OutputFormatArg::Text => ReportFormat::Text,
        OutputFormatArg::Table => ReportFormat::Table,
        OutputFormatArg::Json => ReportFormat::Json,
    }
}
