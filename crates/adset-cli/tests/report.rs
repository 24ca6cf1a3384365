use std::fs;
use std::path::PathBuf;

use adset_cli::pipeline::summarize_file;
use adset_cli::report::{render_json, render_text};
use adset_ingest::{LoadOptions, SourceEncoding};

const LEADS: &str = "\
adset_name;Nome;Venda_planejamento;venda_seguros;venda_credito
Campanha B;Ana;R$ 1.500,00;;
Campanha A;Bruno;;R$ 200,50;
Campanha A;Carla;;;
Campanha A;Davi;R$ 100,00;;R$ 2.000,00
Campanha A;Fabio;0,00;;
;Eva;R$ 999,00;;
";

fn write_leads(dir: &tempfile::TempDir, contents: &[u8]) -> PathBuf {
    let path = dir.path().join("leads.csv");
    fs::write(&path, contents).expect("write leads");
    path
}

#[test]
fn text_report_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_leads(&dir, LEADS.as_bytes());
    let result = summarize_file(&path, &LoadOptions::default());
    assert!(!result.has_errors());
    assert_eq!(result.encoding, Some(SourceEncoding::Utf8));
    assert_eq!(result.record_count, 6);
    insta::assert_snapshot!("text_report", render_text(&result.report));
}

#[test]
fn two_leads_one_sale() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_leads(&dir, b"adset_name;Venda_planejamento\nX;R$100,00\nX;\n");
    let result = summarize_file(&path, &LoadOptions::default());
    let x = &result.report["X"];
    assert_eq!(x.total_leads, 2);
    assert_eq!(x.total_sales, 1);
    assert_eq!(x.total_revenue, 100.0);
    assert_eq!(x.avg_ticket, 100.0);
    assert_eq!(x.conversion_rate, 50.0);

    let json: serde_json::Value =
        serde_json::from_str(&render_json(&result.report).expect("json")).expect("parse json");
    assert_eq!(json["X"]["totalSales"], 1);
    assert_eq!(json["X"]["avgTicket"], 100.0);
}

#[test]
fn latin1_export_is_summarized() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_leads(
        &dir,
        b"conjunto;venda_cr\xE9dito;venda_credito\nS\xE3o Paulo;x;R$ 3.000,00\n",
    );
    let result = summarize_file(&path, &LoadOptions::default());
    assert_eq!(result.encoding, Some(SourceEncoding::Latin1));
    let summary = &result.report["São Paulo"];
    assert_eq!(summary.sales_credito, 1);
    assert_eq!(summary.revenue_credito, 3000.0);
}

#[test]
fn missing_file_degrades_to_empty_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = summarize_file(&dir.path().join("absent.csv"), &LoadOptions::default());
    assert!(result.report.is_empty());
    assert!(result.has_errors());
    assert!(result.errors[0].contains("absent.csv"));
    assert_eq!(render_text(&result.report), "No adset data found.\n");
}

#[test]
fn undecodable_file_is_empty_without_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_leads(&dir, b"adset\n\xFF\xFF\n");
    let options = LoadOptions::default().with_encodings(vec![SourceEncoding::Utf8]);
    let result = summarize_file(&path, &options);
    assert!(result.report.is_empty());
    assert!(!result.has_errors());
    assert_eq!(result.encoding, None);
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_leads(&dir, b"adset_name;venda\n");
    let result = summarize_file(&path, &LoadOptions::default());
    assert!(result.report.is_empty());
    assert!(!result.has_errors());
}
