//! Integration tests for the splf command line.

use std::path::Path;

use clap::Parser;
use splf::{run, Cli};
use splf_catalog::{parse_search_output, SearchResult};
use splf_core::{Error, ToolConfig};

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("splf").chain(args.iter().copied()))
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

async fn run_to_string(args: &[&str], config: &ToolConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(cli(args), config, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

const CATALOG: &str = r#"[
  {
    "user": "JSMITH",
    "name": "QPJOBLOG",
    "number": 1,
    "status": "READY",
    "creationTimestamp": "2024-01-02 10:00:00",
    "jobName": "D000D2034A",
    "jobUser": "JSMITH",
    "jobNumber": "000001",
    "queueLibrary": "QUSRSYS",
    "queue": "QEZJOBLOG",
    "pageLength": 66
  },
  {
    "user": "AP",
    "name": "INVOICE",
    "number": 2,
    "status": "HELD",
    "creationTimestamp": "2024-01-01 09:00:00",
    "jobName": "APRUN",
    "jobUser": "AP",
    "jobNumber": "000002",
    "queueLibrary": "QGPL",
    "queue": "PRT01"
  }
]"#;

#[tokio::test]
async fn test_reformat_to_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.prt");
    let second = dir.path().join("second.prt");
    std::fs::write(&first, "   1HELLO\n    WORLD").unwrap();
    std::fs::write(&second, "  1 TITLE\n  4 BODY").unwrap();
    let out_dir = dir.path().join("out");

    let output = run_to_string(
        &["reformat", path_str(&first), path_str(&second), "-o", path_str(&out_dir)],
        &ToolConfig::default(),
    )
    .await
    .unwrap();

    // Files were written, nothing printed
    assert!(output.is_empty());
    let first_out = std::fs::read_to_string(out_dir.join("first.splf")).unwrap();
    let second_out = std::fs::read_to_string(out_dir.join("second.splf")).unwrap();
    assert_eq!(first_out, "HELLO\r\nWORLD");
    assert_eq!(second_out, "TITLE\r\n\r\n\r\nBODY");
}

#[tokio::test]
async fn test_reformat_single_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.prt");
    std::fs::write(&input, "  1 PAGE ONE\n    _____\n   0TOTAL\n  1 PAGE TWO").unwrap();

    let output = run_to_string(&["reformat", path_str(&input)], &ToolConfig::default())
        .await
        .unwrap();

    // Every line ends with CRLF, including the last
    let body = output.strip_suffix("\r\n").unwrap();
    assert!(!body.replace("\r\n", "").contains('\n'));
    let lines: Vec<&str> = body.split("\r\n").collect();
    assert_eq!(
        lines,
        vec!["PAGE ONE", "TOTAL", "", "", "", "PAGE TWO"]
    );
}

#[tokio::test]
async fn test_reformat_raw_keeps_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.prt");
    std::fs::write(&input, "   1HELLO\n    WORLD").unwrap();

    let output = run_to_string(&["reformat", "--raw", path_str(&input)], &ToolConfig::default())
        .await
        .unwrap();
    assert_eq!(output, "   1HELLO\n    WORLD\r\n");
}

#[tokio::test]
async fn test_reformat_many_files_needs_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.prt");
    let second = dir.path().join("b.prt");
    std::fs::write(&first, "    A").unwrap();
    std::fs::write(&second, "    B").unwrap();

    let result = run_to_string(
        &["reformat", path_str(&first), path_str(&second)],
        &ToolConfig::default(),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_reformat_shared_stem_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("a")).unwrap();
    std::fs::create_dir(dir.path().join("b")).unwrap();
    let first = dir.path().join("a/report.prt");
    let second = dir.path().join("b/report.prt");
    std::fs::write(&first, "    FROM A").unwrap();
    std::fs::write(&second, "    FROM B").unwrap();
    let out_dir = dir.path().join("out");

    let result = run_to_string(
        &["reformat", path_str(&first), path_str(&second), "-o", path_str(&out_dir)],
        &ToolConfig::default(),
    )
    .await;

    assert!(result.is_err());
    // Refused before anything was written
    assert!(!out_dir.join("report.splf").exists());
}

#[tokio::test]
async fn test_reformat_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.prt");

    let result = run_to_string(&["reformat", path_str(&missing)], &ToolConfig::default()).await;
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("missing.prt"));
}

#[tokio::test]
async fn test_search_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoices.prt");
    std::fs::write(&input, "  1 INVOICE 1\n    nothing\n  5 invoice total").unwrap();
    let other = dir.path().join("other.prt");
    std::fs::write(&other, "    NO MATCH HERE").unwrap();

    let output = run_to_string(
        &["search", "Invoice", path_str(&input), path_str(&other)],
        &ToolConfig::default(),
    )
    .await
    .unwrap();

    let results = parse_search_output(&output, false);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, path_str(&input));
    let numbers: Vec<usize> = results[0].lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 5]);
    assert_eq!(results[0].lines[1].content, "invoice total");
}

#[tokio::test]
async fn test_search_raw_cr_separated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cr.prt");
    std::fs::write(&input, "    A\r    B\r    TOTAL").unwrap();

    let output = run_to_string(&["search", "total", "--raw", path_str(&input)], &ToolConfig::default())
        .await
        .unwrap();
    assert_eq!(output, format!("{}:3:    TOTAL\n", path_str(&input)));
}

#[tokio::test]
async fn test_search_non_utf8_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.prt");
    std::fs::write(&input, [0x20u8, 0xff, 0xfe, 0x41]).unwrap();

    let err = run_to_string(&["search", "A", path_str(&input)], &ToolConfig::default())
        .await
        .unwrap_err();
    assert!(err
        .chain()
        .any(|e| matches!(e.downcast_ref::<Error>(), Some(Error::InvalidInput(_)))));

    let err = run_to_string(&["reformat", path_str(&input)], &ToolConfig::default())
        .await
        .unwrap_err();
    assert!(err
        .chain()
        .any(|e| matches!(e.downcast_ref::<Error>(), Some(Error::InvalidInput(_)))));
}

#[tokio::test]
async fn test_search_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoices.prt");
    std::fs::write(&input, "  1 INVOICE 1\n    nothing\n  5 invoice total").unwrap();

    let output = run_to_string(
        &["search", "total", "--json", "--raw", path_str(&input)],
        &ToolConfig::default(),
    )
    .await
    .unwrap();

    let results: Vec<SearchResult> = serde_json::from_str(&output).unwrap();
    assert_eq!(results.len(), 1);
    // Raw text has no blank lines inserted
    assert_eq!(results[0].lines[0].number, 3);
    assert_eq!(results[0].lines[0].content, "  5 invoice total");
}

#[tokio::test]
async fn test_list_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let config = ToolConfig::default();

    // Default sort is newest first
    let output = run_to_string(&["list", path_str(&catalog)], &config).await.unwrap();
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "JSMITH/QEZJOBLOG/QPJOBLOG~D000D2034A~JSMITH~000001~1.splf",
            "AP/PRT01/INVOICE~APRUN~AP~000002~2.splf",
        ]
    );

    let output = run_to_string(
        &["list", path_str(&catalog), "--sort", "name", "--ascending", "--outq"],
        &config,
    )
    .await
    .unwrap();
    assert_eq!(
        output.lines().next(),
        Some("QGPL/PRT01/INVOICE~APRUN~AP~000002~2.splf")
    );
}

#[tokio::test]
async fn test_list_with_search_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let config_path = dir.path().join("splf.yaml");
    std::fs::write(
        &config_path,
        "printer:\n  file_extension: txt\nnaming:\n  name_pattern: name, number\n",
    )
    .unwrap();
    let config = ToolConfig::from_file(&config_path).unwrap();

    let output = run_to_string(&["list", path_str(&catalog), "-s", "QPJOBLOG"], &config)
        .await
        .unwrap();
    assert_eq!(output, "JSMITH/QEZJOBLOG/QPJOBLOG~1.txt\n");
}

#[tokio::test]
async fn test_list_invalid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, "not json").unwrap();

    let result = run_to_string(&["list", path_str(&catalog)], &ToolConfig::default()).await;
    assert!(result.is_err());
}
