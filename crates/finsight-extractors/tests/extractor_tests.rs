//! Integration tests for the extraction entry point.
//!
//! Exercises every supported format against real temporary files, plus the
//! recovered-failure paths whose outcomes are only observable through the
//! logging channel.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use serde_json::json;

use finsight_extractors::{DataExtractor, ExtractConfig, ExtractError, ExtractedData};

/// Writer cloned into the capturing subscriber so tests can assert on
/// emitted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a capturing subscriber and return everything it logged.
fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Build a one-page digital PDF with the given text lines.
fn build_pdf(path: &Path, lines: &[&str]) {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // One text object per line so extraction yields one output line each.
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new(
            "Td",
            vec![50.into(), (760 - 16 * i as i32).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn csv_extracts_to_column_major_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "sample.csv", "col1,col2\n1,2\n3,4");

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig::default())
        .unwrap();

    // The tabular result is returned bare, not wrapped in an envelope.
    let encoded = serde_json::to_value(&data).unwrap();
    assert_eq!(
        encoded,
        json!({
            "col1": {"0": 1, "1": 3},
            "col2": {"0": 2, "1": 4},
        })
    );
}

#[test]
fn excel_extracts_to_column_major_mapping() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.xlsx");

    let data = DataExtractor::new()
        .extract(&fixture, &ExtractConfig::default())
        .unwrap();

    let table = data.as_table().unwrap();
    assert!(!table.is_empty());
    let col1 = table.column("col1").unwrap();
    let col2 = table.column("col2").unwrap();
    assert_eq!(col1.get(&0).unwrap().as_f64(), Some(1.0));
    assert_eq!(col1.get(&1).unwrap().as_f64(), Some(3.0));
    assert_eq!(col2.get(&0).unwrap().as_f64(), Some(2.0));
    assert_eq!(col2.get(&1).unwrap().as_f64(), Some(4.0));
}

#[test]
fn json_extracts_parsed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "sample.json", r#"{"name": "Alice", "age": 30}"#);

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig::default())
        .unwrap();

    assert_eq!(data.as_json(), Some(&json!({"name": "Alice", "age": 30})));
}

#[test]
fn missing_file_is_not_found_for_every_format() {
    let extractor = DataExtractor::new();
    for name in [
        "missing.csv",
        "missing.xlsx",
        "missing.json",
        "missing.pdf",
        "missing.bogus",
    ] {
        let err = extractor
            .extract(Path::new(name), &ExtractConfig::default())
            .unwrap_err();
        assert!(
            matches!(err, ExtractError::NotFound(_)),
            "expected NotFound for {name}, got {err:?}"
        );
    }
}

#[test]
fn unrecognized_extension_is_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "notes.txt", "This is a test file.");

    let err = DataExtractor::new()
        .extract(&path, &ExtractConfig::default())
        .unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedFormat(f) if f == "txt"));
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "SAMPLE.CSV", "a,b\n1,2");

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig::default())
        .unwrap();
    assert!(!data.is_empty());
}

#[test]
fn empty_and_malformed_csv_log_distinct_messages() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_fixture(&dir, "empty.csv", "");
    let ragged = write_fixture(&dir, "ragged.csv", "a,b\n1,2,3\n4");
    let extractor = DataExtractor::new();

    let empty_logs = capture_logs(|| {
        let data = extractor.extract(&empty, &ExtractConfig::default()).unwrap();
        assert!(data.is_empty());
    });
    assert!(empty_logs.contains("empty tabular file"));
    assert!(!empty_logs.contains("failed to parse delimited file"));

    let ragged_logs = capture_logs(|| {
        let data = extractor.extract(&ragged, &ExtractConfig::default()).unwrap();
        assert!(data.is_empty());
    });
    assert!(ragged_logs.contains("failed to parse delimited file"));
    assert!(!ragged_logs.contains("empty tabular file"));
}

#[test]
fn malformed_json_recovers_with_decode_failure_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "broken.json", "{name: Alice, age: 30}");

    let logs = capture_logs(|| {
        let data = DataExtractor::new()
            .extract(&path, &ExtractConfig::default())
            .unwrap();
        assert_eq!(data.as_json(), Some(&json!({})));
    });
    assert!(logs.contains("failed to decode JSON file"));
}

#[test]
fn success_log_only_on_non_empty_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let filled = write_fixture(&dir, "filled.csv", "a,b\n1,2");
    let empty = write_fixture(&dir, "empty.csv", "");
    let extractor = DataExtractor::new();

    let filled_logs = capture_logs(|| {
        extractor.extract(&filled, &ExtractConfig::default()).unwrap();
    });
    assert!(filled_logs.contains("extraction complete"));

    let empty_logs = capture_logs(|| {
        extractor.extract(&empty, &ExtractConfig::default()).unwrap();
    });
    assert!(!empty_logs.contains("extraction complete"));
}

#[test]
fn digital_pdf_extracts_text_and_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    build_pdf(
        &path,
        &[
            "Quarterly report",
            "Revenue  COGS",
            "1000  600",
            "2000  900",
        ],
    );

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig { scan: Some(false) })
        .unwrap();

    let doc = data.as_document().unwrap();
    let page_text = doc.texts.get(&0).expect("page 0 text");
    assert!(page_text.contains("Quarterly report"));

    let tables = doc.tables.as_ref().expect("structured path carries tables");
    let table = tables.get(&0).expect("page 0 table");
    assert_eq!(table.column("Revenue").unwrap().get(&0), Some(&json!(1000)));
    assert_eq!(table.column("Revenue").unwrap().get(&1), Some(&json!(2000)));
    assert_eq!(table.column("COGS").unwrap().get(&0), Some(&json!(600)));
    assert_eq!(table.column("COGS").unwrap().get(&1), Some(&json!(900)));
}

#[test]
fn pdf_without_tables_yields_empty_table_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prose.pdf");
    build_pdf(&path, &["Just a paragraph of narrative text."]);

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig { scan: Some(false) })
        .unwrap();

    let doc = data.as_document().unwrap();
    assert!(!doc.texts.is_empty());
    assert!(doc.tables.as_ref().unwrap().is_empty());
}

#[test]
fn scanned_pdf_request_never_yields_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    build_pdf(&path, &["Quarterly report", "Revenue  COGS", "1000  600"]);

    let data = DataExtractor::new()
        .extract(&path, &ExtractConfig::scanned())
        .unwrap();

    // OCR output depends on the environment (tesseract/pdftoppm may be
    // absent, in which case the reader recovers to an empty result), but
    // the tables invariant holds either way.
    let doc = data.as_document().unwrap();
    assert!(doc.tables.is_none());
}

#[test]
fn corrupt_pdf_recovers_to_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "broken.pdf", "%PDF-1.4 garbage");

    let logs = capture_logs(|| {
        let data = DataExtractor::new()
            .extract(&path, &ExtractConfig { scan: Some(false) })
            .unwrap();
        assert!(data.is_empty());
    });
    assert!(logs.contains("failed to open PDF document"));
}

#[test]
fn result_shape_is_format_stable() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_fixture(&dir, "t.csv", "a,b\n1,2");
    let json_file = write_fixture(&dir, "t.json", "[1, 2]");
    let pdf = dir.path().join("t.pdf");
    build_pdf(&pdf, &["hello"]);
    let extractor = DataExtractor::new();

    let config = ExtractConfig::default();
    assert!(matches!(
        extractor.extract(&csv, &config).unwrap(),
        ExtractedData::Tabular(_)
    ));
    assert!(matches!(
        extractor.extract(&json_file, &config).unwrap(),
        ExtractedData::Json(_)
    ));
    assert!(matches!(
        extractor.extract(&pdf, &config).unwrap(),
        ExtractedData::Document(_)
    ));
}
