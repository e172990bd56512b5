//! PDF reader: structured text/table extraction and an OCR path for
//! scanned documents.
//!
//! The two strategies share one entry point, selected by the `scan`
//! configuration flag. Both recover from per-file failures (corrupt
//! document, missing rasterizer, OCR engine error) by logging and
//! returning an empty result instead of raising.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ExtractResult;
use crate::types::{parse_scalar, DocumentData, ExtractConfig, ExtractedData, Table};
use crate::FormatReader;

/// Minimum consecutive table-shaped lines (header + one data row).
const MIN_TABLE_LINES: usize = 2;

/// Reader for PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }

    /// Structured path: embedded text plus table detection, page by page.
    fn read_structured(&self, path: &Path) -> DocumentData {
        let doc = match lopdf::Document::load(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to open PDF document");
                return DocumentData {
                    texts: BTreeMap::new(),
                    tables: Some(BTreeMap::new()),
                };
            }
        };

        let mut texts = BTreeMap::new();
        let mut tables = BTreeMap::new();
        for (idx, page_number) in doc.get_pages().keys().enumerate() {
            let text = match doc.extract_text(&[*page_number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        page = idx,
                        error = %e,
                        "failed to extract text from PDF page"
                    );
                    continue;
                }
            };
            if text.trim().is_empty() {
                continue;
            }
            // Pages with several tables keep only the last one detected.
            for table in detect_tables(&text) {
                tables.insert(idx, table);
            }
            texts.insert(idx, text.trim().to_string());
        }

        DocumentData {
            texts,
            tables: Some(tables),
        }
    }

    /// Scanned path: rasterize each page and run OCR over the images.
    /// Never yields tables.
    #[cfg(feature = "ocr")]
    fn read_scanned(&self, path: &Path) -> DocumentData {
        let texts = match ocr::recognize_pages(path) {
            Ok(texts) => texts,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to OCR scanned PDF");
                BTreeMap::new()
            }
        };

        DocumentData {
            texts,
            tables: None,
        }
    }

    #[cfg(not(feature = "ocr"))]
    fn read_scanned(&self, path: &Path) -> DocumentData {
        tracing::error!(
            path = %path.display(),
            "scanned-PDF extraction requested but the ocr feature is disabled"
        );
        DocumentData {
            texts: BTreeMap::new(),
            tables: None,
        }
    }
}

impl FormatReader for PdfReader {
    fn read(&self, path: &Path, config: &ExtractConfig) -> ExtractResult<ExtractedData> {
        let doc = if config.scan_requested() {
            self.read_scanned(path)
        } else {
            self.read_structured(path)
        };
        Ok(ExtractedData::Document(doc))
    }

    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn validate_config(&self, config: &ExtractConfig) {
        if config.scan.is_none() {
            tracing::debug!("PDF extraction without an explicit scan flag, assuming a digital document");
        }
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

/// Detect table-shaped regions in page text.
///
/// A table is a run of at least [`MIN_TABLE_LINES`] consecutive lines that
/// all split (on tabs or runs of two-plus spaces) into the same number of
/// cells, with at least two cells per line. The first line of a run is the
/// header; the remaining lines become the column-major rows.
fn detect_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        // Text extraction inserts stray blank lines; they carry no layout
        // signal, so they neither extend nor break a run.
        if line.trim().is_empty() {
            continue;
        }
        let cells = split_cells(line);
        let extends_run = cells.len() >= 2
            && run.last().map_or(true, |prev| prev.len() == cells.len());

        if extends_run {
            run.push(cells);
            continue;
        }
        flush_run(&mut run, &mut tables);
        if cells.len() >= 2 {
            run.push(cells);
        }
    }
    flush_run(&mut run, &mut tables);

    tables
}

fn flush_run(run: &mut Vec<Vec<String>>, tables: &mut Vec<Table>) {
    if run.len() >= MIN_TABLE_LINES {
        let header: Vec<String> = run[0].clone();
        let rows: Vec<Vec<serde_json::Value>> = run[1..]
            .iter()
            .map(|cells| cells.iter().map(|cell| parse_scalar(cell)).collect())
            .collect();
        tables.push(Table::from_rows(&header, &rows));
    }
    run.clear();
}

/// Split a line into cells on tabs or runs of two-plus spaces.
fn split_cells(line: &str) -> Vec<String> {
    if line.contains('\t') {
        return line
            .split('\t')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;
    for ch in line.chars() {
        if ch == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= 2 && !current.is_empty() {
            cells.push(current.trim().to_string());
            current.clear();
        } else if spaces > 0 && !current.is_empty() {
            current.push(' ');
        }
        spaces = 0;
        current.push(ch);
    }
    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }
    cells.retain(|cell| !cell.is_empty());
    cells
}

#[cfg(feature = "ocr")]
mod ocr {
    //! Page rasterization (pdftoppm) and Tesseract recognition.

    use std::collections::BTreeMap;
    use std::path::Path;
    use std::process::Command;

    use rusty_tesseract::{Args, Image};

    /// Rasterize every page to PNG and recognize each image in order.
    /// Pages with no recognized text are omitted from the result.
    pub(super) fn recognize_pages(
        path: &Path,
    ) -> Result<BTreeMap<usize, String>, Box<dyn std::error::Error + Send + Sync>> {
        let scratch = tempfile::tempdir()?;
        let prefix = scratch.path().join("page");

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg("200")
            .arg(path)
            .arg(&prefix)
            .output()?;
        if !output.status.success() {
            return Err(format!(
                "pdftoppm failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )
            .into());
        }

        let mut images: Vec<_> = std::fs::read_dir(scratch.path())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map_or(false, |ext| ext == "png"))
            .collect();
        images.sort();

        let mut texts = BTreeMap::new();
        for (idx, image_path) in images.iter().enumerate() {
            let text = match recognize_image(image_path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(page = idx, error = %e, "OCR failed for page image");
                    continue;
                }
            };
            if !text.trim().is_empty() {
                texts.insert(idx, text.trim().to_string());
            }
        }
        Ok(texts)
    }

    fn recognize_image(
        image_path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let loaded = image::open(image_path)?;
        let grayscale = image::DynamicImage::ImageLuma8(loaded.to_luma8());
        let tesseract_image = Image::from_dynamic_image(&grayscale)?;
        let text = rusty_tesseract::image_to_string(&tesseract_image, &Args::default())?;
        Ok(text)
    }
}
