use super::{Cell, CellKind, Notebook, Source};
use crate::error::LoadError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SAMPLE: &str = r##"{
  "metadata": {"kernelspec": {"name": "python3"}},
  "nbformat": 4,
  "nbformat_minor": 5,
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Title\n", "\n", "Intro."]},
    {"cell_type": "code", "metadata": {}, "outputs": [], "source": "import os"},
    {"cell_type": "raw", "metadata": {}, "source": []}
  ]
}"##;

#[test]
fn test_both_source_shapes_are_flattened() {
    let notebook = Notebook::from_json(SAMPLE).unwrap();
    let cells = notebook.cells();

    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0], Cell::markdown("# Title\n\nIntro."));
    assert_eq!(cells[1], Cell::code("import os"));
    assert_eq!(cells[2].kind, CellKind::Other("raw".to_string()));
    assert_eq!(cells[2].source, "");
}

#[test]
fn test_lines_concatenate_as_stored() {
    let lines = Source::Lines(vec!["a\n".to_string(), "b".to_string()]);
    assert_eq!(lines.flatten(), "a\nb");
    assert_eq!(Source::Text("a\nb".to_string()).flatten(), "a\nb");
}

#[test]
fn test_missing_fields_are_kept_absent() {
    let notebook = Notebook::from_json(r#"{"nbformat": 4}"#).unwrap();

    assert!(notebook.metadata.is_none());
    assert!(notebook.nbformat_minor.is_none());
    assert!(notebook.cells.is_none());
    assert!(notebook.cells().is_empty());
}

#[test]
fn test_null_fields_count_as_present() {
    let notebook =
        Notebook::from_json(r#"{"metadata": null, "nbformat": 4, "nbformat_minor": null}"#)
            .unwrap();

    assert_eq!(notebook.metadata, Some(serde_json::Value::Null));
    assert_eq!(notebook.nbformat_minor, Some(serde_json::Value::Null));
}

#[test]
fn test_first_line() {
    let cell = Cell::code("x = 1\ny = 2");
    assert_eq!(cell.first_line(), "x = 1");
    assert_eq!(Cell::code("").first_line(), "");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE}").unwrap();
    file.flush().unwrap();

    let notebook = Notebook::load(file.path()).unwrap();
    assert_eq!(notebook.cells().len(), 3);
    assert!(notebook.cells()[0].is_markdown());
    assert!(notebook.cells()[1].is_code());
}

#[test]
fn test_load_reports_read_and_parse_errors() {
    let missing = Notebook::load(Path::new("/definitely/not/here.ipynb"));
    assert!(matches!(missing, Err(LoadError::Read { .. })));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let invalid = Notebook::load(file.path());
    assert!(matches!(invalid, Err(LoadError::Parse { .. })));
    let message = invalid.unwrap_err().to_string();
    assert!(message.starts_with("Failed to parse notebook at"), "{message}");
}
