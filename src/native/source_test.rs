use std::io::Write;

use super::*;

fn document_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn reads_graphic_markup_from_file() {
    let file = document_file(
        r#"<?xml version="1.0"?><svg id="svg" xmlns="http://www.w3.org/2000/svg" width="400" height="300"/>"#,
    );
    let source = SvgFileSource::new(file.path());

    let markup = source.graphic_markup().unwrap();

    assert!(markup.starts_with("<svg"));
    assert!(!markup.contains("<?xml"));
    assert_eq!(source.dimensions(), RawDimensions::new(Some("400"), Some("300")));
}

#[test]
fn missing_file_is_missing_graphic() {
    let dir = tempfile::tempdir().unwrap();
    let source = SvgFileSource::new(dir.path().join("absent.svg"));
    assert!(source.graphic_markup().is_none());
    assert_eq!(source.dimensions(), RawDimensions::default());
}

#[test]
fn file_without_svg_is_missing_graphic() {
    let file = document_file("<html><body>plain</body></html>");
    let source = SvgFileSource::new(file.path());
    assert!(source.graphic_markup().is_none());
}

#[test]
fn snapshot_reads_markup_and_dimensions_together() {
    let file = document_file(r#"<html><svg id="svg" width="640" height="480"><rect/></svg></html>"#);
    let source = SvgFileSource::new(file.path());

    let snapshot = source.snapshot().unwrap();

    assert_eq!(snapshot.markup, source.graphic_markup().unwrap());
    assert!(snapshot.markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="svg""#));
    assert_eq!(snapshot.dimensions, RawDimensions::new(Some("640"), Some("480")));
}

#[test]
fn snapshot_of_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SvgFileSource::new(dir.path().join("absent.svg")).snapshot().is_none());
}

#[test]
fn picks_up_changes_between_queries() {
    let file = document_file(r#"<svg id="svg" width="10"></svg>"#);
    let source = SvgFileSource::new(file.path());
    assert_eq!(source.dimensions().width.as_deref(), Some("10"));

    fs::write(file.path(), r#"<svg id="svg" width="20"></svg>"#).unwrap();
    assert_eq!(source.dimensions().width.as_deref(), Some("20"));
    assert_eq!(source.path(), file.path());
}
