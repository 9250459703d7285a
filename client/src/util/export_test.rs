#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn export_title_sanitizes_label_text() {
    assert_eq!(export_title("My Title!"), "my_title_");
    assert_eq!(export_title("human"), "human");
}

#[test]
fn export_title_falls_back_when_label_is_empty() {
    assert_eq!(export_title(""), FALLBACK_TITLE);
}

#[test]
fn export_title_keeps_underscore_only_titles() {
    assert_eq!(export_title("!!!"), "___");
}

#[test]
fn exports_are_unavailable_without_a_document() {
    assert!(export_svg("poster").is_none());
}

#[test]
fn png_export_is_unavailable_without_a_document() {
    assert!(futures::executor::block_on(export_png()).is_none());
}
