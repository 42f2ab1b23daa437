use super::*;

#[test]
fn file_label_uppercases_selected_name() {
    assert_eq!(file_label(Some("leaf.jpg")), "SELECTED: LEAF.JPG");
}

#[test]
fn file_label_without_file_is_sentinel() {
    assert_eq!(file_label(None), NO_FILE_SELECTED);
}

#[test]
fn display_case_handles_non_ascii() {
    assert_eq!(display_case("straße"), "STRASSE");
    assert_eq!(display_case("tomato_late_blight"), "TOMATO_LATE_BLIGHT");
}

#[test]
fn error_text_keeps_message_case() {
    assert_eq!(error_text("bad image"), "ERROR: bad image");
}
