use super::*;

#[test]
fn default_view_shows_only_sentinel_label() {
    let view = ViewState::default();
    assert_eq!(view.file_label, "NO FILE SELECTED");
    assert_eq!(view.preview_src, None);
    assert!(!view.preview_visible);
    assert!(!view.loading_visible);
    assert!(!view.result_visible);
    assert!(view.prediction_text.is_empty());
    assert!(view.submit_enabled);
}

#[test]
fn clear_preview_hides_and_drops_source() {
    let mut view = ViewState {
        preview_src: Some("data:image/png;base64,".to_owned()),
        preview_visible: true,
        ..ViewState::default()
    };
    view.clear_preview();
    assert_eq!(view.preview_src, None);
    assert!(!view.preview_visible);
}

#[test]
fn show_result_sets_text_and_reveals_panel() {
    let mut view = ViewState::default();
    view.show_result("CAT".to_owned());
    assert_eq!(view.prediction_text, "CAT");
    assert!(view.result_visible);
}
