use super::*;

// 1x1 transparent GIF.
const GIF_PAYLOAD: &str = "R0lGODlhAQABAAAAACH5BAEKAAEALAAAAAABAAEAAAICTAEAOw==";

// PNG signature bytes.
const PNG_SIGNATURE: &str = "iVBORw0KGgo=";

fn gif_url() -> String {
    format!("data:image/gif;base64,{GIF_PAYLOAD}")
}

// =============================================================
// Accepted URLs
// =============================================================

#[test]
fn accepts_base64_image_url() {
    let preview = PreviewImage::from_data_url(gif_url()).unwrap();
    assert_eq!(preview.url(), gif_url());
}

#[test]
fn base64_marker_is_case_insensitive() {
    let url = format!("data:IMAGE/PNG;BASE64,{GIF_PAYLOAD}");
    assert!(PreviewImage::from_data_url(url).is_ok());
}

#[test]
fn extra_parameters_are_tolerated() {
    let url = format!("data:image/jpeg;name=leaf.jpg;base64,{GIF_PAYLOAD}");
    assert!(PreviewImage::from_data_url(url).is_ok());
}

#[test]
fn empty_payload_is_accepted() {
    assert!(PreviewImage::from_data_url("data:image/png;base64,".to_owned()).is_ok());
}

#[test]
fn image_without_known_type_is_accepted() {
    // FileReader yields these for images with no extension; `<img>` sniffs them.
    let octet = format!("data:application/octet-stream;base64,{PNG_SIGNATURE}");
    let preview = PreviewImage::from_data_url(octet.clone()).unwrap();
    assert_eq!(preview.url(), octet);

    let untyped = format!("data:;base64,{PNG_SIGNATURE}");
    assert!(PreviewImage::from_data_url(untyped).is_ok());
}

// =============================================================
// Rejected URLs
// =============================================================

#[test]
fn rejects_non_data_url() {
    assert_eq!(
        PreviewImage::from_data_url("https://example.com/leaf.png".to_owned()),
        Err(PreviewError::NotDataUrl)
    );
    assert_eq!(
        PreviewImage::from_data_url("data:image/png;base64".to_owned()),
        Err(PreviewError::NotDataUrl)
    );
}

#[test]
fn rejects_percent_encoded_url() {
    assert_eq!(
        PreviewImage::from_data_url("data:image/svg+xml,%3Csvg%3E".to_owned()),
        Err(PreviewError::NotBase64)
    );
}

#[test]
fn base64_as_media_type_is_not_the_encoding_marker() {
    assert_eq!(
        PreviewImage::from_data_url("data:base64,AAAA".to_owned()),
        Err(PreviewError::NotBase64)
    );
}

#[test]
fn rejects_corrupt_payload() {
    let err = PreviewImage::from_data_url("data:image/png;base64,@@@@".to_owned()).unwrap_err();
    assert!(matches!(err, PreviewError::Payload(_)));
}
