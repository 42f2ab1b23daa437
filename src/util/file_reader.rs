//! `FileReader` as a future.
//!
//! Requires a browser environment. The reader's load/error callbacks resolve a
//! oneshot channel; the callbacks stay alive for as long as the future does.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, File, FileReader};

use crate::preview::{PreviewError, PreviewImage};

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<String, PreviewError>>>>>;

fn resolve(tx: &Sender, result: Result<String, PreviewError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        if tx.send(result).is_err() {
            log::debug!("file read finished after its future was dropped");
        }
    }
}

/// Read `file` into a data URL.
///
/// # Errors
///
/// Returns [`PreviewError::Read`] if the reader cannot be created, the read
/// fails or is aborted, or the result is not a string.
pub async fn read_as_data_url(file: &File) -> Result<String, PreviewError> {
    let reader = FileReader::new().map_err(|e| PreviewError::Read(format!("{e:?}")))?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = Rc::clone(&tx);
        let reader = reader.clone();
        Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            let result = reader
                .result()
                .map_err(|e| PreviewError::Read(format!("{e:?}")))
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| PreviewError::Read("reader result is not text".to_owned()))
                });
            resolve(&tx, result);
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            resolve(&tx, Err(PreviewError::Read(format!("{} event", ev.type_()))));
        })
    };

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader.set_onabort(Some(on_error.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| PreviewError::Read(format!("{e:?}")))?;

    let result = rx
        .await
        .map_err(|_| PreviewError::Read("reader callbacks dropped".to_owned()));

    reader.set_onload(None);
    reader.set_onerror(None);
    reader.set_onabort(None);
    drop((on_load, on_error));

    result?
}

/// Read `file` and validate it as an image preview.
///
/// # Errors
///
/// Returns any read failure, or the validation error if the content is not a
/// base64 image data URL.
pub async fn read_preview(file: &File) -> Result<PreviewImage, PreviewError> {
    let url = read_as_data_url(file).await?;
    PreviewImage::from_data_url(url)
}
