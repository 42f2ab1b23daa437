//! Host page binding.
//!
//! `Page` holds every element the controller drives, looked up once by id at
//! startup, and renders a [`ViewState`] onto them. Visibility is expressed
//! through the configured hidden class so the page's stylesheet stays in
//! charge of layout.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlFormElement, HtmlImageElement, HtmlInputElement};

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, PageConfig};
use crate::controller::SelectedFile;
use crate::view::ViewState;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("element #{0} not found")]
    Missing(String),
    #[error("element #{id} is not {expected}")]
    WrongType { id: String, expected: &'static str },
    #[error("failed to install {event} listener: {detail}")]
    Listener { event: &'static str, detail: String },
}

/// The bound host page.
pub struct Page {
    pub file_input: HtmlInputElement,
    pub file_name: Element,
    pub form: HtmlFormElement,
    pub loading: Element,
    pub result: Element,
    pub prediction_text: Element,
    pub image_preview: Element,
    pub preview_img: HtmlImageElement,
    submit: Option<Element>,
    hidden_class: String,
}

fn element(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::Missing(id.to_owned()))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, BindError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongType {
            id: id.to_owned(),
            expected,
        })
}

/// Read the optional JSON config blob from the page.
///
/// # Errors
///
/// Returns [`ConfigError`] if the blob exists but does not parse.
pub fn load_config(document: &Document) -> Result<PageConfig, ConfigError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    PageConfig::from_json(&raw)
}

/// Metadata the controller keeps for a chosen file.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn file_metadata(file: &File) -> SelectedFile {
    SelectedFile {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

impl Page {
    /// Look up every element named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError`] for the first element that is missing or has the
    /// wrong element type.
    pub fn bind(document: &Document, config: &PageConfig) -> Result<Self, BindError> {
        let ids = &config.elements;
        let form: HtmlFormElement = typed(document, &ids.upload_form, "a form")?;
        let submit = match form.query_selector("[type=submit]") {
            Ok(found) => found,
            Err(e) => {
                log::warn!("submit control lookup failed: {e:?}");
                None
            }
        };

        Ok(Self {
            file_input: typed(document, &ids.file_input, "an input")?,
            file_name: element(document, &ids.file_name)?,
            loading: element(document, &ids.loading)?,
            result: element(document, &ids.result)?,
            prediction_text: element(document, &ids.prediction_text)?,
            image_preview: element(document, &ids.image_preview)?,
            preview_img: typed(document, &ids.preview_img, "an image")?,
            form,
            submit,
            hidden_class: config.hidden_class.clone(),
        })
    }

    /// The first file currently chosen in the file input.
    #[must_use]
    pub fn selected_file(&self) -> Option<File> {
        self.file_input.files().and_then(|files| files.get(0))
    }

    /// Push the whole view onto the page.
    pub fn render(&self, view: &ViewState) {
        self.file_name.set_text_content(Some(&view.file_label));
        self.prediction_text
            .set_text_content(Some(&view.prediction_text));

        match &view.preview_src {
            Some(src) => {
                if self.preview_img.src() != *src {
                    self.preview_img.set_src(src);
                }
            }
            None => {
                if let Err(e) = self.preview_img.remove_attribute("src") {
                    log::warn!("failed to clear preview source: {e:?}");
                }
            }
        }

        self.set_visible(&self.image_preview, view.preview_visible);
        self.set_visible(&self.loading, view.loading_visible);
        self.set_visible(&self.result, view.result_visible);

        if let Some(submit) = &self.submit {
            if let Err(e) = submit.toggle_attribute_with_force("disabled", !view.submit_enabled) {
                log::warn!("failed to toggle submit control: {e:?}");
            }
        }
    }

    fn set_visible(&self, el: &Element, visible: bool) {
        if let Err(e) = el
            .class_list()
            .toggle_with_force(&self.hidden_class, !visible)
        {
            log::warn!("failed to toggle #{}: {e:?}", el.id());
        }
    }
}
