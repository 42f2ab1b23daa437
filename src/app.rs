//! Browser entry point and the upload controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the wasm module loads. It reads the page config, sets up
//! console logging, binds the page and installs the change/submit listeners.
//! The controller then lives for the rest of the page's lifetime.
//!
//! `UploadController` is shared between the listeners and the spawned
//! decode/request tasks through an `Rc`. The core sits behind a `RefCell`
//! and is only borrowed between awaits.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::config::PageConfig;
use crate::controller::ControllerCore;
use crate::dom::{BindError, Page, file_metadata, load_config};
use crate::net::api::submit_form;
use crate::util::file_reader::read_preview;

pub struct UploadController {
    page: Page,
    core: RefCell<ControllerCore>,
    endpoint: String,
}

impl UploadController {
    #[must_use]
    pub fn new(page: Page, config: &PageConfig) -> Rc<Self> {
        Rc::new(Self {
            page,
            core: RefCell::new(ControllerCore::new()),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Install the change and submit listeners.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Listener`] if the browser refuses a listener.
    pub fn attach(self: &Rc<Self>) -> Result<(), BindError> {
        let on_change = {
            let this = Rc::clone(self);
            Closure::<dyn FnMut(Event)>::new(move |_ev: Event| this.handle_selection())
        };
        self.page
            .file_input
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener {
                event: "change",
                detail: format!("{e:?}"),
            })?;
        on_change.forget();

        let on_submit = {
            let this = Rc::clone(self);
            Closure::<dyn FnMut(Event)>::new(move |ev: Event| this.handle_submit(&ev))
        };
        self.page
            .form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener {
                event: "submit",
                detail: format!("{e:?}"),
            })?;
        on_submit.forget();

        Ok(())
    }

    /// Sync the core with the file input and start a preview decode if a file
    /// is chosen.
    pub fn handle_selection(self: &Rc<Self>) {
        let file = self.page.selected_file();
        let ticket = self.core.borrow_mut().select(file.as_ref().map(file_metadata));
        self.render();

        let (Some(ticket), Some(file)) = (ticket, file) else {
            return;
        };
        let this = Rc::clone(self);
        spawn_local(async move {
            let decoded = read_preview(&file).await;
            let applied = this.core.borrow_mut().finish_decode(ticket, decoded);
            if applied {
                this.render();
            }
        });
    }

    pub fn handle_submit(self: &Rc<Self>, ev: &Event) {
        ev.prevent_default();

        let started = self.core.borrow_mut().begin_submit();
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(rejected) => {
                log::debug!("submit rejected: {rejected}");
                if let Some(message) = rejected.alert_message() {
                    alert(message);
                }
                return;
            }
        };
        self.render();

        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = submit_form(&this.page.form, &this.endpoint).await;
            let applied = this.core.borrow_mut().finish_submit(ticket, &outcome);
            if applied {
                this.render();
            }
        });
    }

    fn render(&self) {
        self.page.render(self.core.borrow().view());
    }
}

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}

/// Bind the page, attach the controller and render its initial state.
///
/// # Errors
///
/// Returns [`BindError`] if the page lacks a required element or refuses a
/// listener.
pub fn mount(document: &Document, config: &PageConfig) -> Result<Rc<UploadController>, BindError> {
    let page = Page::bind(document, config)?;
    let controller = UploadController::new(page, config);
    controller.attach()?;
    // Browsers may restore a chosen file on back/forward navigation.
    controller.handle_selection();
    Ok(controller)
}

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let (config, config_error) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    if console_log::init_with_level(config.log_level.as_level()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Some(e) = config_error {
        log::warn!("{e}; using defaults");
    }

    match mount(&document, &config) {
        Ok(_) => log::info!("upload controller attached (endpoint {})", config.endpoint),
        Err(e) => log::error!("upload controller not attached: {e}"),
    }
}
