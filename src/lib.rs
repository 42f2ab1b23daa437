//! # predict-ui
//!
//! Browser controller for an image-classification upload page. The user picks
//! an image, sees a local preview, submits it to `POST /predict`, and gets the
//! returned label (or an error) rendered into the page.
//!
//! The crate compiles to WebAssembly with the `browser` feature. Without it,
//! only the DOM-free core is built, which is what the tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ControllerCore`], the selection/submission state machine |
//! | [`view`] | [`view::ViewState`], everything the page should currently show |
//! | [`preview`] | Validated preview data URLs |
//! | [`net`] | `/predict` wire types and the HTTP call |
//! | [`config`] | Host page element ids and endpoint |
//! | [`util`] | Text formatting and the browser file reader |
//! | `dom` | Bound element handles and view rendering (browser only) |
//! | `app` | `UploadController` and the wasm entry point (browser only) |

pub mod config;
pub mod controller;
pub mod net;
pub mod preview;
pub mod util;
pub mod view;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;
