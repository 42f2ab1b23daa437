//! Small helpers shared by the controller and the browser bridge.

#[cfg(feature = "browser")]
pub mod file_reader;
pub mod text;
