//! Screen components, one per application state

pub mod error_screen;
pub mod output_screen;
pub mod processing_screen;
pub mod upload_screen;
