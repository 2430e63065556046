//! HTTP protocol layer module
//!
//! Response construction, MIME detection, and the CORS decorator, decoupled
//! from the file-serving logic.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_html_response,
    build_options_response, build_redirect_response,
};
