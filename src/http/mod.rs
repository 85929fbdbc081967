//! HTTP protocol layer module
//!
//! Response builders and content-type detection, decoupled from routing.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_500_response, build_page_response,
};
