//! Request handler module
//!
//! Routes requests that made it through the middleware pipeline to resolved
//! pages or the runtime script.

pub mod router;
pub mod runtime_script;

// Re-export main entry point
pub use router::{handle_request, page_name, respond, route};
