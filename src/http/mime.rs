//! MIME type detection module
//!
//! Returns the Content-Type for a page based on its name's extension.
//! Pages without a recognized extension are served as HTML.

use std::path::Path;

const HTML: &str = "text/html; charset=utf-8";

/// Get Content-Type for a page name
pub fn content_type_for(page_name: &str) -> &'static str {
    let extension = Path::new(page_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        // Text
        Some("css") => "text/css; charset=utf-8",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        Some("pdf") => "application/pdf",

        _ => HTML,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for("index.html"), HTML);
        assert_eq!(content_type_for("site.css"), "text/css; charset=utf-8");
        assert_eq!(content_type_for("runtime.js"), "application/javascript");
        assert_eq!(content_type_for("logo.PNG"), "image/png");
    }

    #[test]
    fn test_unknown_or_missing_extension_is_html() {
        assert_eq!(content_type_for("about"), HTML);
        assert_eq!(content_type_for("notes.partial"), HTML);
        assert_eq!(content_type_for(""), HTML);
    }
}
