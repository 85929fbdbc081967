//! Client-side cookie helpers served at `/runtime.js`

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

pub const PATH: &str = "/runtime.js";

const CONTENT_TYPE: &str = "application/javascript";

const SCRIPT: &str = r#"function getCookie(name) {
  const prefix = name + "=";
  for (const part of document.cookie.split(";")) {
    const cookie = part.trim();
    if (cookie.startsWith(prefix)) {
      return decodeURIComponent(cookie.substring(prefix.length));
    }
  }
  return null;
}

function deleteCookie(name) {
  document.cookie = name + "=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT";
}
"#;

pub fn serve(is_head: bool) -> Response<Full<Bytes>> {
    http::build_page_response(Bytes::from_static(SCRIPT.as_bytes()), CONTENT_TYPE, is_head)
}
