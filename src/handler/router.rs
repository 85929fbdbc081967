//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: runs the middleware pipeline,
//! then maps the request path to a resolved page.

use crate::config::AppState;
use crate::content::PageTable;
use crate::handler::runtime_script;
use crate::http::{self, mime};
use crate::logger;
use crate::middleware::RequestContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(respond(&req, &state))
}

/// Run the pipeline and the router for one request
pub fn respond<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let ctx = RequestContext::from_request(req);
    state.pipeline.run(ctx, |ctx| serve(ctx, state))
}

/// Page name for a request path: one leading `/` stripped, empty means home
pub fn page_name<'a>(path: &'a str, home_page: &'a str) -> &'a str {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() {
        home_page
    } else {
        name
    }
}

/// Look up the page for a request path
pub fn route<'a>(pages: &'a PageTable, path: &str, home_page: &str) -> Option<&'a Bytes> {
    pages.get(page_name(path, home_page))
}

/// Terminal handler behind the pipeline
fn serve(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(&ctx.method) {
        return resp;
    }
    let is_head = ctx.method == Method::HEAD;

    if state.config.routes.runtime_script && ctx.path == runtime_script::PATH {
        return runtime_script::serve(is_head);
    }

    let name = page_name(&ctx.path, &state.config.content.home_page);
    match state.pages.get(name) {
        Some(content) => {
            http::build_page_response(content.clone(), mime::content_type_for(name), is_head)
        }
        None => http::build_404_response(),
    }
}

/// Return 405 for anything but GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
