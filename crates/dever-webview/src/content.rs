//! Serves the bundled main UI through the `dever://` custom protocol.
//!
//! `dever://localhost/` maps to `{root}/index.html`; any other path maps into
//! `root`. Paths that escape `root` (after resolving symlinks) are refused.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::warn;
use wry::http::{header, HeaderValue, Response, StatusCode};

pub const SCHEME: &str = "dever";

/// URL the main webview starts at when no dev server is configured.
pub const ENTRY_URL: &str = "dever://localhost/";

pub struct ContentProvider {
    root: PathBuf,
}

impl ContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the asset at `path` (relative, `/`-separated).
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        let base = std::fs::canonicalize(&self.root).ok()?;
        let file = std::fs::canonicalize(self.root.join(clean)).ok()?;
        if !file.starts_with(&base) || !file.is_file() {
            return None;
        }

        let data = std::fs::read(&file).ok()?;
        Some((mime_for(&file), data))
    }

    /// Build the protocol response for a request URI.
    pub fn respond(&self, uri: &str) -> Response<Cow<'static, [u8]>> {
        let path = request_path(uri);
        match self.resolve(path) {
            Some((mime, data)) => {
                let mut response = Response::new(Cow::Owned(data));
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
                response
            }
            None => {
                warn!(path, "custom protocol: asset not found");
                let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
                *response.status_mut() = StatusCode::NOT_FOUND;
                response
            }
        }
    }
}

/// Path part of a `dever://` URI, without query or fragment.
///
/// WebView2 rewrites custom schemes to `http://dever.localhost/`, so that
/// form is accepted too.
pub fn request_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("dever://localhost")
        .or_else(|| uri.strip_prefix("http://dever.localhost"))
        .or_else(|| uri.strip_prefix("dever://"))
        .unwrap_or(uri);
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
