//! Web platform backend
//!
//! Build produces a static bundle under `out/web`: the `app/` tree, the
//! framework runtime and shared libraries when present, a generated
//! `index.html` that boots `app/main.js` as an ES module, and a copy of the
//! manifest for the runtime to read. Run serves that bundle over HTTP.

use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use mosaic_core::{BuildContext, RunContext};

use crate::traits::Platform;

/// Address the development server binds to
const SERVE_ADDR: &str = "127.0.0.1:8080";

/// Web backend: static bundling plus a local development server
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Platform for WebPlatform {
    fn name(&self) -> &'static str {
        "web"
    }

    async fn build(&self, ctx: &BuildContext) -> Result<Utf8PathBuf> {
        if !ctx.app.is_dir() {
            bail!("Application sources not found at '{}'", ctx.app);
        }

        // Replace any previous bundle wholesale so re-builds stay clean.
        if ctx.out.exists() {
            fs::remove_dir_all(&ctx.out)
                .with_context(|| format!("Failed to clear output directory '{}'", ctx.out))?;
        }
        fs::create_dir_all(&ctx.out)
            .with_context(|| format!("Failed to create output directory '{}'", ctx.out))?;

        copy_tree(&ctx.app, &ctx.out.join("app"))?;
        for (src, dest) in [(&ctx.framework, "mosaic"), (&ctx.lib, "lib")] {
            if src.is_dir() {
                copy_tree(src, &ctx.out.join(dest))?;
            } else {
                debug!("skipping missing source root '{src}'");
            }
        }

        fs::write(ctx.out.join("index.html"), index_html(&ctx.manifest.name))
            .context("Failed to write index.html")?;

        let manifest_json =
            serde_json::to_vec_pretty(&ctx.manifest).context("Failed to serialize manifest")?;
        fs::write(ctx.out.join("mosaic.json"), manifest_json)
            .context("Failed to write bundled manifest")?;

        Ok(ctx.out.clone())
    }

    async fn run(&self, ctx: &RunContext) -> Result<()> {
        let root = Arc::new(ctx.out.clone());
        let app = Router::new()
            .fallback(get(serve_file))
            .with_state(root);

        let listener = tokio::net::TcpListener::bind(SERVE_ADDR)
            .await
            .with_context(|| format!("Failed to bind {SERVE_ADDR}"))?;

        info!(
            "Serving '{}' at http://{SERVE_ADDR}/ (Ctrl-C to stop)",
            ctx.manifest.name
        );
        axum::serve(listener, app)
            .await
            .context("Development server failed")?;
        Ok(())
    }
}

/// Recursively copy a directory tree, preserving relative structure
fn copy_tree(src: &Utf8Path, dest: &Utf8Path) -> Result<()> {
    for entry in walkdir::WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk '{src}'"))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.as_std_path().join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create '{}'", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy '{}' into the bundle", entry.path().display())
            })?;
        }
    }
    Ok(())
}

/// Loader page booting the application entry module
fn index_html(name: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \t<meta charset=\"utf-8\">\n\
         \t<title>{name}</title>\n\
         </head>\n\
         <body>\n\
         \t<script type=\"module\" src=\"app/main.js\"></script>\n\
         </body>\n\
         </html>\n"
    )
}

/// Static file handler rooted at the platform output directory
async fn serve_file(State(root): State<Arc<Utf8PathBuf>>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    // No traversal out of the bundle.
    if path.split('/').any(|c| c == "..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let file = root.join(path);
    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let mime = content_type(&file);
            ([(header::CONTENT_TYPE, mime)], bytes).into_response()
        }
        Err(e) => {
            debug!("not serving '{file}': {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn content_type(path: &Utf8Path) -> &'static str {
    match path.extension() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
