//! PNG export: offscreen canvas → blob → client-side download.
//!
//! Committed history is painted synchronously, so the export reflects the
//! drawing at the moment of the call. Serialization finishes later in the
//! `toBlob` callback; the download happens only there, and an empty result
//! skips it.

use crate::render2d::{CanvasSurface, context_2d};
use sketch_editor::Editor;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement, HtmlCanvasElement, Url};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not create {0} element")]
    CreateElement(&'static str),
    #[error("offscreen canvas has no 2d context")]
    NoContext,
    #[error("canvas refused to serialize: {0}")]
    Serialize(String),
    #[error("PNG serialization produced no data")]
    EmptyBlob,
    #[error("could not create object URL for blob")]
    ObjectUrl,
}

/// Render committed history at export resolution and download it as PNG.
pub fn export_png(editor: &Editor) -> Result<(), ExportError> {
    let document = document()?;
    let canvas = create_element::<HtmlCanvasElement>(&document, "canvas")?;

    let spec = editor.config().export_spec();
    canvas.set_width(spec.output_width);
    canvas.set_height(spec.output_height);

    let ctx = context_2d(&canvas).ok_or(ExportError::NoContext)?;
    editor.render_export(&mut CanvasSurface::new(&ctx));

    let filename = editor.config().export_filename.clone();
    let on_blob = Closure::once_into_js(move |value: JsValue| {
        let result = match value.dyn_into::<Blob>() {
            Ok(blob) if blob.size() > 0.0 => download_blob(&blob, &filename),
            _ => Err(ExportError::EmptyBlob),
        };
        if let Err(err) = result {
            report(&err);
        }
    });

    canvas
        .to_blob(on_blob.unchecked_ref())
        .map_err(|err| ExportError::Serialize(format!("{err:?}")))
}

/// Log an export failure to both the `log` facade and the browser console.
pub fn report(err: &ExportError) {
    log::warn!("export skipped: {err}");
    web_sys::console::warn_1(&format!("sketch export skipped: {err}").into());
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let document = document()?;
    let url = Url::create_object_url_with_blob(blob).map_err(|_| ExportError::ObjectUrl)?;

    let anchor = create_element::<HtmlAnchorElement>(&document, "a")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).ok();
    log::debug!("export: downloaded {filename}");
    Ok(())
}

fn document() -> Result<Document, ExportError> {
    web_sys::window()
        .ok_or(ExportError::NoWindow)?
        .document()
        .ok_or(ExportError::NoDocument)
}

fn create_element<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, ExportError> {
    document
        .create_element(tag)
        .ok()
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(ExportError::CreateElement(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(
            ExportError::CreateElement("canvas").to_string(),
            "could not create canvas element"
        );
        assert_eq!(
            ExportError::EmptyBlob.to_string(),
            "PNG serialization produced no data"
        );
    }
}
