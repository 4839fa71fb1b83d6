//! WASM bindings for browser-based rendering.
//!
//! This module exposes the transform and the text renderers to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::render::{HtmlRenderer, MarkdownRenderer, Renderer};
use crate::{StyleConfig, transform};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render text as Markdown with bold word prefixes.
#[wasm_bindgen]
pub fn bionic_markdown(text: &str, ratio: f64) -> Result<String, JsValue> {
    MarkdownRenderer::new()
        .render_to_string(&transform(text, ratio))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render text as an HTML `<div>` fragment styled with the given font
/// settings.
#[wasm_bindgen]
pub fn bionic_html(
    text: &str,
    ratio: f64,
    font_name: &str,
    font_size: u32,
    line_spacing: u32,
) -> Result<String, JsValue> {
    let config = StyleConfig {
        font_name: font_name.to_string(),
        font_size,
        line_spacing,
        bionic_ratio: ratio,
    };
    HtmlRenderer::new(&config)
        .fragment(true)
        .render_to_string(&transform(text, config.bionic_ratio))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
