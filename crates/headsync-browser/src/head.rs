//! `HeadDocument` over the live document head.
//!
//! Selector resolution goes through the native engine, scoped to the head
//! element, so anything the browser's `querySelector` accepts works here.
//! DOM exceptions (malformed selector, disallowed tag name) pass through
//! as `HeadError::Platform` carrying the native message.

use headsync_core::{HeadDocument, HeadError};
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};

/// Head backend bound to the current page.
pub struct BrowserHead {
    document: web_sys::Document,
    head: web_sys::HtmlHeadElement,
}

impl BrowserHead {
    /// Bind to the current window's document head.
    ///
    /// Returns None outside a browser context or before the head exists.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let head = document.head()?;
        Some(Self { document, head })
    }

    /// Bind to an explicit document and head element.
    pub fn new(document: web_sys::Document, head: web_sys::HtmlHeadElement) -> Self {
        Self { document, head }
    }

    /// The head element this backend mutates.
    pub fn head_element(&self) -> &web_sys::HtmlHeadElement {
        &self.head
    }
}

/// Pull the message out of a thrown JS value.
fn platform_error(value: JsValue) -> HeadError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"));
    HeadError::Platform(message)
}

impl HeadDocument for BrowserHead {
    type Element = web_sys::Element;

    fn query(&mut self, selector: &str) -> Result<Option<web_sys::Element>, HeadError> {
        // Scoped to the head: the managed tag never lives in the body.
        self.head.query_selector(selector).map_err(platform_error)
    }

    fn create_and_append(&mut self, tag_name: &str) -> Result<web_sys::Element, HeadError> {
        let element = self
            .document
            .create_element(tag_name)
            .map_err(platform_error)?;
        self.head
            .append_child(element.as_ref())
            .map_err(platform_error)?;
        trace!(tag_name, "appended element to head");
        Ok(element)
    }

    fn set_attribute(
        &mut self,
        element: &mut web_sys::Element,
        name: &str,
        value: &str,
    ) -> Result<(), HeadError> {
        element.set_attribute(name, value).map_err(platform_error)
    }

    fn set_text(&mut self, element: &mut web_sys::Element, text: &str) -> Result<(), HeadError> {
        element.set_text_content(Some(text));
        Ok(())
    }
}
