//! DOM element bindings.
//!
//! All selector hooks the page exposes are resolved once at startup into an
//! `Elements` struct. Every lookup is optional: a missing element disables the
//! behaviour that depends on it instead of faulting. Only the document root is
//! required. To add new UI elements, add a field here and bind it in
//! `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements, downcast to a concrete element type.
/// Nodes of another type are skipped.
pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<T>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM hooks used by the storefront UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    /// `document.documentElement` — theme attributes land here.
    pub root: Element,

    // Theme
    pub theme_buttons: Vec<Element>,
    pub dark_mode_toggle: Option<HtmlElement>,

    // Search
    pub search_toggle: Option<Element>,
    pub search_close: Option<Element>,
    pub search_bar: Option<Element>,

    // Products
    pub add_to_cart_buttons: Vec<Element>,
    pub wishlist_buttons: Vec<Element>,
    pub quick_view_buttons: Vec<Element>,
    pub cart_badge: Option<Element>,

    // Newsletter
    pub subscription_form: Option<HtmlFormElement>,

    // Navigation
    pub navbar: Option<HtmlElement>,
    pub anchor_links: Vec<Element>,

    // Animation
    pub reveal_targets: Vec<Element>,
    pub ripple_buttons: Vec<Element>,

    // Images
    pub lazy_images: Vec<HtmlImageElement>,
    pub all_images: Vec<HtmlImageElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the page is ready.
    pub fn bind() -> Result<Elements, JsValue> {
        let root = doc()
            .document_element()
            .ok_or_else(|| JsValue::from_str("missing document element"))?;

        Ok(Elements {
            root,

            theme_buttons: query_all(".theme-btn"),
            dark_mode_toggle: by_id_typed::<HtmlElement>("darkModeToggle"),

            search_toggle: by_id("searchToggle"),
            search_close: by_id("searchClose"),
            search_bar: by_id("searchBar"),

            add_to_cart_buttons: query_all(".add-to-cart-btn"),
            wishlist_buttons: query_all(".wishlist-btn"),
            quick_view_buttons: query_all(".quick-view-btn"),
            cart_badge: query(r#".user-action-btn[title="Cart"] .action-badge"#),

            subscription_form: by_id_typed::<HtmlFormElement>("subscriptionForm"),

            navbar: query(".mega-navbar").and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            anchor_links: query_all(r##"a[href^="#"]"##),

            reveal_targets: query_all(".product-card, .feature-card, .category-card"),
            ripple_buttons: query_all(".btn"),

            lazy_images: query_all_typed::<HtmlImageElement>("img[data-src]"),
            all_images: query_all_typed::<HtmlImageElement>("img"),
        })
    }
}
