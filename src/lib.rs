//! Storefront WASM Frontend
//!
//! Pure Rust + WASM presentation glue for the storefront page: themes, the
//! search overlay, cart/wishlist, the newsletter form, smooth-scroll
//! navigation, and small CSS-driven animations. Modularised for
//! extensibility: each concern lives in its own module.

pub mod animate;
pub mod dom;
pub mod events;
pub mod images;
pub mod nav;
pub mod newsletter;
pub mod notify;
pub mod products;
pub mod schedule;
pub mod search;
pub mod storage;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Composition root: resolve the DOM once, then let each controller bind its
/// own listeners. The controllers are independent; none talks to another.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let _theme = theme::ThemeManager::mount(&els);
    let _search = search::SearchManager::mount(&els);
    let _products = products::ProductManager::mount(&els);
    let _newsletter = newsletter::NewsletterManager::mount(&els);
    let _navigation = nav::NavigationManager::mount(&els);
    let _animation = animate::AnimationManager::mount(&els);

    images::observe_lazy_images(&els);
    images::bind_image_fallbacks(&els);
    images::register_error_logger();

    Ok(())
}
