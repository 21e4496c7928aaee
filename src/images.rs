//! Lazy image loading and failure fallbacks.
//!
//! Deferred images (`img[data-src]`) get their real source the first time
//! they enter the viewport, then stop being observed. Any image that fails to
//! load is swapped for a fixed placeholder. Uncaught page errors are logged
//! to the console.

use gloo_console::error;
use wasm_bindgen::prelude::*;
use web_sys::{
    ErrorEvent, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
};

use crate::dom::{self, Elements};
use crate::events;

const FALLBACK_SRC: &str =
    "https://via.placeholder.com/400x300/f8f9fa/6c757d?text=Image+Not+Found";
const FALLBACK_ALT: &str = "Image not available";

/// Swap `data-src` into `src` on first intersection, one-shot per image.
pub fn observe_lazy_images(els: &Elements) {
    if els.lazy_images.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    dom::remove_class(&target, "lazy");
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    if let Ok(observer) = IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        for img in &els.lazy_images {
            observer.observe(img);
        }
    }
    cb.forget();
}

/// Replace broken images with the placeholder.
pub fn bind_image_fallbacks(els: &Elements) {
    for img in &els.all_images {
        let img = img.clone();
        let target = img.clone();
        events::on_event(&target, "error", move |_| {
            // The placeholder failing again must not refire forever.
            if img.src() == FALLBACK_SRC {
                return;
            }
            img.set_src(FALLBACK_SRC);
            img.set_alt(FALLBACK_ALT);
        });
    }
}

/// Log uncaught script errors; no recovery is attempted.
pub fn register_error_logger() {
    events::on_event(&dom::window(), "error", |e| {
        let e: ErrorEvent = e.unchecked_into();
        error!("uncaught error:", e.message());
    });
}
