//! Scroll-reveal and ripple effects.
//!
//! Cards start hidden and slide in the first time they become ≥10% visible;
//! a revealed card is unobserved and never re-hidden. Hovering a `.btn`
//! synthesizes a one-shot ripple element at the pointer position. The CSS
//! driving both effects is injected at mount so the page's stylesheet does
//! not have to carry it.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

use crate::dom::{self, Elements};
use crate::events;
use crate::schedule;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const RIPPLE_LIFETIME_MS: u32 = 600;

const RUNTIME_STYLE: &str = "
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s linear;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.product-card, .feature-card, .category-card {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.animate-in {
    opacity: 1;
    transform: translateY(0);
}
";

pub struct AnimationManager;

impl AnimationManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        inject_runtime_style();
        observe_reveals(els);
        bind_ripples(els);
        Rc::new(AnimationManager)
    }
}

fn inject_runtime_style() {
    let style = dom::create_element("style");
    style.set_text_content(Some(RUNTIME_STYLE));
    if let Some(head) = dom::document().head() {
        let _ = head.append_child(&style);
    }
}

fn observe_reveals(els: &Elements) {
    if els.reveal_targets.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "animate-in");
                    // Reveal is one-shot; stop watching the element.
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    if let Ok(observer) =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
    {
        for el in &els.reveal_targets {
            observer.observe(el);
        }
    }
    cb.forget();
}

fn bind_ripples(els: &Elements) {
    for btn in &els.ripple_buttons {
        events::on_mouse(btn, "mouseenter", spawn_ripple);
    }
}

/// Ripple diameter and top-left offset within the button.
fn ripple_geometry(
    client_x: i32,
    client_y: i32,
    offset_left: i32,
    offset_top: i32,
    width: i32,
    height: i32,
) -> (i32, i32, i32) {
    let diameter = width.max(height);
    let radius = diameter / 2;
    (
        diameter,
        client_x - offset_left - radius,
        client_y - offset_top - radius,
    )
}

fn spawn_ripple(e: MouseEvent) {
    let Some(target) = e.current_target() else {
        return;
    };
    let Ok(btn) = target.dyn_into::<HtmlElement>() else {
        return;
    };

    let (diameter, left, top) = ripple_geometry(
        e.client_x(),
        e.client_y(),
        btn.offset_left(),
        btn.offset_top(),
        btn.client_width(),
        btn.client_height(),
    );

    let circle: HtmlElement = dom::create_element("span").unchecked_into();
    circle.set_class_name("ripple");
    let style = circle.style();
    let _ = style.set_property("width", &format!("{diameter}px"));
    let _ = style.set_property("height", &format!("{diameter}px"));
    let _ = style.set_property("left", &format!("{left}px"));
    let _ = style.set_property("top", &format!("{top}px"));

    // One ripple per button at a time.
    if let Ok(Some(prev)) = btn.query_selector(".ripple") {
        prev.remove();
    }
    let _ = btn.append_child(&circle);

    // The animation has finished by now; drop the node instead of leaving it
    // attached until the next hover.
    let circle: Element = circle.into();
    schedule::once(RIPPLE_LIFETIME_MS, move || {
        circle.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_sized_to_largest_button_dimension() {
        let (diameter, _, _) = ripple_geometry(0, 0, 0, 0, 120, 40);
        assert_eq!(diameter, 120);
        let (diameter, _, _) = ripple_geometry(0, 0, 0, 0, 30, 48);
        assert_eq!(diameter, 48);
    }

    #[test]
    fn ripple_centers_on_pointer_within_button() {
        // Pointer at (150, 90) over a 100x40 button positioned at (100, 80).
        let (diameter, left, top) = ripple_geometry(150, 90, 100, 80, 100, 40);
        assert_eq!(diameter, 100);
        assert_eq!(left, 0);
        assert_eq!(top, -40);
    }
}
