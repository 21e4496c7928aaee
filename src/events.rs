//! Event listener registration.
//!
//! Thin wrappers over `addEventListener` with the leak-on-purpose closure
//! pattern: each handler lives for the page's lifetime, so the `Closure` is
//! forgotten after registration. Controllers call these from their `mount()`.

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, MouseEvent};

/// Attach a click handler.
pub fn on_click<F>(target: &EventTarget, f: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    on_mouse(target, "click", f);
}

/// Attach a mouse-event handler of the given kind (`click`, `mouseenter`, ...).
pub fn on_mouse<F>(target: &EventTarget, kind: &str, f: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Attach a generic event handler (`submit`, `scroll`, `change`, `error`, ...).
pub fn on_event<F>(target: &EventTarget, kind: &str, f: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
