//! Search overlay open/close.
//!
//! Binary state: closed ↔ open. Opening focuses the input; a document-level
//! click outside both the panel and its toggle closes it. `close()` is
//! idempotent.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

use crate::dom::{self, Elements};
use crate::events;

pub struct SearchManager {
    els: Elements,
    open: Cell<bool>,
}

impl SearchManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        let mgr = Rc::new(SearchManager {
            els: els.clone(),
            open: Cell::new(false),
        });
        mgr.bind_events();
        mgr
    }

    fn bind_events(self: &Rc<Self>) {
        // Without the panel there is nothing to drive.
        let (Some(bar), Some(toggle)) = (&self.els.search_bar, &self.els.search_toggle) else {
            return;
        };

        {
            let mgr = self.clone();
            events::on_click(toggle, move |_| mgr.toggle());
        }

        if let Some(close) = &self.els.search_close {
            let mgr = self.clone();
            events::on_click(close, move |_| mgr.close());
        }

        // Click anywhere outside the panel and its toggle forces closed.
        let mgr = self.clone();
        let bar = bar.clone();
        let toggle = toggle.clone();
        events::on_click(&dom::document(), move |e| {
            let Some(target) = e.target() else {
                return;
            };
            let Ok(node) = target.dyn_into::<Node>() else {
                return;
            };
            if !bar.contains(Some(&node)) && !toggle.contains(Some(&node)) {
                mgr.close();
            }
        });
    }

    pub fn toggle(&self) {
        let Some(bar) = &self.els.search_bar else {
            return;
        };
        if self.open.get() {
            self.close();
            return;
        }

        self.open.set(true);
        dom::add_class(bar, "active");
        if let Ok(Some(input)) = bar.query_selector("input") {
            if let Ok(input) = input.dyn_into::<HtmlElement>() {
                let _ = input.focus();
            }
        }
    }

    pub fn close(&self) {
        if let Some(bar) = &self.els.search_bar {
            dom::remove_class(bar, "active");
        }
        self.open.set(false);
    }
}
