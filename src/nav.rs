//! In-page navigation.
//!
//! Anchor links smooth-scroll to their target instead of jumping; a missing
//! target is a silent no-op. Past a fixed scroll offset the navbar gets a
//! translucent blurred background. The scroll handler runs on every scroll
//! event, no debounce.

use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Elements};
use crate::events;

const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Whether the navbar should show its scrolled (elevated) treatment.
pub fn navbar_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub struct NavigationManager {
    els: Elements,
}

impl NavigationManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        let mgr = Rc::new(NavigationManager { els: els.clone() });
        mgr.bind_events();
        mgr.handle_scroll();
        mgr
    }

    fn bind_events(self: &Rc<Self>) {
        for anchor in &self.els.anchor_links {
            let Some(href) = anchor.get_attribute("href") else {
                continue;
            };
            events::on_click(anchor, move |e| {
                e.prevent_default();
                if let Some(target) = dom::query(&href) {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            });
        }

        let mgr = self.clone();
        events::on_event(&dom::window(), "scroll", move |_| mgr.handle_scroll());
    }

    fn handle_scroll(&self) {
        let Some(navbar) = &self.els.navbar else {
            return;
        };
        let scroll_y = dom::window().scroll_y().unwrap_or(0.0);
        let style = navbar.style();
        if navbar_elevated(scroll_y) {
            let _ = style.set_property("background", "rgba(255, 255, 255, 0.95)");
            let _ = style.set_property("backdrop-filter", "blur(10px)");
        } else {
            let _ = style.remove_property("background");
            let _ = style.remove_property("backdrop-filter");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_elevates_past_threshold_only() {
        assert!(!navbar_elevated(0.0));
        assert!(!navbar_elevated(100.0));
        assert!(navbar_elevated(100.5));
        assert!(navbar_elevated(2000.0));
    }
}
