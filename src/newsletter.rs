//! Newsletter subscription form.
//!
//! There is no subscription backend; submission is simulated with a fixed
//! 1500 ms delay. While "submitting" the button is disabled and shows a
//! spinner, then the form resets and a blocking confirmation appears.

use std::cell::Cell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlInputElement};

use crate::dom::{self, Elements};
use crate::events;

const SIMULATED_DELAY_MS: u32 = 1500;
const LABEL_BUSY: &str = r#"<i class="fas fa-spinner fa-spin"></i> Subscribing..."#;
const LABEL_IDLE: &str = r#"<i class="fas fa-paper-plane me-2"></i>Subscribe Now"#;

pub struct NewsletterManager {
    els: Elements,
    submitting: Cell<bool>,
}

impl NewsletterManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        let mgr = Rc::new(NewsletterManager {
            els: els.clone(),
            submitting: Cell::new(false),
        });
        mgr.bind_events();
        mgr
    }

    fn bind_events(self: &Rc<Self>) {
        let Some(form) = &self.els.subscription_form else {
            return;
        };
        let mgr = self.clone();
        events::on_event(form, "submit", move |e| {
            e.prevent_default();
            mgr.handle_submit();
        });
    }

    fn handle_submit(self: &Rc<Self>) {
        if self.submitting.get() {
            return;
        }
        let Some(form) = self.els.subscription_form.clone() else {
            return;
        };
        let Ok(Some(btn)) = form.query_selector(r#"button[type="submit"]"#) else {
            return;
        };
        let Ok(btn) = btn.dyn_into::<HtmlButtonElement>() else {
            return;
        };

        // Only browser-native validation applies to the email input.
        let email = form
            .query_selector(r#"input[name="email"]"#)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .map(|i| i.value())
            .unwrap_or_default();
        log!("newsletter subscription requested for", &email);

        self.submitting.set(true);
        btn.set_inner_html(LABEL_BUSY);
        btn.set_disabled(true);

        let mgr = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SIMULATED_DELAY_MS).await;

            btn.set_inner_html(LABEL_IDLE);
            btn.set_disabled(false);
            mgr.submitting.set(false);

            let _ = dom::window().alert_with_message(
                "Thank you for subscribing! You will receive our newsletter soon.",
            );
            form.reset();
        });
    }
}
