//! Toast notifications.
//!
//! Each toast is a transient DOM node appended to `<body>`, slid in from the
//! right after 100 ms, slid out at 3000 ms and detached 300 ms later. The
//! number of live toasts is capped; pushing past the cap evicts the oldest
//! immediately.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;
use crate::schedule;

const SLIDE_IN_DELAY_MS: u32 = 100;
const VISIBLE_MS: u32 = 3000;
const EXIT_TRANSITION_MS: u32 = 300;
const MAX_LIVE_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Unrecognized names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Font Awesome glyph name.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Accent color for the toast's left border.
    pub fn accent_color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#48bb78",
            NotificationKind::Error => "#f56565",
            NotificationKind::Warning => "#ed8936",
            NotificationKind::Info => "#4299e1",
        }
    }
}

/// Show a toast. Fire-and-forget; the removal timers always run even if the
/// node was detached earlier by eviction.
pub fn show(message: &str, kind: NotificationKind) {
    let Some(body) = dom::document().body() else {
        return;
    };

    // Evict the oldest live toast when at capacity.
    let live = dom::query_all(".notification");
    if live.len() >= MAX_LIVE_TOASTS {
        if let Some(oldest) = live.first() {
            oldest.remove();
        }
    }

    let toast: HtmlElement = dom::create_element("div").unchecked_into();
    toast.set_class_name(&format!("notification notification-{}", kind.class_name()));
    toast.set_inner_html(&format!(
        r#"<div class="notification-content"><i class="fas fa-{}"></i><span>{}</span></div>"#,
        kind.icon(),
        message,
    ));
    toast.style().set_css_text(&format!(
        "position: fixed; top: 100px; right: 20px; background: white; \
         padding: 1rem 1.5rem; border-radius: 8px; \
         box-shadow: 0 10px 25px rgba(0,0,0,0.2); \
         border-left: 4px solid {}; z-index: 9999; \
         transform: translateX(400px); transition: transform 0.3s ease; \
         max-width: 300px;",
        kind.accent_color(),
    ));

    let _ = body.append_child(&toast);

    {
        let toast = toast.clone();
        schedule::once(SLIDE_IN_DELAY_MS, move || {
            let _ = toast.style().set_property("transform", "translateX(0)");
        });
    }

    schedule::once(VISIBLE_MS, move || {
        let _ = toast.style().set_property("transform", "translateX(400px)");
        schedule::once(EXIT_TRANSITION_MS, move || {
            toast.remove();
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_check_circle_green() {
        let kind = NotificationKind::Success;
        assert_eq!(kind.icon(), "check-circle");
        assert_eq!(kind.accent_color(), "#48bb78");
    }

    #[test]
    fn error_maps_to_exclamation_circle_red() {
        let kind = NotificationKind::Error;
        assert_eq!(kind.icon(), "exclamation-circle");
        assert_eq!(kind.accent_color(), "#f56565");
    }

    #[test]
    fn warning_maps_to_triangle_orange() {
        let kind = NotificationKind::Warning;
        assert_eq!(kind.icon(), "exclamation-triangle");
        assert_eq!(kind.accent_color(), "#ed8936");
    }

    #[test]
    fn unrecognized_names_fall_back_to_info() {
        assert_eq!(NotificationKind::from_name("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name("bogus"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name(""), NotificationKind::Info);
        let kind = NotificationKind::from_name("bogus");
        assert_eq!(kind.icon(), "info-circle");
        assert_eq!(kind.accent_color(), "#4299e1");
    }

    #[test]
    fn known_names_parse_to_their_kind() {
        assert_eq!(
            NotificationKind::from_name("success"),
            NotificationKind::Success
        );
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(
            NotificationKind::from_name("warning"),
            NotificationKind::Warning
        );
    }
}
