//! Cart and wishlist management.
//!
//! Both lists load from localStorage at mount and flush back after every
//! mutation. Cart adds are unconditional (duplicates allowed, no quantity
//! merging); wishlist membership toggles by item id. A product card without a
//! `data-product-id` gets a generated id written back onto it, so later
//! wishlist toggles on the same card recognize prior membership.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::dom::{self, Elements};
use crate::events;
use crate::notify::{self, NotificationKind};
use crate::schedule;
use crate::storage;

const PRESS_RESET_MS: u32 = 150;
const PULSE_RESET_MS: u32 = 300;

// ── Item model ──

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Display text as shown on the card, not a numeric amount.
    pub price: String,
    pub image: String,
}

pub fn contains_item(list: &[CartItem], id: &str) -> bool {
    list.iter().any(|item| item.id == id)
}

/// Remove an item by id; returns whether anything was removed.
pub fn remove_item(list: &mut Vec<CartItem>, id: &str) -> bool {
    let before = list.len();
    list.retain(|item| item.id != id);
    list.len() != before
}

// ── Id generation ──

/// Base-36 timestamp plus a random base-36 suffix. Not globally unique, but
/// collisions are negligible for per-session UI identifiers.
pub fn generate_id() -> String {
    let millis = js_sys::Date::now() as u64;
    format!("{}{}", to_base36(millis), random_suffix())
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

fn random_suffix() -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut frac = js_sys::Math::random();
    let mut out = String::new();
    for _ in 0..11 {
        frac *= 36.0;
        let digit = frac as usize % 36;
        out.push(DIGITS[digit] as char);
        frac -= frac.floor();
    }
    out
}

// ── Controller ──

pub struct ProductManager {
    els: Elements,
    cart: RefCell<Vec<CartItem>>,
    wishlist: RefCell<Vec<CartItem>>,
}

impl ProductManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        let mgr = Rc::new(ProductManager {
            els: els.clone(),
            cart: RefCell::new(storage::get_json(storage::CART)),
            wishlist: RefCell::new(storage::get_json(storage::WISHLIST)),
        });
        mgr.update_cart_badge();
        mgr.bind_events();
        mgr
    }

    fn bind_events(self: &Rc<Self>) {
        for btn in &self.els.add_to_cart_buttons {
            let mgr = self.clone();
            events::on_click(btn, move |e| {
                if let Some(card) = closest_card(&e) {
                    mgr.add_to_cart(&card);
                }
            });
        }

        for btn in &self.els.wishlist_buttons {
            let mgr = self.clone();
            events::on_click(btn, move |e| {
                if let Some(card) = closest_card(&e) {
                    mgr.toggle_wishlist(&card);
                }
            });
        }

        for btn in &self.els.quick_view_buttons {
            let mgr = self.clone();
            events::on_click(btn, move |e| {
                if closest_card(&e).is_some() {
                    mgr.quick_view();
                }
            });
        }
    }

    pub fn add_to_cart(&self, card: &Element) {
        let item = extract_item(card, generate_id());
        self.cart.borrow_mut().push(item);
        self.persist_cart();
        notify::show("Product added to cart!", NotificationKind::Success);
        self.update_cart_badge();
        animate_press(card, ".add-to-cart-btn", "scale(0.95)", PRESS_RESET_MS);
    }

    pub fn toggle_wishlist(&self, card: &Element) {
        let id = match card.get_attribute("data-product-id") {
            Some(id) => id,
            None => {
                // Stamp the generated id onto the card so the next toggle
                // recognizes membership.
                let id = generate_id();
                let _ = card.set_attribute("data-product-id", &id);
                id
            }
        };

        let removed = remove_item(&mut self.wishlist.borrow_mut(), &id);
        if removed {
            set_wishlist_icon(card, false);
            notify::show("Removed from wishlist", NotificationKind::Info);
        } else {
            let item = extract_item(card, id);
            self.wishlist.borrow_mut().push(item);
            set_wishlist_icon(card, true);
            notify::show("Added to wishlist!", NotificationKind::Success);
        }

        self.persist_wishlist();
        animate_press(card, ".wishlist-btn", "scale(1.2)", PULSE_RESET_MS);
    }

    /// No detail view exists yet; announce that instead.
    pub fn quick_view(&self) {
        notify::show("Quick view feature would open here", NotificationKind::Info);
    }

    pub fn cart_len(&self) -> usize {
        self.cart.borrow().len()
    }

    fn update_cart_badge(&self) {
        if let Some(badge) = &self.els.cart_badge {
            dom::set_text(badge, &self.cart.borrow().len().to_string());
        }
    }

    fn persist_cart(&self) {
        storage::set_json(storage::CART, &*self.cart.borrow());
    }

    fn persist_wishlist(&self) {
        storage::set_json(storage::WISHLIST, &*self.wishlist.borrow());
    }
}

// ── Card helpers ──

fn closest_card(e: &web_sys::MouseEvent) -> Option<Element> {
    let target = e.current_target()?;
    let el = target.dyn_into::<Element>().ok()?;
    el.closest(".product-card").ok()?
}

fn extract_item(card: &Element, id: String) -> CartItem {
    let name = card
        .query_selector(".product-title")
        .ok()
        .flatten()
        .and_then(|e| e.text_content())
        .unwrap_or_default();
    let price = card
        .query_selector(".current-price")
        .ok()
        .flatten()
        .and_then(|e| e.text_content())
        .unwrap_or_default();
    let image = card
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())
        .unwrap_or_default();

    CartItem {
        id,
        name,
        price,
        image,
    }
}

fn set_wishlist_icon(card: &Element, filled: bool) {
    if let Ok(Some(btn)) = card.query_selector(".wishlist-btn") {
        let icon = if filled {
            r#"<i class="fas fa-heart"></i>"#
        } else {
            r#"<i class="far fa-heart"></i>"#
        };
        btn.set_inner_html(icon);
    }
}

/// Briefly scale a button within the card, resetting after `reset_ms`.
fn animate_press(card: &Element, selector: &str, transform: &str, reset_ms: u32) {
    let Ok(Some(btn)) = card.query_selector(selector) else {
        return;
    };
    let Ok(btn) = btn.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = btn.style().set_property("transform", transform);
    schedule::once(reset_ms, move || {
        let _ = btn.style().remove_property("transform");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            price: "$19.99".to_string(),
            image: format!("https://cdn.example/{id}.jpg"),
        }
    }

    #[test]
    fn cart_allows_duplicate_names() {
        let mut cart = Vec::new();
        cart.push(item("a"));
        cart.push(item("b"));
        cart.push(item("a"));
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn wishlist_double_toggle_restores_membership() {
        let mut wishlist = vec![item("keep")];

        // First toggle: not present, add.
        assert!(!contains_item(&wishlist, "p-1"));
        wishlist.push(item("p-1"));
        assert!(contains_item(&wishlist, "p-1"));

        // Second toggle: present, remove.
        assert!(remove_item(&mut wishlist, "p-1"));
        assert!(!contains_item(&wishlist, "p-1"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn remove_item_reports_misses() {
        let mut list = vec![item("a")];
        assert!(!remove_item(&mut list, "missing"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn items_round_trip_through_json_without_loss() {
        let cart = vec![item("a"), item("b")];
        let json = serde_json::to_string(&cart).unwrap();
        let back: Vec<CartItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back[1].price, "$19.99");
        assert_eq!(back[1].image, "https://cdn.example/b.jpg");
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }
}
