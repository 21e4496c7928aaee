//! One-shot timer scheduling.
//!
//! All UI delays in this crate are one-shot: toast lifecycles, button press
//! resets, ripple cleanup, the simulated newsletter round trip. Routing them
//! through `gloo_timers` keeps the one-shot semantics explicit in the type
//! instead of scattering raw `setTimeout` calls.

use gloo_timers::callback::Timeout;

/// Run `f` once after `ms` milliseconds. The timer is detached and cannot be
/// cancelled; use [`Timeout`] directly where cancellation matters.
pub fn once<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(ms, f).forget();
}
