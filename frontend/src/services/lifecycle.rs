//! Request bookkeeping tied to the settings page's lifetime.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{AbortController, AbortSignal};

/// Whether the page that started a request is still around to hear back.
pub trait Liveness {
    fn is_live(&self) -> bool;
}

/// A request without a signal cannot be cancelled, so it is always live.
impl Liveness for Option<AbortSignal> {
    fn is_live(&self) -> bool {
        !self.as_ref().is_some_and(AbortSignal::aborted)
    }
}

pub fn lifecycle_signal(controller: &Option<AbortController>) -> Option<AbortSignal> {
    controller.as_ref().map(AbortController::signal)
}

/// Hand `value` to `deliver` only while `liveness` holds. Returns whether it
/// was delivered.
pub fn deliver_if_live<L, T>(liveness: &L, value: T, deliver: impl FnOnce(T)) -> bool
where
    L: Liveness + ?Sized,
{
    if !liveness.is_live() {
        tracing::debug!("Settings page gone, dropping response");
        return false;
    }

    deliver(value);
    true
}

/// Admits one password change at a time.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Rc<Cell<bool>>,
}

impl SubmitGuard {
    /// `None` while another submission still holds its ticket.
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        if self.in_flight.replace(true) {
            return None;
        }

        Some(SubmitTicket {
            in_flight: self.in_flight.clone(),
        })
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

/// Held for the duration of one submission; releases the guard on drop.
#[derive(Debug)]
pub struct SubmitTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}
