//! Scoped timers and listeners.
//!
//! Every interval, timeout and event listener the page creates is wrapped in a
//! [`Lease`]. Creating a lease registers it in a per-thread counter and dropping
//! it deregisters it; the gloo handle inside is dropped with the lease, which
//! cancels the timer or removes the listener. Components hold their leases in a
//! [`LeaseSet`] released on owner cleanup, so unmounting can never leave a timer
//! running.

use std::any::Any;
use std::borrow::Cow;
use std::cell::Cell;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use web_sys::{Event, EventTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Interval,
    Timeout,
    Listener,
}

impl ResourceKind {
    fn slot(self) -> usize {
        match self {
            ResourceKind::Interval => 0,
            ResourceKind::Timeout => 1,
            ResourceKind::Listener => 2,
        }
    }
}

thread_local! {
    static ACTIVE: [Cell<usize>; 3] = [Cell::new(0), Cell::new(0), Cell::new(0)];
}

/// Live leases of one kind on this thread.
pub fn active(kind: ResourceKind) -> usize {
    ACTIVE.with(|counts| counts[kind.slot()].get())
}

pub fn active_total() -> usize {
    ACTIVE.with(|counts| counts.iter().map(Cell::get).sum())
}

/// A registered timer or listener handle.
#[must_use = "dropping a lease releases the timer or listener"]
pub struct Lease<T> {
    kind: ResourceKind,
    _handle: T,
}

impl<T> Lease<T> {
    pub fn new(kind: ResourceKind, handle: T) -> Self {
        ACTIVE.with(|counts| {
            let slot = &counts[kind.slot()];
            slot.set(slot.get() + 1);
        });
        Self { kind, _handle: handle }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl<T> Drop for Lease<T> {
    fn drop(&mut self) {
        ACTIVE.with(|counts| {
            let slot = &counts[self.kind.slot()];
            slot.set(slot.get().saturating_sub(1));
        });
    }
}

impl<T> std::fmt::Debug for Lease<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lease").field("kind", &self.kind).finish()
    }
}

/// Repeating timer, cancelled when the lease drops.
pub fn interval(period_ms: u32, tick: impl FnMut() + 'static) -> Lease<Interval> {
    Lease::new(ResourceKind::Interval, Interval::new(period_ms, tick))
}

/// One-shot timer, cancelled if the lease drops before it fires.
pub fn timeout(delay_ms: u32, fire: impl FnOnce() + 'static) -> Lease<Timeout> {
    Lease::new(ResourceKind::Timeout, Timeout::new(delay_ms, fire))
}

/// Passive event listener (the gloo default), removed when the lease drops.
pub fn listen(
    target: &EventTarget,
    event: impl Into<Cow<'static, str>>,
    handler: impl FnMut(&Event) + 'static,
) -> Lease<EventListener> {
    Lease::new(ResourceKind::Listener, EventListener::new(target, event, handler))
}

/// Leases owned by one component.
#[derive(Default)]
pub struct LeaseSet {
    leases: Vec<Box<dyn Any>>,
}

impl LeaseSet {
    /// A set released when the current reactive owner is cleaned up.
    pub fn scoped() -> StoredValue<LeaseSet, LocalStorage> {
        let set = StoredValue::new_local(LeaseSet::default());
        on_cleanup(move || {
            set.try_update_value(|leases| leases.release());
        });
        set
    }

    pub fn hold<T: 'static>(&mut self, lease: Lease<T>) {
        self.leases.push(Box::new(lease));
    }

    pub fn release(&mut self) {
        self.leases.clear();
    }

    pub fn len(&self) -> usize {
        self.leases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
    }
}
