//! Document-level listeners.
//!
//! Widgets that need to observe events outside their own subtree (a click
//! anywhere else on the page closing a dropdown) register here instead of
//! hooking a global. Every registration hands back a [`Subscription`] that
//! must be passed to [`Document::unsubscribe`] when the widget goes away.

use std::fmt;
use std::sync::Arc;

/// Receives pointer-release events for the whole document.
///
/// Listeners run in the capturing phase, before any in-widget click handler,
/// so they must not assume a click inside their own subtree has already
/// been processed.
pub trait PointerListener: Send + Sync {
    /// `target_id` is the id of the element the pointer was released over.
    fn on_pointer_release(&self, target_id: &str);
}

/// Handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct Document {
    next_id: u64,
    pointer_release: Vec<(Subscription, Arc<dyn PointerListener>)>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("pointer_release_listeners", &self.pointer_release.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capturing pointer-release listener.
    pub fn subscribe_pointer_release(&mut self, listener: Arc<dyn PointerListener>) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.pointer_release.push((subscription, listener));
        log::debug!("Document::subscribe_pointer_release {:?}", subscription);
        subscription
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.pointer_release.len();
        self.pointer_release.retain(|(s, _)| *s != subscription);
        let removed = self.pointer_release.len() != before;
        log::debug!("Document::unsubscribe {:?} removed={}", subscription, removed);
        removed
    }

    /// Dispatch a pointer release over `target_id` to every listener.
    pub fn pointer_release(&self, target_id: &str) {
        // Listeners may re-enter the document through their own handles;
        // iterate over a snapshot.
        let listeners: Vec<Arc<dyn PointerListener>> = self
            .pointer_release
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener.on_pointer_release(target_id);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.pointer_release.len()
    }
}
