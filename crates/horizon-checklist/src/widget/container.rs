//! The host-provided render target.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use horizon_checklist_core::{ConnectionGuard, Signal};

use super::events::InputEvent;

/// A designated element the host lends to one checklist at a time.
///
/// While a list is mounted it owns everything rendered inside the container.
/// The host feeds user interaction in through [`dispatch`](Self::dispatch).
pub struct Container {
    name: String,
    input: Signal<InputEvent>,
    mounted: AtomicBool,
}

impl Container {
    /// Creates a container, ready to be shared with a checklist.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            input: Signal::new(),
            mounted: AtomicBool::new(false),
        })
    }

    /// The container's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivers a user interaction to whatever is mounted.
    pub fn dispatch(&self, event: InputEvent) {
        self.input.emit(event);
    }

    /// Returns `true` while a checklist is mounted here.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Number of input listeners.
    pub fn listener_count(&self) -> usize {
        self.input.connection_count()
    }

    pub(crate) fn listen<F>(self: &Arc<Self>, slot: F) -> ConnectionGuard
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        let id = self.input.connect(slot);
        let container = Arc::clone(self);
        ConnectionGuard::new(move || {
            container.input.disconnect(id);
        })
    }

    /// Marks the container as taken. Returns `false` if it already was.
    pub(crate) fn claim(&self) -> bool {
        self.mounted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn release(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("name", &self.name)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

static_assertions::assert_impl_all!(Container: Send, Sync);
