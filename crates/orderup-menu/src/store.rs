//! Observable container for the popup's option state.
//!
//! The rendering layer does not mutate shared fields; it subscribes to
//! state replacement. The store holds the current `OptionCatalog`, applies
//! the pure transitions from [`crate::options`], and notifies listeners
//! with each new value. On a failed operation the held value is untouched
//! and no notification fires.
//!
//! The UI model is single-threaded and operations run one at a time; the
//! `RwLock` is an interior-mutability primitive, not a contention point.
//! Listeners are invoked after the lock is released, so a listener may read
//! `current()` freely.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::MenuError;
use crate::options::OptionCatalog;

type Listener = Arc<dyn Fn(&OptionCatalog) + Send + Sync>;

/// Handle returned by [`OptionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the current option catalog and notifies subscribers on replacement.
#[derive(Default)]
pub struct OptionStore {
    catalog: RwLock<OptionCatalog>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl OptionStore {
    /// Create a store holding the default (empty) catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given catalog.
    pub fn with_catalog(catalog: OptionCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            ..Self::default()
        }
    }

    /// Snapshot of the current catalog. Cheap: sequences are shared.
    pub fn current(&self) -> OptionCatalog {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a listener invoked with every replacement value.
    pub fn subscribe(
        &self,
        listener: impl Fn(&OptionCatalog) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Replace the catalog wholesale, e.g. when the asynchronous load
    /// resolves. Notifies listeners.
    pub fn load(&self, catalog: OptionCatalog) {
        {
            let mut guard = self
                .catalog
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = catalog.clone();
        }
        self.notify(&catalog);
    }

    /// Flip the named base option. See [`OptionCatalog::toggle_base_option`].
    pub fn toggle_base_option(&self, name: &str) -> Result<(), MenuError> {
        self.apply(|catalog| catalog.toggle_base_option(name))
    }

    /// Flip the named single-select topping option.
    pub fn toggle_topping_select_option(&self, name: &str) -> Result<(), MenuError> {
        self.apply(|catalog| catalog.toggle_topping_select_option(name))
    }

    /// Increment the named topping amount.
    pub fn increase_option_amount(&self, name: &str) -> Result<(), MenuError> {
        self.apply(|catalog| catalog.increase_option_amount(name))
    }

    /// Decrement the named topping amount, floor-clamped at zero.
    pub fn decrease_option_amount(&self, name: &str) -> Result<(), MenuError> {
        self.apply(|catalog| catalog.decrease_option_amount(name))
    }

    fn apply(
        &self,
        op: impl FnOnce(&OptionCatalog) -> Result<OptionCatalog, MenuError>,
    ) -> Result<(), MenuError> {
        let next = {
            let mut guard = self
                .catalog
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let next = op(&guard)?;
            *guard = next.clone();
            next
        };
        self.notify(&next);
        Ok(())
    }

    fn notify(&self, catalog: &OptionCatalog) {
        let snapshot: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(catalog);
        }
    }
}
