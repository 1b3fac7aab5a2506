//! One-time initialization of a shared [`EntityStore`].

use crate::{EntityStore, StoreConfig};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tabletop_error::TabletopResult;
use tracing::{debug, warn};

/// A lazily initialized slot holding one [`EntityStore`].
///
/// Lookups after initialization read the slot without locking. The first
/// initialization takes the lock and checks the slot again, so racing
/// callers run exactly one schema pass between them and all receive the
/// same instance.
///
/// [`EntityStore::shared`] uses a process-wide slot; tests and embedders can
/// hold their own.
///
/// # Example
///
/// ```no_run
/// use tabletop_database::{SharedStore, StoreConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let slot = SharedStore::new();
/// let config = StoreConfig::default();
/// let a = slot.get_or_init(&config)?;
/// let b = slot.get_or_init(&config)?;
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// assert_eq!(slot.initializations(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SharedStore {
    instance: OnceLock<Arc<EntityStore>>,
    init_lock: Mutex<()>,
    initializations: AtomicUsize,
}

impl SharedStore {
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
            init_lock: parking_lot::const_mutex(()),
            initializations: AtomicUsize::new(0),
        }
    }

    /// The store, if initialized.
    pub fn get(&self) -> Option<Arc<EntityStore>> {
        self.instance.get().cloned()
    }

    /// Return the store, initializing it from `config` on first use.
    ///
    /// # Errors
    ///
    /// Returns the error from [`EntityStore::open`]. The slot stays empty, so
    /// a later call retries.
    pub fn get_or_init(&self, config: &StoreConfig) -> TabletopResult<Arc<EntityStore>> {
        if let Some(store) = self.instance.get() {
            return Ok(Self::reuse(store, config));
        }

        let _guard = self.init_lock.lock();

        if let Some(store) = self.instance.get() {
            return Ok(Self::reuse(store, config));
        }

        let store = Arc::new(EntityStore::open(config.clone())?);
        self.initializations.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(self.instance.get_or_init(|| store)))
    }

    /// How many times the schema initialization ran through this slot.
    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }

    fn reuse(store: &Arc<EntityStore>, requested: &StoreConfig) -> Arc<EntityStore> {
        if store.config() != requested {
            warn!(
                active = %store.config().database_path.display(),
                requested = %requested.database_path.display(),
                "Entity store already initialized with a different configuration"
            );
        } else {
            debug!("Reusing initialized entity store");
        }
        Arc::clone(store)
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new()
    }
}
