//! Global access point to the active service container
//!
//! The surrounding CLI constructs one container during bootstrap and
//! registers it here; legacy procedural code paths then reach services
//! through these free functions instead of holding injected references.
//! Prefer constructor injection for new code; this module exists for
//! the code that cannot be refactored to accept it.
//!
//! Lifecycle: the slot starts empty (uninitialized), `set_container`
//! fills it, `unset_container` empties it again (test teardown). The
//! fallible accessors report an empty slot as
//! [`LocatorError::Uninitialized`] so a bootstrap ordering bug surfaces
//! as a typed error rather than a panic.

use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::container::ServiceContainer;
use crate::error::{LocatorError, LocatorResult};
use crate::logging::Logger;

// The one process-wide container slot. Writes happen only during
// bootstrap and teardown; the lock keeps the slot sound regardless.
static CONTAINER: RwLock<Option<Arc<ServiceContainer>>> = RwLock::new(None);

/// Install `container` as the active global container, replacing any
/// previous one unconditionally.
pub fn set_container(container: Arc<ServiceContainer>) {
    let mut slot = CONTAINER.write().expect("locator lock poisoned");
    *slot = Some(container);
}

/// Clear the global container slot. Used primarily for test isolation.
pub fn unset_container() {
    let mut slot = CONTAINER.write().expect("locator lock poisoned");
    *slot = None;
}

/// Return the active global container.
///
/// Fails with [`LocatorError::Uninitialized`] when no container has
/// been set.
pub fn get_container() -> LocatorResult<Arc<ServiceContainer>> {
    let slot = CONTAINER.read().expect("locator lock poisoned");
    slot.clone().ok_or(LocatorError::Uninitialized)
}

/// Whether a global container is currently installed. Never fails.
pub fn has_container() -> bool {
    let slot = CONTAINER.read().expect("locator lock poisoned");
    slot.is_some()
}

/// Resolve a service from the global container.
///
/// Propagates `Uninitialized` when no container is set; otherwise
/// forwards whatever the container returns for `id`.
pub fn service<T: ?Sized + Any + Send + Sync>(id: &str) -> LocatorResult<Arc<T>> {
    get_container()?.get(id)
}

/// Whether `id` is registered in the global container.
///
/// `has_container()` is checked first, so this never fails, in either
/// container state.
pub fn has_service(id: &str) -> bool {
    has_container() && get_container().map(|c| c.has(id)).unwrap_or(false)
}

/// Non-failing single-call lookup: `None` when the container is absent,
/// the id is unknown, or the registered type does not match.
///
/// Callers that need to distinguish those cases use the two-step
/// `has_container()` / `service()` path instead.
pub fn try_service<T: ?Sized + Any + Send + Sync>(id: &str) -> Option<Arc<T>> {
    service(id).ok()
}

/// Resolve the logger service. Sugar for `service("logger")`.
pub fn logger() -> LocatorResult<Arc<dyn Logger>> {
    service::<dyn Logger>("logger")
}
