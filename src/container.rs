//! Service container: a string-keyed registry of shared service instances
//!
//! Services are stored type-erased and recovered by downcast, so the
//! container can hold concrete structs and trait objects alike. It is
//! thread-safe, although registration normally happens only during
//! single-threaded bootstrap.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{LocatorError, LocatorResult};

/// Registry mapping string identifiers to constructed service instances.
///
/// Each entry's payload is an `Arc<T>` boxed behind `dyn Any`; `get`
/// downcasts back to the requested type and hands out a clone of the
/// `Arc`.
#[derive(Debug, Default)]
pub struct ServiceContainer {
    services: RwLock<HashMap<String, Box<dyn Any + Send + Sync>>>,
}

impl ServiceContainer {
    /// Create a new, empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service instance under `id`, replacing any previous
    /// registration with the same id.
    pub fn register<T: Any + Send + Sync>(&self, id: &str, service: T) {
        self.register_arc(id, Arc::new(service));
    }

    /// Register an already-shared service under `id`.
    ///
    /// This is the entry point for trait objects: register an
    /// `Arc<dyn Logger>` here and resolve it with
    /// `get::<dyn Logger>(id)` later.
    pub fn register_arc<T: ?Sized + Any + Send + Sync>(&self, id: &str, service: Arc<T>) {
        let mut services = self.services.write().expect("container lock poisoned");
        services.insert(id.to_string(), Box::new(service));
    }

    /// Resolve the service registered under `id`.
    ///
    /// Fails with `ServiceNotFound` for an unknown id and with
    /// `ServiceType` when the id exists but was registered with a
    /// different type than `T`.
    pub fn get<T: ?Sized + Any + Send + Sync>(&self, id: &str) -> LocatorResult<Arc<T>> {
        let services = self.services.read().expect("container lock poisoned");
        let entry = services
            .get(id)
            .ok_or_else(|| LocatorError::ServiceNotFound(id.to_string()))?;
        entry
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| LocatorError::ServiceType { id: id.to_string() })
    }

    /// Check whether a service is registered under `id`. Never fails.
    pub fn has(&self, id: &str) -> bool {
        let services = self.services.read().expect("container lock poisoned");
        services.contains_key(id)
    }

    /// Sorted list of registered service ids, for status output.
    pub fn ids(&self) -> Vec<String> {
        let services = self.services.read().expect("container lock poisoned");
        let mut ids: Vec<String> = services.keys().cloned().collect();
        ids.sort();
        ids
    }
}
