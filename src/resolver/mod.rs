//! Resolver backends.
//!
//! The discovery engine only needs one capability: given a name and a record
//! type, return the records or fail. This module provides:
//! - The `Resolver` trait expressing that capability
//! - Backends: DNS-over-HTTPS (`DohResolver`), the OS resolver through
//!   `hickory-resolver` (`SystemResolver`) and the `dig` tool (`DigResolver`)
//! - `ResolverRegistry`, which maps string keys to backends, and `Backend`,
//!   the selector callers put in their options
//!
//! An unknown key is reported when a query is made, not when it is selected.

mod dig;
mod doh;
mod system;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{CLOUDFLARE_DOH_URL, DIG_PROGRAM, GOOGLE_DOH_URL};
use crate::error_handling::{InitializationError, ResolverError};
use crate::initialization::{init_client, init_resolver};
use crate::record::{Record, RecordType};

pub use dig::DigResolver;
pub use doh::DohResolver;
pub use system::SystemResolver;

/// A source of DNS answers.
///
/// Implementations must be safe to call concurrently; a discovery run issues
/// many queries at once against the same backend.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Queries `name` for records of `record_type`.
    ///
    /// A name that does not exist, or has no records of the type, yields
    /// `Ok(vec![])`. Raw answers that cannot be turned into a `Record` are
    /// dropped.
    async fn query(&self, name: &str, record_type: RecordType)
        -> Result<Vec<Record>, ResolverError>;
}

/// Selects the backend a discovery call runs against.
#[derive(Clone)]
pub enum Backend {
    /// A backend registered under this key
    Named(String),
    /// A caller-supplied implementation
    Custom(Arc<dyn Resolver>),
}

impl Backend {
    /// Selects the backend registered under `key`.
    pub fn named(key: impl Into<String>) -> Self {
        Backend::Named(key.into())
    }

    /// Uses `resolver` directly, bypassing the registry.
    pub fn custom(resolver: impl Resolver + 'static) -> Self {
        Backend::Custom(Arc::new(resolver))
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Named(key) => f.debug_tuple("Named").field(key).finish(),
            Backend::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Backend::Named(a), Backend::Named(b)) => a == b,
            (Backend::Custom(a), Backend::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Stand-in for a key with no registered backend; every query fails.
struct MissingBackend(String);

#[async_trait]
impl Resolver for MissingBackend {
    async fn query(&self, _: &str, _: RecordType) -> Result<Vec<Record>, ResolverError> {
        Err(ResolverError::UnknownBackend(self.0.clone()))
    }
}

/// String-keyed collection of resolver backends.
#[derive(Default)]
pub struct ResolverRegistry {
    backends: HashMap<String, Arc<dyn Resolver>>,
}

impl ResolverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in backends:
    /// `cloudflare`, `google`, `system` and `dig`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client for the DoH
    /// backends cannot be built.
    pub fn with_default_backends() -> Result<Self, InitializationError> {
        let client = init_client()?;
        let system = init_resolver()?;

        let mut registry = Self::new();
        registry.register(
            "cloudflare",
            Arc::new(DohResolver::new(Arc::clone(&client), CLOUDFLARE_DOH_URL)),
        );
        registry.register(
            "google",
            Arc::new(DohResolver::new(Arc::clone(&client), GOOGLE_DOH_URL)),
        );
        registry.register("system", Arc::new(SystemResolver::new(system)));
        registry.register("dig", Arc::new(DigResolver::new(DIG_PROGRAM)));
        Ok(registry)
    }

    /// Registers `resolver` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, resolver: Arc<dyn Resolver>) {
        self.backends.insert(key.into(), resolver);
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Resolves a selector into a backend handle.
    ///
    /// Never fails: an unknown key yields a handle whose queries return
    /// `ResolverError::UnknownBackend`.
    pub fn select(&self, backend: &Backend) -> Arc<dyn Resolver> {
        match backend {
            Backend::Custom(resolver) => Arc::clone(resolver),
            Backend::Named(key) => match self.backends.get(key) {
                Some(resolver) => Arc::clone(resolver),
                None => Arc::new(MissingBackend(key.clone())),
            },
        }
    }
}

#[cfg(test)]
mod tests;
