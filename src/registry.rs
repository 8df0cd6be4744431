//! Driver registry and BMC address resolution
//!
//! The registry maps URL scheme keys to access-details factories. It is an
//! explicit value: build one with
//! [`DriverRegistry::with_default_drivers`] (or register drivers by hand)
//! during startup, then share it; resolution takes `&self` and is safe
//! from any thread.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::access::AccessDetails;
use crate::error::{BmcError, Result};
use crate::{ipmi_wakeup, redfish_wakeup};

/// Scheme assumed for bare `host` and `host:port` addresses.
const DEFAULT_SCHEME: &str = "ipmi";

/// Factory building access details from a parsed BMC URL and the
/// certificate-verification flag.
type Factory = dyn Fn(&Url, bool) -> Result<Box<dyn AccessDetails>> + Send + Sync;

/// Registry of access-details factories keyed by URL scheme.
///
/// # Example
///
/// ```
/// use stonefly_bmc::DriverRegistry;
///
/// let registry = DriverRegistry::with_default_drivers();
/// let details = registry.resolve("libvirt-wakeup://192.168.122.1", false).unwrap();
/// assert!(details.needs_mac());
/// ```
pub struct DriverRegistry {
    /// Registered factories by scheme key
    factories: HashMap<String, Arc<Factory>>,
}

impl DriverRegistry {
    /// Create an empty registry with no drivers.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in drivers registered.
    pub fn with_default_drivers() -> Self {
        let mut registry = Self::new();
        register_defaults(&mut registry);
        registry
    }

    /// Map a scheme key to a factory.
    ///
    /// Each accepted transport scheme also adds a `name+scheme` alias for
    /// the same factory; that is how a driver records the transports it
    /// speaks (`redfish-wakeup+http`). Registering a key again replaces
    /// the earlier factory: last writer wins.
    pub fn register<F>(&mut self, name: &str, factory: F, schemes: &[&str])
    where
        F: Fn(&Url, bool) -> Result<Box<dyn AccessDetails>> + Send + Sync + 'static,
    {
        let factory: Arc<Factory> = Arc::new(factory);
        for scheme in schemes {
            self.factories
                .insert(format!("{}+{}", name, scheme), Arc::clone(&factory));
        }
        self.factories.insert(name.to_string(), factory);
        debug!(scheme = name, transports = schemes.len(), "registered BMC driver");
    }

    /// Resolve a raw BMC address into protocol-specific access details.
    ///
    /// The address is parsed (see [`parse_bmc_address`]), the factory
    /// registered for its scheme is looked up, and the factory builds the
    /// details. Resolution never mutates the registry; resolving the same
    /// address twice yields equivalent details.
    pub fn resolve(
        &self,
        address: &str,
        disable_certificate_verification: bool,
    ) -> Result<Box<dyn AccessDetails>> {
        if address.is_empty() {
            return Err(BmcError::MissingAddress);
        }
        let parsed = parse_bmc_address(address)?;
        let factory: &Factory = &**self
            .factories
            .get(parsed.scheme())
            .ok_or_else(|| BmcError::UnknownDriverScheme {
                scheme: parsed.scheme().to_string(),
                address: address.to_string(),
            })?;
        debug!(scheme = parsed.scheme(), "resolving BMC access details");
        factory(&parsed, disable_certificate_verification)
    }

    /// Check whether a factory is registered for a scheme key.
    pub fn contains(&self, scheme: &str) -> bool {
        self.factories.contains_key(scheme)
    }

    /// All registered scheme keys, including transport aliases.
    pub fn scheme_keys(&self) -> Vec<&str> {
        self.factories.keys().map(|key| key.as_str()).collect()
    }

    /// Number of registered scheme keys.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no drivers are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("schemes", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Register every built-in driver with the given registry.
pub fn register_defaults(registry: &mut DriverRegistry) {
    ipmi_wakeup::register(registry);
    redfish_wakeup::register(registry);
}

/// Parse a BMC address, accepting both `scheme://host:port/path` URLs and
/// bare `host` / `host:port` forms, which get the default `ipmi` scheme.
pub fn parse_bmc_address(address: &str) -> Result<Url> {
    match Url::parse(address) {
        // "host.example.com:6230" parses as scheme "host.example.com"
        // with an opaque path; treat it like the scheme-less form.
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(parsed),
        _ => Url::parse(&format!("{}://{}", DEFAULT_SCHEME, address)).map_err(|err| {
            BmcError::InvalidAddress {
                address: address.to_string(),
                message: err.to_string(),
            }
        }),
    }
}
