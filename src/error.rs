//! Error types for BMC access resolution
//!
//! Every fallible operation in this crate returns [`BmcError`] through the
//! crate-wide [`Result`] alias. Callers map these onto host status
//! conditions, so each variant carries enough context to be reported
//! without consulting logs.

use thiserror::Error;

/// Errors produced while validating credentials or resolving a BMC
/// address into access details.
#[derive(Debug, Error)]
pub enum BmcError {
    /// The credential bundle is internally inconsistent
    #[error("validation error with BMC credentials: {0}")]
    CredentialsValidation(String),

    /// No BMC address was provided
    #[error("missing BMC address")]
    MissingAddress,

    /// The BMC address could not be parsed as a URL
    #[error("failed to parse BMC address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    /// No driver is registered for the address scheme
    #[error("unknown BMC type '{scheme}' for address {address}")]
    UnknownDriverScheme { scheme: String, address: String },

    /// The driver has no way to apply firmware settings
    #[error("firmware settings for {driver} are not supported")]
    FirmwareSettingsNotSupported { driver: String },
}

/// Result type for BMC access operations
pub type Result<T> = std::result::Result<T, BmcError>;
