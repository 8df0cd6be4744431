//! Firmware configuration and BIOS setting types
//!
//! [`FirmwareConfig`] is the vendor-neutral firmware description attached
//! to a host resource. A driver either translates it into the
//! backend-specific [`BiosSetting`] list or rejects it outright when its
//! protocol has no way to apply firmware settings.

use serde::{Deserialize, Serialize};

/// Vendor-neutral firmware configuration requested for a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareConfig {
    /// Supports the virtualization of platform hardware
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualization_enabled: Option<bool>,

    /// Allows a single physical processor core to appear as several
    /// logical processors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simultaneous_multithreading_enabled: Option<bool>,

    /// Allows SR-IOV-capable devices to be shared between virtual
    /// functions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov_enabled: Option<bool>,
}

/// One backend-specific BIOS setting produced from a [`FirmwareConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiosSetting {
    /// Setting name understood by the backend
    pub name: String,
    /// Setting value
    pub value: String,
}

impl BiosSetting {
    /// Create a new BIOS setting
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
