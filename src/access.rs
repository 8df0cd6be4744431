//! The capability contract shared by all BMC drivers
//!
//! A resolved BMC connection is represented as a boxed [`AccessDetails`]
//! trait object. The embedding provisioner never branches on the concrete
//! driver type; everything it needs to know about a management endpoint
//! comes through this trait.

use std::collections::HashMap;
use std::fmt::Debug;

use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::Result;
use crate::firmware::{BiosSetting, FirmwareConfig};

/// Identifier of the no-op power interface used by wake-up drivers.
pub const FAKE_POWER_INTERFACE: &str = "fake";

/// Identifier of the disabled RAID interface.
pub const NO_RAID_INTERFACE: &str = "no-raid";

/// Identifier of interfaces served by the generic Redfish implementation.
pub const REDFISH_INTERFACE: &str = "redfish";

/// Flat connection-parameter map handed to the provisioning backend.
///
/// Values are heterogeneous (ports travel as strings, verification flags
/// as booleans), so the map carries JSON values.
pub type DriverInfo = HashMap<String, Value>;

/// Capability contract exposed by every resolved BMC connection.
///
/// The sub-interface accessors return an identifier the provisioning
/// backend understands, or an empty string when the backend's own default
/// for that interface applies.
pub trait AccessDetails: Debug + Send + Sync {
    /// Protocol type: the URL scheme the details were resolved from.
    fn bmc_type(&self) -> &str;

    /// Whether the host must be declared with a boot MAC address up front
    /// instead of having one discovered during inspection.
    fn needs_mac(&self) -> bool;

    /// Logical driver name understood by the provisioning backend.
    fn driver(&self) -> &str;

    /// Whether certificate verification is disabled for this connection.
    fn disable_certificate_verification(&self) -> bool;

    /// Connection parameters for the provisioning backend, pre-populated
    /// with the access information. The caller merges in whatever else the
    /// deployment needs (kernel and ramdisk locations and the like).
    fn driver_info(&self, creds: &Credentials) -> DriverInfo;

    /// Boot interface identifier.
    fn boot_interface(&self) -> &str;

    /// BIOS interface identifier.
    fn bios_interface(&self) -> &str;

    /// Firmware interface identifier.
    fn firmware_interface(&self) -> &str;

    /// Management interface identifier.
    fn management_interface(&self) -> &str;

    /// Power interface identifier.
    fn power_interface(&self) -> &str;

    /// RAID interface identifier.
    fn raid_interface(&self) -> &str;

    /// Vendor interface identifier.
    fn vendor_interface(&self) -> &str;

    /// Whether the driver can boot with secure boot enabled.
    fn supports_secure_boot(&self) -> bool;

    /// Whether the driver can boot an ISO pre-provisioning image.
    fn supports_iso_preprovisioning_image(&self) -> bool;

    /// Whether image delivery needs a dedicated provisioning network.
    fn requires_provisioning_network(&self) -> bool;

    /// Translates a vendor-neutral firmware configuration into
    /// backend-specific BIOS settings, failing when the driver cannot
    /// apply them.
    fn build_bios_settings(
        &self,
        firmware_config: Option<&FirmwareConfig>,
    ) -> Result<Vec<BiosSetting>>;
}
