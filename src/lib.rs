//! BMC access resolution for bare-metal provisioning
//!
//! This crate turns a BMC connection URL and a stored credential bundle
//! into protocol-specific access details: the capability contract the
//! rest of a provisioner consumes without ever branching on the
//! management protocol. Adding protocol support means registering another
//! driver, not touching provisioning logic.
//!
//! # Supported Drivers
//!
//! - **ipmi-wakeup** (alias **libvirt-wakeup**): IPMI-managed hosts whose
//!   power-on path is an SSH wake-up; no real power control.
//! - **redfish-wakeup** (aliases **ilo5-wakeup**, **idrac-wakeup**):
//!   Redfish-managed hosts booting via virtual media or kexec, woken over
//!   SSH; `+http`/`+https` scheme suffixes pick the transport.
//!
//! # Example
//!
//! ```
//! use stonefly_bmc::{Credentials, DriverRegistry};
//!
//! # fn example() -> stonefly_bmc::Result<()> {
//! let creds = Credentials {
//!     username: "admin".to_string(),
//!     password: "secret".to_string(),
//!     ..Credentials::default()
//! };
//! creds.validate()?;
//!
//! let registry = DriverRegistry::with_default_drivers();
//! let details = registry.resolve("ipmi-wakeup://10.0.0.5:6230?priv=OPERATOR", false)?;
//! assert_eq!(details.driver(), "ipmi-wakeup");
//!
//! let info = details.driver_info(&creds);
//! assert_eq!(info["ipmi_priv_level"], "OPERATOR");
//! assert_eq!(info["ipmi_port"], "6230");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod access;
pub mod credentials;
pub mod error;
pub mod firmware;
pub mod ipmi_wakeup;
pub mod redfish;
pub mod redfish_wakeup;
pub mod registry;

pub use access::{
    AccessDetails, DriverInfo, FAKE_POWER_INTERFACE, NO_RAID_INTERFACE, REDFISH_INTERFACE,
};
pub use credentials::{Credentials, SSH_WAKEUP_ENABLED};
pub use error::{BmcError, Result};
pub use firmware::{BiosSetting, FirmwareConfig};
pub use ipmi_wakeup::{
    IpmiWakeupAccessDetails, IPMI_DEFAULT_PORT, IPMI_DEFAULT_PRIVILEGE_LEVEL, IPMI_WAKEUP_DRIVER,
    LIBVIRT_WAKEUP_SCHEME,
};
pub use redfish::RedfishDetails;
pub use redfish_wakeup::{RedfishWakeupAccessDetails, REDFISH_WAKEUP_DRIVER};
pub use registry::{parse_bmc_address, register_defaults, DriverRegistry};
