//! IPMI wake-up driver
//!
//! Covers hosts managed over IPMI whose power-on path is an SSH wake-up
//! rather than a real chassis power command: the power interface is a
//! no-op and the backend wakes the host over SSH. The `libvirt-wakeup`
//! scheme selects the same driver for virtualization-backed development
//! hosts, which must be declared with a boot MAC because inspection
//! cannot discover one.

use url::Url;

use crate::access::{AccessDetails, DriverInfo, FAKE_POWER_INTERFACE, NO_RAID_INTERFACE};
use crate::credentials::Credentials;
use crate::error::{BmcError, Result};
use crate::firmware::{BiosSetting, FirmwareConfig};
use crate::registry::DriverRegistry;

/// Scheme key and logical driver name for IPMI wake-up hosts.
pub const IPMI_WAKEUP_DRIVER: &str = "ipmi-wakeup";

/// Scheme key selecting the libvirt-backed variant of the driver.
pub const LIBVIRT_WAKEUP_SCHEME: &str = "libvirt-wakeup";

/// Port substituted when the BMC URL carries none.
pub const IPMI_DEFAULT_PORT: u16 = 623;

/// Privilege level used when the BMC URL does not select one.
pub const IPMI_DEFAULT_PRIVILEGE_LEVEL: &str = "ADMINISTRATOR";

/// Register the IPMI wake-up factory under both of its scheme keys.
pub fn register(registry: &mut DriverRegistry) {
    registry.register(IPMI_WAKEUP_DRIVER, new_access_details, &[]);
    registry.register(LIBVIRT_WAKEUP_SCHEME, new_access_details, &[]);
}

fn new_access_details(
    parsed: &Url,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IpmiWakeupAccessDetails {
        bmc_type: parsed.scheme().to_string(),
        port: parsed.port(),
        hostname: hostname_of(parsed),
        privilege_level: privilege_level_of(parsed),
        disable_certificate_verification,
    }))
}

/// Hostname with IPv6 brackets stripped, the form the backend expects in
/// `ipmi_address`.
fn hostname_of(parsed: &Url) -> String {
    parsed
        .host_str()
        .unwrap_or_default()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_string()
}

/// Privilege level from the `priv` query parameter, defaulting to
/// [`IPMI_DEFAULT_PRIVILEGE_LEVEL`].
fn privilege_level_of(parsed: &Url) -> String {
    parsed
        .query_pairs()
        .find(|(key, _)| key == "priv")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| IPMI_DEFAULT_PRIVILEGE_LEVEL.to_string())
}

/// Access details for IPMI wake-up hosts.
#[derive(Debug, Clone)]
pub struct IpmiWakeupAccessDetails {
    bmc_type: String,
    port: Option<u16>,
    hostname: String,
    privilege_level: String,
    disable_certificate_verification: bool,
}

impl AccessDetails for IpmiWakeupAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.bmc_type
    }

    // libvirt-backed hosts are used for dev and testing; inspection cannot
    // discover their MAC, so it has to come with the host declaration.
    fn needs_mac(&self) -> bool {
        self.bmc_type.starts_with("libvirt")
    }

    fn driver(&self) -> &str {
        IPMI_WAKEUP_DRIVER
    }

    fn disable_certificate_verification(&self) -> bool {
        self.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let port = match self.port {
            Some(port) => port.to_string(),
            None => IPMI_DEFAULT_PORT.to_string(),
        };
        let mut info = DriverInfo::new();
        info.insert("ipmi_port".to_string(), port.into());
        info.insert("ipmi_username".to_string(), creds.username.clone().into());
        info.insert("ipmi_password".to_string(), creds.password.clone().into());
        info.insert("ipmi_address".to_string(), self.hostname.clone().into());
        info.insert(
            "ipmi_priv_level".to_string(),
            self.privilege_level.clone().into(),
        );
        if creds.ssh_wakeup_enabled() {
            info.insert(
                "wakeup_ssh_addr".to_string(),
                creds.ssh_address.clone().into(),
            );
            info.insert("wakeup_ssh_user".to_string(), creds.ssh_user.clone().into());
            info.insert("wakeup_ssh_key".to_string(), creds.ssh_key.clone().into());
        }
        if self.disable_certificate_verification {
            info.insert("ipmi_verify_ca".to_string(), false.into());
        }
        info
    }

    fn boot_interface(&self) -> &str {
        IPMI_WAKEUP_DRIVER
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn firmware_interface(&self) -> &str {
        ""
    }

    fn management_interface(&self) -> &str {
        ""
    }

    fn power_interface(&self) -> &str {
        FAKE_POWER_INTERFACE
    }

    fn raid_interface(&self) -> &str {
        NO_RAID_INTERFACE
    }

    fn vendor_interface(&self) -> &str {
        ""
    }

    fn supports_secure_boot(&self) -> bool {
        false
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        false
    }

    // PXE is the only image delivery path for these hosts.
    fn requires_provisioning_network(&self) -> bool {
        true
    }

    fn build_bios_settings(
        &self,
        firmware_config: Option<&FirmwareConfig>,
    ) -> Result<Vec<BiosSetting>> {
        if firmware_config.is_some() {
            return Err(BmcError::FirmwareSettingsNotSupported {
                driver: self.driver().to_string(),
            });
        }
        Ok(Vec::new())
    }
}
