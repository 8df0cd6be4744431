//! Redfish wake-up driver
//!
//! For hosts managed over Redfish that boot via virtual media or kexec and
//! are woken over SSH instead of power-cycled. The driver wraps the
//! generic Redfish details: the parameter map is the generic one extended
//! with the wake-up SSH fields, firmware and RAID stay on the Redfish
//! implementation, and the power interface is a no-op.

use url::Url;

use crate::access::{AccessDetails, DriverInfo, FAKE_POWER_INTERFACE, REDFISH_INTERFACE};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::firmware::{BiosSetting, FirmwareConfig};
use crate::redfish::RedfishDetails;
use crate::registry::DriverRegistry;

/// Scheme key and logical driver name for Redfish wake-up hosts.
pub const REDFISH_WAKEUP_DRIVER: &str = "redfish-wakeup";

/// Vendor scheme keys aliased to the same factory.
const ILO5_WAKEUP_SCHEME: &str = "ilo5-wakeup";
const IDRAC_WAKEUP_SCHEME: &str = "idrac-wakeup";

/// Transports the Redfish wake-up factory accepts.
const ACCEPTED_SCHEMES: &[&str] = &["http", "https"];

/// Register the Redfish wake-up factory under all of its scheme keys.
pub fn register(registry: &mut DriverRegistry) {
    registry.register(REDFISH_WAKEUP_DRIVER, new_access_details, ACCEPTED_SCHEMES);
    registry.register(ILO5_WAKEUP_SCHEME, new_access_details, ACCEPTED_SCHEMES);
    registry.register(IDRAC_WAKEUP_SCHEME, new_access_details, ACCEPTED_SCHEMES);
}

fn new_access_details(
    parsed: &Url,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(RedfishWakeupAccessDetails {
        redfish: RedfishDetails::new(parsed, disable_certificate_verification),
    }))
}

/// Access details for Redfish wake-up hosts.
#[derive(Debug, Clone)]
pub struct RedfishWakeupAccessDetails {
    redfish: RedfishDetails,
}

impl AccessDetails for RedfishWakeupAccessDetails {
    fn bmc_type(&self) -> &str {
        self.redfish.bmc_type()
    }

    // Virtual media boots without a pre-declared boot MAC; inspection can
    // fill one in later.
    fn needs_mac(&self) -> bool {
        false
    }

    fn driver(&self) -> &str {
        REDFISH_WAKEUP_DRIVER
    }

    fn disable_certificate_verification(&self) -> bool {
        self.redfish.disable_certificate_verification()
    }

    // The generic Redfish map extended with the wake-up SSH fields.
    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let mut info = self.redfish.driver_info(creds);
        if creds.ssh_wakeup_enabled() {
            info.insert(
                "wakeup_ssh_addr".to_string(),
                creds.ssh_address.clone().into(),
            );
            info.insert("wakeup_ssh_user".to_string(), creds.ssh_user.clone().into());
            info.insert("wakeup_ssh_key".to_string(), creds.ssh_key.clone().into());
        }
        info
    }

    fn boot_interface(&self) -> &str {
        REDFISH_WAKEUP_DRIVER
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn firmware_interface(&self) -> &str {
        REDFISH_INTERFACE
    }

    fn management_interface(&self) -> &str {
        ""
    }

    fn power_interface(&self) -> &str {
        FAKE_POWER_INTERFACE
    }

    fn raid_interface(&self) -> &str {
        REDFISH_INTERFACE
    }

    fn vendor_interface(&self) -> &str {
        ""
    }

    fn supports_secure_boot(&self) -> bool {
        true
    }

    // The wake-up path boots an agent already present on the target, so
    // per-host and shared ISO images both work.
    fn supports_iso_preprovisioning_image(&self) -> bool {
        true
    }

    fn requires_provisioning_network(&self) -> bool {
        false
    }

    fn build_bios_settings(
        &self,
        firmware_config: Option<&FirmwareConfig>,
    ) -> Result<Vec<BiosSetting>> {
        self.redfish.build_bios_settings(firmware_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(address: &str) -> Box<dyn AccessDetails> {
        let parsed = Url::parse(address).unwrap();
        new_access_details(&parsed, false).unwrap()
    }

    fn creds() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
            ..Credentials::default()
        }
    }

    #[test]
    fn test_driver_info_is_the_redfish_map() {
        let details = details("redfish-wakeup://bmc.example.com/redfish/v1/Systems/1");
        assert_eq!(details.bmc_type(), "redfish-wakeup");
        assert_eq!(details.driver(), "redfish-wakeup");

        let info = details.driver_info(&creds());
        assert_eq!(info.len(), 4);
        assert_eq!(info["redfish_system_id"], "/redfish/v1/Systems/1");
        assert_eq!(info["redfish_address"], "https://bmc.example.com");
        assert_eq!(info["redfish_username"], "admin");
        assert_eq!(info["redfish_password"], "secret");
    }

    #[test]
    fn test_driver_info_adds_wakeup_fields_when_enabled() {
        let creds = Credentials {
            ssh_wakeup: crate::credentials::SSH_WAKEUP_ENABLED.to_string(),
            ssh_user: "root".to_string(),
            ssh_address: "10.0.0.9".to_string(),
            ssh_key: "key-material".to_string(),
            ..creds()
        };
        let info =
            details("redfish-wakeup://bmc.example.com/redfish/v1/Systems/1").driver_info(&creds);
        assert_eq!(info.len(), 7);
        assert_eq!(info["wakeup_ssh_addr"], "10.0.0.9");
        assert_eq!(info["wakeup_ssh_user"], "root");
        assert_eq!(info["wakeup_ssh_key"], "key-material");
    }

    #[test]
    fn test_vendor_schemes_share_the_driver() {
        for address in [
            "ilo5-wakeup://bmc.example.com/redfish/v1/Systems/1",
            "idrac-wakeup+https://bmc.example.com/redfish/v1/Systems/1",
        ] {
            let details = details(address);
            assert_eq!(details.driver(), "redfish-wakeup");
            assert_eq!(details.boot_interface(), "redfish-wakeup");
        }
        assert_eq!(
            details("idrac-wakeup+https://bmc.example.com/redfish/v1/Systems/1").bmc_type(),
            "idrac-wakeup+https"
        );
    }

    #[test]
    fn test_interfaces_and_capabilities() {
        let details = details("redfish-wakeup://bmc.example.com/redfish/v1/Systems/1");
        assert!(!details.needs_mac());
        assert_eq!(details.power_interface(), "fake");
        assert_eq!(details.firmware_interface(), "redfish");
        assert_eq!(details.raid_interface(), "redfish");
        assert_eq!(details.bios_interface(), "");
        assert_eq!(details.management_interface(), "");
        assert_eq!(details.vendor_interface(), "");
        assert!(details.supports_secure_boot());
        assert!(details.supports_iso_preprovisioning_image());
        assert!(!details.requires_provisioning_network());
    }

    #[test]
    fn test_build_bios_settings_delegates() {
        let details = details("redfish-wakeup://bmc.example.com/redfish/v1/Systems/1");
        let config = FirmwareConfig {
            sriov_enabled: Some(true),
            ..FirmwareConfig::default()
        };
        let settings = details.build_bios_settings(Some(&config)).unwrap();
        assert_eq!(settings, vec![BiosSetting::new("SriovGlobalEnable", "Enabled")]);
    }
}
