//! Generic Redfish connection details
//!
//! The plain Redfish drivers live outside this crate. What lives here is
//! the slice of generic Redfish behavior the wake-up variant reuses:
//! capturing the endpoint from a parsed URL, assembling the `redfish_*`
//! parameter map, and translating a firmware configuration into BIOS
//! settings.

use url::Url;

use crate::access::DriverInfo;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::firmware::{BiosSetting, FirmwareConfig};

/// Transport used when the scheme carries no explicit `+http`/`+https`
/// suffix.
const DEFAULT_TRANSPORT: &str = "https";

/// Connection details shared by Redfish-family drivers.
///
/// The system path from the BMC URL (e.g. `/redfish/v1/Systems/1`) becomes
/// the backend's `redfish_system_id`; host and port become the endpoint
/// address.
#[derive(Debug, Clone)]
pub struct RedfishDetails {
    bmc_type: String,
    host: String,
    path: String,
    disable_certificate_verification: bool,
}

impl RedfishDetails {
    /// Capture the relevant parts of a parsed BMC URL.
    pub fn new(parsed: &Url, disable_certificate_verification: bool) -> Self {
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        Self {
            bmc_type: parsed.scheme().to_string(),
            host,
            path: parsed.path().to_string(),
            disable_certificate_verification,
        }
    }

    /// Protocol type: the URL scheme the details were resolved from.
    pub fn bmc_type(&self) -> &str {
        &self.bmc_type
    }

    /// Whether certificate verification is disabled for this connection.
    pub fn disable_certificate_verification(&self) -> bool {
        self.disable_certificate_verification
    }

    /// Endpoint URL for the backend. The transport comes from the scheme
    /// suffix when present (`redfish-wakeup+http`), otherwise HTTPS.
    fn redfish_address(&self) -> String {
        let transport = match self.bmc_type.split_once('+') {
            Some((_, suffix)) => suffix,
            None => DEFAULT_TRANSPORT,
        };
        format!("{}://{}", transport, self.host)
    }

    /// Generic Redfish parameters for the provisioning backend.
    pub fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let mut info = DriverInfo::new();
        info.insert("redfish_system_id".to_string(), self.path.clone().into());
        info.insert(
            "redfish_username".to_string(),
            creds.username.clone().into(),
        );
        info.insert(
            "redfish_password".to_string(),
            creds.password.clone().into(),
        );
        info.insert("redfish_address".to_string(), self.redfish_address().into());
        if self.disable_certificate_verification {
            info.insert("redfish_verify_ca".to_string(), false.into());
        }
        info
    }

    /// Translate a firmware configuration into Redfish BIOS settings.
    ///
    /// An absent configuration yields no settings and no error; present
    /// toggles map onto the Redfish attribute names with
    /// `Enabled`/`Disabled` values.
    pub fn build_bios_settings(
        &self,
        firmware_config: Option<&FirmwareConfig>,
    ) -> Result<Vec<BiosSetting>> {
        let config = match firmware_config {
            Some(config) => config,
            None => return Ok(Vec::new()),
        };
        let mut settings = Vec::new();
        if let Some(enabled) = config.virtualization_enabled {
            settings.push(BiosSetting::new(
                "ProcVirtualization",
                enabled_value(enabled),
            ));
        }
        if let Some(enabled) = config.simultaneous_multithreading_enabled {
            settings.push(BiosSetting::new("LogicalProc", enabled_value(enabled)));
        }
        if let Some(enabled) = config.sriov_enabled {
            settings.push(BiosSetting::new(
                "SriovGlobalEnable",
                enabled_value(enabled),
            ));
        }
        Ok(settings)
    }
}

fn enabled_value(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}
