//! Server inventory records as returned by the `/v1/server` endpoint.
//!
//! Every field is optional on the wire. The API omits or nulls empty values
//! freely, so a missing or `null` string decodes to `""`, a list to `[]` and a
//! package to an empty [`Package`].

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for any value the API did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Package item category holding the installed memory.
pub const CATEGORY_RAM: &str = "RAM";
/// Package item category holding the disk configuration.
pub const CATEGORY_STORAGE: &str = "Hard Drive";
/// Package item category holding the installed operating system.
pub const CATEGORY_OS: &str = "Operating System";

/// Network type marking a subnet as publicly routed.
pub const NETWORK_PUBLIC: &str = "public";

/// An IP block assigned to a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpSubnet {
    /// CIDR block, e.g. `203.0.113.8/29`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub block: String,
    /// Network type, e.g. `public` or `private`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_type: String,
}

/// One provisioned option of a package (RAM, disk, OS, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub option: String,
}

/// Provisioned configuration of a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: i64,
    /// CPU description, e.g. `2x Xeon E5-2620 (12 cores)`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PackageItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// A single server record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "null_as_default")]
    pub server_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facility: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_subnets: Vec<IpSubnet>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub management_ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub package: Package,
}

impl Server {
    /// Installed memory, or `N/A`.
    pub fn ram(&self) -> &str {
        item_option(&self.package.items, CATEGORY_RAM)
    }

    /// Disk configuration, or `N/A`.
    pub fn storage(&self) -> &str {
        item_option(&self.package.items, CATEGORY_STORAGE)
    }

    /// Operating system, or `N/A`.
    pub fn operating_system(&self) -> &str {
        item_option(&self.package.items, CATEGORY_OS)
    }

    /// First public block, or `N/A`.
    pub fn public_ip(&self) -> &str {
        public_ip(&self.ip_subnets)
    }
}

/// Decode an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Option of the first item whose category matches exactly (case-sensitive).
pub fn item_option<'a>(items: &'a [PackageItem], category: &str) -> &'a str {
    items
        .iter()
        .find(|item| item.category == category)
        .map(|item| item.option.as_str())
        .unwrap_or(NOT_AVAILABLE)
}

/// Block of the first subnet whose network type is `public`.
pub fn public_ip(subnets: &[IpSubnet]) -> &str {
    subnets
        .iter()
        .find(|subnet| subnet.network_type == NETWORK_PUBLIC)
        .map(|subnet| subnet.block.as_str())
        .unwrap_or(NOT_AVAILABLE)
}
