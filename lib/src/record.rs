//! The lookup result entity

/// The location and network metadata the provider associates with an
/// address
///
/// Only `ip` is guaranteed, everything else depends on how much the
/// provider knows about the address. Absent fields are left out of the
/// serialized form. A record is built once per lookup and never
/// mutated.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IpRecord {
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Two letter country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// IANA timezone identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Network operator name
    #[serde(rename = "org", skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
}

impl IpRecord {
    /// Returns the coordinates only when the provider gave both parts
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
