use serde::{Deserialize, Serialize};

/// One page of results from the catalog provider. The provider omits
/// `items` entirely when a query matches nothing, so every field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesPage {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

/// Metadata block of a single record. Any field may be absent upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub authors: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<String>,
}
