use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::settings::models::SiteSetting;

/// Request DTO for upserting settings; each entry replaces the stored value
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsDto {
    #[validate(length(min = 1, message = "At least one setting is required"))]
    pub settings: BTreeMap<String, String>,
}

/// Response DTO: the whole settings map, keyed by setting name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponseDto {
    pub settings: BTreeMap<String, String>,
}

impl From<Vec<SiteSetting>> for SettingsResponseDto {
    fn from(rows: Vec<SiteSetting>) -> Self {
        Self {
            settings: rows.into_iter().map(|s| (s.key, s.value)).collect(),
        }
    }
}
