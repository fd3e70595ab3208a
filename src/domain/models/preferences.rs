use serde::{Deserialize, Serialize};

/// Preference payload supplied by the caller at registration time.
///
/// Persisted as given; the service does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub full_name: String,
    pub districts: Vec<String>,
    pub language: String,
}
