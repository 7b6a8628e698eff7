use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Plaintext on the wire, matching the backend's storage model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Credentials posted to the admin login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Aggregates served by `/admin/stats`. Every field is optional so a newer
/// or older backend never breaks the overview screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_couples: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vendors: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_vendors: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bookings: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A moderated principal as listed on the admin users screen. The backend
/// mixes couples and vendors in one list, discriminated by `role`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
