use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Closed set of principal roles. Each role gets its own dashboard subtree
/// and its own login path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Couple,
    Vendor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Couple => "couple",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }

    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }

    /// Identifier prefix for principals created through registration,
    /// e.g. `couple-171405932000`.
    pub fn id_with_suffix(&self, suffix: i64) -> String {
        format!("{}-{}", self.as_str(), suffix)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in principal, as held in memory and mirrored to session
/// storage. Role-specific fields stay optional; anything the server sent
/// that the client does not model survives in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(rename = "userType")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    // Couple-specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedding_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedding_date: Option<String>,
    // Vendor-specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            email: None,
            name: None,
            phone: None,
            wedding_id: None,
            partner_id: None,
            budget: None,
            wedding_date: None,
            vendor_type: None,
            description: None,
            address: None,
            extra: Map::new(),
        }
    }
}

/// A persisted identity paired with the moment it was last validated.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub identity: Identity,
    pub timestamp_millis: i64,
}

impl SessionRecord {
    /// The record is valid only while `now - timestamp < window`.
    pub fn is_valid(&self, now_millis: i64, window_millis: i64) -> bool {
        now_millis - self.timestamp_millis < window_millis
    }
}
