//! Wire-level domain models for the easyoff admin client.
//!
//! Every type here mirrors a payload the backend produces or accepts.
//! Models derive the serde trio and carry `#[serde(default)]`, so a
//! payload missing a key leaves that field at its declared default and
//! a malformed payload degrades per the mapping layer's failure policy.

use easyoff_json_model::{to_model, to_plain, Raw};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One leave or overtime record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeaveRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// `"leave"` or `"overtime"`; kept as text, the server owns the set.
    pub leave_or_overtime: String,
    pub leave_or_overtime_type: String,
    pub reason: String,
    /// ISO-8601 timestamps, rendered as-is.
    pub start_time: String,
    pub end_time: String,
    pub leave_duration: f64,
    pub additional_info: Option<Value>,
}

/// One page of the leave/overtime listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeavePage {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u32,
    pub data: Vec<LeaveRecord>,
}

impl LeavePage {
    /// Build a page from a raw list response.
    ///
    /// Never fails: a malformed or absent response renders as an empty
    /// page.
    pub fn from_raw<'a, R: Into<Raw<'a>>>(raw: R) -> Self {
        to_model(raw)
    }
}

/// Paging parameters for the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl ListQuery {
    /// The query as request parameters.
    pub fn to_params(&self) -> Option<Value> {
        to_plain(Some(self))
    }
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login/register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    pub access_token: String,
}

/// The authenticated user, from the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// The backend's failure payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiMessage {
    pub message: String,
    pub error: Option<String>,
}
