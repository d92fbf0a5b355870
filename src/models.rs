use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact form submission. Immutable once appended; the
/// timestamp is assigned by the store, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub timestamp: DateTime<Utc>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Inbound contact form body. All fields optional at the type level;
/// presence is enforced by the validator, not the deserializer.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
