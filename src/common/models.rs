//! Transient copies of the backend entities. Field names match the JSON
//! emitted by the REST API; nothing here is persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Pastor,
    Member,
}

impl Role {
    pub fn label_fr(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Pastor => "Pasteur",
            Role::Member => "Membre",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl User {
    /// Display name: "First Last" when available, username otherwise.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl DonationStatus {
    pub fn label_fr(&self) -> &'static str {
        match self {
            DonationStatus::Completed => "Validé",
            DonationStatus::Pending => "En attente",
            DonationStatus::Failed => "Échoué",
            DonationStatus::Cancelled => "Annulé",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(deserialize_with = "amount_from_decimal")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub payment_method: String,
    pub status: DonationStatus,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// The API serializes decimal amounts as strings ("50.00"); older
/// endpoints send plain numbers. Accept both.
fn amount_from_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GlobalDonationStats {
    pub total_amount: f64,
    pub total_count: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    General,
    Appointment,
    DonationIssue,
    Support,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender: i64,
    pub receiver: i64,
    #[serde(default)]
    pub sender_details: Option<User>,
    #[serde(default)]
    pub receiver_details: Option<User>,
    pub content: String,
    pub message_type: MessageType,
    #[serde(default)]
    pub donation: Option<i64>,
    #[serde(default)]
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamStatus {
    Planned,
    Live,
    Ended,
}

impl StreamStatus {
    pub fn label_fr(&self) -> &'static str {
        match self {
            StreamStatus::Planned => "Planifié",
            StreamStatus::Live => "En Direct",
            StreamStatus::Ended => "Terminé",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStream {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: StreamStatus,
    #[serde(default)]
    pub stream_key: String,
    #[serde(default)]
    pub playback_url: String,
    #[serde(default)]
    pub ingest_endpoint: String,
    #[serde(default)]
    pub scheduled_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    History,
    Mission,
    Vision,
    Values,
    #[serde(other)]
    Other,
}

impl SectionType {
    pub fn label_fr(&self) -> &'static str {
        match self {
            SectionType::History => "Histoire",
            SectionType::Mission => "Mission",
            SectionType::Vision => "Vision",
            SectionType::Values => "Valeurs",
            SectionType::Other => "Autre",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_fr())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: i64,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visionary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_decimal_string_and_number() {
        let json = r#"{
            "id": 1, "amount": "50.00", "status": "PENDING",
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let d: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(d.amount, 50.0);
        assert_eq!(d.currency, "EUR");

        let json = r#"{
            "id": 2, "amount": 12.5, "status": "COMPLETED",
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let d: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(d.amount, 12.5);
        assert_eq!(d.status, DonationStatus::Completed);
    }

    #[test]
    fn role_and_message_type_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Pastor).unwrap(), "\"PASTOR\"");
        assert_eq!(
            serde_json::to_string(&MessageType::DonationIssue).unwrap(),
            "\"DONATION_ISSUE\""
        );
        let t: MessageType = serde_json::from_str("\"SUPPORT\"").unwrap();
        assert_eq!(t, MessageType::Support);
    }

    #[test]
    fn unknown_section_type_maps_to_other() {
        let s: SectionType = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(s, SectionType::Other);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let json = r#"{"id": 3, "username": "marie", "role": "MEMBER"}"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.display_name(), "marie");
    }
}
