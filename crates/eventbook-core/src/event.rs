// Event domain types
//
// An event listing moves through an approval lifecycle; only APPROVED
// listings are visible to unauthenticated callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Event lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Pending => write!(f, "PENDING"),
            EventStatus::Approved => write!(f, "APPROVED"),
            EventStatus::Rejected => write!(f, "REJECTED"),
            EventStatus::Cancelled => write!(f, "CANCELLED"),
            EventStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl EventStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(EventStatus::Pending),
            "APPROVED" => Some(EventStatus::Approved),
            "REJECTED" => Some(EventStatus::Rejected),
            "CANCELLED" => Some(EventStatus::Cancelled),
            "COMPLETED" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

/// An event listing owned by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Owning vendor. Weak reference by id, no cascade on user deletion.
    pub vendor_id: Uuid,
    pub category: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
    pub current_attendees: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn is_public(&self) -> bool {
        self.status == EventStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        let status: EventStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, EventStatus::Cancelled);
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            EventStatus::Pending,
            EventStatus::Approved,
            EventStatus::Rejected,
            EventStatus::Cancelled,
            EventStatus::Completed,
        ] {
            assert_eq!(EventStatus::parse(&status.to_string()), Some(status));
        }
        assert_eq!(EventStatus::parse("DRAFT"), None);
    }

    #[test]
    fn test_only_approved_is_public() {
        let mut event = Event {
            id: Uuid::nil(),
            title: "Tech Conference".to_string(),
            description: "Annual conference".to_string(),
            vendor_id: Uuid::nil(),
            category: "tech".to_string(),
            location: "Phoenix".to_string(),
            venue: None,
            event_date: None,
            start_time: None,
            end_time: None,
            ticket_price: None,
            max_attendees: None,
            current_attendees: 0,
            image_url: None,
            status: EventStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(!event.is_public());
        event.status = EventStatus::Approved;
        assert!(event.is_public());
        event.status = EventStatus::Completed;
        assert!(!event.is_public());
    }
}
