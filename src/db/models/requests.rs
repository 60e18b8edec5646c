// src/db/models/requests.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of a cleaning request. There is no forward-only ordering:
/// any status may follow any other, including re-entering a prior state.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningStatus {
    Pending,
    InProgress,
    Completed,
    Approved,
    Rejected,
}

impl CleaningStatus {
    /// Parse the wire form (`"in-progress"` etc). Returns `None` for anything
    /// outside the five recognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One submitted room-cleaning request.
///
/// `assigned_cleaner`, `assigned_at`, `approved_by` and `rejected_by` are part
/// of the persisted shape but are never populated by any operation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRequest {
    pub id: String,
    pub hostel_type: String,
    pub block: String,
    pub room_number: String,
    pub student_id: String,
    pub status: CleaningStatus,
    pub timestamp: DateTime<Utc>,
    pub assigned_cleaner: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejected_by: Option<String>,
}

impl CleaningRequest {
    /// Build a fresh pending request with a new id and creation timestamp.
    pub fn new(hostel_type: &str, block: &str, room_number: &str, student_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hostel_type: hostel_type.to_owned(),
            block: block.to_owned(),
            room_number: room_number.to_owned(),
            student_id: student_id.to_owned(),
            status: CleaningStatus::Pending,
            timestamp: Utc::now(),
            assigned_cleaner: None,
            assigned_at: None,
            started_at: None,
            completed_at: None,
            approved_at: None,
            approved_by: None,
            rejected_at: None,
            rejected_by: None,
        }
    }

    /// Apply a status transition, stamping the matching lifecycle timestamp
    /// the first time that status is entered. An already-set timestamp is
    /// never overwritten; no other field is touched.
    pub fn apply_status(&mut self, status: CleaningStatus) {
        self.status = status;
        let slot = match status {
            CleaningStatus::Pending => return,
            CleaningStatus::InProgress => &mut self.started_at,
            CleaningStatus::Completed => &mut self.completed_at,
            CleaningStatus::Approved => &mut self.approved_at,
            CleaningStatus::Rejected => &mut self.rejected_at,
        };
        if slot.is_none() {
            *slot = Some(Utc::now());
        }
    }
}

/// Payload for creating a request. Fields are optional at the serde level so
/// an absent field is a 400 from the handler rather than a body rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCleaningRequest {
    #[serde(default)]
    pub hostel_type: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

impl NewCleaningRequest {
    /// Returns the four required fields if all are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str, &str, &str)> {
        fn field(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }
        Some((
            field(&self.hostel_type)?,
            field(&self.block)?,
            field(&self.room_number)?,
            field(&self.student_id)?,
        ))
    }
}

/// Payload for `PUT /api/requests/{id}/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_pending_with_all_optional_fields_null() {
        let request = CleaningRequest::new("mens", "B1", "101", "S1");
        assert_eq!(request.status, CleaningStatus::Pending);
        assert!(request.assigned_cleaner.is_none());
        assert!(request.assigned_at.is_none());
        assert!(request.started_at.is_none());
        assert!(request.completed_at.is_none());
        assert!(request.approved_at.is_none());
        assert!(request.approved_by.is_none());
        assert!(request.rejected_at.is_none());
        assert!(request.rejected_by.is_none());
    }

    #[test]
    fn new_requests_get_distinct_ids() {
        let a = CleaningRequest::new("mens", "B1", "101", "S1");
        let b = CleaningRequest::new("mens", "B1", "101", "S1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn apply_status_stamps_each_timestamp_at_most_once() {
        let mut request = CleaningRequest::new("mens", "B1", "101", "S1");

        request.apply_status(CleaningStatus::InProgress);
        let started = request.started_at;
        assert!(started.is_some());
        assert!(request.completed_at.is_none());

        request.apply_status(CleaningStatus::Completed);
        assert!(request.completed_at.is_some());
        assert_eq!(request.started_at, started, "startedAt must be stable");

        // Re-entering a prior state keeps the original stamp.
        request.apply_status(CleaningStatus::InProgress);
        assert_eq!(request.started_at, started);
        assert_eq!(request.status, CleaningStatus::InProgress);
    }

    #[test]
    fn pending_has_no_timestamp_field() {
        let mut request = CleaningRequest::new("mens", "B1", "101", "S1");
        request.apply_status(CleaningStatus::Rejected);
        let rejected = request.rejected_at;

        request.apply_status(CleaningStatus::Pending);
        assert_eq!(request.status, CleaningStatus::Pending);
        assert_eq!(request.rejected_at, rejected);
    }

    #[test]
    fn status_parses_only_the_five_wire_values() {
        assert_eq!(
            CleaningStatus::parse("in-progress"),
            Some(CleaningStatus::InProgress)
        );
        assert_eq!(CleaningStatus::parse("pending"), Some(CleaningStatus::Pending));
        assert_eq!(CleaningStatus::parse("done"), None);
        assert_eq!(CleaningStatus::parse(""), None);
        assert_eq!(CleaningStatus::parse("In-Progress"), None);
    }

    #[test]
    fn serializes_with_camel_case_fields_and_explicit_nulls() {
        let request = CleaningRequest::new("mens", "B1", "101", "S1");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["hostelType"], "mens");
        assert_eq!(value["roomNumber"], "101");
        assert_eq!(value["studentId"], "S1");
        assert_eq!(value["status"], "pending");
        assert!(value["assignedCleaner"].is_null());
        assert!(value["startedAt"].is_null());
        assert!(value["rejectedBy"].is_null());
    }

    #[test]
    fn required_fields_rejects_empty_and_absent_values() {
        let payload: NewCleaningRequest = serde_json::from_value(serde_json::json!({
            "hostelType": "mens",
            "block": "",
            "roomNumber": "101",
            "studentId": "S1"
        }))
        .unwrap();
        assert!(payload.required_fields().is_none());

        let payload: NewCleaningRequest = serde_json::from_value(serde_json::json!({
            "hostelType": "mens",
            "block": "B1",
            "roomNumber": "101"
        }))
        .unwrap();
        assert!(payload.required_fields().is_none());

        let payload: NewCleaningRequest = serde_json::from_value(serde_json::json!({
            "hostelType": "mens",
            "block": "B1",
            "roomNumber": "101",
            "studentId": "S1"
        }))
        .unwrap();
        assert_eq!(payload.required_fields(), Some(("mens", "B1", "101", "S1")));
    }
}
