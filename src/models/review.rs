// src/models/review.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rating::Rating;

/// A submitted testimonial as persisted in browser storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    // Absent on records written before ids were assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub rating: Rating,
    pub comment: String,
    pub date: String, // ISO-8601 creation time, e.g. 2024-05-01T10:00:00.000Z
}

/// Raw values read from the review form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl Review {
    pub fn new(fields: ReviewFields, rating: Rating, created_at: DateTime<Utc>) -> Self {
        let company = Some(fields.company.trim().to_string()).filter(|c| !c.is_empty());
        Review {
            id: Some(Uuid::new_v4().to_string()),
            name: fields.name,
            email: fields.email,
            company,
            rating,
            comment: fields.message,
            date: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Whether `other` refers to the same stored review.
    ///
    /// Ids decide when both sides carry one; otherwise the legacy
    /// (name, email, comment, date) tuple is compared.
    pub fn matches(&self, other: &Review) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                self.name == other.name
                    && self.email == other.email
                    && self.comment == other.comment
                    && self.date == other.date
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fields() -> ReviewFields {
        ReviewFields {
            name: "Jane Doe".into(),
            email: "j@x.com".into(),
            company: "  ".into(),
            message: "Great work".into(),
        }
    }

    #[test]
    fn test_new_review_formats_timestamp_and_assigns_id() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let review = Review::new(fields(), Rating::new(4).unwrap(), at);
        assert_eq!(review.date, "2024-05-01T10:00:00.000Z");
        assert_eq!(review.company, None);
        assert_eq!(review.comment, "Great work");
        assert!(review.id.is_some());
    }

    #[test]
    fn test_legacy_record_without_id_parses() {
        let json = r#"{"name":"A","email":"a@x","company":"","rating":5,"comment":"c","date":"2024-01-01T00:00:00.000Z"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, None);
        assert_eq!(review.company.as_deref(), Some(""));
        assert_eq!(review.rating.value(), 5);
    }

    #[test]
    fn test_matching_prefers_ids() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let a = Review::new(fields(), Rating::new(4).unwrap(), at);
        let b = Review::new(fields(), Rating::new(4).unwrap(), at);
        // Same tuple, different ids: distinct reviews.
        assert!(!a.matches(&b));
        assert!(a.matches(&a.clone()));

        let mut legacy = a.clone();
        legacy.id = None;
        assert!(legacy.matches(&b));
    }
}
