use serde::{Deserialize, Serialize};

/// One study material entry as served by the catalog backend.
///
/// The backend also returns bookkeeping fields (`_id`, timestamps); they are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub filiere: String,
    pub subject: String,
    pub semester: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_pdf_url: Option<String>,
}

impl CourseRecord {
    pub fn matches(&self, filiere: &str, subject: &str, semester: u32) -> bool {
        self.filiere == filiere && self.subject == subject && self.semester == semester
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_document() {
        let raw = serde_json::json!({
            "_id": "65f0c0ffee",
            "filiere": "Sciences Physiques",
            "subject": "Chimie",
            "semester": 2,
            "title": "Les piles",
            "pdfUrl": "https://cdn.example.com/piles.pdf",
            "createdAt": "2024-03-12T10:00:00.000Z",
            "__v": 0
        });
        let record: CourseRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.subject, "Chimie");
        assert_eq!(record.semester, 2);
        assert_eq!(
            record.pdf_url.as_deref(),
            Some("https://cdn.example.com/piles.pdf")
        );
        assert!(record.video_url.is_none());
        assert!(record.exercise_pdf_url.is_none());
    }

    #[test]
    fn matches_requires_all_three_fields() {
        let record = CourseRecord {
            filiere: "Sciences Physiques".into(),
            subject: "Chimie".into(),
            semester: 1,
            title: "Acides".into(),
            pdf_url: None,
            video_url: None,
            exercise_pdf_url: None,
        };
        assert!(record.matches("Sciences Physiques", "Chimie", 1));
        assert!(!record.matches("Sciences Physiques", "Chimie", 2));
        assert!(!record.matches("Sciences Physiques", "Physique", 1));
        assert!(!record.matches("Sciences Mathématiques A", "Chimie", 1));
    }
}
