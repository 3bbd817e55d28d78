use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::coerce;
use super::parser::RawRow;

/// An in-memory job-post record produced by the import pipeline,
/// pending user confirmation and backend submission.
///
/// Field names serialize in camelCase, the shape the job-board
/// front-end consumes. Optional fields are omitted from the wire when
/// the source column was missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

fn default_status() -> String {
    "draft".to_string()
}

/// Build one `JobPostDraft` from a parsed row.
///
/// Only the recognized columns are read; anything else in the file is
/// ignored. `applications` and `created_at` are never read from the
/// row: a freshly imported draft always starts with zero applications
/// and an import-time timestamp, even if the file carried columns of
/// those names.
pub fn map_row(row: &RawRow) -> JobPostDraft {
    JobPostDraft {
        title: coerce::coerce_text(row.get("title")),
        company_name: coerce::coerce_text(row.get("companyName")),
        location: coerce::coerce_text(row.get("location")),
        job_type: coerce::coerce_text(row.get("jobType")),
        category: coerce::coerce_text(row.get("category")),
        salary_range: coerce::coerce_text(row.get("salaryRange")),
        salary: coerce::coerce_salary(row.get("salary")),
        salary_currency: coerce::coerce_text(row.get("salaryCurrency")),
        salary_type: coerce::coerce_text(row.get("salaryType")),
        status: coerce::coerce_status(row.get("status")),
        deadline: coerce::coerce_text(row.get("deadline")),
        description: coerce::coerce_text(row.get("description")),
        requirements: coerce::coerce_list(row.get("requirements")),
        benefits: coerce::coerce_list(row.get("benefits")),
        key_responsibilities: coerce::coerce_list(row.get("keyResponsibilities")),
        contact_email: coerce::coerce_text(row.get("contactEmail")),
        contact_phone: coerce::coerce_text(row.get("contactPhone")),
        company_website: coerce::coerce_text(row.get("companyWebsite")),
        applications: Vec::new(),
        created_at: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn maps_recognized_columns() {
        let row = RawRow::from_pairs(&[
            ("title", "Frontend Developer"),
            ("companyName", "Tech Innovators Inc."),
            ("salary", "4000"),
            ("status", "open"),
            ("requirements", "3+ years React, Strong JS"),
        ]);
        let draft = map_row(&row);

        assert_eq!(draft.title.as_deref(), Some("Frontend Developer"));
        assert_eq!(draft.company_name.as_deref(), Some("Tech Innovators Inc."));
        assert_eq!(draft.salary, Some(4000.0));
        assert_eq!(draft.status, "open");
        assert_eq!(draft.requirements, vec!["3+ years React", "Strong JS"]);
        assert_eq!(draft.location, None);
    }

    #[test]
    fn status_defaults_when_cell_is_empty() {
        let row = RawRow::from_pairs(&[("title", "Dev"), ("status", "")]);
        assert_eq!(map_row(&row).status, "draft");

        let row = RawRow::from_pairs(&[("title", "Dev")]);
        assert_eq!(map_row(&row).status, "draft");
    }

    #[test]
    fn applications_and_created_at_are_never_read_from_the_file() {
        let row = RawRow::from_pairs(&[
            ("title", "Dev"),
            ("applications", "alice,bob"),
            ("createdAt", "1999-01-01T00:00:00Z"),
        ]);
        let before = Utc::now();
        let draft = map_row(&row);

        assert!(draft.applications.is_empty());
        let created = DateTime::parse_from_rfc3339(&draft.created_at).unwrap();
        assert!(created >= before - chrono::Duration::seconds(1));
        assert!(created <= Utc::now() + chrono::Duration::seconds(1));
    }

    #[test]
    fn unrecognized_columns_do_not_leak_into_the_draft() {
        let row = RawRow::from_pairs(&[("title", "Dev"), ("favoriteColor", "green")]);
        let draft = map_row(&row);
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("favoriteColor").is_none());
        assert_eq!(json["title"], "Dev");
    }

    #[test]
    fn nan_salary_serializes_as_null() {
        let row = RawRow::from_pairs(&[("title", "Dev"), ("salary", "four-thousand")]);
        let draft = map_row(&row);
        assert!(draft.salary.unwrap().is_nan());

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["salary"].is_null());
    }
}
