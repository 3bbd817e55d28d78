use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a persisted job post.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRow {
    pub id: i32,
    pub company_id: String,
    pub hr_id: String,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub salary_range: Option<String>,
    pub salary: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_type: Option<String>,
    pub status: String,
    pub deadline: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub key_responsibilities: Vec<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub company_website: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
