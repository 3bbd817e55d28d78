use serde::Serialize;

use crate::db::models::JobPostRow;

/// Response for single job-post creation.
#[derive(Serialize)]
pub struct JobPostResponse {
    pub message: String,
    pub job: JobPostRow,
}

/// Business-validation failure for one draft in a bulk request.
///
/// `row` is the 1-based position of the draft in the submitted list,
/// matching the row order of the imported file.
#[derive(Debug, Serialize)]
pub struct RowError {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub errors: Vec<String>,
}

/// Response for bulk job-post creation.
#[derive(Serialize)]
pub struct BulkJobPostResponse {
    pub message: String,
    pub created: usize,
    pub errors: Vec<RowError>,
}
