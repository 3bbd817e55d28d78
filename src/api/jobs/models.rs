use serde::Deserialize;
use validator::Validate;

use crate::importer::JobPostDraft;

/// Request body for single job-post creation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPostRequest {
    #[validate(length(min = 1, message = "companyId is required"))]
    pub company_id: String,
    #[validate(length(min = 1, message = "hrId is required"))]
    pub hr_id: String,
    pub job: JobPostDraft,
}

/// Request body for bulk creation of imported drafts.
///
/// Tenancy (`companyId`/`hrId`) is attached here by the caller; the
/// import pipeline itself knows nothing about it.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateJobPostsRequest {
    #[validate(length(min = 1, message = "companyId is required"))]
    pub company_id: String,
    #[validate(length(min = 1, message = "hrId is required"))]
    pub hr_id: String,
    pub jobs: Vec<JobPostDraft>,
}
