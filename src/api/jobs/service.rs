use std::fmt;

use actix_web::{HttpResponse, ResponseError};
use sqlx::{Pool, Postgres};
use tracing::{error, info, warn};

use crate::api::validation::ErrorResponse;
use crate::db::job_post_repository::JobPostRepository;
use crate::importer::JobPostDraft;

use super::dto::{BulkJobPostResponse, JobPostResponse, RowError};

/// Service-level errors
#[derive(Debug)]
pub enum ServiceError {
    /// Database operation failed
    Database(sqlx::Error),

    /// Business validation failed
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Database(e) => write!(f, "Database error: {}", e),
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Database(e) => {
                error!("Database error: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                    fields: serde_json::json!({"message": "Database error occurred"}),
                })
            }
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
        }
    }
}

/// True when the draft carries a non-blank title.
///
/// The import pipeline deliberately lets title-less rows through so
/// the preview can show them; this is the gate they hit on submission.
fn has_usable_title(draft: &JobPostDraft) -> bool {
    draft
        .title
        .as_deref()
        .map(str::trim)
        .is_some_and(|t| !t.is_empty())
}

/// Split submitted drafts into insertable ones and per-row errors.
fn screen_drafts(drafts: Vec<JobPostDraft>) -> (Vec<JobPostDraft>, Vec<RowError>) {
    let mut valid = Vec::new();
    let mut errors = Vec::new();

    for (index, draft) in drafts.into_iter().enumerate() {
        if has_usable_title(&draft) {
            valid.push(draft);
        } else {
            errors.push(RowError {
                row: index + 1,
                title: draft.title,
                errors: vec!["title is required".to_string()],
            });
        }
    }

    (valid, errors)
}

/// Job-post service containing business logic.
pub struct JobPostService {
    pool: Pool<Postgres>,
}

impl JobPostService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a single job post from a confirmed draft.
    pub async fn create_job_post(
        &self,
        company_id: &str,
        hr_id: &str,
        draft: &JobPostDraft,
    ) -> Result<JobPostResponse, ServiceError> {
        if !has_usable_title(draft) {
            return Err(ServiceError::Validation("title is required".to_string()));
        }

        info!("Service: creating job post with title={:?}", draft.title);

        let row = JobPostRepository::create(&self.pool, company_id, hr_id, draft)
            .await
            .map_err(ServiceError::Database)?;

        info!("Service: job post created with id={}", row.id);

        Ok(JobPostResponse {
            message: "Job post created successfully".to_string(),
            job: row,
        })
    }

    /// Bulk-create imported drafts after user confirmation.
    ///
    /// Each draft is screened individually; drafts without a usable
    /// title are reported back with their row position while the rest
    /// are inserted in one transaction.
    pub async fn bulk_create_job_posts(
        &self,
        company_id: &str,
        hr_id: &str,
        drafts: Vec<JobPostDraft>,
    ) -> Result<BulkJobPostResponse, ServiceError> {
        info!(
            "Service: bulk creating {} job posts for company_id={}",
            drafts.len(),
            company_id
        );

        let (valid, errors) = screen_drafts(drafts);

        let created = if valid.is_empty() {
            warn!("Service: no valid job posts to insert");
            0
        } else {
            JobPostRepository::bulk_create(&self.pool, company_id, hr_id, &valid)
                .await
                .map_err(ServiceError::Database)? as usize
        };

        if errors.is_empty() {
            info!("Service: bulk creation completed, {} created", created);
        } else {
            warn!(
                "Service: bulk creation completed with {} rejected rows",
                errors.len()
            );
        }

        Ok(BulkJobPostResponse {
            message: format!(
                "Bulk job creation completed. {} created, {} failed",
                created,
                errors.len()
            ),
            created,
            errors,
        })
    }
}
