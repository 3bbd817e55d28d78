use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::JobPostRow;
use crate::importer::JobPostDraft;

const INSERT_COLUMNS: &str = "company_id, hr_id, title, company_name, location, job_type, \
     category, salary_range, salary, salary_currency, salary_type, status, deadline, \
     description, requirements, benefits, key_responsibilities, contact_email, \
     contact_phone, company_website";

const INSERT_PLACEHOLDERS: &str =
    "$1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20";

fn bind_draft<'q>(
    query: sqlx::query::QueryAs<'q, Postgres, JobPostRow, sqlx::postgres::PgArguments>,
    company_id: &'q str,
    hr_id: &'q str,
    draft: &'q JobPostDraft,
) -> sqlx::query::QueryAs<'q, Postgres, JobPostRow, sqlx::postgres::PgArguments> {
    query
        .bind(company_id)
        .bind(hr_id)
        // Caller validates title presence; empty string never reaches here
        .bind(draft.title.as_deref().unwrap_or_default())
        .bind(&draft.company_name)
        .bind(&draft.location)
        .bind(&draft.job_type)
        .bind(&draft.category)
        .bind(&draft.salary_range)
        .bind(draft.salary)
        .bind(&draft.salary_currency)
        .bind(&draft.salary_type)
        .bind(&draft.status)
        .bind(&draft.deadline)
        .bind(&draft.description)
        .bind(&draft.requirements)
        .bind(&draft.benefits)
        .bind(&draft.key_responsibilities)
        .bind(&draft.contact_email)
        .bind(&draft.contact_phone)
        .bind(&draft.company_website)
}

/// Repository for job-post database operations.
pub struct JobPostRepository;

impl JobPostRepository {
    /// Insert one job post and return the full persisted record.
    pub async fn create(
        pool: &Pool<Postgres>,
        company_id: &str,
        hr_id: &str,
        draft: &JobPostDraft,
    ) -> Result<JobPostRow, sqlx::Error> {
        debug!(
            "Creating job post: title={:?}, company_id={}",
            draft.title, company_id
        );

        let sql = format!(
            "INSERT INTO job_posts ({INSERT_COLUMNS}) VALUES ({INSERT_PLACEHOLDERS}) RETURNING *"
        );

        let row = bind_draft(
            sqlx::query_as::<_, JobPostRow>(&sql),
            company_id,
            hr_id,
            draft,
        )
        .fetch_one(pool)
        .await?;

        debug!("Job post created with id={}", row.id);
        Ok(row)
    }

    /// Insert multiple job posts in a single transaction.
    ///
    /// All-or-nothing: a failed insert rolls back the whole batch.
    /// Returns the number of rows inserted.
    pub async fn bulk_create(
        pool: &Pool<Postgres>,
        company_id: &str,
        hr_id: &str,
        drafts: &[JobPostDraft],
    ) -> Result<u64, sqlx::Error> {
        if drafts.is_empty() {
            debug!("Bulk create called with empty draft list");
            return Ok(0);
        }

        debug!("Starting bulk insert of {} job posts", drafts.len());

        let sql = format!(
            "INSERT INTO job_posts ({INSERT_COLUMNS}) VALUES ({INSERT_PLACEHOLDERS}) RETURNING *"
        );

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for draft in drafts {
            bind_draft(
                sqlx::query_as::<_, JobPostRow>(&sql),
                company_id,
                hr_id,
                draft,
            )
            .fetch_one(&mut *tx)
            .await?;
            inserted += 1;
        }
        tx.commit().await?;

        debug!("Bulk insert completed: {} rows inserted", inserted);
        Ok(inserted)
    }
}
