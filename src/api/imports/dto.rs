use serde::Serialize;

use crate::importer::JobPostDraft;

/// Response for a successful import preview.
///
/// `preview` holds the first few drafts for the confirmation table;
/// `drafts` is the full ordered list the client forwards to the
/// bulk-create endpoint once the user confirms.
#[derive(Serialize)]
pub struct ImportPreviewResponse {
    pub message: String,
    pub count: usize,
    pub preview: Vec<JobPostDraft>,
    pub drafts: Vec<JobPostDraft>,
}
