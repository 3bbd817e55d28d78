use std::fmt;

use super::mapper::{map_row, JobPostDraft};
use super::parser;

/// Failure of a whole import operation.
///
/// Cell-level anomalies never reach this type; the only way an import
/// fails is a structural problem in the file itself.
#[derive(Debug)]
pub enum ImportError {
    /// The CSV tokenizer could not make sense of the file
    Parse(csv::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(e) => write!(f, "CSV parse failed: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Parse(e) => Some(e),
        }
    }
}

/// Run one import over the full text of an uploaded file.
///
/// A single synchronous pass: tokenize, then map every row in file
/// order. There is no per-row rejection gate; a row missing business
/// fields still yields a draft, and judging it is left to the preview
/// and the bulk-create endpoint. On a structural failure no drafts are
/// returned at all.
pub fn process_import(file_text: &str) -> Result<Vec<JobPostDraft>, ImportError> {
    let rows = parser::parse_rows(file_text).map_err(ImportError::Parse)?;
    Ok(rows.iter().map(map_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    const TEMPLATE_LIKE_CSV: &str = "\
title,companyName,location,jobType,category,salaryRange,salary,salaryCurrency,salaryType,status,deadline,description,requirements,benefits,keyResponsibilities,contactEmail,contactPhone,companyWebsite
Frontend Developer,Tech Innovators Inc.,Remote,full-time,Software Development,$3000 - $5000,4000,USD,monthly,open,2025-06-01,We are looking for a skilled Frontend Developer.,\"3+ years React, Strong JS\",\"Health insurance, Remote work\",\"Develop UI, Ship features\",hr@company.com,+1234567890,https://techinnovators.io
";

    #[test]
    fn end_to_end_single_row() {
        let drafts = process_import(TEMPLATE_LIKE_CSV).unwrap();
        assert_eq!(drafts.len(), 1);

        let draft = &drafts[0];
        assert_eq!(draft.title.as_deref(), Some("Frontend Developer"));
        assert_eq!(draft.salary, Some(4000.0));
        assert_eq!(draft.status, "open");
        assert_eq!(draft.requirements, vec!["3+ years React", "Strong JS"]);
        assert!(draft.applications.is_empty());
    }

    #[test]
    fn preserves_file_row_order() {
        let drafts = process_import("title,salary\nFirst,1\nSecond,2\nThird,3\n").unwrap();
        let titles: Vec<_> = drafts.iter().map(|d| d.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn rows_with_missing_business_fields_are_not_excluded() {
        let drafts = process_import("title,salary\n,not-a-number\n").unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title.as_deref(), Some(""));
        assert!(drafts[0].salary.unwrap().is_nan());
    }

    #[test]
    fn every_draft_gets_the_invariant_fields() {
        let drafts = process_import("title\nA\nB\n").unwrap();
        for draft in &drafts {
            assert!(draft.applications.is_empty());
            assert!(DateTime::parse_from_rfc3339(&draft.created_at).is_ok());
        }
    }

    #[test]
    fn structural_failure_returns_no_partial_drafts() {
        let result = process_import("title,location\nGood,Remote\nbad,row,with,extras\n");
        match result {
            Err(ImportError::Parse(_)) => {}
            Ok(drafts) => panic!("expected failure, got {} drafts", drafts.len()),
        }
    }
}
