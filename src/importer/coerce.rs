//! Per-cell coercion of raw CSV values into typed draft fields.
//!
//! Every function here is total: any input, including a missing or
//! malformed cell, maps to a defined value. Bad business data never
//! aborts an import; it surfaces as a fallback the preview can show.

/// Split a delimited-list cell (`requirements`, `benefits`,
/// `keyResponsibilities`) on commas and trim each piece.
///
/// Pieces are kept in order, including empty strings left over after
/// trimming (a trailing comma yields a trailing `""`). Upstream
/// consumers rely on that literal behavior, so no filtering happens
/// here.
pub fn coerce_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some("") => Vec::new(),
        Some(value) => value.split(',').map(|piece| piece.trim().to_string()).collect(),
    }
}

/// Parse the `salary` cell as a decimal number.
///
/// A missing column stays absent; a present but non-numeric cell
/// becomes the `f64::NAN` sentinel rather than an error.
pub fn coerce_salary(raw: Option<&str>) -> Option<f64> {
    raw.map(|value| value.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Resolve the `status` cell, substituting `"draft"` when the cell is
/// missing or empty. Any other value passes through unvalidated.
pub fn coerce_status(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "draft".to_string(),
    }
}

/// Pass-through for plain text cells. A missing column stays absent.
pub fn coerce_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_splits_trims_and_keeps_empties() {
        assert_eq!(
            coerce_list(Some("a, b,c ,")),
            vec!["a".to_string(), "b".to_string(), "c".to_string(), "".to_string()]
        );
    }

    #[test]
    fn list_preserves_order() {
        assert_eq!(
            coerce_list(Some("Develop UI, Ship features")),
            vec!["Develop UI".to_string(), "Ship features".to_string()]
        );
    }

    #[test]
    fn list_empty_or_missing_is_empty_vec() {
        assert_eq!(coerce_list(None), Vec::<String>::new());
        assert_eq!(coerce_list(Some("")), Vec::<String>::new());
    }

    #[test]
    fn salary_parses_plain_decimal() {
        assert_eq!(coerce_salary(Some("4000")), Some(4000.0));
        assert_eq!(coerce_salary(Some(" 4500.50 ")), Some(4500.5));
    }

    #[test]
    fn salary_non_numeric_becomes_nan() {
        let salary = coerce_salary(Some("four-thousand")).unwrap();
        assert!(salary.is_nan());
    }

    #[test]
    fn salary_missing_stays_absent() {
        assert_eq!(coerce_salary(None), None);
    }

    #[test]
    fn status_defaults_to_draft() {
        assert_eq!(coerce_status(None), "draft");
        assert_eq!(coerce_status(Some("")), "draft");
    }

    #[test]
    fn status_passes_through_without_enum_check() {
        assert_eq!(coerce_status(Some("closed")), "closed");
        assert_eq!(coerce_status(Some("not-a-real-status")), "not-a-real-status");
    }

    #[test]
    fn text_passes_through_including_empty() {
        assert_eq!(coerce_text(Some("Remote")), Some("Remote".to_string()));
        assert_eq!(coerce_text(Some("")), Some("".to_string()));
        assert_eq!(coerce_text(None), None);
    }
}
