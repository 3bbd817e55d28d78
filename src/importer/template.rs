/// The recognized import columns, in the order the template presents
/// them. The row mapper reads exactly these names.
pub const TEMPLATE_COLUMNS: [&str; 18] = [
    "title",
    "companyName",
    "location",
    "jobType",
    "category",
    "salaryRange",
    "salary",
    "salaryCurrency",
    "salaryType",
    "status",
    "deadline",
    "description",
    "requirements",
    "benefits",
    "keyResponsibilities",
    "contactEmail",
    "contactPhone",
    "companyWebsite",
];

const EXAMPLE_ROW: [&str; 18] = [
    "Frontend Developer",
    "Tech Innovators Inc.",
    "Remote",
    "full-time",
    "Software Development",
    "$3000 - $5000",
    "4000",
    "USD",
    "monthly",
    "open",
    "2025-06-01",
    "We are looking for a skilled Frontend Developer.",
    "3+ years React, Strong JS",
    "Health insurance, Remote work",
    "Develop UI, Ship features",
    "hr@company.com",
    "+1234567890",
    "https://techinnovators.io",
];

/// Render the downloadable CSV template: the header row plus one
/// example data row showing a valid value for every column.
pub fn template_csv() -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TEMPLATE_COLUMNS)?;
    writer.write_record(EXAMPLE_ROW)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // Writer output is built from &str records, always valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::process_import;

    #[test]
    fn template_round_trips_through_the_pipeline() {
        let csv_text = template_csv().unwrap();
        let drafts = process_import(&csv_text).unwrap();
        assert_eq!(drafts.len(), 1);

        let draft = &drafts[0];
        assert_eq!(draft.title.as_deref(), Some("Frontend Developer"));
        assert_eq!(draft.company_name.as_deref(), Some("Tech Innovators Inc."));
        assert_eq!(draft.salary, Some(4000.0));
        assert_eq!(draft.status, "open");
        assert_eq!(draft.requirements, vec!["3+ years React", "Strong JS"]);
        assert_eq!(draft.benefits, vec!["Health insurance", "Remote work"]);
        assert_eq!(draft.key_responsibilities, vec!["Develop UI", "Ship features"]);
        assert_eq!(draft.company_website.as_deref(), Some("https://techinnovators.io"));
    }

    #[test]
    fn header_row_matches_the_recognized_columns() {
        let csv_text = template_csv().unwrap();
        let header = csv_text.lines().next().unwrap();
        assert_eq!(header, TEMPLATE_COLUMNS.join(","));
    }

    #[test]
    fn template_has_exactly_one_example_row() {
        let csv_text = template_csv().unwrap();
        assert_eq!(csv_text.lines().count(), 2);
    }
}
