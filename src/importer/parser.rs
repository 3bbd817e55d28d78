use std::collections::HashMap;

/// One data row of the uploaded file, keyed by the header row.
///
/// Cells are raw strings exactly as the tokenizer produced them; all
/// typing happens later in coercion.
#[derive(Debug, Clone)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Look up a cell by column name. Returns `None` when the header
    /// did not contain the column at all.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        RawRow {
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Tokenize CSV text into header-keyed rows.
///
/// The first line supplies the keys, blank lines are skipped, and a
/// tokenizer error aborts the whole parse: no partial row list is ever
/// returned. A row whose field count disagrees with the header is a
/// structural failure, not a tolerated anomaly.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, csv::Error> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(RawRow { cells });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_rows_by_header() {
        let rows = parse_rows("title,location\nFrontend Developer,Remote\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("title"), Some("Frontend Developer"));
        assert_eq!(rows[0].get("location"), Some("Remote"));
        assert_eq!(rows[0].get("salary"), None);
    }

    #[test]
    fn skips_blank_lines() {
        let rows = parse_rows("title\nAlpha\n\nBeta\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("title"), Some("Alpha"));
        assert_eq!(rows[1].get("title"), Some("Beta"));
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let rows = parse_rows("title,requirements\nDev,\"3+ years React, Strong JS\"\n").unwrap();
        assert_eq!(rows[0].get("requirements"), Some("3+ years React, Strong JS"));
    }

    #[test]
    fn ragged_row_is_a_structural_failure() {
        let result = parse_rows("title,location\na,b,c\n");
        assert!(result.is_err());
    }
}
