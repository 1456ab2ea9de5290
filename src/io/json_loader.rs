//! JSON record loader
//!
//! Reads the whole input document into memory and decodes it as an array of
//! subcategory objects. Decoding is all-or-nothing: one malformed element
//! fails the whole load.
//!
//! # Error Handling
//!
//! The three ways loading can fail are reported separately so the driver can
//! name the failing step:
//! - the file cannot be opened ([`ReportError::InputOpen`])
//! - the file cannot be read to the end ([`ReportError::InputRead`])
//! - the bytes are not an array of subcategory objects ([`ReportError::Decode`])

use crate::types::{RecordSet, ReportError, Subcategory};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load the record set from a JSON file
///
/// # Examples
///
/// ```no_run
/// use category_report::io::load_records;
/// use std::path::Path;
///
/// let records = load_records(Path::new("data.json")).unwrap();
/// println!("Loaded {} subcategories", records.len());
/// ```
pub fn load_records(path: &Path) -> Result<RecordSet, ReportError> {
    let path_str = path.display().to_string();

    let mut file = File::open(path).map_err(|e| ReportError::input_open(&path_str, e))?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ReportError::input_read(&path_str, e))?;

    let records = decode_records(&bytes)?;
    debug!(path = %path_str, records = records.len(), "loaded input records");

    Ok(records)
}

/// Decode an in-memory JSON document into the record set
///
/// A `null` document is an empty record set and a `null` element is a record
/// with every field empty. Field-level rules are described in
/// [`crate::types::category`]. Anything other than an array of objects is
/// rejected.
pub fn decode_records(bytes: &[u8]) -> Result<RecordSet, ReportError> {
    let elements: Option<Vec<Option<Subcategory>>> = serde_json::from_slice(bytes)?;

    Ok(elements
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary JSON file for testing
    fn create_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_records_preserves_input_order() {
        let file = create_temp_json(
            r#"[
                {"id":"s1","name":"Apples","category":{"id":"c2","name":"Fruit"}},
                {"id":"s2","name":"Carrots","category":{"id":"c1","name":"Vegetable"}}
            ]"#,
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(
            records,
            vec![
                Subcategory::new("s1", "Apples", Category::new("c2", "Fruit")),
                Subcategory::new("s2", "Carrots", Category::new("c1", "Vegetable")),
            ]
        );
    }

    #[test]
    fn test_load_records_fails_on_missing_file() {
        let result = load_records(Path::new("nonexistent.json"));

        assert!(matches!(result, Err(ReportError::InputOpen { .. })));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to open input file 'nonexistent.json'"));
    }

    #[test]
    fn test_load_records_fails_reading_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = load_records(dir.path());

        // Opening a directory succeeds on Unix and fails on Windows
        assert!(matches!(
            result,
            Err(ReportError::InputRead { .. }) | Err(ReportError::InputOpen { .. })
        ));
    }

    #[test]
    fn test_load_records_keeps_duplicate_category_names() {
        let file = create_temp_json(
            r#"[
                {"id":"s1","name":"Apples","category":{"id":"c1","name":"Fruit"}},
                {"id":"s2","name":"Pears","category":{"id":"c9","name":"Fruit"}}
            ]"#,
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category.id, "c1");
        assert_eq!(records[1].category.id, "c9");
    }

    #[test]
    fn test_load_records_with_debug_logging_enabled() {
        let file = create_temp_json(
            r#"[{"id":"s1","name":"Apples","category":{"id":"c2","name":"Fruit"}}]"#,
        );
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        let records = tracing::subscriber::with_default(subscriber, || load_records(file.path()));

        assert_eq!(records.unwrap().len(), 1);
    }

    #[rstest]
    #[case::empty_array("[]", 0)]
    #[case::single(r#"[{"id":"s1","name":"A","category":{"id":"c1","name":"C"}}]"#, 1)]
    #[case::extra_fields(
        r#"[{"id":"s1","name":"A","slug":"a","category":{"id":"c1","name":"C","rank":3}}]"#,
        1
    )]
    #[case::three(
        r#"[{"id":"1","name":"a","category":{"id":"x","name":"X"}},
            {"id":"2","name":"b","category":{"id":"x","name":"X"}},
            {"id":"3","name":"c","category":{"id":"y","name":"Y"}}]"#,
        3
    )]
    fn test_decode_records_count_matches_array(#[case] json: &str, #[case] expected: usize) {
        let records = decode_records(json.as_bytes()).unwrap();
        assert_eq!(records.len(), expected);
    }

    #[rstest]
    #[case::null_document("null", vec![])]
    #[case::null_element(
        r#"[null,{"id":"s1","name":"A","category":{"id":"c1","name":"C"}}]"#,
        vec![
            Subcategory::default(),
            Subcategory::new("s1", "A", Category::new("c1", "C")),
        ]
    )]
    #[case::null_fields(
        r#"[{"id":"s1","name":null,"category":null}]"#,
        vec![Subcategory::new("s1", "", Category::default())]
    )]
    #[case::case_variant_keys(
        r#"[{"ID":"s1","Name":"A","Category":{"Id":"c1","NAME":"C"}}]"#,
        vec![Subcategory::new("s1", "A", Category::new("c1", "C"))]
    )]
    fn test_decode_records_null_and_case_variants(
        #[case] json: &str,
        #[case] expected: Vec<Subcategory>,
    ) {
        assert_eq!(decode_records(json.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn test_decode_records_missing_fields_default_to_empty() {
        let records = decode_records(br#"[{"name":"Apples"}]"#).unwrap();

        assert_eq!(records[0].id, "");
        assert_eq!(records[0].name, "Apples");
        assert_eq!(records[0].category, Category::default());
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::object_top_level(r#"{"id":"s1"}"#)]
    #[case::truncated(r#"[{"id":"s1","name":"A""#)]
    #[case::wrong_field_type(r#"[{"id":1,"name":"A","category":{"id":"c","name":"C"}}]"#)]
    #[case::array_of_strings(r#"["a","b"]"#)]
    #[case::empty_document("")]
    #[case::number_element("[1]")]
    fn test_decode_records_errors(#[case] json: &str) {
        let result = decode_records(json.as_bytes());
        assert!(matches!(result, Err(ReportError::Decode { .. })));
    }
}
