//! Dataset Module Tests
//!
//! Validates CSV parsing, the load-time invariants and name lookup.
//!
//! ## Test Scopes
//! - **Loader**: Ensures well-formed CSV parses and invariant violations fail.
//! - **Normalization**: Verifies case/whitespace handling.
//! - **Lookup**: Checks case-insensitive name resolution.

#[cfg(test)]
mod tests {
    use crate::dataset::loader::read_records;
    use crate::dataset::normalize;

    const HEADER: &str =
        "name,education_level,funding_type,continent,country,deadline,description,link";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    // ============================================================
    // LOADER TESTS - parsing
    // ============================================================

    #[test]
    fn test_load_basic() {
        let csv = csv_with_rows(&[
            "LPDP,S2,full,Asia,Indonesia,2024-12-01,Graduate funding,https://a.example",
            "Chevening,S2,full,Europe,UK,2024-11-01,UK masters,https://b.example",
        ]);

        let dataset = read_records(csv.as_bytes()).expect("load failed");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].name, "LPDP");
        assert_eq!(dataset.records()[1].continent, "Europe");
    }

    #[test]
    fn test_load_preserves_row_order() {
        let csv = csv_with_rows(&[
            "Third,S1,full,Asia,ID,2024,third,x",
            "First,S1,full,Asia,ID,2024,first,x",
            "Second,S1,full,Asia,ID,2024,second,x",
        ]);

        let dataset = read_records(csv.as_bytes()).unwrap();

        // Dataset order is CSV order, not sorted
        assert_eq!(dataset.records()[0].name, "Third");
        assert_eq!(dataset.records()[1].name, "First");
        assert_eq!(dataset.records()[2].name, "Second");
    }

    #[test]
    fn test_load_malformed_row_fails() {
        let csv = csv_with_rows(&["OnlyTwoFields,S1"]);

        let result = read_records(csv.as_bytes());
        assert!(result.is_err());
    }

    // ============================================================
    // LOADER TESTS - invariants
    // ============================================================

    #[test]
    fn test_empty_dataset_rejected() {
        let csv = csv_with_rows(&[]);

        let result = read_records(csv.as_bytes());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no records"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let csv = csv_with_rows(&[",S1,full,Asia,ID,2024,desc,x"]);

        let result = read_records(csv.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let csv = csv_with_rows(&["   ,S1,full,Asia,ID,2024,desc,x"]);

        assert!(read_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let csv = csv_with_rows(&[
            "LPDP,S2,full,Asia,ID,2024,first,x",
            "LPDP,S1,partial,Asia,ID,2024,second,x",
        ]);

        let result = read_records(csv.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("duplicates"));
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        // "lpdp" and "LPDP" are the same key under normalization
        let csv = csv_with_rows(&[
            "LPDP,S2,full,Asia,ID,2024,first,x",
            "lpdp,S1,partial,Asia,ID,2024,second,x",
        ]);

        assert!(read_records(csv.as_bytes()).is_err());
    }

    // ============================================================
    // NORMALIZATION TESTS
    // ============================================================

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ASIA"), "asia");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  full  "), "full");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   "), "");
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[test]
    fn test_find_by_name_case_insensitive() {
        let csv = csv_with_rows(&["Chevening,S2,full,Europe,UK,2024,UK masters,x"]);
        let dataset = read_records(csv.as_bytes()).unwrap();

        let upper = dataset.find_by_name("CHEVENING").expect("upper miss");
        let lower = dataset.find_by_name("chevening").expect("lower miss");

        assert_eq!(upper.name, "Chevening");
        assert_eq!(lower.name, "Chevening");
    }

    #[test]
    fn test_find_by_name_trims_whitespace() {
        let csv = csv_with_rows(&["Chevening,S2,full,Europe,UK,2024,UK masters,x"]);
        let dataset = read_records(csv.as_bytes()).unwrap();

        assert!(dataset.find_by_name("  Chevening  ").is_some());
    }

    #[test]
    fn test_find_by_name_miss() {
        let csv = csv_with_rows(&["Chevening,S2,full,Europe,UK,2024,UK masters,x"]);
        let dataset = read_records(csv.as_bytes()).unwrap();

        assert!(dataset.find_by_name("nonexistent").is_none());
    }
}
