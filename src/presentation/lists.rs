//! Comma-joined list encoding used only at the admin form boundary. The API
//! and the database carry these fields as real lists; the preview endpoint
//! receives the raw textarea strings and parses them here.

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empties() {
        assert_eq!(
            split_list(" Personas , Vehículos ,, Mascotas ,"),
            vec!["Personas", "Vehículos", "Mascotas"]
        );
    }

    #[test]
    fn split_empty_input_is_empty_list() {
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list("  , ,"), Vec::<String>::new());
    }

    #[test]
    fn join_then_split_round_trips_comma_free_entries() {
        let original = vec![
            "4K UHD".to_string(),
            "2K QHD".to_string(),
            "1080p".to_string(),
        ];

        assert_eq!(split_list(&join_list(&original)), original);
    }
}
