//! Country reference data served by the countries endpoint.

use serde::{Deserialize, Serialize};

/// A country entry in the reference list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub name: String,
}

/// The fixed reference list backing `GET /countries`.
const COUNTRY_NAMES: [&str; 10] = [
    "United States",
    "Canada",
    "United Kingdom",
    "France",
    "Germany",
    "Spain",
    "Italy",
    "Japan",
    "Australia",
    "Brazil",
];

/// Return the full country reference list, ids "1" through "10".
pub fn all_countries() -> Vec<Country> {
    COUNTRY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Country {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_list_shape() {
        let countries = all_countries();
        assert_eq!(countries.len(), 10);
        assert_eq!(countries[0].id, "1");
        assert_eq!(countries[0].name, "United States");
        assert_eq!(countries[9].id, "10");
        assert_eq!(countries[9].name, "Brazil");
    }
}
