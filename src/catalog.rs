//! Built-in catalog of curated recommendations
//!
//! The catalog is an immutable, process-wide table keyed by lowercase city
//! name. It is built once on first access and shared by every request.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Category, City, Recommendation};

/// Catalog key used when a requested city has no entry
pub const DEFAULT_CITY: &str = "paris";

/// Cities advertised by `GET /cities`
pub const CITIES: [City; 8] = [
    City {
        name: "Paris",
        country: "France",
    },
    City {
        name: "Tokyo",
        country: "Japan",
    },
    City {
        name: "New York",
        country: "USA",
    },
    City {
        name: "Barcelona",
        country: "Spain",
    },
    City {
        name: "Bangkok",
        country: "Thailand",
    },
    City {
        name: "Istanbul",
        country: "Turkey",
    },
    City {
        name: "London",
        country: "UK",
    },
    City {
        name: "Rome",
        country: "Italy",
    },
];

/// Categories advertised by `GET /categories`
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "food",
        name: "Food & Dining",
        icon: "🍽️",
    },
    Category {
        id: "culture",
        name: "Culture & Museums",
        icon: "🏛️",
    },
    Category {
        id: "activity",
        name: "Activities",
        icon: "🎯",
    },
    Category {
        id: "nature",
        name: "Nature & Outdoors",
        icon: "🌳",
    },
    Category {
        id: "nightlife",
        name: "Nightlife",
        icon: "🌙",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        icon: "🛍️",
    },
];

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// Read-only mapping from lowercase city key to curated recommendations
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<&'static str, Vec<Recommendation>>,
}

impl Catalog {
    /// The process-wide catalog
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn builtin() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "paris",
            vec![
                Recommendation::from_static(
                    "Le Comptoir du Relais",
                    "food",
                    "Authentic bistro in Saint-Germain serving classic French cuisine",
                    "Perfect for food lovers seeking genuine Parisian dining",
                    "2 hours",
                    "$$",
                ),
                Recommendation::from_static(
                    "Musée Rodin",
                    "culture",
                    "Beautiful sculpture museum with stunning gardens",
                    "Less crowded than major museums, perfect for art enthusiasts",
                    "2-3 hours",
                    "$$",
                ),
                Recommendation::from_static(
                    "Canal Saint-Martin",
                    "nature",
                    "Picturesque canal with trendy cafes and local atmosphere",
                    "Great for leisurely walks and people-watching",
                    "1-2 hours",
                    "free",
                ),
            ],
        );

        entries.insert(
            "tokyo",
            vec![
                Recommendation::from_static(
                    "Tsukiji Outer Market",
                    "food",
                    "Fresh seafood and street food from local vendors",
                    "Authentic local food experience",
                    "2-3 hours",
                    "$$",
                ),
                Recommendation::from_static(
                    "TeamLab Borderless",
                    "activity",
                    "Immersive digital art museum",
                    "Unique modern cultural experience",
                    "3 hours",
                    "$$$",
                ),
                Recommendation::from_static(
                    "Yanaka District",
                    "culture",
                    "Traditional neighborhood with temples and old shops",
                    "Experience old Tokyo atmosphere",
                    "2-3 hours",
                    "$",
                ),
            ],
        );

        Self { entries }
    }

    /// Case-insensitive lookup of a city's entries
    #[must_use]
    pub fn lookup(&self, city: &str) -> Option<&[Recommendation]> {
        self.entries
            .get(city.to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// Whether `key` names a catalog entry
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Entries for `city`, or for `default_city` when `city` is unknown.
    ///
    /// Returns an empty slice only if both are missing, which config
    /// validation rules out for the default.
    #[must_use]
    pub fn entries_or_default(&self, city: &str, default_city: &str) -> &[Recommendation] {
        self.lookup(city)
            .or_else(|| self.lookup(default_city))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_city_present() {
        assert!(Catalog::global().contains(DEFAULT_CITY));
    }

    #[rstest]
    #[case("paris")]
    #[case("Paris")]
    #[case("PARIS")]
    #[case("tOkYo")]
    fn test_lookup_is_case_insensitive(#[case] city: &str) {
        let entries = Catalog::global().lookup(city);
        assert!(entries.is_some());
        assert_eq!(entries.unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_city_uses_default() {
        let catalog = Catalog::global();
        let entries = catalog.entries_or_default("Atlantis", DEFAULT_CITY);
        assert_eq!(entries, catalog.lookup("paris").unwrap());
        assert_eq!(entries[0].name, "Le Comptoir du Relais");
    }

    #[test]
    fn test_static_listings() {
        assert_eq!(CITIES.len(), 8);
        assert_eq!(CITIES[2].name, "New York");
        assert_eq!(CATEGORIES.len(), 6);
        assert!(CATEGORIES.iter().any(|c| c.id == "shopping"));
    }
}
