//! Korean city alias table
//!
//! Maps Korean display names to the romanized place names the weather
//! provider resolves reliably. The table is authored statically, built once
//! on first use, and never mutated afterwards.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

/// Authored entries in display order: (Korean name, provider query term)
const KOREAN_CITIES: &[(&str, &str)] = &[
    ("서울", "Seoul"),
    ("부산", "Busan"),
    ("대구", "Daegu"),
    ("인천", "Incheon"),
    ("광주", "Gwangju"),
    ("대전", "Daejeon"),
    ("울산", "Ulsan"),
    ("세종", "Sejong"),
    ("수원", "Suwon"),
    ("성남", "Seongnam"),
    ("의정부", "Uijeongbu"),
    ("안양", "Anyang"),
    ("부천", "Bucheon"),
    ("광명", "Gwangmyeong"),
    ("평택", "Pyeongtaek"),
    ("안산", "Ansan"),
    ("고양", "Goyang"),
    ("구리", "Guri"),
    ("남양주", "Namyangju"),
    ("오산", "Osan"),
    ("시흥", "Siheung"),
    ("군포", "Gunpo"),
    ("의왕", "Uiwang"),
    ("하남", "Hanam"),
    ("용인", "Yongin"),
    ("파주", "Paju"),
    ("이천", "Icheon"),
    ("안성", "Anseong"),
    ("김포", "Gimpo"),
    ("화성", "Hwaseong"),
    ("양주", "Yangju"),
    ("포천", "Pocheon"),
    ("여주", "Yeoju"),
    ("아산", "Asan"),
    ("천안", "Cheonan"),
    ("충주", "Chungju"),
    ("청주", "Cheongju"),
    ("전주", "Jeonju"),
    ("나주", "Naju"),
    ("목포", "Mokpo"),
    ("여수", "Yeosu"),
    ("포항", "Pohang"),
    ("경주", "Gyeongju"),
    ("제주", "Jeju"),
    ("서귀포", "Seogwipo"),
];

static KOREAN_TABLE: LazyLock<CityAliasTable> =
    LazyLock::new(|| CityAliasTable::from_entries(KOREAN_CITIES));

/// One entry of the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityAlias {
    /// Korean display name, as typed by the user
    pub korean: &'static str,
    /// Romanized name sent to the provider
    pub query: &'static str,
}

/// Read-only lookup from Korean city name to provider query term
#[derive(Debug)]
pub struct CityAliasTable {
    entries: Vec<CityAlias>,
    index: HashMap<&'static str, &'static str>,
}

impl CityAliasTable {
    /// The built-in table of Korean cities
    #[must_use]
    pub fn korean() -> &'static Self {
        &KOREAN_TABLE
    }

    /// Build a table from static entries
    ///
    /// Later duplicates of a key are ignored so that the first authored
    /// entry wins, both for lookup and for listing.
    #[must_use]
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut ordered = Vec::with_capacity(entries.len());
        for &(korean, query) in entries {
            if let Entry::Vacant(slot) = index.entry(korean) {
                slot.insert(query);
                ordered.push(CityAlias { korean, query });
            }
        }
        Self {
            entries: ordered,
            index,
        }
    }

    /// Exact, case-sensitive lookup
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.index.get(name).copied()
    }

    /// Whether the name has an alias
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in authored order
    pub fn entries(&self) -> impl Iterator<Item = &CityAlias> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_table_has_all_authored_entries() {
        let table = CityAliasTable::korean();
        assert_eq!(table.len(), KOREAN_CITIES.len());
        assert_eq!(table.len(), 45);
        assert!(!table.is_empty());
    }

    #[test]
    fn lookup_known_city() {
        let table = CityAliasTable::korean();
        assert_eq!(table.lookup("아산"), Some("Asan"));
        assert_eq!(table.lookup("서귀포"), Some("Seogwipo"));
        assert_eq!(table.lookup("용인"), Some("Yongin"));
    }

    #[test]
    fn lookup_is_exact() {
        let table = CityAliasTable::korean();
        assert_eq!(table.lookup("서울 "), None);
        assert_eq!(table.lookup("서울시"), None);
        assert_eq!(table.lookup("Seoul"), None);
    }

    #[test]
    fn mapped_terms_are_ascii() {
        for alias in CityAliasTable::korean().entries() {
            assert!(
                alias.query.is_ascii(),
                "{} maps to non-ascii {}",
                alias.korean,
                alias.query
            );
        }
    }

    #[test]
    fn entries_keep_authored_order() {
        let first: Vec<_> = CityAliasTable::korean()
            .entries()
            .take(3)
            .map(|a| a.korean)
            .collect();
        assert_eq!(first, vec!["서울", "부산", "대구"]);
    }

    #[test]
    fn duplicate_keys_keep_first_mapping() {
        let table = CityAliasTable::from_entries(&[("광주", "Gwangju"), ("광주", "Gwangju-si")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("광주"), Some("Gwangju"));
    }

    #[test]
    fn alias_serializes_both_names() {
        let alias = CityAlias {
            korean: "제주",
            query: "Jeju",
        };
        let json = serde_json::to_string(&alias).expect("serialize");
        assert_eq!(json, r#"{"korean":"제주","query":"Jeju"}"#);
    }
}
