//! # thaigeo - Thai location autocomplete
//!
//! Bilingual (Thai/English) location suggestions for partial user input.
//!
//! ## Matchers
//!
//! - [`HierarchyMatcher`]: provinces and districts from a built-in table.
//!   Strips Thai administrative prefixes ("อำเภอ", "จ.", ...), matches in the
//!   query's language and returns at most 10 suggestions.
//! - [`FlatMatcher`]: province/district/subdistrict records with postal
//!   codes, loaded once at startup. Matches English names, then Thai names,
//!   then the joined "subdistrict, district, province" form, and returns at
//!   most 20 suggestions.
//!
//! Both are immutable after construction and implement [`LocationSearch`].
//!
//! ## Quick start
//!
//! ```rust
//! use thaigeo::{HierarchyMatcher, SuggestionKind};
//!
//! let matcher = HierarchyMatcher::new();
//!
//! // Thai query, Thai display names
//! let hits = matcher.search("ขอนแก่น");
//! assert_eq!(hits[0].kind, SuggestionKind::Province);
//! assert_eq!(hits[0].name, "ขอนแก่น");
//!
//! // English query, English display names
//! let hits = matcher.search("pak kret");
//! assert_eq!(hits[0].name, "Pak Kret, Nonthaburi");
//! ```
//!
//! With the `json` feature (on by default) the flat dataset can be read from
//! disk with `FlatMatcher::from_path` or from memory with
//! `FlatMatcher::from_json_str`.

mod data;
mod error;
mod flat;
mod hierarchy;
#[cfg(feature = "json")]
mod loader;
mod query;
mod region;
mod traits;

pub use data::PROVINCES;
pub use error::{Result, SuggestError};
pub use flat::{build_display_name, FlatMatcher};
pub use hierarchy::HierarchyMatcher;
pub use query::{
    is_thai, is_thai_char, matching_prefixes, normalize_admin_query, normalize_query,
    strip_admin_prefix, ADMIN_PREFIXES,
};
pub use region::{
    AdminLevel, AdminSuggestion, District, GeoEntry, LocationSuggestion, Province,
    SuggestionKind, COUNTRY_CODE,
};
pub use traits::LocationSearch;

/// Searches the built-in province/district hierarchy with the global matcher
///
/// ```rust
/// let hits = thaigeo::search("จ.นนทบุรี");
/// assert_eq!(hits.len(), 7);
/// assert_eq!(hits[0].admin_area1_en, "Nonthaburi");
/// ```
pub fn search(query: &str) -> Vec<AdminSuggestion> {
    HierarchyMatcher::global().search(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_global() {
        let hits = search("Samut Prakan");
        assert_eq!(hits.len(), 7);
        assert_eq!(hits[0].name, "Samut Prakan");
        assert_eq!(hits[1].name, "Mueang Samut Prakan, Samut Prakan");
    }

    #[test]
    fn test_search_empty() {
        assert!(search("").is_empty());
        assert!(search(" \t ").is_empty());
    }

    #[test]
    fn test_english_names_after_swap() {
        for s in search("bang") {
            let expected = if s.name_en.is_empty() {
                s.admin_area1_en.clone()
            } else {
                s.name_en.clone()
            };
            assert_eq!(s.name, expected);
        }
    }

    #[test]
    fn test_both_matchers_share_contract() {
        fn capped<S: LocationSearch>(m: &S, q: &str) -> bool {
            m.search(q).len() <= m.limit()
        }

        let flat = FlatMatcher::build(vec![GeoEntry {
            id: 1,
            province_name_en: "Bangkok".to_string(),
            province_name_th: "กรุงเทพมหานคร".to_string(),
            ..Default::default()
        }])
        .unwrap();

        for q in ["", "bang", "กรุง", "x"] {
            assert!(capped(HierarchyMatcher::global(), q));
            assert!(capped(&flat, q));
        }
    }
}
