//! Province/district matcher over the static hierarchy

use crate::data::PROVINCES;
use crate::query::{is_thai, normalize_admin_query};
use crate::region::{AdminSuggestion, District, Province};
use crate::traits::LocationSearch;
use log::trace;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Global matcher instance over [`PROVINCES`]
static GLOBAL_MATCHER: Lazy<HierarchyMatcher> = Lazy::new(HierarchyMatcher::new);

/// Substring matcher over provinces and their districts.
///
/// Matching happens in the query's language: Thai queries are compared with
/// Thai names, anything else with lower-cased English names. A province that
/// matches also surfaces every one of its districts.
#[derive(Debug, Clone)]
pub struct HierarchyMatcher {
    provinces: &'static [Province],
    limit: usize,
}

impl HierarchyMatcher {
    pub const DEFAULT_LIMIT: usize = 10;

    /// Matcher over the built-in hierarchy
    pub fn new() -> Self {
        Self::with_provinces(PROVINCES)
    }

    /// Matcher over a caller-supplied static hierarchy
    pub fn with_provinces(provinces: &'static [Province]) -> Self {
        Self {
            provinces,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Overrides the result cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Shared matcher over the built-in hierarchy
    pub fn global() -> &'static HierarchyMatcher {
        &GLOBAL_MATCHER
    }

    /// Searches provinces and districts.
    ///
    /// # Examples
    /// ```rust
    /// use thaigeo::{HierarchyMatcher, SuggestionKind};
    ///
    /// let matcher = HierarchyMatcher::new();
    /// let hits = matcher.search("อ.เมือง");
    /// assert_eq!(hits[0].name, "ดอนเมือง, กรุงเทพมหานคร");
    ///
    /// let hits = matcher.search("nonthaburi");
    /// assert_eq!(hits[0].kind, SuggestionKind::Province);
    /// assert_eq!(hits[0].name, "Nonthaburi");
    /// ```
    pub fn search(&self, query: &str) -> Vec<AdminSuggestion> {
        let query = normalize_admin_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        let thai = is_thai(&query);
        let mut suggestions = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        'provinces: for province in self.provinces {
            if suggestions.len() >= self.limit {
                break;
            }

            let (province_th, province_en) = (province.name_th, province.name_en);
            let province_hit = name_contains(thai, province_th, province_en, &query);

            // Keyed by Thai name
            if province_hit && seen.insert(province_th.to_string()) {
                suggestions.push(AdminSuggestion::province(province));
            }

            for district in province.districts {
                if suggestions.len() >= self.limit {
                    break 'provinces;
                }

                let district_hit =
                    name_contains(thai, district.name_th, district.name_en, &query);
                if province_hit || district_hit {
                    let suggestion = AdminSuggestion::district(district, province);
                    // Keyed by "district, province"
                    if seen.insert(suggestion.name.clone()) {
                        suggestions.push(suggestion);
                    }
                }
            }
        }

        if !thai {
            for s in &mut suggestions {
                s.name = s.english_name().to_string();
            }
        }

        trace!(
            "hierarchy search {:?} (thai: {}) -> {} hits",
            query,
            thai,
            suggestions.len()
        );
        suggestions
    }

    /// All provinces in search order
    pub fn provinces(&self) -> &'static [Province] {
        self.provinces
    }

    /// Looks up a province by Thai name or English name (case-insensitive).
    /// Administrative prefixes such as "จังหวัด" are ignored.
    pub fn find_province(&self, name: &str) -> Option<&'static Province> {
        let name = normalize_admin_query(name);
        if name.is_empty() {
            return None;
        }
        self.provinces
            .iter()
            .find(|p| p.name_th == name || p.name_en.to_lowercase() == name)
    }

    /// Districts of a province, empty when the province is unknown
    pub fn districts_of_province(&self, name: &str) -> &'static [District] {
        self.find_province(name)
            .map(|p| p.districts)
            .unwrap_or(&[])
    }
}

impl Default for HierarchyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSearch for HierarchyMatcher {
    type Item = AdminSuggestion;

    fn limit(&self) -> usize {
        self.limit
    }

    fn search(&self, query: &str) -> Vec<AdminSuggestion> {
        HierarchyMatcher::search(self, query)
    }
}

/// Thai has no case, so lower-casing only affects the English side.
fn name_contains(thai: bool, name_th: &str, name_en: &str, query: &str) -> bool {
    if thai {
        name_th.contains(query)
    } else {
        name_en.to_lowercase().contains(query)
    }
}
