//! Matcher over the flat province/district/subdistrict dataset

use crate::error::{Result, SuggestError};
use crate::query::normalize_query;
use crate::region::{GeoEntry, LocationSuggestion, COUNTRY_CODE};
use crate::traits::LocationSearch;
use log::{debug, trace, warn};
use std::collections::{BTreeMap, HashSet};

/// Joins the non-empty parts with ", ".
///
/// Parts are trimmed first, so blank parts never leave a dangling separator.
///
/// ```rust
/// use thaigeo::build_display_name;
///
/// assert_eq!(build_display_name(&["", "Mueang", " ", "Chiang Mai"]), "Mueang, Chiang Mai");
/// assert_eq!(build_display_name(&["", ""]), "");
/// ```
pub fn build_display_name(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which check accepted a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTier {
    /// Lower-cased English subdistrict/district/province name
    EnglishName,
    /// Thai subdistrict/district/province name, exact case
    ThaiName,
    /// Joined "subdistrict, district, province" form in either language
    FullDisplayName,
}

/// A record with its projected suggestion and lower-cased English keys
#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: GeoEntry,
    suggestion: LocationSuggestion,
    english_keys: [String; 3],
    full_name_key: String,
}

impl IndexedEntry {
    fn new(entry: GeoEntry) -> Self {
        let suggestion = project(&entry);
        let english_keys = [
            entry.subdistrict_name_en.to_lowercase(),
            entry.district_name_en.to_lowercase(),
            entry.province_name_en.to_lowercase(),
        ];
        let full_name_key = suggestion.full_display_name.to_lowercase();
        Self {
            entry,
            suggestion,
            english_keys,
            full_name_key,
        }
    }

    /// First tier that accepts the query; later tiers are not evaluated.
    fn match_tier(&self, trimmed: &str, lowered: &str) -> Option<MatchTier> {
        if self.english_keys.iter().any(|k| k.contains(lowered)) {
            return Some(MatchTier::EnglishName);
        }

        let e = &self.entry;
        if e.subdistrict_name_th.contains(trimmed)
            || e.district_name_th.contains(trimmed)
            || e.province_name_th.contains(trimmed)
        {
            return Some(MatchTier::ThaiName);
        }

        if self.full_name_key.contains(lowered)
            || self.suggestion.full_display_name_th.contains(trimmed)
        {
            return Some(MatchTier::FullDisplayName);
        }

        None
    }
}

/// Builds the suggestion for one record.
fn project(entry: &GeoEntry) -> LocationSuggestion {
    let (name_en, name_th) = entry.most_specific_names();

    let mut local_names = BTreeMap::new();
    if !name_en.is_empty() {
        local_names.insert("en".to_string(), name_en.to_string());
    }
    if !name_th.is_empty() {
        local_names.insert("th".to_string(), name_th.to_string());
    }

    LocationSuggestion {
        id: entry.id,
        name: name_en.to_string(),
        local_names,
        country: COUNTRY_CODE,
        state: entry.province_name_en.clone(),
        district: entry.district_name_en.clone(),
        subdistrict: entry.subdistrict_name_en.clone(),
        full_display_name: build_display_name(&[
            entry.subdistrict_name_en.as_str(),
            entry.district_name_en.as_str(),
            entry.province_name_en.as_str(),
        ]),
        full_display_name_th: build_display_name(&[
            entry.subdistrict_name_th.as_str(),
            entry.district_name_th.as_str(),
            entry.province_name_th.as_str(),
        ]),
        postal_code: entry.postal_code,
    }
}

/// Substring matcher over the flat geography records.
///
/// Suggestions are projected once in [`FlatMatcher::build`]; searching only
/// reads them, so one matcher can be shared across threads.
#[derive(Debug, Clone)]
pub struct FlatMatcher {
    entries: Vec<IndexedEntry>,
    limit: usize,
}

impl FlatMatcher {
    pub const DEFAULT_LIMIT: usize = 20;

    /// Projects every record into its suggestion.
    ///
    /// # Errors
    /// [`SuggestError::DataLoadError`] when `records` is empty or no record
    /// has a province name. Records without a province name in either
    /// language are skipped with a warning.
    ///
    /// # Examples
    /// ```rust
    /// use thaigeo::{FlatMatcher, GeoEntry};
    ///
    /// let matcher = FlatMatcher::build(vec![GeoEntry {
    ///     id: 1,
    ///     province_name_en: "Khon Kaen".into(),
    ///     province_name_th: "ขอนแก่น".into(),
    ///     district_name_en: "Khao Suan Kwang".into(),
    ///     district_name_th: "เขาสวนกวาง".into(),
    ///     ..Default::default()
    /// }])
    /// .unwrap();
    ///
    /// let hits = matcher.search("khao suan");
    /// assert_eq!(hits[0].full_display_name, "Khao Suan Kwang, Khon Kaen");
    /// ```
    pub fn build(records: Vec<GeoEntry>) -> Result<Self> {
        if records.is_empty() {
            return Err(SuggestError::DataLoadError("dataset is empty".to_string()));
        }

        let mut ids = HashSet::with_capacity(records.len());
        let mut duplicates = 0usize;
        let mut skipped = 0usize;
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            if record.province_name_en.trim().is_empty()
                && record.province_name_th.trim().is_empty()
            {
                warn!("skipping record {}: no province name", record.id);
                skipped += 1;
                continue;
            }
            if !ids.insert(record.id) {
                duplicates += 1;
            }
            entries.push(IndexedEntry::new(record));
        }

        if entries.is_empty() {
            return Err(SuggestError::DataLoadError(format!(
                "no usable records ({} skipped without a province name)",
                skipped
            )));
        }

        debug!(
            "flat matcher built: {} records, {} skipped, {} duplicate ids",
            entries.len(),
            skipped,
            duplicates
        );

        Ok(Self {
            entries,
            limit: Self::DEFAULT_LIMIT,
        })
    }

    /// Overrides the result cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Searches English names, then Thai names, then the joined display names.
    ///
    /// At most one suggestion per record id, in dataset order.
    pub fn search(&self, query: &str) -> Vec<LocationSuggestion> {
        let trimmed = normalize_query(query);
        if trimmed.is_empty() {
            return Vec::new();
        }
        let lowered = trimmed.to_lowercase();

        let mut out = Vec::new();
        let mut seen = HashSet::new();

        for indexed in &self.entries {
            if out.len() >= self.limit {
                break;
            }
            if indexed.match_tier(trimmed, &lowered).is_some()
                && seen.insert(indexed.suggestion.id)
            {
                out.push(indexed.suggestion.clone());
            }
        }

        trace!("flat search {:?} -> {} hits", trimmed, out.len());
        out
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All projected suggestions in dataset order
    pub fn suggestions(&self) -> impl Iterator<Item = &LocationSuggestion> + '_ {
        self.entries.iter().map(|e| &e.suggestion)
    }
}

impl LocationSearch for FlatMatcher {
    type Item = LocationSuggestion;

    fn limit(&self) -> usize {
        self.limit
    }

    fn search(&self, query: &str) -> Vec<LocationSuggestion> {
        FlatMatcher::search(self, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        id: u32,
        province: (&str, &str),
        district: (&str, &str),
        subdistrict: (&str, &str),
        postal_code: u32,
    ) -> GeoEntry {
        GeoEntry {
            id,
            province_code: 0,
            province_name_en: province.0.to_string(),
            province_name_th: province.1.to_string(),
            district_code: 0,
            district_name_en: district.0.to_string(),
            district_name_th: district.1.to_string(),
            subdistrict_code: 0,
            subdistrict_name_en: subdistrict.0.to_string(),
            subdistrict_name_th: subdistrict.1.to_string(),
            postal_code,
        }
    }

    const CHIANG_MAI: (&str, &str) = ("Chiang Mai", "เชียงใหม่");
    const MUEANG_CM: (&str, &str) = ("Mueang Chiang Mai", "เมืองเชียงใหม่");
    const KHON_KAEN: (&str, &str) = ("Khon Kaen", "ขอนแก่น");
    const NONE: (&str, &str) = ("", "");

    fn sample() -> Vec<GeoEntry> {
        vec![
            entry(1, CHIANG_MAI, NONE, NONE, 0),
            entry(2, CHIANG_MAI, MUEANG_CM, NONE, 0),
            entry(3, CHIANG_MAI, MUEANG_CM, ("Si Phum", "ศรีภูมิ"), 50200),
            entry(4, CHIANG_MAI, MUEANG_CM, ("Phra Sing", "พระสิงห์"), 50200),
            entry(5, CHIANG_MAI, ("Chiang Dao", "เชียงดาว"), ("Chiang Dao", "เชียงดาว"), 50170),
            entry(6, KHON_KAEN, ("Mueang Khon Kaen", "เมืองขอนแก่น"), ("Nai Mueang", "ในเมือง"), 40000),
            entry(7, ("Chiang Rai", "เชียงราย"), ("Mueang Chiang Rai", "เมืองเชียงราย"), ("Wiang", "เวียง"), 57000),
        ]
    }

    fn matcher() -> FlatMatcher {
        FlatMatcher::build(sample()).unwrap()
    }

    fn ids(hits: &[LocationSuggestion]) -> Vec<u32> {
        hits.iter().map(|s| s.id).collect()
    }

    // ==================== Display names ====================

    #[test]
    fn test_build_display_name() {
        assert_eq!(build_display_name(&["Si Phum", "Mueang", "Chiang Mai"]), "Si Phum, Mueang, Chiang Mai");
        assert_eq!(build_display_name(&["", "Mueang", "Chiang Mai"]), "Mueang, Chiang Mai");
        assert_eq!(build_display_name(&["", "", "Chiang Mai"]), "Chiang Mai");
        assert_eq!(build_display_name(&["Si Phum", "", "Chiang Mai"]), "Si Phum, Chiang Mai");
        assert_eq!(build_display_name(&["  Si Phum ", "\t"]), "Si Phum");
        assert_eq!(build_display_name(&[]), "");
    }

    #[test]
    fn test_display_name_never_has_stray_separators() {
        let words = ["", " ", "A", "ข"];
        for a in words {
            for b in words {
                for c in words {
                    let name = build_display_name(&[a, b, c]);
                    assert!(!name.starts_with(", "), "{name:?}");
                    assert!(!name.ends_with(", "), "{name:?}");
                    assert!(!name.contains(", , "), "{name:?}");
                    assert_eq!(name.trim(), name);
                }
            }
        }
    }

    // ==================== Projection ====================

    #[test]
    fn test_projection_subdistrict_level() {
        let m = matcher();
        let s = m.suggestions().find(|s| s.id == 3).unwrap();
        assert_eq!(s.name, "Si Phum");
        assert_eq!(s.local_name("en"), Some("Si Phum"));
        assert_eq!(s.local_name("th"), Some("ศรีภูมิ"));
        assert_eq!(s.country, "TH");
        assert_eq!(s.state, "Chiang Mai");
        assert_eq!(s.district, "Mueang Chiang Mai");
        assert_eq!(s.subdistrict, "Si Phum");
        assert_eq!(s.full_display_name, "Si Phum, Mueang Chiang Mai, Chiang Mai");
        assert_eq!(s.full_display_name_th, "ศรีภูมิ, เมืองเชียงใหม่, เชียงใหม่");
        assert_eq!(s.postal_code, 50200);
    }

    #[test]
    fn test_projection_district_and_province_level() {
        let m = matcher();
        let district = m.suggestions().find(|s| s.id == 2).unwrap();
        assert_eq!(district.name, "Mueang Chiang Mai");
        assert_eq!(district.full_display_name, "Mueang Chiang Mai, Chiang Mai");
        assert!(district.subdistrict.is_empty());

        let province = m.suggestions().find(|s| s.id == 1).unwrap();
        assert_eq!(province.name, "Chiang Mai");
        assert_eq!(province.full_display_name, "Chiang Mai");
        assert_eq!(province.full_display_name_th, "เชียงใหม่");
    }

    #[test]
    fn test_projection_missing_english_name() {
        let m = FlatMatcher::build(vec![entry(9, KHON_KAEN, NONE, ("", "บ้านเป็ด"), 40000)]).unwrap();
        let s = m.suggestions().next().unwrap();
        // Thai-only subdistrict still selects the subdistrict level
        assert_eq!(s.name, "");
        assert_eq!(s.local_name("en"), None);
        assert_eq!(s.local_name("th"), Some("บ้านเป็ด"));
        assert_eq!(s.full_display_name, "Khon Kaen");
        assert_eq!(s.full_display_name_th, "บ้านเป็ด, ขอนแก่น");
    }

    // ==================== Construction ====================

    #[test]
    fn test_build_empty_fails() {
        let err = FlatMatcher::build(Vec::new()).unwrap_err();
        assert!(matches!(err, SuggestError::DataLoadError(_)));
    }

    #[test]
    fn test_build_skips_record_without_province() {
        let mut records = sample();
        records.insert(3, entry(42, NONE, MUEANG_CM, NONE, 0));
        records.push(entry(43, (" ", ""), NONE, ("Si Phum", "ศรีภูมิ"), 50200));

        let m = FlatMatcher::build(records).unwrap();
        assert_eq!(m.len(), 7);
        assert!(m.suggestions().all(|s| s.id != 42 && s.id != 43));
        assert_eq!(ids(&m.search("Si Phum")), [3]);
    }

    #[test]
    fn test_build_only_unusable_records_fails() {
        let err = FlatMatcher::build(vec![entry(42, NONE, MUEANG_CM, NONE, 0)]).unwrap_err();
        assert!(matches!(err, SuggestError::DataLoadError(_)));
        assert!(err.to_string().contains("no usable records"));
    }

    #[test]
    fn test_build_keeps_order_and_len() {
        let m = matcher();
        assert_eq!(m.len(), 7);
        assert!(!m.is_empty());
        assert_eq!(m.suggestions().map(|s| s.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
    }

    // ==================== Searching ====================

    #[test]
    fn test_empty_query() {
        let m = matcher();
        assert!(m.search("").is_empty());
        assert!(m.search("   ").is_empty());
    }

    #[test]
    fn test_english_case_insensitive() {
        let m = matcher();
        let lower = m.search("chiang");
        assert_eq!(ids(&lower), [1, 2, 3, 4, 5, 7]);
        assert_eq!(lower, m.search("Chiang"));
        assert_eq!(lower, m.search("CHIANG"));
        assert_eq!(lower, m.search("  chiang  "));
    }

    #[test]
    fn test_thai_substring() {
        let m = matcher();
        assert_eq!(ids(&m.search("เชียง")), [1, 2, 3, 4, 5, 7]);
        assert_eq!(ids(&m.search("พระสิงห์")), [4]);
        assert_eq!(ids(&m.search("เมือง")), [2, 3, 4, 6, 7]);
    }

    #[test]
    fn test_match_tiers() {
        let m = matcher();
        let si_phum = &m.entries[2];
        assert_eq!(si_phum.match_tier("Phum", "phum"), Some(MatchTier::EnglishName));
        assert_eq!(si_phum.match_tier("ศรี", "ศรี"), Some(MatchTier::ThaiName));
        assert_eq!(
            si_phum.match_tier("Si Phum, Mueang", "si phum, mueang"),
            Some(MatchTier::FullDisplayName)
        );
        assert_eq!(si_phum.match_tier("Lampang", "lampang"), None);
    }

    #[test]
    fn test_full_display_name_fallback() {
        let m = matcher();
        assert_eq!(ids(&m.search("Si Phum, Mueang")), [3]);
        assert_eq!(ids(&m.search("ศรีภูมิ, เมืองเชียงใหม่")), [3]);
        assert_eq!(ids(&m.search("mueang chiang mai, chiang")), [2, 3, 4]);
    }

    #[test]
    fn test_mixed_script_query_matches_nothing() {
        // neither joined form mixes English and Thai
        let m = matcher();
        assert!(m.search("Wiang, เมือง").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(matcher().search("Lampang").is_empty());
    }

    #[test]
    fn test_dedup_by_id() {
        let mut records = sample();
        records.push(entry(3, CHIANG_MAI, MUEANG_CM, ("Si Phum", "ศรีภูมิ"), 50200));
        let m = FlatMatcher::build(records).unwrap();
        assert_eq!(m.len(), 8);

        let hits = m.search("si phum");
        assert_eq!(ids(&hits), [3]);
    }

    #[test]
    fn test_cap() {
        let records: Vec<_> = (0..50)
            .map(|i| entry(i, CHIANG_MAI, MUEANG_CM, ("Si Phum", "ศรีภูมิ"), 50200))
            .collect();
        let m = FlatMatcher::build(records).unwrap();

        let hits = m.search("si phum");
        assert_eq!(hits.len(), FlatMatcher::DEFAULT_LIMIT);
        assert_eq!(ids(&hits), (0..20).collect::<Vec<u32>>());

        assert_eq!(m.clone().with_limit(5).search("si phum").len(), 5);
        assert!(m.with_limit(0).search("si phum").is_empty());
    }

    #[test]
    fn test_concurrent_searches() {
        let m = matcher();
        let expected = m.search("chiang");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(m.search("chiang"), expected);
                    }
                });
            }
        });
    }

    #[test]
    fn test_trait_contract() {
        let m = matcher();
        assert_eq!(LocationSearch::limit(&m), 20);
        assert_eq!(LocationSearch::search(&m, "Wiang").len(), 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_suggestion_json_shape() {
        let m = matcher();
        let district = m.suggestions().find(|s| s.id == 2).unwrap();
        let v = serde_json::to_value(district).unwrap();
        assert_eq!(v["full_display_name"], "Mueang Chiang Mai, Chiang Mai");
        assert_eq!(v["local_names"]["th"], "เมืองเชียงใหม่");
        assert!(v.get("subdistrict").is_none());
        assert!(v.get("postal_code").is_none());
    }
}
