//! Location data structures

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Country code carried by every suggestion.
pub const COUNTRY_CODE: &str = "TH";

/// A district (amphoe) in the static hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct District {
    pub name_th: &'static str,
    pub name_en: &'static str,
}

impl District {
    pub const fn new(name_th: &'static str, name_en: &'static str) -> Self {
        Self { name_th, name_en }
    }
}

/// A province (changwat) with its districts in source order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Province {
    pub name_th: &'static str,
    pub name_en: &'static str,
    pub districts: &'static [District],
}

impl Province {
    pub const fn new(
        name_th: &'static str,
        name_en: &'static str,
        districts: &'static [District],
    ) -> Self {
        Self {
            name_th,
            name_en,
            districts,
        }
    }
}

/// Administrative level, from least to most specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdminLevel {
    Province,
    District,
    Subdistrict,
}

/// One flat record of the geography dataset.
///
/// Subdistrict fields are empty for district-level records, district fields
/// are empty for province-level records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct GeoEntry {
    pub id: u32,
    pub province_code: u32,
    pub province_name_en: String,
    pub province_name_th: String,
    pub district_code: u32,
    pub district_name_en: String,
    pub district_name_th: String,
    pub subdistrict_code: u32,
    pub subdistrict_name_en: String,
    pub subdistrict_name_th: String,
    pub postal_code: u32,
}

impl GeoEntry {
    /// The deepest level that has a name in either language
    pub fn level(&self) -> AdminLevel {
        if !self.subdistrict_name_en.is_empty() || !self.subdistrict_name_th.is_empty() {
            AdminLevel::Subdistrict
        } else if !self.district_name_en.is_empty() || !self.district_name_th.is_empty() {
            AdminLevel::District
        } else {
            AdminLevel::Province
        }
    }

    /// `(english, thai)` names of the most specific level
    pub fn most_specific_names(&self) -> (&str, &str) {
        match self.level() {
            AdminLevel::Subdistrict => (
                self.subdistrict_name_en.as_str(),
                self.subdistrict_name_th.as_str(),
            ),
            AdminLevel::District => (
                self.district_name_en.as_str(),
                self.district_name_th.as_str(),
            ),
            AdminLevel::Province => (
                self.province_name_en.as_str(),
                self.province_name_th.as_str(),
            ),
        }
    }
}

/// Kind of a hierarchy suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SuggestionKind {
    Province,
    District,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Province => f.write_str("Province"),
            SuggestionKind::District => f.write_str("District"),
        }
    }
}

/// A suggestion from the static province/district hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct AdminSuggestion {
    /// Display name, Thai unless the query was not Thai
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub name_en: String,
    pub country: &'static str,
    pub admin_area1: String,
    pub admin_area1_en: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub admin_area2: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub admin_area2_en: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SuggestionKind,
}

impl AdminSuggestion {
    pub fn province(province: &Province) -> Self {
        Self {
            name: province.name_th.to_string(),
            name_en: province.name_en.to_string(),
            country: COUNTRY_CODE,
            admin_area1: province.name_th.to_string(),
            admin_area1_en: province.name_en.to_string(),
            admin_area2: String::new(),
            admin_area2_en: String::new(),
            kind: SuggestionKind::Province,
        }
    }

    /// Combined "district, province" suggestion
    pub fn district(district: &District, province: &Province) -> Self {
        Self {
            name: format!("{}, {}", district.name_th, province.name_th),
            name_en: format!("{}, {}", district.name_en, province.name_en),
            country: COUNTRY_CODE,
            admin_area1: province.name_th.to_string(),
            admin_area1_en: province.name_en.to_string(),
            admin_area2: district.name_th.to_string(),
            admin_area2_en: district.name_en.to_string(),
            kind: SuggestionKind::District,
        }
    }

    /// English display name: `name_en`, falling back to the province name
    pub fn english_name(&self) -> &str {
        if self.name_en.is_empty() {
            &self.admin_area1_en
        } else {
            &self.name_en
        }
    }
}

/// A suggestion projected from one [`GeoEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LocationSuggestion {
    /// Source record id
    pub id: u32,
    /// English name of the most specific level
    pub name: String,
    /// `en`/`th` names of the most specific level
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
    pub local_names: BTreeMap<String, String>,
    pub country: &'static str,
    /// Province name in English
    pub state: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub district: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub subdistrict: String,
    /// "Subdistrict, District, Province"
    pub full_display_name: String,
    pub full_display_name_th: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub postal_code: u32,
}

#[cfg(feature = "serde")]
fn is_zero(v: &u32) -> bool {
    *v == 0
}

impl LocationSuggestion {
    /// Name in the given language (`"en"` or `"th"`)
    pub fn local_name(&self, lang: &str) -> Option<&str> {
        self.local_names.get(lang).map(String::as_str)
    }
}
