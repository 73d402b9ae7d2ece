//! Static risk reference tables, injected into the engine at construction.
//!
//! Registries are plain serde structs so a caller can load a replacement
//! table from JSON; `Default` embeds the reference data set. Lookups are
//! exact string matches on country name / NAF code — an absent key simply
//! contributes no score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discrete sector risk bucket, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorTier {
    VeryHigh,
    High,
    Moderate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRegistry {
    /// FATF black list.
    pub very_high: Vec<String>,
    /// FATF grey list, EU high-risk third countries and tax
    /// non-cooperation jurisdictions.
    pub high: Vec<String>,
    /// Countries on both the FATF and EU lists; scores one point higher.
    pub aggravated: Vec<String>,
}

impl CountryRegistry {
    pub fn is_very_high(&self, country: &str) -> bool {
        self.very_high.iter().any(|c| c == country)
    }

    pub fn is_high(&self, country: &str) -> bool {
        self.high.iter().any(|c| c == country)
    }

    pub fn is_aggravated(&self, country: &str) -> bool {
        self.aggravated.iter().any(|c| c == country)
    }
}

/// NAF activity code → sector label, per tier. `BTreeMap` keeps exported
/// registries in a stable key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRegistry {
    pub very_high: BTreeMap<String, String>,
    pub high: BTreeMap<String, String>,
    pub moderate: BTreeMap<String, String>,
}

impl SectorRegistry {
    /// Tiers are checked very-high → high → moderate; first match wins.
    pub fn lookup(&self, code: &str) -> Option<(SectorTier, &str)> {
        if let Some(label) = self.very_high.get(code) {
            return Some((SectorTier::VeryHigh, label));
        }
        if let Some(label) = self.high.get(code) {
            return Some((SectorTier::High, label));
        }
        self.moderate
            .get(code)
            .map(|label| (SectorTier::Moderate, label.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRegistry {
    pub countries: CountryRegistry,
    pub sectors: SectorRegistry,
    /// Jurisdiction the servicing establishment operates from; an account
    /// held there is not treated as held abroad.
    pub home_country: String,
}

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

fn to_vec(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|c| c.to_string()).collect()
}

/// FATF + EU combined list (aggravated scoring).
const COUNTRIES_AGGRAVATED: &[&str] = &[
    "Afghanistan",
    "Algérie",
    "Angola",
    "Burkina Faso",
    "Cameroun",
    "Côte d'Ivoire",
    "République démocratique du Congo",
    "Haïti",
    "Kenya",
    "Laos",
    "Liban",
    "Mali",
    "Monaco",
    "Mozambique",
    "Myanmar",
    "Namibie",
    "Népal",
    "Nigeria",
    "Afrique du Sud",
    "Soudan du Sud",
    "Syrie",
    "Tanzanie",
    "Trinité-et-Tobago",
    "Vanuatu",
    "Venezuela",
    "Vietnam",
    "Yémen",
];

/// FATF black list.
const COUNTRIES_VERY_HIGH: &[&str] = &["Corée du Nord", "Iran", "Myanmar"];

/// FATF grey list members not also on the EU list.
const COUNTRIES_FATF_ONLY: &[&str] = &[
    "Albanie",
    "Bulgarie",
    "Cambodge",
    "Croatie",
    "Jordanie",
    "Maroc",
    "Nicaragua",
    "Pakistan",
    "Turquie",
    "Zimbabwe",
];

/// EU tax non-cooperation list and national equivalents.
const COUNTRIES_TAX_LIST: &[&str] = &[
    "Anguilla",
    "Antigua-et-Barbuda",
    "Bahamas",
    "Belize",
    "Fidji",
    "Fédération de Russie",
    "Guam",
    "Îles Turques-et-Caïques",
    "Îles Vierges américaines",
    "Palaos",
    "Panama",
    "Samoa",
    "Samoa américaines",
    "Seychelles",
];

impl Default for RiskRegistry {
    fn default() -> Self {
        let mut high: Vec<String> = Vec::new();
        // The high tier is the union of the FATF+EU list (minus Myanmar,
        // which sits in the very-high tier), the FATF-only list and the
        // tax non-cooperation list.
        for c in COUNTRIES_AGGRAVATED {
            if !COUNTRIES_VERY_HIGH.contains(c) {
                high.push(c.to_string());
            }
        }
        high.extend(to_vec(COUNTRIES_FATF_ONLY));
        high.extend(to_vec(COUNTRIES_TAX_LIST));

        RiskRegistry {
            countries: CountryRegistry {
                very_high: to_vec(COUNTRIES_VERY_HIGH),
                high,
                aggravated: to_vec(COUNTRIES_AGGRAVATED),
            },
            sectors: SectorRegistry {
                very_high: to_map(&[
                    ("66.12Z", "Courtage de valeurs mobilières et de marchandises"),
                    ("92.00Z", "Organisation de jeux de hasard et d'argent"),
                    ("64.99Z", "Autres intermédiations monétaires (crypto-actifs)"),
                    ("43.3", "Travaux de finition (peinture, plâtrerie)"),
                    ("43.2", "Travaux d'installation électrique et plomberie"),
                ]),
                high: to_map(&[
                    ("41.2", "Construction de bâtiments résidentiels et non résidentiels"),
                    ("41.20A", "Construction de maisons individuelles"),
                    ("41.20B", "Construction d'autres bâtiments"),
                    ("43.1", "Démolition et préparation des sites"),
                    ("43.9", "Autres travaux de construction spécialisés"),
                    ("42", "Génie civil"),
                    ("68.31Z", "Agences immobilières"),
                    ("47.77Z", "Commerce de détail d'articles d'horlogerie et de bijouterie"),
                    ("69.10Z", "Activités juridiques"),
                    ("69.20Z", "Activités comptables"),
                    ("82.11Z", "Services administratifs combinés de bureau (domiciliation)"),
                    ("47.91B", "Vente à distance (e-commerce)"),
                ]),
                moderate: to_map(&[("41.1", "Promotion immobilière")]),
            },
            home_country: "France".to_string(),
        }
    }
}
