use serde::{Deserialize, Serialize};

use crate::shared::types::Language;

/// Fixed category enumeration of the market directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationCategory {
    Food,
    Shopping,
    Service,
    Wc,
    Entrance,
    Hotel,
}

impl std::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationCategory::Food => write!(f, "FOOD"),
            LocationCategory::Shopping => write!(f, "SHOPPING"),
            LocationCategory::Service => write!(f, "SERVICE"),
            LocationCategory::Wc => write!(f, "WC"),
            LocationCategory::Entrance => write!(f, "ENTRANCE"),
            LocationCategory::Hotel => write!(f, "HOTEL"),
        }
    }
}

/// Static presentation metadata for a category: localized label, marker
/// color, icon name. Supplied to view layers, never mutated by this crate.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub id: LocationCategory,
    pub label_vi: &'static str,
    pub label_cs: &'static str,
    pub label_de: &'static str,
    pub color: &'static str,
    pub icon_name: &'static str,
}

impl CategoryConfig {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Vi => self.label_vi,
            Language::Cs => self.label_cs,
            Language::De => self.label_de,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&LocationCategory::Wc).unwrap(),
            "\"WC\""
        );
        assert_eq!(
            serde_json::from_str::<LocationCategory>("\"ENTRANCE\"").unwrap(),
            LocationCategory::Entrance
        );
    }
}
