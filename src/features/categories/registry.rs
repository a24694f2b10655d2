use lazy_static::lazy_static;

use crate::features::categories::models::{CategoryConfig, LocationCategory};

lazy_static! {
    static ref CATEGORIES: Vec<CategoryConfig> = vec![
        CategoryConfig {
            id: LocationCategory::Food,
            label_vi: "Ẩm thực",
            label_cs: "Jídlo",
            label_de: "Essen",
            color: "#ef4444",
            icon_name: "utensils",
        },
        CategoryConfig {
            id: LocationCategory::Shopping,
            label_vi: "Mua sắm",
            label_cs: "Nákupy",
            label_de: "Einkaufen",
            color: "#3b82f6",
            icon_name: "shopping-bag",
        },
        CategoryConfig {
            id: LocationCategory::Service,
            label_vi: "Dịch vụ",
            label_cs: "Služby",
            label_de: "Dienstleistungen",
            color: "#8b5cf6",
            icon_name: "wrench",
        },
        CategoryConfig {
            id: LocationCategory::Wc,
            label_vi: "Nhà vệ sinh",
            label_cs: "Toalety",
            label_de: "Toiletten",
            color: "#64748b",
            icon_name: "restroom",
        },
        CategoryConfig {
            id: LocationCategory::Entrance,
            label_vi: "Lối vào",
            label_cs: "Vchod",
            label_de: "Eingang",
            color: "#22c55e",
            icon_name: "door-open",
        },
        CategoryConfig {
            id: LocationCategory::Hotel,
            label_vi: "Khách sạn",
            label_cs: "Hotel",
            label_de: "Hotel",
            color: "#eab308",
            icon_name: "bed",
        },
    ];
}

/// Lookup over the static category metadata.
pub struct CategoryRegistry;

impl CategoryRegistry {
    pub fn all() -> &'static [CategoryConfig] {
        &CATEGORIES
    }

    pub fn config_for(category: LocationCategory) -> &'static CategoryConfig {
        let index = match category {
            LocationCategory::Food => 0,
            LocationCategory::Shopping => 1,
            LocationCategory::Service => 2,
            LocationCategory::Wc => 3,
            LocationCategory::Entrance => 4,
            LocationCategory::Hotel => 5,
        };
        &CATEGORIES[index]
    }
}
