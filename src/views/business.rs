use serde::Serialize;

use crate::models::BusinessMatchingCardData;

pub const FALLBACK_LOGO_URL: &str = "https://via.placeholder.com/150/F0F3F7/8D94A8?text=Logo";

const MAX_BADGES: usize = 3;
const DEFAULT_BADGES: [&str; 3] = ["Verified", "Respon Cepat", "Terdaftar OJK"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCardView {
    pub id: u64,
    pub name: String,
    pub logo_url: String,
    pub badges: Vec<String>,
    pub sector: String,
    pub location: String,
    pub budget: String,
    pub detail_label: String,
    pub more_label: String,
}

impl BusinessCardView {
    pub fn build(vendor: &BusinessMatchingCardData) -> Self {
        let badges = if vendor.special_features.is_empty() {
            DEFAULT_BADGES.iter().map(|b| b.to_string()).collect()
        } else {
            vendor
                .special_features
                .iter()
                .take(MAX_BADGES)
                .cloned()
                .collect()
        };

        Self {
            id: vendor.id,
            name: vendor.name.clone(),
            logo_url: vendor
                .logo_url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(FALLBACK_LOGO_URL)
                .to_string(),
            badges,
            sector: vendor.sector.clone(),
            location: vendor.location.clone(),
            budget: vendor.budget.clone(),
            detail_label: format!("Lihat detail untuk {}", vendor.name),
            more_label: format!("Selengkapnya tentang {}", vendor.name),
        }
    }
}
