use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMatchingCardData {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub match_score: f64,
    pub sector: String,
    pub location: String,
    pub budget: String,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub special_features: Vec<String>,
}
