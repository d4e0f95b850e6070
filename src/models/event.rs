use serde::{Deserialize, Serialize};

/// Event summary as supplied by the event catalog. Display strings are
/// already formatted upstream and are rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub name: String,
    pub date_display: String,
    pub time_display: String,
    #[serde(default)]
    pub timezone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}
