use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named place and the collaborative session link shared for it.
///
/// The server is the only writer of every field. `id` and the `created_by*`
/// pair never change after insert; `updated_by*` and `updated_at` are
/// refreshed by each successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    /// External jam URL. Empty when an editor cleared it.
    pub jam_link: String,
    pub created_by: String,
    pub created_by_name: String,
    pub updated_by: String,
    pub updated_by_name: String,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// URL slug for the detail page, e.g. `Coffee Shop` -> `coffee-shop`.
    pub fn slug(&self) -> String {
        crate::slug::slug_for(&self.name)
    }

    pub fn has_jam_link(&self) -> bool {
        !self.jam_link.trim().is_empty()
    }

    /// Whether `email` created this location.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.created_by == email
    }
}
