use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A generated news/art pair as persisted by the workflow pipeline.
///
/// This service only ever reads these rows. Creation, activation and
/// retention are owned by the external pipeline, `created_at` included.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct NewsArtEntry {
    pub id: i32,
    pub headline: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Wire projection of the active entry returned by `get_active_news`.
#[derive(FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveNews {
    pub headline: String,
    pub description: String,
    pub image_url: String,
}

impl From<NewsArtEntry> for ActiveNews {
    fn from(entry: NewsArtEntry) -> Self {
        Self {
            headline: entry.headline,
            description: entry.description,
            image_url: entry.image_url,
        }
    }
}
