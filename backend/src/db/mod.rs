pub mod memory;
pub mod pg;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::news::ActiveNews;

/// Read access to the generated news store. Postgres in production, an
/// in-memory table for tests and database-less local runs.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// The entry currently flagged for display, if any.
    ///
    /// Zero active rows is a normal state, not an error. Should more than
    /// one row be active the first one found wins; no ordering is defined.
    async fn active_entry(&self) -> Result<Option<ActiveNews>>;
}
