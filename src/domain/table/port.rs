//! Table lookup port

use async_trait::async_trait;

use super::model::TableSnapshot;
use crate::support::errors::AppResult;

#[async_trait]
pub trait TablePort: Send + Sync {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<TableSnapshot>>;
}
