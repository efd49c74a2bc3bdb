//! Restaurant lookup port

use async_trait::async_trait;

use super::model::RestaurantSnapshot;
use crate::support::errors::AppResult;

/// Supplies restaurant operating metadata. Implemented outside the core;
/// implementations may batch or cache behind this interface.
#[async_trait]
pub trait RestaurantPort: Send + Sync {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<RestaurantSnapshot>>;
}
