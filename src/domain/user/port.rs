//! User lookup port

use async_trait::async_trait;

use super::model::UserSnapshot;
use crate::support::errors::AppResult;

#[async_trait]
pub trait UserPort: Send + Sync {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<UserSnapshot>>;
}
