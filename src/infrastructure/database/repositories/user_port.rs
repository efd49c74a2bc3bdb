//! SeaORM implementation of UserPort

use async_trait::async_trait;
use log::debug;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::user::{UserPort, UserSnapshot};
use crate::infrastructure::database::entities::user;
use crate::support::errors::{AppResult, InfraError};

pub struct SeaOrmUserPort {
    db: DatabaseConnection,
}

impl SeaOrmUserPort {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserPort for SeaOrmUserPort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<UserSnapshot>> {
        debug!("Loading user snapshot: {}", id);

        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::from)?;
        Ok(model.map(|m| UserSnapshot {
            user_id: m.id,
            is_active: m.is_active,
        }))
    }
}
