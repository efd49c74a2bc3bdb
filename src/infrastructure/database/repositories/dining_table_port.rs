//! SeaORM implementation of TablePort

use async_trait::async_trait;
use log::debug;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::table::{TablePort, TableSnapshot};
use crate::infrastructure::database::entities::dining_table;
use crate::support::errors::{AppResult, DomainError, InfraError};

pub struct SeaOrmTablePort {
    db: DatabaseConnection,
}

impl SeaOrmTablePort {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TablePort for SeaOrmTablePort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<TableSnapshot>> {
        debug!("Loading table snapshot: {}", id);

        let Some(model) = dining_table::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::from)?
        else {
            return Ok(None);
        };

        let capacity = u32::try_from(model.capacity).map_err(|_| {
            DomainError::InvalidReservationData(format!(
                "stored table capacity is negative: {}",
                model.capacity
            ))
        })?;
        Ok(Some(TableSnapshot {
            table_id: model.id,
            restaurant_id: model.restaurant_id,
            capacity,
        }))
    }
}
