//! SeaORM implementation of RestaurantPort

use async_trait::async_trait;
use log::debug;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::restaurant::{RestaurantPort, RestaurantSnapshot};
use crate::infrastructure::database::entities::restaurant;
use crate::support::errors::{AppResult, InfraError};

pub struct SeaOrmRestaurantPort {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantPort {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantPort for SeaOrmRestaurantPort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<RestaurantSnapshot>> {
        debug!("Loading restaurant snapshot: {}", id);

        let Some(model) = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::from)?
        else {
            return Ok(None);
        };

        let days: Vec<String> =
            serde_json::from_str(&model.days_open).map_err(InfraError::from)?;
        let snapshot = RestaurantSnapshot::from_raw(
            model.id,
            model.is_active,
            &model.open_time,
            &model.close_time,
            &days,
        )?;
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use chrono::{TimeZone, Utc, Weekday};
    use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};
    use sea_orm_migration::MigratorTrait;

    async fn setup() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert(db: &DatabaseConnection, id: &str, days_open: &str) {
        restaurant::ActiveModel {
            id: Set(id.into()),
            is_active: Set(true),
            open_time: Set("10:00".into()),
            close_time: Set("22:00".into()),
            days_open: Set(days_open.into()),
            created_at: Set(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn loads_and_parses_a_snapshot() {
        let db = setup().await;
        insert(&db, "rest-1", r#"["Monday","Saturday"]"#).await;

        let port = SeaOrmRestaurantPort::new(db);
        let snapshot = port.load_by_id("rest-1").await.unwrap().unwrap();
        assert!(snapshot.is_active);
        assert!(snapshot.is_open_on(Weekday::Sat));
        assert!(!snapshot.is_open_on(Weekday::Sun));

        assert!(port.load_by_id("rest-9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_days_open_column_is_an_error() {
        let db = setup().await;
        insert(&db, "rest-bad", "not json").await;

        let port = SeaOrmRestaurantPort::new(db);
        assert!(port.load_by_id("rest-bad").await.is_err());
    }
}
