//! Restaurant entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub is_active: bool,

    /// Opening time as "HH:MM"
    pub open_time: String,

    /// Closing time as "HH:MM"
    pub close_time: String,

    /// JSON array of weekday names, e.g. `["Monday","Tuesday"]`
    pub days_open: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
