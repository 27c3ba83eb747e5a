use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coords")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Decimal degrees, kept as submitted.
    pub latitude: String,
    /// Decimal degrees, kept as submitted.
    pub longitude: String,
    pub height: i32, // in meters

    #[sea_orm(has_one)]
    pub pereval: HasOne<super::pereval::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
