use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Seasonal difficulty category of a pass (e.g. "1A", "2B").
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub winter: String,
    pub summer: String,
    pub autumn: String,
    pub spring: String,

    #[sea_orm(has_one)]
    pub pereval: HasOne<super::pereval::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
