use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The person who submitted a pass report.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub email: String,
    pub fam: String,  // family name
    pub name: String, // given name
    pub otc: String,  // patronymic
    pub phone: String,

    #[sea_orm(has_one)]
    pub pereval: HasOne<super::pereval::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
