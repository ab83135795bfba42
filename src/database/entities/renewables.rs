use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Renewable energy lookup row with conversion factors to each unit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "renewables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "Renewable")]
    pub renewable: String,
    #[serde(rename = "kWh")]
    pub kwh: f64,
    #[serde(rename = "MWh")]
    pub mwh: f64,
    #[serde(rename = "GWh")]
    pub gwh: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
