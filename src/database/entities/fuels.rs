use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fuel lookup row: display name, default measurement unit, and emission
/// factors in tonnes per unit burned.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fuels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Meas")]
    pub meas: String,
    #[serde(rename = "tCO2")]
    pub t_co2: f64,
    #[serde(rename = "tCH4")]
    pub t_ch4: f64,
    #[serde(rename = "tN2O")]
    pub t_n2o: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
