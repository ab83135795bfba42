use sea_orm::entity::prelude::*;

/// One completed emissions submission: the store-assigned key plus the 53
/// positional data columns, all nullable opaque text. Field order matches
/// `crate::record::COLUMNS`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub activities: Option<String>,
    pub intent: Option<String>,
    pub electricity: Option<String>,
    pub elec_t_co2: Option<String>,
    pub fuel1: Option<String>,
    pub fuel1_con: Option<String>,
    pub fuel1_meas: Option<String>,
    pub fuel1_t_co2: Option<String>,
    pub fuel1_t_ch4: Option<String>,
    pub fuel1_t_n2o: Option<String>,
    pub fuel2: Option<String>,
    pub fuel2_con: Option<String>,
    pub fuel2_meas: Option<String>,
    pub fuel2_t_co2: Option<String>,
    pub fuel2_t_ch4: Option<String>,
    pub fuel2_t_n2o: Option<String>,
    pub fuel3: Option<String>,
    pub fuel3_con: Option<String>,
    pub fuel3_meas: Option<String>,
    pub fuel3_t_co2: Option<String>,
    pub fuel3_t_ch4: Option<String>,
    pub fuel3_t_n2o: Option<String>,
    pub fuel4: Option<String>,
    pub fuel4_con: Option<String>,
    pub fuel4_meas: Option<String>,
    pub fuel4_t_co2: Option<String>,
    pub fuel4_t_ch4: Option<String>,
    pub fuel4_t_n2o: Option<String>,
    pub ren1: Option<String>,
    pub ren1_con: Option<String>,
    pub ren1_meas: Option<String>,
    pub ren1_t_co2_of: Option<String>,
    pub ren2: Option<String>,
    pub ren2_con: Option<String>,
    pub ren2_meas: Option<String>,
    pub ren2_t_co2_of: Option<String>,
    pub ren3: Option<String>,
    pub ren3_con: Option<String>,
    pub ren3_meas: Option<String>,
    pub ren3_t_co2_of: Option<String>,
    pub co2_credit: Option<String>,
    pub tot_t_co2: Option<String>,
    pub tot_t_ch4: Option<String>,
    pub tot_t_n2o: Option<String>,
    pub tot_t_co2_eq: Option<String>,
    pub tot_t_co2_of: Option<String>,
    pub net_t_co2_eq: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
