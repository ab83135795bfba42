use anyhow::Result;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{fuels, industries, renewables};

/// Populate the three lookup tables on first boot. The reference lists are
/// read-only at runtime, so an already-populated store is left untouched.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<()> {
    let existing = industries::Entity::find().one(db).await?;

    if existing.is_some() {
        info!("Reference data already present, skipping seed");
        return Ok(());
    }

    info!("Seeding reference data");

    let industry_names = vec![
        "Agriculture",
        "Construction",
        "Education",
        "Energy",
        "Finance",
        "Healthcare",
        "Hospitality",
        "Manufacturing",
        "Mining",
        "Retail",
        "Services",
        "Technology",
        "Transport",
    ];

    let industry_models: Vec<industries::ActiveModel> = industry_names
        .into_iter()
        .map(|name| industries::ActiveModel {
            industry: Set(name.to_string()),
        })
        .collect();

    industries::Entity::insert_many(industry_models)
        .exec_without_returning(db)
        .await?;

    // (name, unit, tCO2, tCH4, tN2O) per unit burned
    let fuels_data = vec![
        ("Coal", "tonne", 2.40496, 0.00030, 0.00004),
        ("Diesel", "litre", 0.00268, 0.00000011, 0.00000014),
        ("Heavy Fuel Oil", "litre", 0.00318, 0.00000012, 0.00000016),
        ("LPG", "litre", 0.00151, 0.00000006, 0.00000002),
        ("Natural Gas", "m3", 0.00203, 0.00000008, 0.00000004),
        ("Petrol", "litre", 0.00233, 0.00000024, 0.00000007),
    ];

    let fuel_models: Vec<fuels::ActiveModel> = fuels_data
        .into_iter()
        .map(|(fuel, meas, t_co2, t_ch4, t_n2o)| fuels::ActiveModel {
            fuel: Set(fuel.to_string()),
            meas: Set(meas.to_string()),
            t_co2: Set(t_co2),
            t_ch4: Set(t_ch4),
            t_n2o: Set(t_n2o),
        })
        .collect();

    fuels::Entity::insert_many(fuel_models)
        .exec_without_returning(db)
        .await?;

    // (name, kWh, MWh, GWh) conversion factors
    let renewables_data = vec![
        ("Biomass", 1.0, 1000.0, 1_000_000.0),
        ("Hydro", 1.0, 1000.0, 1_000_000.0),
        ("Solar", 1.0, 1000.0, 1_000_000.0),
        ("Wind", 1.0, 1000.0, 1_000_000.0),
    ];

    let renewable_models: Vec<renewables::ActiveModel> = renewables_data
        .into_iter()
        .map(|(renewable, kwh, mwh, gwh)| renewables::ActiveModel {
            renewable: Set(renewable.to_string()),
            kwh: Set(kwh),
            mwh: Set(mwh),
            gwh: Set(gwh),
        })
        .collect();

    renewables::Entity::insert_many(renewable_models)
        .exec_without_returning(db)
        .await?;

    info!("Reference data seeded");
    Ok(())
}
