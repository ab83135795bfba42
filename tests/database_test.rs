//! Database functionality tests
//!
//! Tests for migrations, reference-data seeding, and entity operations.

use anyhow::Result;
use carbonledger::database::entities::{fuels, industries, renewables, user_data};
use carbonledger::database::migrations::Migrator;
use carbonledger::database::seed_data::seed_reference_data;
use carbonledger::database::setup_database;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

/// Create a test database connection with migrations applied.
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    // All four tables exist and start empty
    let industries = industries::Entity::find().all(&db).await?;
    assert_eq!(industries.len(), 0);

    let fuels = fuels::Entity::find().all(&db).await?;
    assert_eq!(fuels.len(), 0);

    let renewables = renewables::Entity::find().all(&db).await?;
    assert_eq!(renewables.len(), 0);

    let rows = user_data::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_reference_seeding_is_idempotent() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    seed_reference_data(&db).await?;

    let industries = industries::Entity::find().all(&db).await?;
    let fuels = fuels::Entity::find().all(&db).await?;
    let renewables = renewables::Entity::find().all(&db).await?;
    assert!(!industries.is_empty());
    assert!(!fuels.is_empty());
    assert!(!renewables.is_empty());

    // A second seed pass leaves the tables untouched
    seed_reference_data(&db).await?;

    assert_eq!(industries::Entity::find().all(&db).await?.len(), industries.len());
    assert_eq!(fuels::Entity::find().all(&db).await?.len(), fuels.len());
    assert_eq!(
        renewables::Entity::find().all(&db).await?.len(),
        renewables.len()
    );

    Ok(())
}

#[tokio::test]
async fn test_user_data_insert_via_entity() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let row = user_data::ActiveModel {
        user_id: Set(Some("u1".to_string())),
        name: Set(Some("Jane".to_string())),
        email: Set(Some("jane@x.com".to_string())),
        electricity: Set(Some("1200.5".to_string())),
        tot_t_co2_eq: Set(Some("3.2".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert!(row.id > 0);

    let found = user_data::Entity::find_by_id(row.id)
        .one(&db)
        .await?
        .expect("row should exist");

    assert_eq!(found.user_id.as_deref(), Some("u1"));
    assert_eq!(found.email.as_deref(), Some("jane@x.com"));
    // Values are stored as opaque text, unset columns as NULL
    assert_eq!(found.electricity.as_deref(), Some("1200.5"));
    assert_eq!(found.surname, None);
    assert_eq!(found.net_t_co2_eq, None);

    Ok(())
}

#[tokio::test]
async fn test_migration_down_up_cycle() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    seed_reference_data(&db).await?;

    Migrator::down(&db, None).await?;
    Migrator::up(&db, None).await?;

    // Fresh schema: tables exist again, empty, and reseedable
    assert_eq!(industries::Entity::find().all(&db).await?.len(), 0);

    seed_reference_data(&db).await?;
    assert!(!industries::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
