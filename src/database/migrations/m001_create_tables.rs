use sea_orm_migration::prelude::*;

use crate::record;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookup tables: keyed by display name, no surrogate ids
        manager
            .create_table(
                Table::create()
                    .table(Industries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Industries::Industry)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fuels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fuels::Fuel)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fuels::Meas).string().not_null())
                    .col(ColumnDef::new(Fuels::TCo2).double().not_null())
                    .col(ColumnDef::new(Fuels::TCh4).double().not_null())
                    .col(ColumnDef::new(Fuels::TN2o).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Renewables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Renewables::Renewable)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Renewables::Kwh).double().not_null())
                    .col(ColumnDef::new(Renewables::Mwh).double().not_null())
                    .col(ColumnDef::new(Renewables::Gwh).double().not_null())
                    .to_owned(),
            )
            .await?;

        // Results table: auto key plus one nullable text column per entry in
        // record::COLUMNS, so the schema and the ingestion INSERT cannot
        // drift apart.
        let mut user_data = Table::create();
        user_data.table(UserData::Table).if_not_exists().col(
            ColumnDef::new(UserData::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        );
        for column in record::COLUMNS {
            user_data.col(ColumnDef::new(Alias::new(column)).string());
        }
        manager.create_table(user_data.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Renewables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fuels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Industries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Industries {
    Table,
    Industry,
}

#[derive(Iden)]
enum Fuels {
    Table,
    Fuel,
    Meas,
    #[iden = "t_co2"]
    TCo2,
    #[iden = "t_ch4"]
    TCh4,
    #[iden = "t_n2o"]
    TN2o,
}

#[derive(Iden)]
enum Renewables {
    Table,
    Renewable,
    Kwh,
    Mwh,
    Gwh,
}

#[derive(Iden)]
enum UserData {
    Table,
    Id,
}
