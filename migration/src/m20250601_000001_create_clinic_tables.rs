use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub(crate) enum Clinics {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UsersToClinics {
    Table,
    UserId,
    ClinicId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // gen_random_uuid()
        m.get_connection()
            .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto";"#)
            .await?;

        m.create_table(
            Table::create()
                .table(Users::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Users::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()"))
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Clinics::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Clinics::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()"))
                )
                .col(ColumnDef::new(Clinics::Name).text().not_null())
                .col(ColumnDef::new(Clinics::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Clinics::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // membership join, FKs without cascade
        m.create_table(
            Table::create()
                .table(UsersToClinics::Table)
                .if_not_exists()
                .col(ColumnDef::new(UsersToClinics::UserId).uuid().not_null())
                .col(ColumnDef::new(UsersToClinics::ClinicId).uuid().not_null())
                .col(ColumnDef::new(UsersToClinics::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(UsersToClinics::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_users_to_clinics")
                        .col(UsersToClinics::UserId)
                        .col(UsersToClinics::ClinicId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_users_to_clinics_user")
                        .from(UsersToClinics::Table, UsersToClinics::UserId)
                        .to(Users::Table, Users::Id)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_users_to_clinics_clinic")
                        .from(UsersToClinics::Table, UsersToClinics::ClinicId)
                        .to(Clinics::Table, Clinics::Id)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_users_to_clinics_clinic")
                .table(UsersToClinics::Table)
                .col(UsersToClinics::ClinicId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(UsersToClinics::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Clinics::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Users::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
