use sea_orm_migration::{prelude::*, sea_query::extension::postgres::Type};

use super::m20250601_000001_create_clinic_tables::Clinics;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Doctors {
    Table,
    Id,
    Name,
    AvatarImageUrl,
    Speciality,
    AppointmentPriceInCents,
    AvailableFromWeekDay,
    AvailableToWeekDay,
    AvailableFromTime,
    AvailableToTime,
    ClinicId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Patients {
    Table,
    Id,
    Name,
    Email,
    #[sea_orm(iden = "phone")]
    PhoneNumber,
    Sex,
    ClinicId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PatientSex {
    #[sea_orm(iden = "patient_sex")]
    Enum,
    Male,
    Female,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_type(
            Type::create()
                .as_enum(PatientSex::Enum)
                .values([PatientSex::Male, PatientSex::Female])
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Doctors::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Doctors::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()"))
                )
                .col(ColumnDef::new(Doctors::Name).text().not_null())
                .col(ColumnDef::new(Doctors::AvatarImageUrl).text().null())
                .col(ColumnDef::new(Doctors::Speciality).text().not_null())
                .col(ColumnDef::new(Doctors::AppointmentPriceInCents).integer().not_null())
                .col(ColumnDef::new(Doctors::AvailableFromWeekDay).integer().not_null())
                .col(ColumnDef::new(Doctors::AvailableToWeekDay).integer().not_null())
                .col(ColumnDef::new(Doctors::AvailableFromTime).time().not_null())
                .col(ColumnDef::new(Doctors::AvailableToTime).time().not_null())
                .col(ColumnDef::new(Doctors::ClinicId).uuid().not_null())
                .col(ColumnDef::new(Doctors::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Doctors::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_doctors_clinic")
                        .from(Doctors::Table, Doctors::ClinicId)
                        .to(Clinics::Table, Clinics::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_doctors_clinic_id")
                .table(Doctors::Table)
                .col(Doctors::ClinicId)
                .to_owned(),
        ).await?;

        // email intentionally carries no unique index
        m.create_table(
            Table::create()
                .table(Patients::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Patients::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()"))
                )
                .col(ColumnDef::new(Patients::Name).text().not_null())
                .col(ColumnDef::new(Patients::Email).text().not_null())
                .col(ColumnDef::new(Patients::PhoneNumber).text().not_null())
                .col(
                    ColumnDef::new(Patients::Sex)
                        .enumeration(PatientSex::Enum, [PatientSex::Male, PatientSex::Female])
                        .not_null()
                )
                .col(ColumnDef::new(Patients::ClinicId).uuid().not_null())
                .col(ColumnDef::new(Patients::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Patients::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_patients_clinic")
                        .from(Patients::Table, Patients::ClinicId)
                        .to(Clinics::Table, Clinics::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_patients_clinic_id")
                .table(Patients::Table)
                .col(Patients::ClinicId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Patients::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Doctors::Table).if_exists().to_owned()).await?;
        m.drop_type(Type::drop().if_exists().name(PatientSex::Enum).to_owned()).await?;
        Ok(())
    }
}
