use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_clinic_tables::Clinics;
use super::m20250601_000002_create_doctor_patient_tables::{Doctors, Patients};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    Date,
    PatientId,
    DoctorId,
    ClinicId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Appointments::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Appointments::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()"))
                )
                .col(ColumnDef::new(Appointments::Date).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Appointments::PatientId).uuid().not_null())
                .col(ColumnDef::new(Appointments::DoctorId).uuid().not_null())
                .col(ColumnDef::new(Appointments::ClinicId).uuid().not_null())
                .col(ColumnDef::new(Appointments::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Appointments::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_appointments_patient")
                        .from(Appointments::Table, Appointments::PatientId)
                        .to(Patients::Table, Patients::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_appointments_doctor")
                        .from(Appointments::Table, Appointments::DoctorId)
                        .to(Doctors::Table, Doctors::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_appointments_clinic")
                        .from(Appointments::Table, Appointments::ClinicId)
                        .to(Clinics::Table, Clinics::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        for (name, col) in [
            ("idx_appointments_patient_id", Appointments::PatientId),
            ("idx_appointments_doctor_id", Appointments::DoctorId),
            ("idx_appointments_clinic_id", Appointments::ClinicId),
        ] {
            m.create_index(
                Index::create()
                    .name(name)
                    .table(Appointments::Table)
                    .col(col)
                    .to_owned(),
            ).await?;
        }

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Appointments::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
