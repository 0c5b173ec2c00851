pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_clinic_tables;
mod m20250601_000002_create_doctor_patient_tables;
mod m20250601_000003_create_appointment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_clinic_tables::Migration),
            Box::new(m20250601_000002_create_doctor_patient_tables::Migration),
            Box::new(m20250601_000003_create_appointment_table::Migration),
        ]
    }
}
