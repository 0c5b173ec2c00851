/// `ActiveModelBehavior` for entities with a generated `id` and the
/// `created_at`/`updated_at` pair: both are filled on insert when unset and
/// `updated_at` is refreshed on every save.
macro_rules! impl_timestamped_behavior {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
            where
                C: ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert {
                    if self.id.is_not_set() {
                        self.id = sea_orm::Set(Uuid::new_v4());
                    }
                    if self.created_at.is_not_set() {
                        self.created_at = sea_orm::Set(now);
                    }
                }
                self.updated_at = sea_orm::Set(now);
                Ok(self)
            }
        }
    };
}

pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod patient;
pub mod user;
pub mod users_to_clinics;

/*
 A user administers one or more clinics through users_to_clinics.
 Everything else hangs off a clinic: doctors, patients and appointments are
 deleted with it. An appointment ties one patient to one doctor in one clinic
 and is deleted when any of the three goes away.
 */
