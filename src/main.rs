use clinic_agenda::config::EnvConfig;
use clinic_agenda::db::postgres_service::PostgresService;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration [{}]: {}", e.kind(), e);
            return Err(e.into());
        }
    };

    let postgres_service = PostgresService::new(&config.db_url).await?;
    let clinics = postgres_service.count_clinics().await?;

    info!("Schema is up to date ({} clinics on record).", clinics);
    Ok(())
}
