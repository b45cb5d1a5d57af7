use crate::{config::Config, data::store::Store, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Driver-level pooling and transient-failure handling come from sqlx under
/// SeaORM; no extra retry policy is layered on top.
pub async fn connect_to_database(config: &Config) -> Result<Store, AppError> {
    use migration::{Migrator, MigratorTrait};

    let store = Store::connect(&config.database_url).await?;

    Migrator::up(store.connection(), None).await?;

    Ok(store)
}

/// Installs the tracing subscriber, honoring `RUST_LOG` when set.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
