use migration::{Migrator, MigratorTrait};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fraud_analytics={level},server={level},engine={level}",
            level = settings.level
        ))
        .init();

    tracing::info!(
        environment = %settings.environment,
        "Starting fraud analytics service"
    );

    let database = match sea_orm::Database::connect(&settings.database_url).await {
        Ok(database) => database,
        Err(err) => {
            tracing::error!("failed to connect to database: {err}");
            return Err(err.into());
        }
    };
    Migrator::up(&database, None).await?;

    let engine = engine::Engine::new(database);

    let addr = format!("{}:{}", settings.bind, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}
