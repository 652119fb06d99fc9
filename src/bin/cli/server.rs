use anyhow::{Context, Result};
use axum::http::StatusCode;
use folio::{
    auth::SessionService, catalog::Catalog, config::Config, server::AppState,
    users::UserDirectory,
};
use tracing::{info, warn};

pub async fn start(config: Config) -> Result<()> {
    let catalog = Catalog::load(config.catalog_path.as_deref())
        .context("Couldn't load the catalog")?;
    info!("Loaded {} books.", catalog.len());

    let secret = if config.token_secret.is_empty() {
        warn!("No token secret configured, sessions won't survive a restart.");
        uuid::Uuid::new_v4().to_string()
    } else {
        config.token_secret.clone()
    };
    let invalid_login_status = StatusCode::from_u16(config.invalid_login_status)
        .context("invalid_login_status is not a status code")?;

    let state = AppState::new(
        catalog,
        UserDirectory::default(),
        SessionService::new(&secret, config.token_ttl_seconds),
    )
    .with_invalid_login_status(invalid_login_status);
    let app = folio::server::router(state);

    info!("Listening on {}.", config.bind_address);
    axum::Server::try_bind(&config.bind_address)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down.");
            }
        })
        .await?;
    Ok(())
}
