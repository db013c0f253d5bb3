use axum::Router;
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{
    auth::AccessClaims, config::Config, doc::ApiDoc, routes, state::AppState,
    utils::shutdown::shutdown_signal,
};
use std::error::Error;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        log::error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Migrations applied");
    }

    let mut builder =
        <OAuth2ResourceServer<AccessClaims>>::builder().issuer_url(config.oidc_issuer_url.as_str());
    if let Some(audience) = &config.oidc_audience {
        builder = builder.audiences(&[audience.as_str()]);
    }
    let oauth2_resource_server = builder
        .build()
        .await
        .map_err(|err| format!("failed to build OAuth2 resource server: {err:?}"))?;

    let api = routes::api().layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));

    let app = Router::new()
        .merge(routes::public())
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
