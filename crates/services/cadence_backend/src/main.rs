// File: services/cadence_backend/src/main.rs
use axum::{routing::get, Router};
use cadence_common::{log_result, logging, CadenceError, Context};
use cadence_config::load_config;
use cadence_redirect::routes as redirect_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CadenceError> {
    logging::init();
    let config = log_result(
        load_config(),
        "Configuration loaded",
        "Failed to load configuration",
    )?;
    let config = Arc::new(config);

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Cadence API!" }))
        .route("/health", get(|| async { "ok" }));

    if !config.use_redirect {
        info!("Redirect service disabled by configuration; /api/redirect answers 503");
    }
    let redirect_router = redirect_routes::routes(config.clone());

    let api_router = Router::new().nest("/api", api_router.merge(redirect_router));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = api_router;

    #[cfg(feature = "openapi")]
    {
        use cadence_redirect::doc::RedirectApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Cadence API",
                version = "0.1.0",
                description = "Cadence Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Cadence", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(RedirectApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated")?;
    Ok(())
}
