// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - A shared HTTP client for the recommendation service
// - Static file serving for the WASM bundle

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use cine_ai::web_app::api::{self, HttpRecommendationClient};
    use cine_ai::web_app::app::{shell, App as WebApp};
    use cine_ai::web_app::config::AppConfig;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        "Recommendation backend: {} (timeout: {:?})",
        config.backend_url,
        config.request_timeout
    );

    let client = HttpRecommendationClient::new(config).context("failed to build HTTP client")?;
    api::init_client(Arc::new(client));

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root_str = site_root.to_string();

        App::new()
            // Server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes rendered inside the HTML shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
