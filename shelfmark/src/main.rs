#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::{Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use shelfmark::app::*;
    use shelfmark_server::{
        config::Config,
        forward::forward_router,
        signal_handler::{signal_handler, wait_for_shutdown, InShutdown},
    };
    use tracing::{debug, error, info};
    use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

    let config = match Config::try_create() {
        Ok(x) => x,
        Err(e) => {
            panic!("Error reading config: {e}.");
        }
    };
    let config_arc = Arc::new(config);

    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let my_crate_filter = EnvFilter::new("shelfmark");
    let subscriber = tracing_subscriber::registry().with(my_crate_filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_line_number(true)
            .with_filter(config_arc.log_level),
    );
    tracing::subscriber::set_global_default(subscriber).expect("static tracing config");
    debug!("Tracing enabled.");

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(InShutdown::No);
    let signal_task = tokio::spawn(signal_handler(shutdown_rx.clone(), shutdown_tx));

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let config_capsule = config_arc.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &config_arc.leptos_options,
            routes,
            move || {
                provide_context::<Arc<Config>>(config_capsule.clone());
            },
            {
                let leptos_options = config_arc.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(config_arc.leptos_options.clone())
        // the backend owns /api, /media and /auth
        .merge(forward_router())
        .layer(Extension(config_arc.clone()));

    info!(
        "listening on http://{}, forwarding to {}",
        &config_arc.leptos_options.site_addr, &config_arc.backend_addr
    );
    let listener = match tokio::net::TcpListener::bind(&config_arc.leptos_options.site_addr).await {
        Ok(x) => x,
        Err(e) => {
            panic!("Cannot bind to {}: {e}.", config_arc.leptos_options.site_addr);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await
    {
        error!("Server stopped with an error: {e}");
    }

    match signal_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Signal handler failed: {e}"),
        Err(e) => error!("Signal handler panicked: {e}"),
    }
    info!("Shut down.");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
