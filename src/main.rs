use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderValue, Method};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use tradedesk::handlers::{
    alerts::{add_alert, get_alerts, get_triggered_alerts, remove_alert, toggle_alert},
    auth::{get_user, login, logout, signup},
    market::{
        add_to_watchlist, get_chart, get_insights, get_stock, get_stocks, get_watchlist,
        get_watchlist_movers, remove_from_watchlist, screen_stocks,
    },
    portfolio::{get_dashboard, get_portfolio},
    trading::{get_orders, place_order},
};
use tradedesk::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set the log level based on the first argument
    let args: Vec<String> = std::env::args().collect();
    let mut log_level = Level::INFO;
    if args.len() >= 2 {
        log_level = match args[1].as_str() {
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
    }

    // Initalize dotenv so we can read .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_max_level(log_level)
        .init();

    tracing::info!("Log level set to: {}", log_level);

    let frontend_url =
        dotenv::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    // Initialize CORS layer
    let cors = CorsLayer::new()
        .allow_credentials(true)
        .allow_origin(frontend_url.parse::<HeaderValue>()?)
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE])
        .allow_headers(vec![ACCESS_CONTROL_ALLOW_CREDENTIALS, CONTENT_TYPE, COOKIE]);

    // One explicit state object for the whole process; torn down only by
    // logout or exit.
    let profile_path = dotenv::var("PROFILE_PATH").unwrap_or_else(|_| "profile.json".to_string());
    let state = AppState::new(profile_path)?;

    // Build application with routes
    let app = Router::new()
        // Auth routes
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", get(logout))
        .route("/user", get(get_user))
        // Market routes
        .route("/stocks", get(get_stocks))
        .route("/stocks/:symbol", get(get_stock))
        .route("/watchlist", get(get_watchlist).post(add_to_watchlist))
        .route("/watchlist/movers", get(get_watchlist_movers))
        .route("/watchlist/:symbol", delete(remove_from_watchlist))
        .route("/insights", get(get_insights))
        .route("/screener", get(screen_stocks))
        .route("/chart/:symbol", get(get_chart))
        // Trading routes
        .route("/orders", post(place_order).get(get_orders))
        .route("/portfolio", get(get_portfolio))
        .route("/dashboard", get(get_dashboard))
        // Alert routes
        .route("/alerts", get(get_alerts).post(add_alert))
        .route("/alerts/triggered", get(get_triggered_alerts))
        .route("/alerts/:id", delete(remove_alert))
        .route("/alerts/:id/toggle", post(toggle_alert))
        // App state
        .with_state(state)
        // CORS and tracing layers
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        );

    // Run server
    let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Listening on: {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
