use sea_orm::Database;
use tracing::info;

use outlay_tracker::config::TrackerConfig;
use outlay_tracker::infra::mail::HttpMailer;
use outlay_tracker::infra::render::HttpReportRenderer;
use outlay_tracker::router::build_router;
use outlay_tracker::state::AppState;

#[tokio::main]
async fn main() {
    outlay_core::tracing::init_tracing();

    let config = TrackerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::new();
    let mailer = HttpMailer::new(
        http.clone(),
        config.mail_api_url,
        config.mail_api_key,
        config.mail_from,
    );
    let renderer = HttpReportRenderer::new(http, config.render_api_url);

    let state = AppState {
        db,
        mailer,
        renderer,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        allowed_email: config.allowed_email,
        invalidate_code_on_send_failure: config.invalidate_code_on_send_failure,
        report_recipient: config.report_recipient,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.tracker_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("tracker service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
