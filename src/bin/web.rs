//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! SCHEDULE_TTL_SECS, CLEANUP_INTERVAL_SECS, MAX_PARTICIPANTS.

use actix_files::Files;
use actix_web::{
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use squash_schedule_web::{routes, ScheduleStore, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(ScheduleStore::new());

    // Background task: periodically remove schedules nobody has looked at for a while
    let state_cleanup = state.clone();
    let ttl = config.schedule_ttl;
    let every = config.cleanup_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match state_cleanup.purge_inactive(ttl) {
                Ok(0) => {}
                Ok(removed) => log::info!(
                    "Cleaned up {} inactive schedule(s) (no activity for {}s)",
                    removed,
                    ttl.as_secs()
                ),
                Err(e) => log::warn!("Cleanup skipped: {}", e),
            }
        }
    });

    let bind = (config.host.clone(), config.port);
    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .configure(routes::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
