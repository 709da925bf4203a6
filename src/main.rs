use std::time::Duration;

use futures::future::join_all;
use tracing::log;

use liga_server_rs::api::Api;
use liga_server_rs::league_service::{LeagueService, SafeLeagueService};
use liga_server_rs::logo_service::LogoService;
use liga_server_rs::CONFIG;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "debug,hyper=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let league_service = LeagueService::new();
    {
        // First read + render before anything is served; the main logo
        // is only resolved here, never on later ticks.
        let mut state = league_service.write().await;
        state.main_logo = LogoService::resolve();
        state.refresh();
    }

    let h1 = {
        let league_service = league_service.clone();
        tokio::spawn(async { Api::serve(CONFIG.port, league_service).await })
    };
    let h2 = {
        let league_service = league_service.clone();
        tokio::spawn(async { handle_loop(league_service).await })
    };

    join_all(vec!(h1, h2)).await;
}

async fn handle_loop(league_service: SafeLeagueService) {
    log::info!("[LOOP] Start refresh loop, interval {}s", CONFIG.refresh_interval_s);
    loop {
        tokio::time::sleep(Duration::from_secs(CONFIG.refresh_interval_s)).await;
        league_service.write().await.refresh();
    }
}
