use std::net::SocketAddr;

use axum::{Router, extract::{Path, State}, response::{Html, IntoResponse, Response}};
use reqwest::StatusCode;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing::log;

use crate::{CONFIG, league_service::{LeagueService, SafeLeagueService}, models::{Section, StoreKey}, render_service};

pub struct Api;
impl Api {
    pub async fn serve(port: u16, league_service: SafeLeagueService) {
        let app = Router::new()
            .route("/", axum::routing::get(Api::get_page))
            .route("/section/:section", axum::routing::get(Api::get_section))
            .route("/views/:section", axum::routing::get(Api::get_view))
            .route("/data/:key", axum::routing::get(Api::get_data))
            .nest_service("/assets", axum::routing::get_service(ServeDir::new(&CONFIG.assets_path))
                .handle_error(|_: std::io::Error| async { StatusCode::NOT_FOUND }))
            .with_state(league_service)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn get_page(State(state): State<SafeLeagueService>) -> Html<String> {
        let state = state.read().await;
        Html(render_service::render_page(state.current_section, &state.main_logo, &state.views))
    }

    /// The tab click: records the requested section and serves the page
    /// with it active.
    async fn get_section(Path(section): Path<String>, State(state): State<SafeLeagueService>) -> Response {
        if let Ok(section) = section.parse::<Section>() {
            let mut state = state.write().await;
            state.show_section(section);
            Html(render_service::render_page(state.current_section, &state.main_logo, &state.views)).into_response()
        } else {
            (StatusCode::NOT_FOUND, "404".to_string()).into_response()
        }
    }

    async fn get_view(Path(section): Path<String>, State(state): State<SafeLeagueService>) -> Response {
        if let Ok(section) = section.parse::<Section>() {
            let state = state.read().await;
            let fragment = match section {
                Section::Partidos => &state.views.matches,
                Section::Posiciones => &state.views.standings,
                Section::Goleadores => &state.views.scorers,
            };
            Html(fragment.clone()).into_response()
        } else {
            (StatusCode::NOT_FOUND, "404".to_string()).into_response()
        }
    }

    async fn get_data(Path(key): Path<String>) -> impl IntoResponse {
        if let Ok(key) = key.parse::<StoreKey>() {
            (StatusCode::OK, LeagueService::read_raw(&key))
        } else {
            (StatusCode::NOT_FOUND, "404".to_string())
        }
    }
}
