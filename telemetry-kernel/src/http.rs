/*!
 * API HTTP TELEMETRY - Routeur du kernel
 *
 * RÔLE :
 * Sert les pages du dashboard (fichiers statiques) et l'endpoint
 * /api/telemetry qui génère des mesures fraîches à chaque requête.
 *
 * FONCTIONNEMENT :
 * - Serveur Axum, une tâche par requête, aucun état mutable partagé
 * - Pages : alias multiples vers un même fichier, fallback sur index.html
 * - API : 5 mesures sans délai, JSON camelCase, en-têtes CORS
 * - Méthodes autres que GET : 405 sans corps
 */

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use telemetry_core::{EntropySource, Generator, RandomSource, Reading, ReadingRecord, API_BATCH_SIZE};
use tracing::debug;

use crate::assets::{self, Asset};

/// Fabrique d'une source aléatoire neuve par requête
pub type SourceFactory = Arc<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub static_root: Arc<PathBuf>,
    pub api_batch_size: usize,
    pub sources: SourceFactory,
}

impl AppState {
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self {
            static_root: Arc::new(static_root.into()),
            api_batch_size: API_BATCH_SIZE,
            sources: Arc::new(|| Box::new(EntropySource::new()) as Box<dyn RandomSource>),
        }
    }

    /// Remplace la source d'entropie (tests déterministes)
    pub fn with_sources<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RandomSource> + Send + Sync + 'static,
    {
        self.sources = Arc::new(factory);
        self
    }
}

/// Chemins HTTP -> fichiers servis
pub const PAGE_ROUTES: [(&str, Asset); 8] = [
    ("/", assets::INDEX_PAGE),
    ("/index.html", assets::INDEX_PAGE),
    ("/dash.html", assets::DASHBOARD_PAGE),
    ("/dashboard.html", assets::DASHBOARD_PAGE),
    ("/analysis.html", assets::ANALYSIS_PAGE),
    ("/analytics.html", assets::ANALYSIS_PAGE),
    ("/how-it-works.html", assets::HOW_IT_WORKS_PAGE),
    // forme encodée de "/how it works.html"
    ("/how%20it%20works.html", assets::HOW_IT_WORKS_PAGE),
];

pub fn build_router(app_state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/telemetry", get_only(get(get_telemetry)))
        .route("/styles.css", asset_route(assets::STYLESHEET))
        .route("/script.js", asset_route(assets::SCRIPT));

    for (path, asset) in PAGE_ROUTES {
        router = router.route(path, asset_route(asset));
    }

    router.fallback(fallback_page).with_state(app_state)
}

fn asset_route(asset: Asset) -> MethodRouter<AppState> {
    get_only(get(move |State(app): State<AppState>| async move {
        assets::serve(&app.static_root, asset).await
    }))
}

// axum renvoie HEAD vers le handler GET si aucun handler HEAD n'est posé
fn get_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.head(method_not_allowed).fallback(method_not_allowed)
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

// GET <autre chemin> -> index.html
async fn fallback_page(method: Method, State(app): State<AppState>) -> Response {
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    assets::serve(&app.static_root, assets::INDEX_PAGE).await
}

// GET /api/telemetry (mesures fraîches, pas de délai)
async fn get_telemetry(State(app): State<AppState>) -> impl IntoResponse {
    let mut generator = Generator::new((app.sources)());
    let records: Vec<ReadingRecord> = generator
        .generate_many(app.api_batch_size)
        .iter()
        .map(Reading::to_record)
        .collect();
    debug!(count = records.len(), "telemetry generated");

    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET"),
        ],
        Json(records),
    )
}
