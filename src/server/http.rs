// =============================================================================
// HTTPサーバーモジュール
// =============================================================================
// ルーティングとリクエストハンドラー
//
// ルート:
// - GET  /            メインページ（都市セレクター）
// - POST /weather     選択された都市の天気を取得して表示
// - GET  /api/cities  都市一覧（JSON）
// - GET  /health      liveness probe
// - GET  /ready       readiness probe（DB接続確認込み）
// =============================================================================

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::db::cities;
use crate::db::models::City;
use crate::server::{middleware, pages};
use crate::weather::WeatherService;

/// HTTPサーバー用の共有状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db: SqlitePool,
    /// 天気APIクライアント
    pub weather: Arc<WeatherService>,
}

/// ハンドラー内部エラー（データベース障害等）
///
/// ユーザーには500ページを返し、詳細はログにのみ出力する。
#[derive(Debug)]
pub struct AppError(sqlx::Error);

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("Database error: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::SERVER_ERROR_PAGE),
        )
            .into_response()
    }
}

/// ルーターを構築する
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weather", post(weather))
        .route("/api/cities", get(api_cities))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::track_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTPサーバーを起動する
pub async fn serve(state: AppState, addr: &str) -> Result<(), std::io::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await
}

/// 都市選択フォーム
#[derive(Debug, Deserialize)]
pub struct CityForm {
    /// 選択された都市名（空文字は未選択）
    #[serde(default)]
    pub city: String,
}

/// メインページ（都市セレクター）
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let city_list = cities::list_cities(&state.db).await?;
    Ok(Html(pages::render_index(&city_list, None, None, &[])))
}

/// 選択された都市の天気を取得して表示する
///
/// バリデーション失敗・天気取得失敗のいずれもエラーメッセージ付きで
/// フォームを再表示する。プロセスが落ちることはない。
async fn weather(
    State(state): State<AppState>,
    Form(form): Form<CityForm>,
) -> Result<Html<String>, AppError> {
    let city_list = cities::list_cities(&state.db).await?;

    // バリデーション: 都市が選択されているか
    if form.city.is_empty() {
        let errors = ["Please select a city.".to_string()];
        return Ok(Html(pages::render_index(&city_list, None, None, &errors)));
    }

    let Some(city) = cities::find_city_by_name(&state.db, &form.city).await? else {
        let errors = ["Invalid city selected.".to_string()];
        return Ok(Html(pages::render_index(&city_list, None, None, &errors)));
    };

    match state
        .weather
        .fetch_current_weather(city.latitude, city.longitude)
        .await
    {
        Ok(data) => Ok(Html(pages::render_index(
            &city_list,
            Some(&city),
            Some(&data),
            &[],
        ))),
        Err(e) => {
            log::warn!("Weather fetch failed for {}: {}", city.name, e);
            let errors = [format!("Could not fetch weather data: {}", e)];
            Ok(Html(pages::render_index(
                &city_list,
                Some(&city),
                None,
                &errors,
            )))
        }
    }
}

/// 都市一覧APIレスポンス
#[derive(Debug, Serialize)]
struct CitiesResponse {
    cities: Vec<CityInfo>,
}

/// 都市情報（名前と座標）
#[derive(Debug, Serialize)]
struct CityInfo {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<City> for CityInfo {
    fn from(city: City) -> Self {
        Self {
            name: city.name,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

/// 利用可能な都市の一覧をJSONで返す
async fn api_cities(State(state): State<AppState>) -> Result<Json<CitiesResponse>, AppError> {
    let city_list = cities::list_cities(&state.db).await?;

    Ok(Json(CitiesResponse {
        cities: city_list.into_iter().map(CityInfo::from).collect(),
    }))
}

/// Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Readiness probe（データベース接続確認込み）
async fn ready(State(state): State<AppState>) -> Result<&'static str, AppError> {
    sqlx::query("SELECT 1").execute(&state.db).await?;
    Ok("ok")
}

/// 404ページ
async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(pages::NOT_FOUND_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, seed};
    use crate::weather::CodeTable;
    use std::time::Duration;

    /// シード済みDBとモック上流を指すAppStateを作る
    async fn test_state(base_url: &str) -> (AppState, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("http_test.db");
        let pool = create_pool(db_path.to_str().unwrap())
            .await
            .expect("Failed to create pool");
        seed::seed_reference_data(&pool)
            .await
            .expect("Failed to seed");

        let codes = CodeTable::load(&pool).await.expect("Failed to load codes");
        let weather = Arc::new(WeatherService::new(
            base_url,
            Duration::from_secs(2),
            codes,
        ));

        (AppState { db: pool, weather }, temp_dir)
    }

    #[tokio::test]
    async fn test_index_lists_seeded_cities() {
        let (state, _guard) = test_state("http://127.0.0.1:1").await;

        let Html(html) = index(State(state)).await.unwrap();

        for &(name, _, _) in seed::CITIES {
            assert!(html.contains(name), "index should list {}", name);
        }
    }

    #[tokio::test]
    async fn test_weather_rejects_empty_city() {
        let (state, _guard) = test_state("http://127.0.0.1:1").await;

        let form = CityForm {
            city: String::new(),
        };
        let Html(html) = weather(State(state), Form(form)).await.unwrap();

        assert!(html.contains("Please select a city."));
        assert!(!html.contains("card-header"));
    }

    #[tokio::test]
    async fn test_weather_rejects_unknown_city() {
        let (state, _guard) = test_state("http://127.0.0.1:1").await;

        let form = CityForm {
            city: "Atlantis".to_string(),
        };
        let Html(html) = weather(State(state), Form(form)).await.unwrap();

        assert!(html.contains("Invalid city selected."));
    }

    #[tokio::test]
    async fn test_weather_renders_fetched_data() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/forecast")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"current_weather": {"temperature": 21.5, "windspeed": 10.0, "winddirection": 90, "weathercode": 0, "time": "2025-01-17T12:00"}}"#,
            )
            .create_async()
            .await;

        let (state, _guard) = test_state(&server.url()).await;

        let form = CityForm {
            city: "Plzeň".to_string(),
        };
        let Html(html) = weather(State(state), Form(form)).await.unwrap();

        assert!(html.contains("Current weather in Plzeň"));
        assert!(html.contains("21.5 °C"));
        assert!(html.contains("Clear sky"));
    }

    #[tokio::test]
    async fn test_weather_surfaces_upstream_failure_as_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/forecast")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let (state, _guard) = test_state(&server.url()).await;

        let form = CityForm {
            city: "Praha".to_string(),
        };
        let Html(html) = weather(State(state), Form(form)).await.unwrap();

        assert!(html.contains("Could not fetch weather data"));
        // フォームは再表示される
        assert!(html.contains("<form"));
        assert!(!html.contains("card-header"));
    }

    #[tokio::test]
    async fn test_api_cities_returns_name_and_coordinates() {
        let (state, _guard) = test_state("http://127.0.0.1:1").await;

        let Json(response) = api_cities(State(state)).await.unwrap();

        assert_eq!(response.cities.len(), 10);
        // 名前順（BINARY照合）の先頭はBrno
        assert_eq!(response.cities[0].name, "Brno");
        assert_eq!(response.cities[0].latitude, 49.1951);
        assert_eq!(response.cities[0].longitude, 16.6068);
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (state, _guard) = test_state("http://127.0.0.1:1").await;

        assert_eq!(health().await, "ok");
        assert_eq!(ready(State(state)).await.unwrap(), "ok");
    }
}
