// =============================================================================
// エントリポイント
// =============================================================================
// 設定読み込み → DB初期化・シード → コードテーブル読み込み → HTTPサーバー起動
// =============================================================================

use std::sync::Arc;

use czech_weather::config::AppConfig;
use czech_weather::db;
use czech_weather::server::{self, AppState};
use czech_weather::weather::{CodeTable, WeatherService};

#[tokio::main]
async fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = AppConfig::from_env();
    log::info!(
        "Using weather API at {} (timeout: {}s)",
        config.weather_api_url,
        config.weather_api_timeout_secs
    );

    let pool = db::create_pool(&config.database_path)
        .await
        .expect("Failed to create database pool");

    db::seed::seed_reference_data(&pool)
        .await
        .expect("Failed to seed reference data");

    let codes = CodeTable::load(&pool)
        .await
        .expect("Failed to load weather code table");

    let weather = Arc::new(WeatherService::new(
        config.weather_api_url.clone(),
        config.weather_api_timeout(),
        codes,
    ));

    let state = AppState { db: pool, weather };

    server::serve(state, &config.listen_addr())
        .await
        .expect("HTTP server error");
}
