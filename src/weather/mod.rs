// =============================================================================
// 天気API連携モジュール
// =============================================================================
// Open-Meteo APIから現在の天気を取得し、アプリ内部の天気データに変換する
//
// 機能:
// - 緯度経度で現在の天気を取得
// - WMO天気コードから説明への解決（未登録コードは"Unknown"）
// - 風向（度）から8方位ラベルへの変換
//
// 使用API: Open-Meteo Forecast API
// https://open-meteo.com/en/docs
// =============================================================================

mod code_table;
mod types;

pub use code_table::CodeTable;
pub use types::{CurrentWeather, ForecastResponse, WeatherData};

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// 天気取得エラー
///
/// 外部APIとの通信で起こり得る失敗を単一の型に正規化する。
/// いずれも呼び出し側で回復可能（フォームを再表示してメッセージを出す）。
#[derive(Debug, Error)]
pub enum WeatherFetchError {
    /// 上流APIが2xx以外のステータスを返した
    #[error("weather API returned status {status}")]
    UpstreamStatus { status: u16 },

    /// トランスポート層の失敗（タイムアウト、接続拒否、DNS解決失敗等）
    #[error("weather API request failed: {0}")]
    TransportFailure(String),

    /// レスポンスボディが期待する形式でない
    #[error("invalid weather API response: {0}")]
    MalformedResponse(String),
}

/// 天気APIクライアント
///
/// リクエスト間で共有する状態は持たない。保持するのは構築済みHTTP
/// クライアント、ベースURL、読み取り専用のコードテーブルのみ。
#[derive(Debug, Clone)]
pub struct WeatherService {
    /// HTTPクライアント（タイムアウト設定済み）
    client: Client,
    /// 天気APIのベースURL
    base_url: String,
    /// WMO天気コードの参照テーブル
    codes: CodeTable,
}

impl WeatherService {
    /// 新しい天気サービスを作成
    ///
    /// タイムアウトなしのクライアントにフォールバックすると外部APIが
    /// ハングした場合にリクエストが滞留するため、構築失敗はpanicさせる
    /// （起動時のみ発生し得る）。
    pub fn new(base_url: impl Into<String>, timeout: Duration, codes: CodeTable) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client with timeout");

        Self {
            client,
            base_url: base_url.into(),
            codes,
        }
    }

    /// 指定座標の現在の天気を取得する
    ///
    /// 1回の呼び出しにつき上流へのリクエストは1回。リトライや
    /// バックオフは行わない（リトライ判断は呼び出し側に委ねる）。
    pub async fn fetch_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherData, WeatherFetchError> {
        let url = format!("{}/forecast", self.base_url);

        log::debug!("Fetching weather for ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherFetchError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Weather API returned non-success status: {}", status);
            return Err(WeatherFetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherFetchError::TransportFailure(e.to_string()))?;

        let forecast: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherFetchError::MalformedResponse(e.to_string()))?;

        let current = forecast.current_weather.ok_or_else(|| {
            WeatherFetchError::MalformedResponse("missing current-conditions".to_string())
        })?;

        let description = self.codes.describe(current.weathercode).to_string();

        Ok(WeatherData::from_current_weather(current, description))
    }
}
