// =============================================================================
// 天気API型定義
// =============================================================================
// Open-Meteo APIのレスポンス型とアプリ内部で使用する天気データ型を定義
// =============================================================================

use serde::{Deserialize, Serialize};

/// 8方位のコンパスラベル（北から時計回り、45°刻み）
const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

// =============================================================================
// Open-Meteo Forecast API
// =============================================================================

/// Forecast APIレスポンス
///
/// current_weather=true指定時のみcurrent_weatherキーが含まれる。
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// 現在の天気データ（欠落はレスポンス不正として扱う）
    pub current_weather: Option<CurrentWeather>,
}

/// 現在の天気データ
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// 気温（摂氏）
    pub temperature: f64,
    /// 風速（km/h）
    pub windspeed: f64,
    /// 風向（度、0-359）
    pub winddirection: i32,
    /// WMO天気コード
    pub weathercode: i32,
    /// 観測時刻（APIが返す文字列をそのまま保持、再パースしない）
    pub time: String,
}

// =============================================================================
// アプリ内部データ型
// =============================================================================

/// アプリ内部で使用する天気データ
///
/// 取得成功時に一度だけ構築され、以降は変更されない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    /// 気温（摂氏）
    pub temperature: f64,
    /// 風速（km/h）
    pub windspeed: f64,
    /// 風向（度、0-359）
    pub winddirection: i32,
    /// WMO天気コード
    pub weathercode: i32,
    /// 観測時刻
    pub time: String,
    /// 天気の説明（コードテーブル由来、未登録コードは"Unknown"）
    pub description: String,
    /// 風向の8方位ラベル
    pub wind_direction_text: &'static str,
}

impl WeatherData {
    /// 現在天気オブジェクトと説明からWeatherDataを生成
    pub fn from_current_weather(current: CurrentWeather, description: String) -> Self {
        Self {
            temperature: current.temperature,
            windspeed: current.windspeed,
            winddirection: current.winddirection,
            weathercode: current.weathercode,
            wind_direction_text: Self::degrees_to_compass(current.winddirection),
            time: current.time,
            description,
        }
    }

    /// 風向（度）を8方位ラベルに変換
    ///
    /// 45で割って四捨五入し、8の剰余でラベル配列を引く。丸めは
    /// f64::round（0.5は0から遠い方へ）。風向は整数度のため
    /// 22.5°の倍数ちょうどの境界値は実行時には現れない。
    pub fn degrees_to_compass(winddirection: i32) -> &'static str {
        let index = (f64::from(winddirection) / 45.0).round() as usize % 8;
        WIND_DIRECTIONS[index]
    }
}
