// =============================================================================
// HTMLページ描画
// =============================================================================
// コンパイル時に取り込んだテンプレートへ動的な断片を差し込んでページを
// 組み立てる。差し込むテキストはすべてHTMLエスケープする。
// =============================================================================

use crate::db::models::City;
use crate::util::escape_html;
use crate::weather::WeatherData;

/// メインページのテンプレート
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// 404ページ
pub const NOT_FOUND_PAGE: &str = include_str!("../../templates/404.html");

/// 500ページ
pub const SERVER_ERROR_PAGE: &str = include_str!("../../templates/500.html");

/// テンプレート内の差し込み位置マーカー
const CITY_OPTIONS_MARKER: &str = "<!-- CITY_OPTIONS -->";
const FLASH_MARKER: &str = "<!-- FLASH -->";
const WEATHER_MARKER: &str = "<!-- WEATHER -->";

/// メインページを描画する
///
/// `selected`と`weather`が両方あるときのみ天気カードを表示する。
/// `errors`はフォーム上部にアラートとして表示される。
pub fn render_index(
    cities: &[City],
    selected: Option<&City>,
    weather: Option<&WeatherData>,
    errors: &[String],
) -> String {
    let weather_html = match (selected, weather) {
        (Some(city), Some(data)) => render_weather_card(&city.name, data),
        _ => String::new(),
    };

    INDEX_TEMPLATE
        .replace(CITY_OPTIONS_MARKER, &render_city_options(cities, selected))
        .replace(FLASH_MARKER, &render_flash(errors))
        .replace(WEATHER_MARKER, &weather_html)
}

/// 都市セレクターのoption要素群を描画する
fn render_city_options(cities: &[City], selected: Option<&City>) -> String {
    let mut html = String::new();
    for city in cities {
        let name = escape_html(&city.name);
        let selected_attr = match selected {
            Some(s) if s.name == city.name => " selected",
            _ => "",
        };
        html.push_str(&format!(
            "<option value=\"{name}\"{selected_attr}>{name}</option>\n",
        ));
    }
    html
}

/// エラーメッセージをアラートとして描画する
fn render_flash(errors: &[String]) -> String {
    let mut html = String::new();
    for error in errors {
        html.push_str(&format!(
            "<div class=\"alert alert-danger\" role=\"alert\">{}</div>\n",
            escape_html(error)
        ));
    }
    html
}

/// 天気カードを描画する
fn render_weather_card(city_name: &str, data: &WeatherData) -> String {
    format!(
        concat!(
            "<div class=\"card\">\n",
            "  <div class=\"card-header\">Current weather in {city}</div>\n",
            "  <div class=\"card-body\">\n",
            "    <p class=\"display-6\">{temperature} °C</p>\n",
            "    <p class=\"lead\">{description}</p>\n",
            "    <ul class=\"list-unstyled mb-0\">\n",
            "      <li>Wind: {windspeed} km/h from {direction} ({winddirection}°)</li>\n",
            "      <li>Observed at {time}</li>\n",
            "    </ul>\n",
            "  </div>\n",
            "</div>\n",
        ),
        city = escape_html(city_name),
        temperature = data.temperature,
        description = escape_html(&data.description),
        windspeed = data.windspeed,
        direction = data.wind_direction_text,
        winddirection = data.winddirection,
        time = escape_html(&data.time),
    )
}
