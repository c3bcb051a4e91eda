/// HTMLに差し込むテキストをエスケープする
///
/// 特殊文字を文字参照に置き換える。属性値・要素内容のどちらに
/// 差し込んでも安全な最小集合。
///
/// # Examples
/// ```
/// use czech_weather::util::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("Plzeň"), "Plzeň");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
