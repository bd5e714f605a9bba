//! 植物名の正規化
//!
//! 小文字化 → NFD分解 → 結合用ダイアクリティカルマーク（U+0300〜U+036F）除去
//! → 連続空白を1つに → 前後の空白除去。

use unicode_normalization::UnicodeNormalization;

/// 比較用に植物名を正規化
///
/// # Examples
/// ```
/// use plant_tracker_common::normalize_name;
///
/// assert_eq!(normalize_name("Aloë  Vera"), "aloe vera");
/// ```
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();

    stripped
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 正規化後に同じ名前か
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Unicode空白に加えて BOM（U+FEFF）も区切りとみなす
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
