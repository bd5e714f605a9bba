//! 一覧のテキスト表示

use plant_tracker_common::{ImageResolution, PlantGroups, PlantTile, StatusCode};
use std::collections::HashMap;
use std::fmt::Write;

/// 状態ごとのマーカー
fn status_marker(status: StatusCode) -> &'static str {
    match status {
        StatusCode::WateredToday => "💧",
        StatusCode::Ok => "🌿",
        StatusCode::Warning => "⚠",
        StatusCode::Overdue => "🔥",
        StatusCode::Unknown => "·",
    }
}

/// 屋外 → 屋内の順に一覧を組み立てる
///
/// `images` があれば entity_id ごとの画像解決結果も表示する。
pub fn render_groups(
    groups: &PlantGroups<'_>,
    images: Option<&HashMap<String, ImageResolution>>,
) -> String {
    let mut out = String::new();

    for (placement, records) in groups.sections() {
        let _ = writeln!(out, "# {}", placement.heading());
        if records.is_empty() {
            let _ = writeln!(out, "  (none)");
        }

        for record in records {
            let tile = PlantTile::from_record(record);
            let _ = writeln!(out, "{} {}  [{}]", status_marker(record.status), tile.name, tile.entity_id);
            let _ = writeln!(out, "    {}", tile.last_watered);
            let _ = writeln!(out, "    {}", tile.last_fertilized);
            let _ = writeln!(out, "    {}", tile.due);
            let _ = writeln!(out, "    {}", tile.watering_postponed);

            if let Some(resolution) = images.and_then(|m| m.get(&record.id)) {
                match resolution {
                    ImageResolution::Image { src } => {
                        let _ = writeln!(out, "    Image: {}", src);
                    }
                    ImageResolution::Fallback => {
                        let _ = writeln!(out, "    Image: (placeholder)");
                    }
                }
            }
        }
        out.push('\n');
    }

    out
}
