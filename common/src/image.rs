//! 植物画像の解決
//!
//! レコードの `image` 属性から候補URLを組み立て、存在確認の結果を
//! URLごとにキャッシュする（プロセス存続中は破棄しない、キーごとに1回だけ書き込む）。

use crate::types::PlantRecord;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

/// 画像パスの既定値
pub const DEFAULT_IMAGE_PATH: &str = "/local/plant_tracker";
/// `image` 属性がない場合の画像名
pub const DEFAULT_IMAGE_NAME: &str = "default_image";

/// 解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResolution {
    /// 表示可能な画像（`src` はホスト相対パス）
    Image { src: String },
    /// プレースホルダーアイコンを表示
    Fallback,
}

/// 存在確認の実装（HTTP GET等）
///
/// 失敗はすべて `false` に倒す。
pub trait ImageProbe {
    fn probe(&self, url: &str) -> impl Future<Output = bool>;
}

/// 画像の存在キャッシュ
///
/// 同じURLへの2回目以降の書き込みは無視する（最初の結果を保持）。
#[derive(Debug, Default)]
pub struct ImageAvailabilityCache {
    entries: Mutex<HashMap<String, bool>>,
}

impl ImageAvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<bool> {
        self.lock().get(url).copied()
    }

    /// 結果を記録し、キャッシュに残った値を返す
    pub fn record(&self, url: &str, exists: bool) -> bool {
        *self.lock().entry(url.to_string()).or_insert(exists)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, bool>> {
        // 中身は真偽値のみなので poison されても壊れない
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// 画像リゾルバ
#[derive(Debug)]
pub struct ImageResolver<P> {
    /// 存在確認に使うオリジン（例: `http://homeassistant.local:8123`）
    origin: String,
    image_path: String,
    default_image: String,
    cache: ImageAvailabilityCache,
    probe: P,
}

impl<P: ImageProbe> ImageResolver<P> {
    pub fn new(origin: impl Into<String>, probe: P) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            image_path: DEFAULT_IMAGE_PATH.to_string(),
            default_image: DEFAULT_IMAGE_NAME.to_string(),
            cache: ImageAvailabilityCache::new(),
            probe,
        }
    }

    /// 画像パスと既定画像名を変更
    pub fn with_paths(mut self, image_path: &str, default_image: &str) -> Self {
        self.image_path = image_path.trim_end_matches('/').to_string();
        self.default_image = default_image.to_string();
        self
    }

    /// ホスト相対の画像パス
    pub fn image_src(&self, record: &PlantRecord) -> String {
        let name = record.image_ref.as_deref().unwrap_or(&self.default_image);
        format!("{}/{}.jpg", self.image_path, name)
    }

    /// 存在確認に使う完全URL（キャッシュキー）
    pub fn probe_url(&self, record: &PlantRecord) -> String {
        format!("{}{}", self.origin, self.image_src(record))
    }

    /// キャッシュ済みなら結果を返す（確認はしない）
    pub fn cached(&self, record: &PlantRecord) -> Option<ImageResolution> {
        let exists = self.cache.get(&self.probe_url(record))?;
        Some(self.resolution(record, exists))
    }

    /// 解決（未確認のURLだけ存在確認する）
    pub async fn resolve(&self, record: &PlantRecord) -> ImageResolution {
        let url = self.probe_url(record);
        let exists = match self.cache.get(&url) {
            Some(exists) => exists,
            None => {
                let found = self.probe.probe(&url).await;
                tracing::debug!(url = %url, exists = found, "image probed");
                self.cache.record(&url, found)
            }
        };
        self.resolution(record, exists)
    }

    pub fn cache(&self) -> &ImageAvailabilityCache {
        &self.cache
    }

    fn resolution(&self, record: &PlantRecord, exists: bool) -> ImageResolution {
        if exists {
            ImageResolution::Image {
                src: self.image_src(record),
            }
        } else {
            ImageResolution::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Placement, StatusCode, UNKNOWN};
    use futures::executor::block_on;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 呼び出し回数を数えるプローブ
    #[derive(Default)]
    struct CountingProbe {
        calls: AtomicUsize,
        existing: HashSet<String>,
    }

    impl CountingProbe {
        fn with_existing(urls: &[&str]) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                existing: urls.iter().map(|u| u.to_string()).collect(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ImageProbe for CountingProbe {
        fn probe(&self, url: &str) -> impl Future<Output = bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let exists = self.existing.contains(url);
            async move { exists }
        }
    }

    fn record(image: Option<&str>) -> PlantRecord {
        PlantRecord {
            id: "sensor.plant_tracker_fern".to_string(),
            name: "Fern".to_string(),
            last_watered: UNKNOWN.to_string(),
            last_fertilized: UNKNOWN.to_string(),
            watering_interval_days: "14".to_string(),
            watering_postponed_days: "0".to_string(),
            days_since_watered: "0".to_string(),
            placement: Placement::Outdoor,
            status: StatusCode::Ok,
            image_ref: image.map(str::to_string),
        }
    }

    #[test]
    fn test_candidate_paths() {
        let resolver = ImageResolver::new("http://ha.local:8123/", CountingProbe::default());

        assert_eq!(
            resolver.image_src(&record(Some("plant_tracker.fern"))),
            "/local/plant_tracker/plant_tracker.fern.jpg"
        );
        assert_eq!(
            resolver.probe_url(&record(None)),
            "http://ha.local:8123/local/plant_tracker/default_image.jpg"
        );
    }

    #[test]
    fn test_probe_once_per_url() {
        let probe = CountingProbe::with_existing(&[
            "http://ha/local/plant_tracker/plant_tracker.fern.jpg",
        ]);
        let resolver = ImageResolver::new("http://ha", probe);
        let fern = record(Some("plant_tracker.fern"));

        let first = block_on(resolver.resolve(&fern));
        let second = block_on(resolver.resolve(&fern));

        assert_eq!(
            first,
            ImageResolution::Image { src: "/local/plant_tracker/plant_tracker.fern.jpg".to_string() }
        );
        assert_eq!(second, first);
        assert_eq!(resolver.probe.calls(), 1);
    }

    #[test]
    fn test_missing_image_falls_back_and_is_cached() {
        let resolver = ImageResolver::new("http://ha", CountingProbe::default());
        let plant = record(Some("missing"));

        assert!(resolver.cached(&plant).is_none());
        assert_eq!(block_on(resolver.resolve(&plant)), ImageResolution::Fallback);
        assert_eq!(resolver.cached(&plant), Some(ImageResolution::Fallback));
        assert_eq!(block_on(resolver.resolve(&plant)), ImageResolution::Fallback);
        assert_eq!(resolver.probe.calls(), 1);
    }

    #[test]
    fn test_distinct_urls_probed_separately() {
        let resolver = ImageResolver::new("http://ha", CountingProbe::default());

        block_on(resolver.resolve(&record(Some("a"))));
        block_on(resolver.resolve(&record(Some("b"))));
        block_on(resolver.resolve(&record(Some("a"))));

        assert_eq!(resolver.probe.calls(), 2);
        assert_eq!(resolver.cache().len(), 2);
    }

    #[test]
    fn test_cache_is_write_once() {
        let cache = ImageAvailabilityCache::new();
        assert!(cache.record("http://ha/x.jpg", true));
        assert!(cache.record("http://ha/x.jpg", false));
        assert_eq!(cache.get("http://ha/x.jpg"), Some(true));
    }

    #[test]
    fn test_custom_paths() {
        let resolver = ImageResolver::new("", CountingProbe::default())
            .with_paths("/local/plants/", "placeholder");
        assert_eq!(resolver.image_src(&record(None)), "/local/plants/placeholder.jpg");
    }
}
