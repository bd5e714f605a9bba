//! Plant Tracker Lovelace card (Leptos + WASM)
//!
//! `js/plant-tracker-card.js` がカスタム要素を定義し、
//! `setConfig` と `hass` をこのクレートの [`PlantTrackerCard`] に転送する。

mod app;
mod components;
mod hass;
mod probe;
mod style;

use app::{SharedResolver, WidgetSignal};
use hass::{Hass, HassSink};
use leptos::prelude::*;
use plant_tracker_common::{CardConfig, ImageResolver, PlantTrackerWidget};
use probe::{page_origin, FetchProbe};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // 二重初期化は無視
    let _ = console_log::init_with_level(log::Level::Info);
}

fn build_resolver(config: &CardConfig) -> Arc<ImageResolver<FetchProbe>> {
    Arc::new(
        ImageResolver::new(page_origin(), FetchProbe)
            .with_paths(&config.image_path, &config.default_image),
    )
}

/// Lovelace の設定オブジェクトを読む（失敗は JS の `Error`）
fn parse_config(config: JsValue) -> Result<CardConfig, JsValue> {
    let value: serde_json::Value = if config.is_undefined() || config.is_null() {
        serde_json::Value::Null
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| js_sys::Error::new(&format!("invalid card config: {}", e)))?
    };
    CardConfig::from_value(value)
        .map_err(|e| js_sys::Error::new(&format!("invalid card config: {}", e)).into())
}

/// カード1枚分の状態
#[wasm_bindgen]
pub struct PlantTrackerCard {
    owner: Owner,
    widget: WidgetSignal,
    config: RwSignal<CardConfig>,
    resolver: SharedResolver,
}

#[wasm_bindgen]
impl PlantTrackerCard {
    /// `root` にカードを描画する
    #[wasm_bindgen(constructor)]
    pub fn new(root: web_sys::HtmlElement) -> PlantTrackerCard {
        let owner = Owner::new();
        let (widget, config, resolver) = owner.with(|| {
            let config = CardConfig::default();
            let resolver = StoredValue::new(build_resolver(&config));
            let widget = RwSignal::new_local(PlantTrackerWidget::new(HassSink::default()));
            (widget, RwSignal::new(config), resolver)
        });

        owner.with(|| {
            leptos::mount::mount_to(root, move || {
                view! { <app::App widget=widget config=config resolver=resolver /> }
            })
            .forget();
        });

        PlantTrackerCard {
            owner,
            widget,
            config,
            resolver,
        }
    }

    /// Lovelace の設定を受け取る（不正なら例外）
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: JsValue) -> Result<(), JsValue> {
        let config = parse_config(config)?;

        log::debug!("card config: {:?}", config);
        self.owner.with(|| {
            self.resolver.set_value(build_resolver(&config));
            self.config.set(config);
        });
        Ok(())
    }

    /// ホストから新しい `hass` を受け取るたびに呼ばれる
    #[wasm_bindgen(setter)]
    pub fn set_hass(&self, hass: Hass) {
        let prefix = self.config.with_untracked(|c| c.entity_prefix.clone());
        match hass::read_snapshot(&hass, &prefix) {
            Ok(snapshot) => {
                log::debug!("snapshot with {} plants", snapshot.len());
                self.widget.update(|w| {
                    w.sink_mut().set_hass(hass);
                    w.push_snapshot(snapshot);
                });
            }
            Err(e) => log::error!("failed to read hass.states: {}", e),
        }
    }

    /// Lovelace のレイアウト用（1単位 = 約50px、タイル1行で3単位）
    #[wasm_bindgen(js_name = getCardSize)]
    pub fn card_size(&self) -> u32 {
        let plants = self.widget.with_untracked(|w| w.snapshot().len()) as u32;
        1 + plants.div_ceil(3) * 3
    }
}
