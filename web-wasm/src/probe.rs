//! fetch による画像の存在確認

use plant_tracker_common::ImageProbe;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchProbe;

impl ImageProbe for FetchProbe {
    fn probe(&self, url: &str) -> impl Future<Output = bool> {
        let url = url.to_string();
        async move {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match JsFuture::from(window.fetch_with_str(&url)).await {
                Ok(value) => value
                    .dyn_into::<Response>()
                    .map(|resp| resp.ok())
                    .unwrap_or(false),
                Err(_) => false,
            }
        }
    }
}

/// 現在ページのオリジン（例: `http://homeassistant.local:8123`）
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
