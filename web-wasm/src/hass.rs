//! Home Assistant フロントエンドの `hass` オブジェクト連携
//!
//! - `hass.states` からスナップショットを作る
//! - `hass.callService(domain, service, data)` でコマンドを送る

use plant_tracker_common::{Command, CommandSink, Snapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// ホストから渡される `hass` オブジェクト
    #[derive(Clone, Debug)]
    pub type Hass;

    #[wasm_bindgen(method, getter)]
    fn states(this: &Hass) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = callService)]
    fn call_service(
        this: &Hass,
        domain: &str,
        service: &str,
        data: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// `hass.states` をスナップショットに変換
pub fn read_snapshot(hass: &Hass, entity_prefix: &str) -> Result<Snapshot, String> {
    let states: serde_json::Value = serde_wasm_bindgen::from_value(hass.states())
        .map_err(|e| format!("hass.states を読めません: {}", e))?;
    Snapshot::from_value(states, entity_prefix).map_err(|e| e.to_string())
}

/// サービスデータを素のJSオブジェクトにする（Map にはしない）
fn encode_service_data(command: &Command) -> Result<JsValue, serde_wasm_bindgen::Error> {
    command
        .service_data()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// `hass.callService` へ送るシンク
#[derive(Default)]
pub struct HassSink {
    hass: Option<Hass>,
}

impl HassSink {
    pub fn set_hass(&mut self, hass: Hass) {
        self.hass = Some(hass);
    }
}

impl CommandSink for HassSink {
    fn dispatch(&mut self, command: Command) {
        let Some(hass) = self.hass.as_ref() else {
            log::error!("hass is not set; dropping {}", command);
            return;
        };

        let data = match encode_service_data(&command) {
            Ok(data) => data,
            Err(e) => {
                log::error!("failed to encode {}: {}", command, e);
                return;
            }
        };

        match hass.call_service(command.domain(), command.service(), &data) {
            Ok(promise) => {
                let service = command.service();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("{} failed: {:?}", service, e);
                    }
                });
            }
            Err(e) => log::error!("callService threw for {}: {:?}", command, e),
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use plant_tracker_common::PlantPayload;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_service_data_is_plain_object() {
        let command = Command::UpdatePlant {
            plant_id: "Fern".to_string(),
            payload: PlantPayload {
                plant_name: "Fern".to_string(),
                last_watered: "2024-05-01".to_string(),
                last_fertilized: "Unknown".to_string(),
                watering_interval: "7".to_string(),
                watering_postponed: "0".to_string(),
                inside: true,
            },
        };
        let data = encode_service_data(&command).unwrap();
        assert!(data.is_object());
        assert!(!data.is_instance_of::<js_sys::Map>());

        let plant_id = js_sys::Reflect::get(&data, &"plant_id".into()).unwrap();
        assert_eq!(plant_id.as_string().as_deref(), Some("Fern"));
        let inside = js_sys::Reflect::get(&data, &"inside".into()).unwrap();
        assert_eq!(inside.as_bool(), Some(true));
    }

    #[wasm_bindgen_test]
    fn test_refresh_sends_empty_object() {
        let data = encode_service_data(&Command::RefreshDaysSinceWatered).unwrap();
        assert!(data.is_object());
        assert_eq!(js_sys::Object::keys(data.unchecked_ref::<js_sys::Object>()).length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_sink_without_hass_drops_command() {
        let mut sink = HassSink::default();
        sink.dispatch(Command::RefreshDaysSinceWatered);
    }
}
