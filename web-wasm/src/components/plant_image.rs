//! 植物画像（確認が済むまではプレースホルダー）

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::app::SharedResolver;
use plant_tracker_common::{ImageResolution, PlantRecord};

#[component]
pub fn PlantImage(record: PlantRecord) -> impl IntoView {
    let resolver = expect_context::<SharedResolver>().get_value();
    let cached = resolver.cached(&record);
    let (image, set_image) = signal(cached.clone().unwrap_or(ImageResolution::Fallback));

    if cached.is_none() {
        spawn_local(async move {
            let resolution = resolver.resolve(&record).await;
            // 確認中にタイルが消えていたら捨てる
            let _ = set_image.try_set(resolution);
        });
    }

    view! {
        <div class="plant-image-container">
            {move || match image.get() {
                ImageResolution::Image { src } => {
                    view! { <img src=src alt="Plant Image" class="plant-image" /> }.into_any()
                }
                ImageResolution::Fallback => {
                    view! { <ha-icon icon="mdi:flower" class="plant-image fallback-icon"></ha-icon> }
                        .into_any()
                }
            }}
        </div>
    }
}
