//! 植物タイル

use leptos::prelude::*;
use crate::components::plant_image::PlantImage;
use plant_tracker_common::{PlantRecord, PlantTile as TileView};

#[component]
pub fn PlantTile<F>(record: PlantRecord, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let tile = TileView::from_record(&record);
    let entity_id = tile.entity_id.clone();

    view! {
        <div
            class="plant-tracker-entity"
            style=format!("background-color: {};", tile.background_color)
            on:click=move |_| on_open(entity_id.clone())
        >
            <PlantImage record=record />
            <p class="name">{tile.name}</p>
            <p class="last_watered">{tile.last_watered}</p>
            <p class="last_fertilized">{tile.last_fertilized}</p>
            <p class="due">{tile.due}</p>
            <p class="watering_postponed">{tile.watering_postponed}</p>
        </div>
    }
}
