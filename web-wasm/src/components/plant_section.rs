//! 屋内/屋外セクション

use leptos::prelude::*;
use crate::app::WidgetSignal;
use crate::components::plant_tile::PlantTile;
use plant_tracker_common::{partition, Placement, PlantRecord};

#[component]
pub fn PlantSection(widget: WidgetSignal, placement: Placement) -> impl IntoView {
    // 下書きの入力では再描画しない
    let records = Memo::new(move |_| {
        widget.with(|w| {
            partition(w.snapshot(), placement)
                .into_iter()
                .cloned()
                .collect::<Vec<PlantRecord>>()
        })
    });

    let on_open = move |entity_id: String| {
        widget.update(|w| {
            if let Err(e) = w.open_editor(Some(&entity_id)) {
                log::error!("failed to open editor: {}", e);
            }
        });
    };

    view! {
        <div class="card-content">
            <h1>{placement.heading()}</h1>
            <For
                each=move || records.get()
                key=|record| record.clone()
                children=move |record| {
                    view! { <PlantTile record=record on_open=on_open /> }
                }
            />
        </div>
    }
}
