//! カードのルートコンポーネント

use leptos::prelude::*;
use crate::components::{
    edit_modal::EditModal,
    plant_section::PlantSection,
};
use crate::hass::HassSink;
use crate::probe::FetchProbe;
use crate::style::CARD_STYLES;
use plant_tracker_common::{CardConfig, ImageResolver, Placement, PlantTrackerWidget};
use std::sync::Arc;

/// カードの状態（hass は Send でないのでローカル保存）
pub type WidgetSignal = RwSignal<PlantTrackerWidget<HassSink>, LocalStorage>;

/// 画像リゾルバ（全タイルで共有）
pub type SharedResolver = StoredValue<Arc<ImageResolver<FetchProbe>>>;

#[component]
pub fn App(
    widget: WidgetSignal,
    config: RwSignal<CardConfig>,
    resolver: SharedResolver,
) -> impl IntoView {
    provide_context(resolver);

    let on_add = move |_| {
        widget.update(|w| {
            if let Err(e) = w.open_editor(None) {
                log::error!("failed to open editor: {}", e);
            }
        });
    };

    view! {
        <ha-card header=move || config.with(|c| c.title.clone())>
            <style>{CARD_STYLES}</style>
            <div class="card-actions">
                <mwc-button label="Add Plant" on:click=on_add></mwc-button>
            </div>
            <PlantSection widget=widget placement=Placement::Outdoor />
            <PlantSection widget=widget placement=Placement::Indoor />
            <Show when=move || widget.with(|w| w.editor().is_open())>
                <EditModal widget=widget />
            </Show>
        </ha-card>
    }
}
