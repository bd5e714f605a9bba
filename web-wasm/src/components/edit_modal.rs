//! 追加/編集モーダル

use leptos::prelude::*;
use crate::app::WidgetSignal;
use chrono::{Local, NaiveDate};
use plant_tracker_common::{EditDraft, PlantEditor, Result};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 編集画面を更新し、失敗したらログに残す
fn edit(widget: WidgetSignal, action: impl FnOnce(&mut PlantEditor) -> Result<()>) {
    widget.update(|w| {
        if let Err(e) = action(w.editor_mut()) {
            log::warn!("editor action failed: {}", e);
        }
    });
}

#[component]
pub fn EditModal(widget: WidgetSignal) -> impl IntoView {
    let title = move || widget.with(|w| w.editor().title().unwrap_or_default());
    let error = move || widget.with(|w| w.editor().error_message().map(str::to_string));
    let creating = move || widget.with(|w| w.editor().is_creating());
    let editing = move || widget.with(|w| w.editor().entity_id().is_some());

    let on_cancel = move |_| widget.update(|w| w.cancel());

    let on_confirm = move |_| {
        widget.update(|w| {
            // 重複名はエディタ側でメッセージになる
            if let Err(e) = w.confirm() {
                log::info!("confirm rejected: {}", e);
            }
        });
    };

    let on_delete = move |_| {
        widget.update(|w| match w.delete(gloo::dialogs::confirm) {
            Ok(true) => log::info!("plant deleted"),
            Ok(false) => {}
            Err(e) => log::error!("delete failed: {}", e),
        });
    };

    let inside = move || widget.with(|w| w.editor().draft().is_some_and(|d| d.inside));

    view! {
        <div class="modal">
            <div class="modal-content">
                <span class="close" on:click=on_cancel>"\u{00d7}"</span>
                <h2>{title}</h2>
                {move || error().map(|message| view! { <p class="error-message">{message}</p> })}

                <Show when=creating>
                    <DraftField
                        widget=widget
                        label="Plant Name"
                        get=|d: &EditDraft| d.name.clone()
                        set=|d: &mut EditDraft, v| d.name = v
                    />
                </Show>

                <div class="field-row">
                    <DraftField
                        widget=widget
                        label="Last Watered"
                        get=|d: &EditDraft| d.last_watered.clone()
                        set=|d: &mut EditDraft, v| d.last_watered = v
                    />
                    <button on:click=move |_| edit(widget, |e| e.water_today(today()))>
                        "Water Today"
                    </button>
                </div>

                <div class="field-row">
                    <DraftField
                        widget=widget
                        label="Last Fertilized"
                        get=|d: &EditDraft| d.last_fertilized.clone()
                        set=|d: &mut EditDraft, v| d.last_fertilized = v
                    />
                    <button on:click=move |_| edit(widget, |e| e.fertilize_today(today()))>
                        "Fertilize Today"
                    </button>
                </div>

                <DraftField
                    widget=widget
                    label="Watering Interval"
                    get=|d: &EditDraft| d.watering_interval.clone()
                    set=|d: &mut EditDraft, v| d.watering_interval = v
                />

                <div class="field-row">
                    <DraftField
                        widget=widget
                        label="Watering Postponed"
                        get=|d: &EditDraft| d.watering_postponed.clone()
                        set=|d: &mut EditDraft, v| d.watering_postponed = v
                    />
                    <button on:click=move |_| edit(widget, |e| e.postpone())>
                        "Postpone"
                    </button>
                </div>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=inside
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            widget.update(|w| {
                                if let Some(d) = w.editor_mut().draft_mut() {
                                    d.inside = checked;
                                }
                            });
                        }
                    />
                    "Inside"
                </label>

                <div class="modal-actions">
                    <button on:click=on_cancel>"Cancel"</button>
                    <Show when=editing>
                        <button class="danger" on:click=on_delete>"Delete"</button>
                    </Show>
                    <button class="primary" on:click=on_confirm>"OK"</button>
                </div>
            </div>
        </div>
    }
}

/// 下書きの1項目
#[component]
fn DraftField(
    widget: WidgetSignal,
    label: &'static str,
    get: fn(&EditDraft) -> String,
    set: fn(&mut EditDraft, String),
) -> impl IntoView {
    let value = move || widget.with(|w| w.editor().draft().map(get).unwrap_or_default());

    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=value
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    widget.update(|w| {
                        if let Some(d) = w.editor_mut().draft_mut() {
                            set(d, v);
                        }
                    });
                }
            />
        </label>
    }
}
