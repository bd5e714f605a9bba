//! カードのスタイル（シャドウDOM内に埋め込む）

pub const CARD_STYLES: &str = r#"
.card-actions {
    display: flex;
    justify-content: flex-end;
    padding: 8px 16px 0;
}
.card-content {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    padding: 8px 16px 16px;
}
.card-content h1 {
    flex-basis: 100%;
    font-size: 1.2em;
    margin: 8px 0 0;
}
.plant-tracker-entity {
    width: 140px;
    border-radius: 8px;
    padding: 8px;
    cursor: pointer;
    box-sizing: border-box;
}
.plant-tracker-entity p {
    margin: 2px 0;
    font-size: 0.85em;
}
.plant-tracker-entity .name {
    font-weight: bold;
    font-size: 1em;
}
.plant-image-container {
    display: flex;
    justify-content: center;
    height: 100px;
}
.plant-image {
    max-width: 100%;
    max-height: 100px;
    border-radius: 4px;
    object-fit: cover;
}
.fallback-icon {
    --mdc-icon-size: 64px;
    color: var(--secondary-text-color);
}
.modal {
    position: fixed;
    inset: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: center;
    background-color: rgba(0, 0, 0, 0.4);
}
.modal-content {
    position: relative;
    min-width: 300px;
    max-width: 90vw;
    padding: 16px 20px;
    border-radius: 8px;
    background-color: var(--card-background-color, #fff);
    color: var(--primary-text-color);
}
.close {
    position: absolute;
    top: 8px;
    right: 12px;
    font-size: 1.5em;
    cursor: pointer;
}
.error-message {
    color: var(--error-color, #db4437);
}
.field, .checkbox {
    display: flex;
    flex-direction: column;
    margin: 6px 0;
}
.checkbox {
    flex-direction: row;
    align-items: center;
    gap: 6px;
}
.field-row {
    display: flex;
    align-items: flex-end;
    gap: 8px;
}
.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 8px;
    margin-top: 12px;
}
.modal-actions .danger {
    color: var(--error-color, #db4437);
}
.modal-actions .primary {
    font-weight: bold;
}
"#;
