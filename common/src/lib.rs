//! Plant Tracker Common Library
//!
//! WASMカードとCLIで共有される型とワークフロー

pub mod types;
pub mod error;
pub mod snapshot;
pub mod normalize;
pub mod presenter;
pub mod command;
pub mod editor;
pub mod image;
pub mod config;
pub mod widget;

pub use types::{PlantRecord, Placement, StatusCode, UNKNOWN};
pub use error::{Error, Result};
pub use snapshot::{EntityState, Snapshot, DEFAULT_ENTITY_PREFIX};
pub use normalize::{normalize_name, same_name};
pub use presenter::{due_days, partition, PlantGroups, PlantTile};
pub use command::{Command, CommandSink, PlantPayload, SERVICE_DOMAIN};
pub use editor::{format_date, EditDraft, EditorState, PlantEditor};
pub use image::{ImageAvailabilityCache, ImageProbe, ImageResolution, ImageResolver};
pub use config::CardConfig;
pub use widget::PlantTrackerWidget;
