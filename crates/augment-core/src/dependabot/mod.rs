//! Dependabot update manifest (`.github/dependabot.yml`)

pub mod model;
pub mod patch;
pub mod select;

pub use model::{DependabotConfig, Schedule, Update, UpdateKey};
pub use patch::apply;
pub use select::select;
