//! Pre-commit hook manifest (`.pre-commit-config.yaml`)

pub mod model;
pub mod patch;
pub mod select;

pub use model::{Hook, PrecommitConfig, Repo};
pub use patch::{Patcher, apply};
pub use select::{Present, select};
