//! Rumbo Core - Step Catalog & View Derivation
//!
//! This crate defines the **configuration** side of Rumbo:
//! - `StepCatalog`: the validated table of step configurations
//! - `StepView`: everything a renderer needs, derived in one pass
//! - `RoutePlan`: ordered step sequences per role and service
//! - `FlowManifest`: the TOML loading boundary
//!
//! **IMPORTANT**: This layer is pure and synchronous - no IO outside
//! `FlowManifest::load`, no locks, no async.

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod motion;
pub mod route;
pub mod sheet;
pub mod step;
pub mod view;

pub mod prelude {
    pub use crate::catalog::StepCatalog;
    pub use crate::manifest::FlowManifest;
    pub use crate::motion::{Motion, TransitionSpec};
    pub use crate::route::RoutePlan;
    pub use crate::sheet::{SheetConfig, Viewport};
    pub use crate::step::{Role, Service, StepConfig, StepId, StepKind};
    pub use crate::view::StepView;
}

pub use catalog::{CatalogBuilder, StepCatalog};
pub use error::{CatalogError, ManifestError, PlanError, ViewportError};
pub use manifest::FlowManifest;
pub use motion::{DEFAULT_MOTION_MS, Easing, Motion, TransitionKind, TransitionSpec};
pub use route::{Route, RoutePlan, RoutePlanBuilder};
pub use sheet::{BlurSpec, BlurTint, GradientSpec, SheetConfig, Viewport};
pub use step::{Role, Service, StepConfig, StepId, StepKind};
pub use view::{Backdrop, CriticalFlags, GestureDefaults, SheetHandle, SnapPoint, StepView};
