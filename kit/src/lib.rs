//! Rumbo facade crate.
//!
//! This crate re-exports core, flow, and std crates with a single entry point.
//! `FlowController` remains a pure state machine, not a UI component.

pub use rumbo_core as core;
pub use rumbo_flow as flow;
#[cfg(feature = "std")]
pub use rumbo_std as std;

pub use rumbo_core::{FlowManifest, StepCatalog, StepId, StepView, Viewport};
pub use rumbo_flow::{FlowController, SharedFlow};
#[cfg(feature = "std")]
pub use rumbo_std::{standard_catalog, standard_plan};

pub mod observe;

pub mod prelude {
    pub use rumbo_core::prelude::*;
    pub use rumbo_flow::prelude::*;
    #[cfg(feature = "std")]
    pub use rumbo_std::prelude::*;
}
