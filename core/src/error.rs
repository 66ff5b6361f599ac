//! Error taxonomy for configuration loading.
//!
//! Every error here is a load-time error: bad geometry, duplicate entries,
//! unparseable manifests. Once a catalog and plan are built, derivation and
//! stepping are total and nothing at runtime returns a `Result`.

use std::path::PathBuf;

use thiserror::Error;

use crate::step::{Role, Service, StepId};

/// Step catalog construction errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(
        "Step '{step}' has invalid sheet heights: min={min} initial={initial} max={max} \
         (need 0 <= min <= initial <= max, all finite)"
    )]
    InvalidGeometry {
        step: StepId,
        min: f32,
        initial: f32,
        max: f32,
    },

    #[error("Step '{step}' is configured twice")]
    DuplicateStep { step: StepId },
}

/// Route plan construction errors.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Route {role}/{service} has no steps")]
    EmptyRoute { role: Role, service: Service },

    #[error("Route {role}/{service} is declared twice")]
    DuplicateRoute { role: Role, service: Service },

    #[error("Role {role} has no entry step")]
    MissingEntry { role: Role },
}

/// Errors raised while loading a TOML flow manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Unknown role '{0}' in [routes]")]
    UnknownRole(String),

    #[error("Unknown service '{value}' in [routes.{role}]")]
    UnknownService { role: Role, value: String },
}

/// Rejected screen dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Viewport must be finite and positive, got {width}x{height}")]
pub struct ViewportError {
    pub width: f32,
    pub height: f32,
}
