//! TOML flow manifests.
//!
//! A manifest is the whole flow as one document: `[steps.<id>]` tables plus
//! `[entries]` and `[routes.<role>]` tables. Loading validates geometry and
//! route structure up front; lenient fallbacks (unknown kinds, steps missing
//! from the catalog) are resolved here, with a `warn!`, so nothing downstream
//! ever has to sniff strings again.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::StepCatalog;
use crate::error::ManifestError;
use crate::motion::{DEFAULT_MOTION_MS, TransitionKind, TransitionSpec};
use crate::route::RoutePlan;
use crate::sheet::SheetConfig;
use crate::step::{Role, Service, StepConfig, StepKind};

/// Parsed flow manifest: a validated catalog plus a validated plan.
///
/// # Example
///
/// ```rust,ignore
/// let manifest = FlowManifest::load("flows/booking.toml")?;
/// let controller = FlowController::new(manifest.catalog, manifest.plan, viewport);
/// ```
#[derive(Debug, Clone)]
pub struct FlowManifest {
    pub catalog: StepCatalog,
    pub plan: RoutePlan,
}

impl FlowManifest {
    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<FlowManifest, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        FlowManifest::from_toml(&text)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml(text: &str) -> Result<FlowManifest, ManifestError> {
        let raw: RawManifest = toml::from_str(text)?;
        raw.resolve()
    }
}

// ===== Raw document shape =====

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    steps: BTreeMap<String, RawStep>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default)]
    routes: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    kind: Option<String>,
    #[serde(default)]
    sheet: SheetConfig,
    transition: Option<RawTransition>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTransition {
    kind: Option<String>,
    duration_ms: Option<u32>,
}

impl RawManifest {
    fn resolve(self) -> Result<FlowManifest, ManifestError> {
        let mut catalog = StepCatalog::builder();
        for (id, raw) in self.steps {
            let kind = resolve_kind(&id, raw.kind.as_deref());
            let transition = resolve_transition(&id, raw.transition);
            catalog = catalog.step(id, StepConfig::new(kind, raw.sheet, transition));
        }
        let catalog = catalog.build()?;

        let mut plan = RoutePlan::builder();
        for (role_key, step) in self.entries {
            let role = Role::parse(&role_key).ok_or(ManifestError::UnknownRole(role_key))?;
            plan = plan.entry(role, step);
        }
        for (role_key, services) in self.routes {
            let role =
                Role::parse(&role_key).ok_or_else(|| ManifestError::UnknownRole(role_key.clone()))?;
            for (service_key, steps) in services {
                let service = Service::parse(&service_key).ok_or(ManifestError::UnknownService {
                    role,
                    value: service_key,
                })?;
                for step in &steps {
                    if !catalog.contains(step) {
                        tracing::warn!(
                            rumbo.step = %step,
                            rumbo.role = %role,
                            rumbo.service = %service,
                            "Route step is not in the catalog; it will render the fallback sheet"
                        );
                    }
                }
                plan = plan.route(role, service, steps);
            }
        }
        let plan = plan.build()?;

        Ok(FlowManifest { catalog, plan })
    }
}

fn resolve_kind(id: &str, raw: Option<&str>) -> StepKind {
    match raw {
        None => StepKind::classify(id),
        Some("generic") => StepKind::Generic,
        Some("confirmation") => StepKind::Confirmation,
        Some("searching_driver") => StepKind::SearchingDriver,
        Some("tracking") => StepKind::Tracking,
        Some("summary") => StepKind::Summary,
        Some(other) => {
            tracing::warn!(
                rumbo.step = %id,
                kind = %other,
                "Unknown step kind; classifying from the identifier"
            );
            StepKind::classify(id)
        }
    }
}

fn resolve_transition(id: &str, raw: Option<RawTransition>) -> TransitionSpec {
    let Some(raw) = raw else {
        return TransitionSpec::default();
    };
    let kind = match raw.kind.as_deref() {
        None | Some("none") => TransitionKind::None,
        Some("fade") => TransitionKind::Fade,
        Some("slide") => TransitionKind::Slide,
        Some(other) => {
            // The documented fallback for unrecognized kinds: ease-in-out at
            // the default duration, whatever the author wrote next to it.
            tracing::warn!(
                rumbo.step = %id,
                kind = %other,
                "Unknown transition kind; falling back to fade/200ms"
            );
            return TransitionSpec {
                kind: TransitionKind::Fade,
                duration_ms: Some(DEFAULT_MOTION_MS),
            };
        }
    };
    TransitionSpec {
        kind,
        duration_ms: raw.duration_ms,
    }
}
