//! The step catalog: configuration as data.
//!
//! Every screen-state of the booking flow is one row in a table. The table
//! is built once, validated once, and read forever after without a single
//! fallible call. Unknown ids resolve to the fallback record so the
//! renderer always has something to draw.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::error::CatalogError;
use crate::step::{StepConfig, StepId};

/// Immutable, validated table of step configurations.
///
/// # Example
///
/// ```rust,ignore
/// let catalog = StepCatalog::builder()
///     .step("idle", StepConfig::new(StepKind::Generic, SheetConfig::hidden(), TransitionSpec::none()))
///     .step("confirm_origin", StepConfig::new(StepKind::Confirmation, SheetConfig::open(120.0, 260.0, 520.0), TransitionSpec::fade(180)))
///     .build()?;
///
/// let config = catalog.get("confirm_origin");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StepCatalog {
    steps: AHashMap<StepId, StepConfig>,
}

impl StepCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Total lookup: unknown ids resolve to [`StepConfig::fallback`].
    ///
    /// Render paths call this. It never fails and never allocates.
    pub fn get(&self, id: &str) -> &StepConfig {
        self.steps.get(id).unwrap_or_else(|| StepConfig::fallback())
    }

    /// Precise lookup for callers that care whether the id is configured.
    pub fn lookup(&self, id: &str) -> Option<&StepConfig> {
        self.steps.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &StepConfig)> {
        self.steps.iter()
    }

    /// Export the table for design tooling, keys sorted for stable diffs.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let ordered: BTreeMap<&str, &StepConfig> = self
            .steps
            .iter()
            .map(|(id, config)| (id.as_str(), config))
            .collect();
        serde_json::to_value(ordered)
    }
}

/// Collects step rows, then validates the whole table in one pass.
///
/// Validation happens in [`build`](Self::build), so authoring chains stay
/// infallible and an invalid table reports the offending step by name.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    rows: Vec<(StepId, StepConfig)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder { rows: Vec::new() }
    }

    pub fn step(mut self, id: impl Into<StepId>, config: StepConfig) -> Self {
        self.rows.push((id.into(), config));
        self
    }

    /// Validate every row and freeze the table.
    ///
    /// Rejects duplicate ids and heights violating
    /// `0 <= min <= initial <= max`. Bad geometry is a configuration bug;
    /// it is reported here and never clamped.
    pub fn build(self) -> Result<StepCatalog, CatalogError> {
        let mut steps = AHashMap::with_capacity(self.rows.len());
        for (id, config) in self.rows {
            if !config.sheet.geometry_valid() {
                return Err(CatalogError::InvalidGeometry {
                    min: config.sheet.min_height,
                    initial: config.sheet.initial_height,
                    max: config.sheet.max_height,
                    step: id,
                });
            }
            if steps.insert(id.clone(), config).is_some() {
                return Err(CatalogError::DuplicateStep { step: id });
            }
        }
        Ok(StepCatalog { steps })
    }
}
