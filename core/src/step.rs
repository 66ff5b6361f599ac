//! Step identity and classification.
//!
//! A *step* names one screen-state of the booking flow ("confirm_origin",
//! "CUSTOMER_TRANSPORT_BUSCANDO_CONDUCTOR", ...). Steps carry an explicit
//! [`StepKind`] tag instead of the legacy habit of pattern-matching the
//! identifier string at render time; the identifier vocabularies survive
//! only in [`StepKind::classify`], which runs once at authoring/load time.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::motion::{TransitionKind, TransitionSpec};
use crate::sheet::SheetConfig;

/// Identifier of one screen-state in the booking flow.
///
/// Step ids are free-form strings as authored by the catalog. The newtype
/// wraps an `Arc<str>` so ids clone cheaply through state snapshots and
/// journal events, and can be used as typed map keys and log fields without
/// being confused with any other string in the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(Arc<str>);

impl StepId {
    pub fn new(id: impl AsRef<str>) -> Self {
        StepId(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for StepId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(StepId(Arc::from(id)))
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for StepId {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "StepId".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        String::json_schema(generator)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        StepId(Arc::from(id))
    }
}

impl From<String> for StepId {
    fn from(id: String) -> Self {
        StepId(Arc::from(id))
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StepId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Explicit classification of a step, set at configuration-authoring time.
///
/// Render code branches on this tag, never on the identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// No special rendering behavior.
    #[default]
    Generic,
    /// Pin-on-map confirmation of an origin or destination.
    Confirmation,
    /// Waiting for a driver to accept; fixed, locked sheet.
    SearchingDriver,
    /// Live tracking of an accepted ride or delivery.
    Tracking,
    /// End-of-trip summary and rating.
    Summary,
}

impl StepKind {
    /// Fallback classification for catalogs that omit the `kind` field,
    /// reproducing the legacy identifier vocabularies exactly:
    /// identifiers containing `BUSCANDO_CONDUCTOR` are searching-driver
    /// steps, the identifier `confirm_origin` is a confirmation step.
    pub fn classify(id: &str) -> Self {
        if id.contains("BUSCANDO_CONDUCTOR") {
            return StepKind::SearchingDriver;
        }
        if id == "confirm_origin" {
            return StepKind::Confirmation;
        }
        StepKind::Generic
    }
}

/// Persona driving the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Driver,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Customer, Role::Driver];

    pub fn slug(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Driver => "driver",
        }
    }

    /// Parse a manifest key into a role.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "customer" => Some(Role::Customer),
            "driver" => Some(Role::Driver),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Service category a booking runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Transport,
    Delivery,
    /// Errand runs ("mandado"): buy-and-bring jobs with free-form instructions.
    #[serde(rename = "mandado")]
    Errand,
    /// Parcel shipping ("envío"): point-to-point package handoff.
    #[serde(rename = "envio")]
    Parcel,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Transport,
        Service::Delivery,
        Service::Errand,
        Service::Parcel,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Service::Transport => "transport",
            Service::Delivery => "delivery",
            Service::Errand => "mandado",
            Service::Parcel => "envio",
        }
    }

    /// Parse a manifest key into a service. The Spanish slugs are canonical;
    /// the English aliases are accepted for convenience.
    pub fn parse(s: &str) -> Option<Service> {
        match s {
            "transport" => Some(Service::Transport),
            "delivery" => Some(Service::Delivery),
            "mandado" | "errand" => Some(Service::Errand),
            "envio" | "parcel" => Some(Service::Parcel),
            _ => None,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One catalog entry: everything the renderer needs to present a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct StepConfig {
    #[serde(default)]
    pub kind: StepKind,
    pub sheet: SheetConfig,
    #[serde(default)]
    pub transition: TransitionSpec,
}

/// The documented fallback record for unknown step ids: a closed,
/// non-interactive sheet that still renders.
static FALLBACK_STEP: StepConfig = StepConfig {
    kind: StepKind::Generic,
    sheet: SheetConfig {
        visible: false,
        min_height: 0.0,
        initial_height: 0.0,
        max_height: 0.0,
        show_handle: true,
        allow_drag: true,
        gradient: None,
        blur: None,
    },
    transition: TransitionSpec {
        kind: TransitionKind::None,
        duration_ms: Some(0),
    },
};

impl StepConfig {
    pub fn new(kind: StepKind, sheet: SheetConfig, transition: TransitionSpec) -> Self {
        StepConfig {
            kind,
            sheet,
            transition,
        }
    }

    /// The record every unknown step id resolves to. The UI must always
    /// have something to render, so lookups default instead of failing.
    pub fn fallback() -> &'static StepConfig {
        &FALLBACK_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_searching_driver_vocabulary() {
        assert_eq!(
            StepKind::classify("CUSTOMER_TRANSPORT_BUSCANDO_CONDUCTOR"),
            StepKind::SearchingDriver
        );
        assert_eq!(
            StepKind::classify("CUSTOMER_DELIVERY_BUSCANDO_CONDUCTOR"),
            StepKind::SearchingDriver
        );
    }

    #[test]
    fn test_classify_confirmation_is_exact_match() {
        assert_eq!(StepKind::classify("confirm_origin"), StepKind::Confirmation);
        // Only the exact identifier classifies; siblings are tagged by hand.
        assert_eq!(StepKind::classify("confirm_destination"), StepKind::Generic);
    }

    #[test]
    fn test_classify_everything_else_is_generic() {
        assert_eq!(StepKind::classify("idle"), StepKind::Generic);
        assert_eq!(StepKind::classify("select_service"), StepKind::Generic);
    }

    #[test]
    fn test_service_slugs_roundtrip() {
        for service in Service::ALL {
            assert_eq!(Service::parse(service.slug()), Some(service));
        }
        assert_eq!(Service::parse("errand"), Some(Service::Errand));
        assert_eq!(Service::parse("parcel"), Some(Service::Parcel));
        assert_eq!(Service::parse("boat"), None);
    }

    #[test]
    fn test_service_serializes_to_spanish_slugs() {
        let json = serde_json::to_string(&Service::Errand).unwrap();
        assert_eq!(json, "\"mandado\"");
        let json = serde_json::to_string(&Service::Parcel).unwrap();
        assert_eq!(json, "\"envio\"");
    }

    #[test]
    fn test_step_id_is_transparent_in_serde() {
        let id = StepId::new("confirm_origin");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"confirm_origin\"");
    }

    #[test]
    fn test_fallback_step_is_closed_and_inert() {
        let fallback = StepConfig::fallback();
        assert!(!fallback.sheet.visible);
        assert_eq!(fallback.sheet.max_height, 0.0);
        assert_eq!(fallback.transition.kind, TransitionKind::None);
        assert_eq!(fallback.kind, StepKind::Generic);
    }
}
