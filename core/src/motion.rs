//! Step transitions and their resolved animation parameters.
//!
//! Catalogs author a [`TransitionSpec`] (intent: none / fade / slide plus an
//! optional duration). Renderers consume a [`Motion`] (resolved duration and
//! easing). The mapping between the two is the whole module.

use serde::{Deserialize, Serialize};

/// Duration applied when a fade or slide omits one.
pub const DEFAULT_MOTION_MS: u32 = 200;

/// Authored transition intent for entering a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Cut straight to the step.
    #[default]
    None,
    Fade,
    Slide,
}

/// Transition as written in a catalog: a kind plus an optional duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TransitionSpec {
    #[serde(default)]
    pub kind: TransitionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

impl TransitionSpec {
    pub fn none() -> Self {
        TransitionSpec {
            kind: TransitionKind::None,
            duration_ms: Some(0),
        }
    }

    pub fn fade(duration_ms: u32) -> Self {
        TransitionSpec {
            kind: TransitionKind::Fade,
            duration_ms: Some(duration_ms),
        }
    }

    pub fn slide(duration_ms: u32) -> Self {
        TransitionSpec {
            kind: TransitionKind::Slide,
            duration_ms: Some(duration_ms),
        }
    }

    /// Resolve the authored intent into renderer parameters.
    ///
    /// | kind  | duration            | easing         |
    /// |-------|---------------------|----------------|
    /// | none  | always 0            | linear         |
    /// | fade  | configured or 200ms | ease-in-out    |
    /// | slide | configured or 200ms | ease-out-cubic |
    ///
    /// A `none` transition ignores any configured duration: cuts are
    /// instantaneous no matter what the catalog says.
    pub fn motion(&self) -> Motion {
        match self.kind {
            TransitionKind::None => Motion {
                duration_ms: 0,
                easing: Easing::Linear,
            },
            TransitionKind::Fade => Motion {
                duration_ms: self.duration_ms.unwrap_or(DEFAULT_MOTION_MS),
                easing: Easing::EaseInOut,
            },
            TransitionKind::Slide => Motion {
                duration_ms: self.duration_ms.unwrap_or(DEFAULT_MOTION_MS),
                easing: Easing::EaseOutCubic,
            },
        }
    }
}

/// Easing curve a renderer should drive the transition with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOutCubic => "ease-out-cubic",
        }
    }

    /// CSS timing-function equivalent, for web renderers.
    pub fn timing_function(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
        }
    }
}

/// Resolved animation parameters for one step entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Motion {
    pub duration_ms: u32,
    pub easing: Easing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_forces_zero_duration() {
        // Even an authored duration is ignored for cuts.
        let spec = TransitionSpec {
            kind: TransitionKind::None,
            duration_ms: Some(999),
        };
        let motion = spec.motion();
        assert_eq!(motion.duration_ms, 0);
        assert_eq!(motion.easing, Easing::Linear);
    }

    #[test]
    fn test_fade_keeps_configured_duration() {
        let motion = TransitionSpec::fade(180).motion();
        assert_eq!(motion.duration_ms, 180);
        assert_eq!(motion.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_slide_defaults_to_200ms() {
        let spec = TransitionSpec {
            kind: TransitionKind::Slide,
            duration_ms: None,
        };
        let motion = spec.motion();
        assert_eq!(motion.duration_ms, DEFAULT_MOTION_MS);
        assert_eq!(motion.easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_fade_defaults_to_200ms() {
        let spec = TransitionSpec {
            kind: TransitionKind::Fade,
            duration_ms: None,
        };
        assert_eq!(spec.motion().duration_ms, DEFAULT_MOTION_MS);
    }

    #[test]
    fn test_easing_names_match_renderer_vocabulary() {
        assert_eq!(Easing::EaseInOut.name(), "ease-in-out");
        assert_eq!(Easing::EaseOutCubic.name(), "ease-out-cubic");
        assert_eq!(Easing::Linear.timing_function(), "linear");
    }

    #[test]
    fn test_spec_serializes_kind_lowercase() {
        let json = serde_json::to_string(&TransitionSpec::fade(180)).unwrap();
        assert_eq!(json, r#"{"kind":"fade","duration_ms":180}"#);
    }
}
