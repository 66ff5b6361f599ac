//! Bottom-sheet geometry and decoration.
//!
//! A [`SheetConfig`] is the authored half of a step: how tall the sheet is,
//! whether it can be dragged, and what sits behind it. Everything derived
//! from it (snap points, gestures, backdrop) lives in [`crate::view`].

use serde::{Deserialize, Serialize};

use crate::error::ViewportError;

fn default_true() -> bool {
    true
}

/// Geometry and chrome of the bottom sheet for one step.
///
/// Heights are absolute pixels; the invariant `0 <= min <= initial <= max`
/// (all finite) is enforced when a catalog is built, never at render time.
///
/// # Example
///
/// ```rust,ignore
/// let sheet = SheetConfig::open(140.0, 320.0, 620.0)
///     .no_handle()
///     .with_blur(BlurSpec::new(40));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SheetConfig {
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub min_height: f32,
    #[serde(default)]
    pub initial_height: f32,
    #[serde(default)]
    pub max_height: f32,
    #[serde(default = "default_true")]
    pub show_handle: bool,
    #[serde(default = "default_true")]
    pub allow_drag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<BlurSpec>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig::hidden()
    }
}

impl SheetConfig {
    /// A closed sheet. This is also the geometry of the fallback record.
    pub fn hidden() -> Self {
        SheetConfig {
            visible: false,
            min_height: 0.0,
            initial_height: 0.0,
            max_height: 0.0,
            show_handle: true,
            allow_drag: true,
            gradient: None,
            blur: None,
        }
    }

    /// A visible, draggable sheet resting at `initial` between `min` and `max`.
    pub fn open(min: f32, initial: f32, max: f32) -> Self {
        SheetConfig {
            visible: true,
            min_height: min,
            initial_height: initial,
            max_height: max,
            show_handle: true,
            allow_drag: true,
            gradient: None,
            blur: None,
        }
    }

    /// A visible sheet pinned at a single height. Usually paired with
    /// [`no_drag`](Self::no_drag) for steps the user must not dismiss.
    pub fn fixed(height: f32) -> Self {
        SheetConfig::open(height, height, height)
    }

    pub fn no_handle(mut self) -> Self {
        self.show_handle = false;
        self
    }

    pub fn no_drag(mut self) -> Self {
        self.allow_drag = false;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn with_blur(mut self, blur: BlurSpec) -> Self {
        self.blur = Some(blur);
        self
    }

    /// Whether the authored heights satisfy `0 <= min <= initial <= max`
    /// with every value finite.
    pub fn geometry_valid(&self) -> bool {
        let heights = [self.min_height, self.initial_height, self.max_height];
        if heights.iter().any(|h| !h.is_finite()) {
            return false;
        }
        0.0 <= self.min_height
            && self.min_height <= self.initial_height
            && self.initial_height <= self.max_height
    }
}

/// Gradient backdrop parameters: a color ramp painted behind the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct GradientSpec {
    /// Hex color stops, top to bottom.
    pub colors: Vec<String>,
    /// Optional stop positions in `0.0..=1.0`, one per color. Renderers
    /// distribute stops evenly when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f32>>,
}

impl GradientSpec {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GradientSpec {
            colors: colors.into_iter().map(Into::into).collect(),
            locations: None,
        }
    }

    pub fn with_locations(mut self, locations: impl Into<Vec<f32>>) -> Self {
        self.locations = Some(locations.into());
        self
    }
}

/// Blur backdrop parameters: frosted map behind the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BlurSpec {
    /// Blur strength, `0..=100`.
    pub intensity: u8,
    #[serde(default)]
    pub tint: BlurTint,
}

impl BlurSpec {
    pub fn new(intensity: u8) -> Self {
        BlurSpec {
            intensity,
            tint: BlurTint::Default,
        }
    }

    pub fn tinted(mut self, tint: BlurTint) -> Self {
        self.tint = tint;
        self
    }
}

/// Tint applied over a blurred backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum BlurTint {
    Dark,
    Light,
    #[default]
    Default,
}

/// Screen dimensions the sheet is projected onto.
///
/// Construction validates that both dimensions are finite and positive, so
/// every snap-point division downstream is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(try_from = "RawViewport", into = "RawViewport")]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ViewportError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError { width, height });
        }
        Ok(Viewport { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
struct RawViewport {
    width: f32,
    height: f32,
}

impl From<Viewport> for RawViewport {
    fn from(viewport: Viewport) -> Self {
        RawViewport {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

impl TryFrom<RawViewport> for Viewport {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Viewport::new(raw.width, raw.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_matches_fallback_geometry() {
        let sheet = SheetConfig::hidden();
        assert!(!sheet.visible);
        assert_eq!(sheet.min_height, 0.0);
        assert_eq!(sheet.max_height, 0.0);
        assert!(sheet.show_handle);
        assert!(sheet.allow_drag);
    }

    #[test]
    fn test_geometry_ordering_is_checked() {
        assert!(SheetConfig::open(100.0, 300.0, 600.0).geometry_valid());
        assert!(SheetConfig::fixed(250.0).geometry_valid());
        assert!(!SheetConfig::open(300.0, 100.0, 600.0).geometry_valid());
        assert!(!SheetConfig::open(100.0, 700.0, 600.0).geometry_valid());
        assert!(!SheetConfig::open(-1.0, 0.0, 0.0).geometry_valid());
        assert!(!SheetConfig::open(0.0, f32::NAN, 100.0).geometry_valid());
    }

    #[test]
    fn test_serde_defaults_fill_handle_and_drag() {
        let sheet: SheetConfig =
            serde_json::from_str(r#"{"visible": true, "max_height": 400.0}"#).unwrap();
        assert!(sheet.show_handle);
        assert!(sheet.allow_drag);
        assert_eq!(sheet.min_height, 0.0);
        assert!(sheet.gradient.is_none());
    }

    #[test]
    fn test_builder_chain_reads_like_the_catalog() {
        let sheet = SheetConfig::fixed(260.0)
            .no_drag()
            .with_blur(BlurSpec::new(40).tinted(BlurTint::Dark));
        assert!(sheet.visible);
        assert!(!sheet.allow_drag);
        assert_eq!(sheet.blur.unwrap().tint, BlurTint::Dark);
    }

    #[test]
    fn test_viewport_rejects_degenerate_screens() {
        assert!(Viewport::new(390.0, 844.0).is_ok());
        assert!(Viewport::new(0.0, 844.0).is_err());
        assert!(Viewport::new(390.0, -1.0).is_err());
        assert!(Viewport::new(f32::INFINITY, 844.0).is_err());
        assert!(Viewport::new(390.0, f32::NAN).is_err());
    }

    #[test]
    fn test_viewport_deserialization_revalidates() {
        let viewport: Viewport =
            serde_json::from_str(r#"{"width": 390.0, "height": 844.0}"#).unwrap();
        assert_eq!(viewport.height(), 844.0);
        let bad: Result<Viewport, _> = serde_json::from_str(r#"{"width": 0.0, "height": 844.0}"#);
        assert!(bad.is_err());
    }
}
