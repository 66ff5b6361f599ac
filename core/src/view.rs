//! Derived view layer: everything a renderer needs, computed in one place.
//!
//! The source of truth is the authored [`StepConfig`]; a [`StepView`] is the
//! record a renderer actually consumes. Derivation is one pure function over
//! `(config, viewport)` with no lookups, no locks and no failure path, so it
//! can run on every frame boundary without surprising anyone.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::motion::Motion;
use crate::sheet::{BlurSpec, GradientSpec, SheetConfig, Viewport};
use crate::step::{StepConfig, StepKind};

/// One sheet resting position as a percentage of screen height.
///
/// Displays and serializes as `"NN%"`, the shape sheet renderers take their
/// snap arrays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapPoint(u16);

impl SnapPoint {
    /// Project an absolute pixel height onto the viewport:
    /// `percent = round(height / screen_height * 100)`.
    pub fn of(height: f32, viewport: Viewport) -> SnapPoint {
        let percent = (height / viewport.height() * 100.0).round();
        SnapPoint(percent as u16)
    }

    pub fn percent(&self) -> u16 {
        self.0
    }

    /// The ascending, deduplicated ladder for a sheet's three heights.
    ///
    /// Equal heights collapse, so a fixed sheet yields a single point and
    /// `(100, 500, 500)` on a 1000 px screen yields `["10%", "50%"]`.
    pub fn ladder(sheet: &SheetConfig, viewport: Viewport) -> Vec<SnapPoint> {
        let mut points = vec![
            SnapPoint::of(sheet.min_height, viewport),
            SnapPoint::of(sheet.initial_height, viewport),
            SnapPoint::of(sheet.max_height, viewport),
        ];
        points.sort_unstable();
        points.dedup();
        points
    }
}

impl fmt::Display for SnapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for SnapPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for SnapPoint {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "SnapPoint".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        String::json_schema(generator)
    }
}

/// Flags renderers branch on for special-cased steps.
///
/// Each flag is a property of the authored configuration, never of the
/// identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CriticalFlags {
    /// The sheet hides its drag handle.
    pub no_handle_step: bool,
    /// The sheet cannot be dragged at all.
    pub no_drag_step: bool,
    /// No sheet is shown for this step.
    pub no_sheet_step: bool,
    /// Waiting for a driver to accept.
    pub searching_driver: bool,
    /// Pin-on-map confirmation.
    pub confirmation: bool,
}

/// Gesture enablement a step starts out with.
///
/// The flow controller copies these into its runtime toggles on every
/// transition; hosts may then flip individual gestures without touching the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct GestureDefaults {
    pub scroll: bool,
    pub handle_panning: bool,
    pub content_panning: bool,
}

impl GestureDefaults {
    pub fn all(enabled: bool) -> Self {
        GestureDefaults {
            scroll: enabled,
            handle_panning: enabled,
            content_panning: enabled,
        }
    }
}

/// What sits behind the sheet. Gradient wins when both decorations are
/// authored.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Backdrop {
    #[default]
    Plain,
    Gradient(GradientSpec),
    Blur(BlurSpec),
}

/// Drag-handle presentation. `None` means no handle is drawn at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SheetHandle {
    /// Whether the handle responds to pan gestures. A locked step can still
    /// show an inert handle.
    pub interactive: bool,
}

/// Everything the renderer needs to present one step, derived in a single
/// pass from the authored configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct StepView {
    pub flags: CriticalFlags,
    /// Ascending snap ladder, at most three entries.
    pub snap_points: Vec<SnapPoint>,
    /// Position of the initial height within `snap_points`, `-1` when no
    /// sheet is shown.
    pub index: i32,
    pub motion: Motion,
    pub backdrop: Backdrop,
    pub gestures: GestureDefaults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<SheetHandle>,
}

impl StepView {
    /// Derive the complete view for one step.
    ///
    /// Total over every catalog the builder accepts. Hidden sheets derive a
    /// closed, non-interactive view: `index == -1`, no handle, every gesture
    /// off.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let viewport = Viewport::new(390.0, 844.0)?;
    /// let view = StepView::derive(catalog.get("confirm_origin"), viewport);
    /// if view.flags.confirmation {
    ///     // center the pin, hide the sheet chrome behind it
    /// }
    /// ```
    pub fn derive(config: &StepConfig, viewport: Viewport) -> StepView {
        let sheet = &config.sheet;

        let flags = CriticalFlags {
            no_handle_step: !sheet.show_handle,
            no_drag_step: !sheet.allow_drag,
            no_sheet_step: !sheet.visible,
            searching_driver: config.kind == StepKind::SearchingDriver,
            confirmation: config.kind == StepKind::Confirmation,
        };

        let snap_points = SnapPoint::ladder(sheet, viewport);
        let index = if flags.no_sheet_step {
            -1
        } else {
            let initial = SnapPoint::of(sheet.initial_height, viewport);
            snap_points
                .iter()
                .position(|point| *point == initial)
                .map(|position| position as i32)
                .unwrap_or(-1)
        };

        let backdrop = match (&sheet.gradient, &sheet.blur) {
            (Some(gradient), _) => Backdrop::Gradient(gradient.clone()),
            (None, Some(blur)) => Backdrop::Blur(*blur),
            (None, None) => Backdrop::Plain,
        };

        let interactive = sheet.visible && sheet.allow_drag;
        let gestures = GestureDefaults::all(interactive);

        let handle = if sheet.visible && sheet.show_handle {
            Some(SheetHandle {
                interactive: sheet.allow_drag,
            })
        } else {
            None
        };

        StepView {
            flags,
            snap_points,
            index,
            motion: config.transition.motion(),
            backdrop,
            gestures,
            handle,
        }
    }

    /// The view of the fallback record: what idle and unknown steps render.
    pub fn closed(viewport: Viewport) -> StepView {
        StepView::derive(StepConfig::fallback(), viewport)
    }

    /// Whether any sheet is presented at all.
    pub fn sheet_open(&self) -> bool {
        !self.flags.no_sheet_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Easing, TransitionSpec};
    use crate::step::StepConfig;

    fn viewport() -> Viewport {
        Viewport::new(390.0, 1000.0).unwrap()
    }

    fn snap_strings(view: &StepView) -> Vec<String> {
        view.snap_points.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_equal_heights_collapse_to_fewer_points() {
        let config = StepConfig::new(
            StepKind::Generic,
            SheetConfig::open(100.0, 500.0, 500.0),
            TransitionSpec::none(),
        );
        let view = StepView::derive(&config, viewport());
        assert_eq!(snap_strings(&view), ["10%", "50%"]);
        // Initial height 500 rests on the second point.
        assert_eq!(view.index, 1);
    }

    #[test]
    fn test_fixed_sheet_is_a_single_snap_point() {
        let config = StepConfig::new(
            StepKind::SearchingDriver,
            SheetConfig::fixed(260.0).no_handle().no_drag(),
            TransitionSpec::fade(180),
        );
        let view = StepView::derive(&config, viewport());
        assert_eq!(snap_strings(&view), ["26%"]);
        assert_eq!(view.index, 0);
    }

    #[test]
    fn test_searching_driver_step_locks_everything_down() {
        let config = StepConfig::new(
            StepKind::SearchingDriver,
            SheetConfig::fixed(260.0).no_handle().no_drag(),
            TransitionSpec::fade(180),
        );
        let view = StepView::derive(&config, viewport());
        assert!(view.flags.searching_driver);
        assert!(view.flags.no_handle_step);
        assert!(view.flags.no_drag_step);
        assert!(!view.flags.no_sheet_step);
        assert!(view.handle.is_none());
        assert_eq!(view.gestures, GestureDefaults::all(false));
        assert_eq!(view.motion.duration_ms, 180);
        assert_eq!(view.motion.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_confirmation_flag_comes_from_the_kind_tag() {
        let config = StepConfig::new(
            StepKind::Confirmation,
            SheetConfig::open(120.0, 260.0, 520.0),
            TransitionSpec::fade(180),
        );
        let view = StepView::derive(&config, viewport());
        assert!(view.flags.confirmation);
        assert!(!view.flags.searching_driver);
    }

    #[test]
    fn test_hidden_sheet_derives_closed_view() {
        let view = StepView::derive(StepConfig::fallback(), viewport());
        assert!(view.flags.no_sheet_step);
        assert_eq!(view.index, -1);
        assert!(view.handle.is_none());
        assert_eq!(view.gestures, GestureDefaults::all(false));
        assert!(!view.sheet_open());
        assert_eq!(view, StepView::closed(viewport()));
    }

    #[test]
    fn test_locked_step_can_keep_an_inert_handle() {
        let config = StepConfig::new(
            StepKind::Generic,
            SheetConfig::fixed(420.0).no_drag(),
            TransitionSpec::slide(200),
        );
        let view = StepView::derive(&config, viewport());
        let handle = view.handle.unwrap();
        assert!(!handle.interactive);
        assert!(view.flags.no_drag_step);
        assert!(!view.flags.no_handle_step);
        assert_eq!(view.gestures, GestureDefaults::all(false));
    }

    #[test]
    fn test_gradient_wins_over_blur() {
        let sheet = SheetConfig::open(100.0, 200.0, 300.0)
            .with_gradient(GradientSpec::new(["#00000000", "#000000CC"]))
            .with_blur(BlurSpec::new(40));
        let config = StepConfig::new(StepKind::Generic, sheet, TransitionSpec::none());
        let view = StepView::derive(&config, viewport());
        assert!(matches!(view.backdrop, Backdrop::Gradient(_)));
    }

    #[test]
    fn test_plain_backdrop_when_nothing_is_authored() {
        let config = StepConfig::new(
            StepKind::Generic,
            SheetConfig::open(100.0, 200.0, 300.0),
            TransitionSpec::none(),
        );
        let view = StepView::derive(&config, viewport());
        assert_eq!(view.backdrop, Backdrop::Plain);
    }

    #[test]
    fn test_snap_points_serialize_as_percent_strings() {
        let config = StepConfig::new(
            StepKind::Generic,
            SheetConfig::open(100.0, 500.0, 500.0),
            TransitionSpec::none(),
        );
        let view = StepView::derive(&config, viewport());
        let json = serde_json::to_value(&view.snap_points).unwrap();
        assert_eq!(json, serde_json::json!(["10%", "50%"]));
    }

    #[test]
    fn test_rounding_follows_half_up() {
        let vp = Viewport::new(390.0, 844.0).unwrap();
        // 320 / 844 * 100 = 37.91... -> 38
        assert_eq!(SnapPoint::of(320.0, vp).percent(), 38);
        // 125 / 1000 * 100 = 12.5 -> 13 (round half away from zero)
        let vp = Viewport::new(390.0, 1000.0).unwrap();
        assert_eq!(SnapPoint::of(125.0, vp).percent(), 13);
    }
}
