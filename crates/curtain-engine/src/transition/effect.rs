//! Overlay geometry for the six transition kinds.
//!
//! Every function here is pure: `(progress, viewport) → OverlayGeometry`.
//! Progress runs over [0, 2]: below 1 the overlay is covering the screen,
//! at 1 the screen is fully covered, above 1 it is revealing again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::Viewport;

/// Width in pixels of the feathered edge of a soft wipe.
pub const SOFT_EDGE_WIDTH: f32 = 60.0;
/// Number of translucent bands the feathered edge is built from.
pub const SOFT_EDGE_BANDS: usize = 20;
/// Alpha of the band closest to the solid region.
pub const SOFT_EDGE_MAX_ALPHA: f32 = 0.8;
/// Upper bound on the overlay instances any kind produces (fills plus clip).
pub const MAX_OVERLAY_INSTANCES: usize = 1 + SOFT_EDGE_BANDS + 1;

/// Which overlay animation conceals a scene swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TransitionKind {
    Fade = 0,
    SlideLeft = 1,
    SlideRight = 2,
    Wipe = 3,
    Circle = 4,
    SoftWipe = 5,
}

impl TransitionKind {
    /// All kinds, in table order. Random selection draws from this set.
    pub const ALL: [TransitionKind; 6] = [
        TransitionKind::Fade,
        TransitionKind::SlideLeft,
        TransitionKind::SlideRight,
        TransitionKind::Wipe,
        TransitionKind::Circle,
        TransitionKind::SoftWipe,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl OverlayRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// Half-open containment; an empty rect contains nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x < max.x && point.y >= self.origin.y && point.y < max.y
    }
}

/// A black fill drawn on the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFill {
    pub rect: OverlayRect,
    pub alpha: f32,
}

/// Restricts the overlay's fills to the inside of a disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleClip {
    pub center: Vec2,
    pub radius: f32,
}

/// Drawing instructions for one overlay frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayGeometry {
    /// Fills in draw order.
    pub fills: Vec<OverlayFill>,
    /// When set, fills are only visible inside the disk.
    pub clip: Option<CircleClip>,
}

impl OverlayGeometry {
    fn solid(rect: OverlayRect) -> Self {
        Self {
            fills: vec![OverlayFill { rect, alpha: 1.0 }],
            clip: None,
        }
    }

    /// Combined opacity of the overlay at a point (fills composited over each other).
    pub fn opacity_at(&self, point: Vec2) -> f32 {
        if let Some(clip) = self.clip {
            if point.distance(clip.center) >= clip.radius {
                return 0.0;
            }
        }
        let transparency = self
            .fills
            .iter()
            .filter(|fill| fill.rect.contains(point))
            .fold(1.0, |acc, fill| acc * (1.0 - fill.alpha.clamp(0.0, 1.0)));
        1.0 - transparency
    }

    /// Number of wire instances this geometry occupies.
    pub fn instance_count(&self) -> usize {
        self.fills.len() + usize::from(self.clip.is_some())
    }
}

type GeometryFn = fn(f32, Viewport) -> OverlayGeometry;

/// Indexed by `TransitionKind as usize`.
const GEOMETRY_TABLE: [GeometryFn; 6] = [fade, slide_left, slide_right, wipe, circle, soft_wipe];

/// Compute the overlay for `kind` at `progress` (clamped to [0, 2]).
pub fn overlay_geometry(kind: TransitionKind, progress: f32, viewport: Viewport) -> OverlayGeometry {
    GEOMETRY_TABLE[kind as usize](progress.clamp(0.0, 2.0), viewport)
}

/// Split [0, 2] progress into (covering?, phase-local progress in [0, 1]).
#[inline]
fn phase(progress: f32) -> (bool, f32) {
    if progress < 1.0 {
        (true, progress)
    } else {
        (false, progress - 1.0)
    }
}

/// Opacity of the fade overlay: rises to 1 at the midpoint, falls back to 0.
pub fn fade_alpha(progress: f32) -> f32 {
    let (covering, t) = phase(progress.clamp(0.0, 2.0));
    if covering { t } else { 1.0 - t }
}

/// Radius of the circle clip: grows to the corner distance, then shrinks to 0.
pub fn circle_radius(progress: f32, viewport: Viewport) -> f32 {
    let (covering, t) = phase(progress.clamp(0.0, 2.0));
    let scale = if covering { t } else { 1.0 - t };
    scale * viewport.corner_distance()
}

fn fade(progress: f32, viewport: Viewport) -> OverlayGeometry {
    OverlayGeometry {
        fills: vec![OverlayFill {
            rect: OverlayRect::new(0.0, 0.0, viewport.width, viewport.height),
            alpha: fade_alpha(progress),
        }],
        clip: None,
    }
}

/// `direction` is where the panel enters from: -1 left, +1 right.
/// It leaves through the opposite edge.
fn slide(progress: f32, viewport: Viewport, direction: f32) -> OverlayGeometry {
    let (covering, t) = phase(progress);
    let x = if covering {
        (1.0 - t) * viewport.width * direction
    } else {
        t * viewport.width * -direction
    };
    OverlayGeometry::solid(OverlayRect::new(x, 0.0, viewport.width, viewport.height))
}

fn slide_left(progress: f32, viewport: Viewport) -> OverlayGeometry {
    slide(progress, viewport, -1.0)
}

fn slide_right(progress: f32, viewport: Viewport) -> OverlayGeometry {
    slide(progress, viewport, 1.0)
}

fn wipe(progress: f32, viewport: Viewport) -> OverlayGeometry {
    let (covering, t) = phase(progress);
    let edge = viewport.height * t;
    let rect = if covering {
        OverlayRect::new(0.0, 0.0, viewport.width, edge)
    } else {
        OverlayRect::new(0.0, edge, viewport.width, viewport.height - edge)
    };
    OverlayGeometry::solid(rect)
}

fn circle(progress: f32, viewport: Viewport) -> OverlayGeometry {
    OverlayGeometry {
        fills: vec![OverlayFill {
            rect: OverlayRect::new(0.0, 0.0, viewport.width, viewport.height),
            alpha: 1.0,
        }],
        clip: Some(CircleClip {
            center: viewport.center(),
            radius: circle_radius(progress, viewport),
        }),
    }
}

/// Horizontal wipe with a feathered boundary.
///
/// The boundary travels from `-SOFT_EDGE_WIDTH` to `width + SOFT_EDGE_WIDTH`
/// so the feather is off-screen at progress 0, 1 and 2.
fn soft_wipe(progress: f32, viewport: Viewport) -> OverlayGeometry {
    let (covering, t) = phase(progress);
    let band_width = SOFT_EDGE_WIDTH / SOFT_EDGE_BANDS as f32;
    let h = viewport.height;

    let mut fills = Vec::with_capacity(1 + SOFT_EDGE_BANDS);
    if covering {
        // Solid region trails the boundary, feather leads it to the right.
        let boundary = t * (viewport.width + SOFT_EDGE_WIDTH) - SOFT_EDGE_WIDTH;
        fills.push(OverlayFill {
            rect: OverlayRect::new(0.0, 0.0, boundary, h),
            alpha: 1.0,
        });
        for i in 0..SOFT_EDGE_BANDS {
            fills.push(OverlayFill {
                rect: OverlayRect::new(boundary + i as f32 * band_width, 0.0, band_width, h),
                alpha: band_alpha(i),
            });
        }
    } else {
        // Solid region ahead of the boundary, feather left behind it.
        let boundary = t * (viewport.width + SOFT_EDGE_WIDTH);
        fills.push(OverlayFill {
            rect: OverlayRect::new(boundary, 0.0, viewport.width - boundary, h),
            alpha: 1.0,
        });
        for i in 0..SOFT_EDGE_BANDS {
            fills.push(OverlayFill {
                rect: OverlayRect::new(boundary - (i + 1) as f32 * band_width, 0.0, band_width, h),
                alpha: band_alpha(i),
            });
        }
    }
    OverlayGeometry { fills, clip: None }
}

/// Band 0 touches the solid region.
#[inline]
fn band_alpha(index: usize) -> f32 {
    SOFT_EDGE_MAX_ALPHA * (1.0 - index as f32 / SOFT_EDGE_BANDS as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    /// Interior sample grid, center included.
    fn probe_points(viewport: Viewport) -> Vec<Vec2> {
        let mut points = Vec::new();
        for xi in 0..9 {
            for yi in 0..7 {
                points.push(Vec2::new(
                    viewport.width * (xi as f32 + 0.5) / 9.0,
                    viewport.height * (yi as f32 + 0.5) / 7.0,
                ));
            }
        }
        points
    }

    #[test]
    fn fade_alpha_endpoints_and_monotonic() {
        assert_eq!(fade_alpha(0.0), 0.0);
        assert_eq!(fade_alpha(1.0), 1.0);
        assert_eq!(fade_alpha(2.0), 0.0);

        let mut prev = fade_alpha(0.0);
        for i in 1..=100 {
            let a = fade_alpha(i as f32 / 100.0);
            assert!(a >= prev, "fade alpha fell while covering at step {}", i);
            prev = a;
        }
        for i in 1..=100 {
            let a = fade_alpha(1.0 + i as f32 / 100.0);
            assert!(a <= prev, "fade alpha rose while revealing at step {}", i);
            assert!((0.0..=1.0).contains(&a));
            prev = a;
        }
    }

    #[test]
    fn every_kind_fully_covers_at_midpoint() {
        for kind in TransitionKind::ALL {
            let geom = overlay_geometry(kind, 1.0, vp());
            for point in probe_points(vp()) {
                let opacity = geom.opacity_at(point);
                assert!(
                    opacity > 0.999,
                    "{:?} leaves {:?} uncovered at the midpoint (opacity {})",
                    kind,
                    point,
                    opacity
                );
            }
        }
    }

    #[test]
    fn every_kind_is_clear_at_both_ends() {
        for kind in TransitionKind::ALL {
            for progress in [0.0, 2.0] {
                let geom = overlay_geometry(kind, progress, vp());
                for point in probe_points(vp()) {
                    assert!(
                        geom.opacity_at(point) < 0.001,
                        "{:?} covers {:?} at progress {}",
                        kind,
                        point,
                        progress
                    );
                }
            }
        }
    }

    #[test]
    fn slide_left_enters_left_and_exits_right() {
        let start = overlay_geometry(TransitionKind::SlideLeft, 0.0, vp());
        assert_eq!(start.fills[0].rect.origin.x, -800.0);
        let mid = overlay_geometry(TransitionKind::SlideLeft, 1.0, vp());
        assert_eq!(mid.fills[0].rect.origin.x, 0.0);
        let end = overlay_geometry(TransitionKind::SlideLeft, 2.0, vp());
        assert_eq!(end.fills[0].rect.origin.x, 800.0);
    }

    #[test]
    fn slide_right_mirrors_slide_left() {
        for progress in [0.0, 0.3, 1.0, 1.6, 2.0] {
            let left = overlay_geometry(TransitionKind::SlideLeft, progress, vp());
            let right = overlay_geometry(TransitionKind::SlideRight, progress, vp());
            assert_eq!(left.fills[0].rect.origin.x, -right.fills[0].rect.origin.x);
        }
    }

    #[test]
    fn wipe_grows_from_top_then_uncovers_from_top() {
        let covering = overlay_geometry(TransitionKind::Wipe, 0.25, vp());
        assert_eq!(covering.fills[0].rect, OverlayRect::new(0.0, 0.0, 800.0, 150.0));

        let revealing = overlay_geometry(TransitionKind::Wipe, 1.25, vp());
        assert_eq!(revealing.fills[0].rect, OverlayRect::new(0.0, 150.0, 800.0, 450.0));
    }

    #[test]
    fn circle_radius_scenario() {
        let corner = vp().corner_distance();
        assert_eq!(circle_radius(0.0, vp()), 0.0);
        assert!(circle_radius(1.0, vp()) >= corner);
        assert_eq!(circle_radius(2.0, vp()), 0.0);

        let geom = overlay_geometry(TransitionKind::Circle, 0.5, vp());
        let clip = geom.clip.expect("circle clips its overlay");
        assert_eq!(clip.center, Vec2::new(400.0, 300.0));
        assert!((clip.radius - corner * 0.5).abs() < 0.001);
    }

    #[test]
    fn soft_wipe_bands_fade_away_from_solid() {
        let geom = overlay_geometry(TransitionKind::SoftWipe, 0.5, vp());
        assert_eq!(geom.fills.len(), 1 + SOFT_EDGE_BANDS);
        let bands = &geom.fills[1..];
        assert!((bands[0].alpha - SOFT_EDGE_MAX_ALPHA).abs() < 1e-6);
        for pair in bands.windows(2) {
            assert!(pair[1].alpha < pair[0].alpha);
        }
        let span: f32 = bands.iter().map(|b| b.rect.size.x).sum();
        assert!((span - SOFT_EDGE_WIDTH).abs() < 0.01);
        // Feather is to the right of the solid region while covering.
        assert!(bands[0].rect.origin.x >= geom.fills[0].rect.origin.x + geom.fills[0].rect.size.x - 0.01);
    }

    #[test]
    fn soft_wipe_feather_trails_while_revealing() {
        let geom = overlay_geometry(TransitionKind::SoftWipe, 1.5, vp());
        let solid = geom.fills[0].rect;
        let first_band = geom.fills[1].rect;
        assert!((first_band.origin.x + first_band.size.x - solid.origin.x).abs() < 0.01);
    }

    #[test]
    fn instance_counts_fit_the_wire_bound() {
        for kind in TransitionKind::ALL {
            for i in 0..=20 {
                let geom = overlay_geometry(kind, i as f32 / 10.0, vp());
                assert!(geom.instance_count() <= MAX_OVERLAY_INSTANCES);
            }
        }
    }

    #[test]
    fn kind_round_trips_through_u8() {
        for kind in TransitionKind::ALL {
            assert_eq!(TransitionKind::from_u8(kind.as_u8()), Some(kind));
        }
        assert!(TransitionKind::from_u8(6).is_none());
    }

    #[test]
    fn progress_is_clamped() {
        let over = overlay_geometry(TransitionKind::Fade, 5.0, vp());
        assert_eq!(over.fills[0].alpha, 0.0);
        let under = overlay_geometry(TransitionKind::Fade, -1.0, vp());
        assert_eq!(under.fills[0].alpha, 0.0);
    }
}
