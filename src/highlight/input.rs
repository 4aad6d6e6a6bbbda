use crate::highlight::layout::{page_point, surface_point, PageGeometry, SurfaceFrame};
use crate::highlight::model::{Stroke, StrokeField};
use std::time::Instant;

/// Outcome of routing a pointer/touch start: either the overlay consumes the
/// event and begins a stroke, or the event belongs to the page underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDecision {
    Capture,
    PassThrough,
}

/// Input routing policy plus the stroke recorder it feeds. Owns all mutable
/// overlay state: the stroke field, the drawing flag, the tracked touch count
/// and the interception flag (the canvas `pointer-events` equivalent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightInputState {
    field: StrokeField,
    drawing: bool,
    touch_count: usize,
    intercept_disabled: bool,
}

impl HighlightInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a primary pointer press. Policy, in order: outside every target
    /// section, or over any checkbox, disables interception and draws
    /// nothing; otherwise interception is enabled, the event is consumed and
    /// a new stroke begins at the translated point.
    pub fn route_start(
        &mut self,
        client: (f32, f32),
        frame: Option<SurfaceFrame>,
        geometry: &PageGeometry,
        now: Instant,
    ) -> CaptureDecision {
        let Some(frame) = frame else {
            // No target sections, nothing to cover.
            self.intercept_disabled = true;
            return CaptureDecision::PassThrough;
        };

        let page = page_point(client, geometry.scroll);
        let inside_section = geometry
            .sections
            .iter()
            .any(|section| section.offset_by(geometry.scroll).contains(page));
        let over_checkbox = geometry
            .checkboxes
            .iter()
            .any(|checkbox| checkbox.offset_by(geometry.scroll).contains(page));

        if !inside_section || over_checkbox {
            self.intercept_disabled = true;
            return CaptureDecision::PassThrough;
        }

        self.intercept_disabled = false;
        self.drawing = true;
        self.field.begin(surface_point(page, frame), now);
        CaptureDecision::Capture
    }

    /// Routes a touch start. With two or more simultaneous contacts the
    /// overlay steps aside entirely so native scroll/zoom keeps working;
    /// a single contact follows the regular start policy.
    pub fn route_touch_start(
        &mut self,
        active_touches: usize,
        client: (f32, f32),
        frame: Option<SurfaceFrame>,
        geometry: &PageGeometry,
        now: Instant,
    ) -> CaptureDecision {
        self.touch_count = active_touches;
        if active_touches > 1 {
            self.intercept_disabled = true;
            return CaptureDecision::PassThrough;
        }
        self.route_start(client, frame, geometry, now)
    }

    /// Appends the translated point to the in-progress stroke. No-op while
    /// not drawing, and while two or more touches are active regardless of
    /// any state set at start.
    pub fn route_move(
        &mut self,
        client: (f32, f32),
        frame: Option<SurfaceFrame>,
        geometry: &PageGeometry,
    ) {
        if self.touch_count > 1 || !self.drawing {
            return;
        }
        let Some(frame) = frame else {
            return;
        };
        let point = surface_point(page_point(client, geometry.scroll), frame);
        self.field.append(point);
    }

    /// Ends the current stroke. It stays in the field and keeps fading.
    pub fn route_end(&mut self) {
        self.drawing = false;
        self.field.finish();
    }

    /// All touches lifted or cancelled: resets the tracked touch count and
    /// ends the current stroke.
    pub fn route_touch_end(&mut self) {
        self.touch_count = 0;
        self.route_end();
    }

    /// Whether the overlay currently consumes pointer input over its surface.
    pub fn intercept_enabled(&self) -> bool {
        !self.intercept_disabled
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn touch_count(&self) -> usize {
        self.touch_count
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.field.strokes()
    }

    /// Per-frame fade pass; must run before painting in the same frame.
    pub fn prune_faded(&mut self, now: Instant) {
        self.field.prune_faded(now);
    }
}
