use std::time::{Duration, Instant};

/// Peak opacity of a freshly drawn stroke.
pub const HIGHLIGHT_ALPHA: f32 = 0.7;
/// Time for a stroke to fade from peak opacity to fully transparent.
pub const FADE_OUT: Duration = Duration::from_millis(3000);
/// Painted stroke width in points.
pub const STROKE_WIDTH: f32 = 12.0;
/// Highlighter hue: full red + green, zero blue.
pub const HIGHLIGHT_RGB: (u8, u8, u8) = (255, 255, 0);

/// One continuous highlighter mark, from press to release. Points are in
/// surface-local coordinates. Opacity is not stored: it is a pure function of
/// the elapsed time since creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<(f32, f32)>,
    created_at: Instant,
}

impl Stroke {
    fn new(point: (f32, f32), now: Instant) -> Self {
        Self {
            points: vec![point],
            created_at: now,
        }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Linear fade: `HIGHLIGHT_ALPHA` at creation, zero at `FADE_OUT`,
    /// clamped at zero afterwards.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        let remaining = 1.0 - elapsed / FADE_OUT.as_secs_f32();
        (HIGHLIGHT_ALPHA * remaining).max(0.0)
    }

    /// A stroke needs at least two points before it can be painted as a path.
    pub fn is_paintable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// The ordered collection of live strokes plus the recorder state for the
/// stroke currently being drawn. Insertion is append-only; pruning happens
/// once per frame before painting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeField {
    strokes: Vec<Stroke>,
    in_progress: bool,
}

impl StrokeField {
    pub fn begin(&mut self, point: (f32, f32), now: Instant) {
        self.strokes.push(Stroke::new(point, now));
        self.in_progress = true;
    }

    /// Extends the most recently created stroke. No-op when no stroke is in
    /// progress, or when the in-progress stroke has already faded out.
    pub fn append(&mut self, point: (f32, f32)) {
        if !self.in_progress {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.points.push(point);
        }
    }

    /// Stops appending. The stroke stays in the field and keeps fading.
    pub fn finish(&mut self) {
        self.in_progress = false;
    }

    /// Removes every stroke whose opacity has reached zero. Must run before
    /// painting within the same frame so a faded stroke is never drawn.
    pub fn prune_faded(&mut self, now: Instant) {
        self.strokes.retain(|stroke| stroke.opacity_at(now) > 0.0);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
