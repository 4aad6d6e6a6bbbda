pub mod input;
pub mod layout;
pub mod model;
pub mod overlay;

pub use input::{CaptureDecision, HighlightInputState};
pub use layout::{
    page_point, recompute_layout, surface_point, PageGeometry, PageRect, ScrollOffset,
    SurfaceFrame,
};
pub use model::{Stroke, StrokeField, FADE_OUT, HIGHLIGHT_ALPHA, HIGHLIGHT_RGB, STROKE_WIDTH};
pub use overlay::{elevated_checkbox, HighlightOverlay};
