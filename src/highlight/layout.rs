/// Scroll offset of the host page, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned rectangle in viewport coordinates, as reported by the host
/// page for a terms section or an agreement checkbox. Adding the scroll
/// offset converts it into page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PageRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Viewport rectangle translated into page coordinates.
    pub fn offset_by(self, scroll: ScrollOffset) -> PageRect {
        PageRect {
            left: self.left + scroll.x,
            top: self.top + scroll.y,
            right: self.right + scroll.x,
            bottom: self.bottom + scroll.y,
        }
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.left
            && point.0 <= self.right
            && point.1 >= self.top
            && point.1 <= self.bottom
    }
}

/// Position and size of the overlay surface, in page coordinates. Always the
/// union bounding box of all current target sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything the overlay reads from the host page on a layout pass: live
/// section and checkbox rectangles (viewport coordinates) plus the current
/// scroll offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageGeometry {
    pub sections: Vec<PageRect>,
    pub checkboxes: Vec<PageRect>,
    pub scroll: ScrollOffset,
}

/// Computes the surface frame covering all target sections: minimum top/left
/// and maximum right/bottom across the scroll-adjusted rectangles. Returns
/// `None` when there are no sections, in which case the overlay does nothing.
pub fn recompute_layout(sections: &[PageRect], scroll: ScrollOffset) -> Option<SurfaceFrame> {
    if sections.is_empty() {
        return None;
    }

    let mut min_left = f32::INFINITY;
    let mut min_top = f32::INFINITY;
    let mut max_right = f32::NEG_INFINITY;
    let mut max_bottom = f32::NEG_INFINITY;

    for section in sections {
        let rect = section.offset_by(scroll);
        min_left = min_left.min(rect.left);
        min_top = min_top.min(rect.top);
        max_right = max_right.max(rect.right);
        max_bottom = max_bottom.max(rect.bottom);
    }

    Some(SurfaceFrame {
        left: min_left,
        top: min_top,
        width: max_right - min_left,
        height: max_bottom - min_top,
    })
}

/// Viewport point translated into page coordinates. The scroll offset is
/// applied to both axes, for mouse and touch input alike.
pub fn page_point(client: (f32, f32), scroll: ScrollOffset) -> (f32, f32) {
    (client.0 + scroll.x, client.1 + scroll.y)
}

/// Page point translated into surface-local coordinates.
pub fn surface_point(page: (f32, f32), frame: SurfaceFrame) -> (f32, f32) {
    (page.0 - frame.left, page.1 - frame.top)
}
