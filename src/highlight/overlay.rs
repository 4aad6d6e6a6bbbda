use crate::highlight::input::HighlightInputState;
use crate::highlight::layout::{recompute_layout, PageGeometry, ScrollOffset, SurfaceFrame};
use crate::highlight::model::{HIGHLIGHT_RGB, STROKE_WIDTH};
use eframe::egui::{self, TouchPhase};
use std::collections::BTreeSet;
use std::time::Instant;

/// The highlighter surface widget. Call [`HighlightOverlay::show`] once per
/// frame, before the page content is laid out, with the geometry the page
/// reported last frame; a stale frame self-heals on the next pass.
#[derive(Debug, Default)]
pub struct HighlightOverlay {
    input: HighlightInputState,
    frame: Option<SurfaceFrame>,
    active_touches: BTreeSet<egui::TouchId>,
}

impl HighlightOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<SurfaceFrame> {
        self.frame
    }

    pub fn show(&mut self, ctx: &egui::Context, geometry: &PageGeometry) {
        let previous = self.frame;
        self.frame = recompute_layout(&geometry.sections, geometry.scroll);
        if self.frame != previous {
            tracing::debug!(frame = ?self.frame, "overlay surface recomputed");
        }

        let now = Instant::now();
        let events = ctx.input(|input| input.events.clone());

        // Touch contacts first, so the touch count is current before any
        // pointer event synthesized from the same contact is considered.
        for event in &events {
            if let egui::Event::Touch { id, phase, pos, .. } = event {
                match phase {
                    TouchPhase::Start => {
                        self.active_touches.insert(*id);
                        let decision = self.input.route_touch_start(
                            self.active_touches.len(),
                            (pos.x, pos.y),
                            self.frame,
                            geometry,
                            now,
                        );
                        tracing::trace!(
                            ?decision,
                            touches = self.active_touches.len(),
                            "touch start routed"
                        );
                    }
                    TouchPhase::Move => {
                        self.input.route_move((pos.x, pos.y), self.frame, geometry);
                    }
                    TouchPhase::End | TouchPhase::Cancel => {
                        self.active_touches.remove(id);
                        if self.active_touches.is_empty() {
                            self.input.route_touch_end();
                        }
                    }
                }
            }
        }

        // Mouse path. While any touch is active the pointer events mirror the
        // touch stream, so they are skipped here.
        if self.active_touches.is_empty() {
            for event in &events {
                match event {
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        if *pressed {
                            let decision =
                                self.input.route_start((pos.x, pos.y), self.frame, geometry, now);
                            tracing::trace!(?decision, "pointer press routed");
                        } else {
                            self.input.route_end();
                        }
                    }
                    egui::Event::PointerMoved(pos) => {
                        self.input.route_move((pos.x, pos.y), self.frame, geometry);
                    }
                    egui::Event::PointerGone => self.input.route_end(),
                    _ => {}
                }
            }
        }

        // Fade and prune before painting; a pruned stroke is never drawn.
        self.input.prune_faded(now);
        self.paint_surface(ctx, geometry.scroll, now);

        // The fade runs for the lifetime of the view, so keep the frame
        // clock ticking.
        ctx.request_repaint();
    }

    fn paint_surface(&self, ctx: &egui::Context, scroll: ScrollOffset, now: Instant) {
        let screen_rect = match self.frame {
            Some(frame) => egui::Rect::from_min_size(
                egui::pos2(frame.left - scroll.x, frame.top - scroll.y),
                egui::vec2(frame.width, frame.height),
            ),
            None => egui::Rect::from_min_size(egui::Pos2::ZERO, egui::Vec2::ZERO),
        };

        // The surface area is registered even when empty so checkboxes shown
        // through `elevated_checkbox` always stack above it.
        egui::Area::new(egui::Id::new("terms-highlighter-surface"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen_rect.min)
            .interactable(false)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen_rect.size(), egui::Sense::hover());
                if self.frame.is_none() {
                    return;
                }

                let painter = ui.painter_at(rect);
                let (red, green, blue) = HIGHLIGHT_RGB;
                for stroke in self.input.strokes() {
                    if !stroke.is_paintable() {
                        continue;
                    }
                    let alpha = (stroke.opacity_at(now) * 255.0).round() as u8;
                    let color = egui::Color32::from_rgba_unmultiplied(red, green, blue, alpha);
                    let points: Vec<egui::Pos2> = stroke
                        .points()
                        .iter()
                        .map(|&(x, y)| egui::pos2(rect.min.x + x, rect.min.y + y))
                        .collect();
                    painter.add(egui::Shape::line(
                        points,
                        egui::Stroke::new(STROKE_WIDTH, color),
                    ));
                }
            });
    }
}

/// A checkbox hosted in its own foreground area so it stacks above the
/// highlighter surface and stays directly clickable, the way the source page
/// raises its agreement checkboxes above the canvas. Space is reserved in the
/// surrounding layout; the widget itself lives in the elevated area.
pub fn elevated_checkbox(
    ui: &mut egui::Ui,
    id_salt: &str,
    checked: &mut bool,
    text: &str,
) -> egui::Response {
    let galley = ui.fonts(|fonts| {
        fonts.layout_no_wrap(
            text.to_owned(),
            egui::TextStyle::Body.resolve(ui.style()),
            ui.visuals().text_color(),
        )
    });
    let icon_width = ui.spacing().icon_width;
    let icon_spacing = ui.spacing().icon_spacing;
    let row_height = ui.spacing().interact_size.y;
    let desired = egui::vec2(
        icon_width + icon_spacing + galley.size().x,
        row_height.max(galley.size().y),
    );

    let (anchor, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    egui::Area::new(egui::Id::new(id_salt))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.min)
        .show(ui.ctx(), |area_ui| area_ui.checkbox(checked, text))
        .inner
}
