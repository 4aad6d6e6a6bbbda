use crate::highlight::{elevated_checkbox, HighlightOverlay, PageGeometry, PageRect, ScrollOffset};
use eframe::egui;

struct TermsSection {
    title: &'static str,
    body: &'static str,
    checkbox_id: &'static str,
    checkbox_label: &'static str,
    agreed: bool,
}

/// Demo agreement page: three scrollable terms sections, each ending in an
/// elevated agreement checkbox, with the highlighter overlay on top.
pub struct TermsPageApp {
    overlay: HighlightOverlay,
    geometry: PageGeometry,
    sections: Vec<TermsSection>,
}

impl Default for TermsPageApp {
    fn default() -> Self {
        Self {
            overlay: HighlightOverlay::new(),
            geometry: PageGeometry::default(),
            sections: vec![
                TermsSection {
                    title: "1. Terms of Service",
                    body: "By creating a reservation you enter a binding agreement with the \
                           operator. You are responsible for the accuracy of the guest details \
                           you provide, and the operator may refuse service where the details \
                           are incomplete or fraudulent. Prices shown include all mandatory \
                           charges unless stated otherwise at the time of booking.",
                    checkbox_id: "terms_agree",
                    checkbox_label: "I have read and agree to the terms of service",
                    agreed: false,
                },
                TermsSection {
                    title: "2. 24-Hour Cancellation Policy",
                    body: "Reservations may be cancelled free of charge up to 24 hours before \
                           the scheduled start. Cancellations made within the final 24 hours \
                           are charged the full reservation amount. No-shows are treated as \
                           late cancellations and are not eligible for rebooking credit.",
                    checkbox_id: "24h_terms_agree",
                    checkbox_label: "I understand the 24-hour cancellation policy",
                    agreed: false,
                },
                TermsSection {
                    title: "3. Refund Policy",
                    body: "Approved refunds are returned to the original payment method within \
                           5 to 10 business days. Partial refunds may apply where a service \
                           was partially delivered. Processing fees charged by the payment \
                           provider are non-refundable in all cases.",
                    checkbox_id: "refund_terms_agree",
                    checkbox_label: "I accept the refund policy",
                    agreed: false,
                },
            ],
        }
    }
}

fn page_rect(rect: egui::Rect) -> PageRect {
    PageRect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

impl eframe::App for TermsPageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The overlay goes first: its surface area registers beneath the
        // elevated checkboxes, and it routes input against the geometry the
        // page reported last frame.
        self.overlay.show(ctx, &self.geometry);

        let all_agreed = self.sections.iter().all(|section| section.agreed);
        egui::TopBottomPanel::bottom("continue-bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let button = ui.add_enabled(all_agreed, egui::Button::new("Continue"));
                if button.clicked() {
                    tracing::info!("all terms accepted");
                }
                if !all_agreed {
                    ui.weak("Tick every agreement checkbox to continue.");
                }
            });
            ui.add_space(6.0);
        });

        let mut sections = Vec::new();
        let mut checkboxes = Vec::new();
        let mut scroll = ScrollOffset::default();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Service Agreement");
            ui.label("Please read each section below. You can run the highlighter over the text while you read.");
            ui.add_space(8.0);

            // Drag-to-scroll is off so a one-finger drag draws; two-finger
            // pan and the mouse wheel still scroll the page.
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    for section in &mut self.sections {
                        let group = ui.group(|ui| {
                            ui.strong(section.title);
                            ui.add_space(4.0);
                            ui.label(section.body);
                            ui.add_space(6.0);
                            let response = elevated_checkbox(
                                ui,
                                section.checkbox_id,
                                &mut section.agreed,
                                section.checkbox_label,
                            );
                            checkboxes.push(page_rect(response.rect));
                        });
                        sections.push(page_rect(group.response.rect));
                        ui.add_space(10.0);
                    }
                });
            scroll = ScrollOffset {
                x: output.state.offset.x,
                y: output.state.offset.y,
            };
        });

        self.geometry = PageGeometry {
            sections,
            checkboxes,
            scroll,
        };
    }
}
