// Sidebar panel - egui host for a mounted sidebar
use crate::model::EntryId;
use crate::style;
use crate::widget::{ClickTarget, ScrollSurface, Sidebar};
use eframe::egui;

/// Scroll area the sidebar lives in. Offsets and centering requested by the
/// widget are applied on the next frame only.
#[derive(Debug, Default)]
pub struct SidebarPanel {
    offset: f32,
    pending_offset: Option<f32>,
    pending_center: Option<EntryId>,
}

impl ScrollSurface for SidebarPanel {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.pending_offset = Some(offset);
    }

    fn center_on(&mut self, entry: EntryId) {
        self.pending_center = Some(entry);
    }
}

impl SidebarPanel {
    pub fn pending_offset(&self) -> Option<f32> {
        self.pending_offset
    }

    pub fn pending_center(&self) -> Option<EntryId> {
        self.pending_center
    }

    /// Draw the tree and report what was clicked this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, sidebar: &Sidebar) -> Option<ClickTarget> {
        let mut clicked = None;
        let mut area = egui::ScrollArea::vertical()
            .id_salt("sidebar_scroll")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_offset.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            ui.spacing_mut().indent = style::SECTION_INDENT;
            ui.spacing_mut().item_spacing.y = style::ROW_SPACING;
            if sidebar.tree().is_empty() {
                ui.label(egui::RichText::new("No chapters").weak());
            }
            for &root in sidebar.tree().roots() {
                self.show_entry(ui, sidebar, root, &mut clicked);
            }
        });
        self.offset = output.state.offset.y;
        // A row that was not drawn this pass cannot be centered later either.
        self.pending_center = None;
        clicked
    }

    fn show_entry(
        &mut self,
        ui: &mut egui::Ui,
        sidebar: &Sidebar,
        id: EntryId,
        clicked: &mut Option<ClickTarget>,
    ) {
        let Some(entry) = sidebar.tree().get(id) else {
            return;
        };
        let caption = style::caption(entry.number.as_deref(), &entry.label);

        ui.horizontal(|ui| {
            let response = if entry.href.is_some() {
                let text = if sidebar.is_active(id) {
                    egui::RichText::new(caption).color(style::accent()).strong()
                } else {
                    egui::RichText::new(caption)
                };
                let response = ui.selectable_label(sidebar.is_active(id), text);
                if response.clicked() {
                    *clicked = Some(ClickTarget::Link(id));
                }
                response
            } else {
                let response =
                    ui.add(egui::Label::new(egui::RichText::new(caption).weak()).sense(egui::Sense::click()));
                if response.clicked() {
                    *clicked = Some(ClickTarget::Other);
                }
                response
            };

            if self.pending_center == Some(id) {
                response.scroll_to_me(Some(egui::Align::Center));
            }

            if sidebar.has_toggle(id) {
                let glyph = if sidebar.is_expanded(id) {
                    style::TOGGLE_EXPANDED
                } else {
                    style::TOGGLE_COLLAPSED
                };
                if ui.small_button(glyph).clicked() {
                    *clicked = Some(ClickTarget::Toggle(id));
                }
            }
        });

        if entry.is_section() && sidebar.is_expanded(id) {
            ui.indent(("section", id.index()), |ui| {
                for &child in &entry.children {
                    self.show_entry(ui, sidebar, child, clicked);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NavTree, NavigationNode};
    use crate::state::MemoryStore;
    use crate::widget::mount;

    fn show_once(panel: &mut SidebarPanel, sidebar: &Sidebar) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel.show(ui, sidebar);
            });
        });
    }

    #[test]
    fn test_pending_center_cleared_after_one_pass() {
        let tree = NavTree::from_nodes(&[NavigationNode::link("Guide", "guide.html")]);
        let mut panel = SidebarPanel::default();
        let sidebar = mount(&mut panel, &tree, "guide.html", "", &mut MemoryStore::new());
        let guide = sidebar.active().unwrap();
        assert_eq!(panel.pending_center(), Some(guide));

        // Centering on an entry no row is drawn for still ends after the pass.
        let empty = mount(&mut panel, &NavTree::default(), "guide.html", "", &mut MemoryStore::new());
        show_once(&mut panel, &empty);
        assert_eq!(panel.pending_center(), None);

        panel.center_on(guide);
        show_once(&mut panel, &sidebar);
        assert_eq!(panel.pending_center(), None);
    }

    #[test]
    fn test_restored_offset_applied_once() {
        let mut panel = SidebarPanel::default();
        panel.set_scroll_offset(120.0);
        assert_eq!(panel.scroll_offset(), 120.0);
        assert_eq!(panel.pending_offset(), Some(120.0));
        let empty = mount(
            &mut SidebarPanel::default(),
            &NavTree::default(),
            "x.html",
            "",
            &mut MemoryStore::new(),
        );
        show_once(&mut panel, &empty);
        assert_eq!(panel.pending_offset(), None);
    }
}
