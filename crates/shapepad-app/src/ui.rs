//! UI components using egui.

use egui::{Align2, Color32, Context, CornerRadius, Frame, Margin, Stroke, Vec2};
use shapepad_core::shapes::ShapeColor;
use shapepad_core::tools::ToolKind;

/// Something the user asked for through the toolbar or a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Change the current tool.
    SetTool(ToolKind),
    /// Change the fill color for new shapes.
    SetColor(ShapeColor),
    DeleteSelected,
    CloneSelected,
    /// Abort the current gesture or clear the selection.
    Cancel,
}

/// UI-side mirror of the controller state.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently selected tool (mirrored from the controller).
    pub current_tool: ToolKind,
    /// Color picker value.
    pub fill_color: Color32,
    pub has_selection: bool,
    pub shape_count: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            fill_color: Color32::BLACK,
            has_selection: false,
            shape_count: 0,
        }
    }
}

pub fn to_color32(color: ShapeColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> ShapeColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    ShapeColor::new(r, g, b, a)
}

/// Render all UI and return the action triggered this frame, if any.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    render_toolbar(ctx, ui_state)
}

fn render_toolbar(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(0.0, 4.0);

                    for tool in ToolKind::ALL {
                        let is_selected = ui_state.current_tool == tool;
                        if ui.radio(is_selected, tool.label()).clicked() && !is_selected {
                            action = Some(UiAction::SetTool(tool));
                        }
                    }

                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Fill");
                        if ui
                            .color_edit_button_srgba(&mut ui_state.fill_color)
                            .changed()
                        {
                            action = Some(UiAction::SetColor(from_color32(ui_state.fill_color)));
                        }
                    });

                    ui.separator();

                    ui.add_enabled_ui(ui_state.has_selection, |ui| {
                        if ui.button("Delete").clicked() {
                            action = Some(UiAction::DeleteSelected);
                        }
                        if ui.button("Clone").clicked() {
                            action = Some(UiAction::CloneSelected);
                        }
                    });

                    ui.separator();
                    ui.weak(format!("{} shapes", ui_state.shape_count));
                });
            });
        });

    action
}

/// Common panel frame style.
fn panel_frame() -> Frame {
    Frame::new()
        .fill(Color32::from_rgba_unmultiplied(250, 250, 252, 250))
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}
