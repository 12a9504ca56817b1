//! Paint panel - part list, color picker and color text entry
//!
//! The panel only reads pipeline state. Whatever the user does is returned as
//! [`PanelActions`] and turned into [`SelectPart`] / [`PaintPart`] messages,
//! which the painting handlers apply on the next `Update`.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::styles::*;
use crate::assets::{ModelAssets, ModelLoadError};
use crate::core::error_handling::log_system_result;
use crate::core::AppState;
use crate::input::PointerOverUi;
use crate::painting::{
    ColorInput, PaintError, PaintFeedback, PaintPart, PartRegistry, PartSelection, SelectPart,
};

/// Hint shown in the empty color field
const COLOR_HINT: &str = "rgb(255, 0, 0) or #ff0000";

/// Model status line shown at the top of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready { parts: usize },
    Failed { reason: String },
}

impl LoadStatus {
    pub fn from_state(state: AppState, parts: usize, error: Option<&ModelLoadError>) -> Self {
        match state {
            AppState::Loading => LoadStatus::Loading,
            AppState::Ready => LoadStatus::Ready { parts },
            AppState::LoadFailed => LoadStatus::Failed {
                reason: error
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown error".to_string()),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            LoadStatus::Loading => "Loading model...".to_string(),
            LoadStatus::Ready { parts: 1 } => "1 part".to_string(),
            LoadStatus::Ready { parts } => format!("{} parts", parts),
            LoadStatus::Failed { reason } => reason.clone(),
        }
    }

    fn color(&self) -> egui::Color32 {
        match self {
            LoadStatus::Loading => UiColors::WARNING,
            LoadStatus::Ready { .. } => UiColors::SUCCESS,
            LoadStatus::Failed { .. } => UiColors::DANGER,
        }
    }
}

/// Requests produced by one frame of the panel
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelActions {
    pub select: Option<usize>,
    pub paint: Option<ColorInput>,
}

/// Draw the panel and forward the user's actions to the pipeline
pub fn paint_panel_system(
    mut contexts: EguiContexts,
    state: Res<State<AppState>>,
    model: Res<ModelAssets>,
    registry: Res<PartRegistry>,
    selection: Res<PartSelection>,
    feedback: Res<PaintFeedback>,
    mut pointer: ResMut<PointerOverUi>,
    mut color_text: Local<String>,
    mut select_requests: MessageWriter<SelectPart>,
    mut paint_requests: MessageWriter<PaintPart>,
) {
    let Some(ctx) = log_system_result(contexts.ctx_mut(), "paint_panel_system") else {
        return;
    };

    let status = LoadStatus::from_state(*state.get(), registry.count(), model.error.as_ref());
    let actions = draw_paint_panel(
        ctx,
        &status,
        &registry,
        &selection,
        feedback.last_error.as_ref(),
        &mut *color_text,
    );

    let over_ui = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
    if pointer.0 != over_ui {
        pointer.0 = over_ui;
    }

    if let Some(index) = actions.select {
        select_requests.write(SelectPart { index });
    }
    if let Some(color) = actions.paint {
        debug!("[UI] Paint requested: {:?}", color);
        paint_requests.write(PaintPart { color });
    }
}

/// Lay out the panel for one frame
pub fn draw_paint_panel(
    ctx: &egui::Context,
    status: &LoadStatus,
    registry: &PartRegistry,
    selection: &PartSelection,
    last_error: Option<&PaintError>,
    color_text: &mut String,
) -> PanelActions {
    let mut actions = PanelActions::default();

    egui::SidePanel::left("paint_panel")
        .resizable(false)
        .default_width(240.0)
        .frame(StyledPanel::side())
        .show(ctx, |ui| {
            ui.heading(TextStyle::heading("Mesh Painter", TextSize::LG));
            ui.label(TextStyle::status(status.label(), status.color()));
            Layout::section_space(ui);

            // === Parts ===
            ui.label(TextStyle::heading("Parts", TextSize::SM));
            Layout::small_space(ui);
            StyledPanel::card().show(ui, |ui| {
                if registry.is_empty() {
                    ui.label(TextStyle::caption("No parts"));
                }
                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for (index, part, color) in registry.iter() {
                            ui.horizontal(|ui| {
                                swatch(ui, swatch_color(color));
                                let active = selection.current() == Some(index);
                                if ui.selectable_label(active, part.name.as_str()).clicked() {
                                    actions.select = Some(index);
                                }
                            });
                        }
                    });
            });
            Layout::section_space(ui);

            // === Color ===
            ui.label(TextStyle::heading("Color", TextSize::SM));
            Layout::small_space(ui);
            match selection.current().and_then(|index| registry.get(index).ok()) {
                Some(part) => {
                    ui.label(TextStyle::body(format!(
                        "{}: {}",
                        part.name,
                        selection.displayed_color()
                    )));
                }
                None => {
                    ui.label(TextStyle::caption("Click a part to select it"));
                }
            }

            ui.add_enabled_ui(selection.is_selected(), |ui| {
                let mut rgb = selection.displayed_color().channels();
                if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                    actions.paint = Some(ColorInput::Channels(rgb));
                }
            });

            Layout::small_space(ui);
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(color_text)
                        .hint_text(COLOR_HINT)
                        .desired_width(150.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if ui.button("Apply").clicked() || submitted {
                    actions.paint = Some(ColorInput::Text(color_text.trim().to_string()));
                }
            });

            if let Some(e) = last_error {
                Layout::small_space(ui);
                ui.label(TextStyle::error(e.to_string()));
            }
        });

    actions
}
