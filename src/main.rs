use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use mesh_painter::assets::ModelPlugin;
use mesh_painter::core::{CorePlugin, ViewerArgs};
use mesh_painter::input::InputPlugin;
use mesh_painter::painting::PaintingPlugin;
use mesh_painter::rendering::RenderingPlugin;
use mesh_painter::ui::UiPlugin;

fn main() {
    let args = ViewerArgs::parse();
    let (settings, origin) = args.resolve_settings();

    let primary_window = Some(settings.window.to_window());
    let log_filter = settings.log_filter.clone();

    App::new()
        // Core plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window,
                    ..default()
                })
                .set(LogPlugin {
                    filter: log_filter,
                    ..default()
                }),
        )
        .add_plugins(CorePlugin { settings, origin })
        .add_plugins(EguiPlugin::default())
        .add_plugins(MeshPickingPlugin)
        // Viewer
        .add_plugins(PaintingPlugin)
        .add_plugins(ModelPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(UiPlugin)
        .run();
}
