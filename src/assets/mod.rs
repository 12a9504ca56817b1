//! Model loading
//!
//! Loads the configured glTF file, spawns its scene once the asset is ready
//! and registers every mesh in the scene as a paintable part.
//!
//! # Flow
//!
//! 1. `OnEnter(AppState::Loading)`: [`start_model_loading`] requests the file
//! 2. `Update` while loading: [`check_model_loading`] polls the load state and
//!    either spawns the default scene or records a [`ModelLoadError`]
//! 3. `SceneInstanceReady`: [`register_model_parts`] walks the spawned
//!    hierarchy depth-first through [`PartDiscovery`], registers each mesh
//!    and enters `Ready`
//!
//! Registration runs exactly once; until then the part registry is empty and
//! every select/paint request is rejected.

pub mod error;

use bevy::ecs::system::SystemParam;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::core::{AppState, ViewerSettings};
use crate::input::picking::on_part_click;
use crate::painting::PartRegistry;
use crate::safe_unwrap;

pub use error::ModelLoadError;

/// Handle and status of the loaded model
#[derive(Resource, Default)]
pub struct ModelAssets {
    /// Asset path the model was requested from
    pub path: String,

    /// Root glTF asset
    pub gltf: Handle<Gltf>,

    /// Whether the scene has been spawned
    pub spawned: bool,

    /// Set when loading failed
    pub error: Option<ModelLoadError>,
}

/// Plugin driving the load → spawn → register sequence
pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelAssets>()
            .add_systems(OnEnter(AppState::Loading), start_model_loading)
            .add_systems(
                Update,
                check_model_loading.run_if(in_state(AppState::Loading)),
            );
    }
}

/// Request the model configured in [`ViewerSettings`]
pub fn start_model_loading(
    mut model: ResMut<ModelAssets>,
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
) {
    if model.spawned || model.error.is_some() {
        return;
    }

    model.path = settings.model_path.clone();
    model.gltf = asset_server.load::<Gltf>(model.path.clone());
    info!("[MODEL] Loading {}", model.path);
}

/// Poll the asset server and spawn the scene once the model is loaded
pub fn check_model_loading(
    mut commands: Commands,
    mut model: ResMut<ModelAssets>,
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
) {
    if model.spawned || model.error.is_some() {
        return;
    }

    match asset_server.load_state(&model.gltf) {
        bevy::asset::LoadState::Loaded => {
            let gltf = safe_unwrap!(
                gltf_assets.get(&model.gltf),
                format!("[MODEL] {} reported loaded but is missing", model.path)
            );
            match scene_to_spawn(&model.path, gltf.default_scene.as_ref(), &gltf.scenes) {
                Ok(scene) => {
                    commands
                        .spawn((SceneRoot(scene), Name::new("Model")))
                        .observe(register_model_parts);
                    model.spawned = true;
                    info!("[MODEL] {} loaded, spawning scene", model.path);
                }
                Err(e) => record_load_failure(&mut model, &mut next_state, e),
            }
        }
        bevy::asset::LoadState::Failed(e) => {
            let e = ModelLoadError::AssetLoadFailure {
                path: model.path.clone(),
                reason: e.to_string(),
            };
            record_load_failure(&mut model, &mut next_state, e);
        }
        bevy::asset::LoadState::NotLoaded | bevy::asset::LoadState::Loading => {}
    }
}

/// The glTF's default scene, else its first scene
pub fn scene_to_spawn(
    path: &str,
    default_scene: Option<&Handle<Scene>>,
    scenes: &[Handle<Scene>],
) -> Result<Handle<Scene>, ModelLoadError> {
    default_scene
        .or_else(|| scenes.first())
        .cloned()
        .ok_or_else(|| ModelLoadError::NoScene {
            path: path.to_string(),
        })
}

/// Keep the error for the panel and enter the terminal failure state
pub fn record_load_failure(
    model: &mut ModelAssets,
    next_state: &mut NextState<AppState>,
    error: ModelLoadError,
) {
    error!("[MODEL] {}", error);
    model.error = Some(error);
    next_state.set(AppState::LoadFailed);
}

/// Everything part discovery touches, bundled like the painter
#[derive(SystemParam)]
pub struct PartDiscovery<'w, 's> {
    commands: Commands<'w, 's>,
    children: Query<'w, 's, &'static Children>,
    slots: Query<'w, 's, (&'static Mesh3d, &'static MeshMaterial3d<StandardMaterial>)>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    registry: ResMut<'w, PartRegistry>,
    next_state: ResMut<'w, NextState<AppState>>,
}

impl PartDiscovery<'_, '_> {
    /// Register every mesh below `root` as a part, in depth-first order
    ///
    /// Textures that came with the model are dropped so parts start as plain
    /// materials until painted, and meshes without UVs get constant ones so
    /// painted textures are sampled. Each mesh is renamed after its part and
    /// made clickable. Runs once: returns `None` if parts already exist.
    pub fn register_scene(&mut self, root: Entity) -> Option<usize> {
        if !self.registry.is_empty() {
            warn!("[MODEL] Scene ready fired again; parts already registered");
            return None;
        }

        let mut count = 0;
        for entity in self.children.iter_descendants_depth_first(root) {
            let Ok((mesh, slot)) = self.slots.get(entity) else {
                continue;
            };

            let mut material = self.materials.get(&slot.0).cloned().unwrap_or_default();
            material.base_color_texture = None;
            let material = self.materials.add(material);

            let part = self.registry.register(entity);
            match self.meshes.get_mut(&mesh.0) {
                Some(mesh) => {
                    if ensure_uvs(mesh) {
                        debug!("[MODEL] {} has no UVs, filled with constant ones", part.name);
                    }
                }
                None => warn!(
                    "[MODEL] Mesh data for {} unavailable; paint may not show",
                    part.name
                ),
            }

            self.commands
                .entity(entity)
                .insert((MeshMaterial3d(material), Name::new(part.name.clone())))
                .observe(on_part_click);
            debug!("[MODEL] Registered {} ({:?})", part.name, entity);
            count += 1;
        }

        info!("[MODEL] Registered {} parts", count);
        self.next_state.set(AppState::Ready);
        Some(count)
    }
}

/// Continuation run once the spawned scene instance is ready
pub fn register_model_parts(ready: On<SceneInstanceReady>, mut discovery: PartDiscovery) {
    discovery.register_scene(ready.entity);
}

/// Give `mesh` a UV channel if it has none
///
/// Painted textures are a single solid color, so any coordinate samples the
/// right value; without a UV channel the texture is not sampled at all.
/// Returns whether UVs were added.
pub fn ensure_uvs(mesh: &mut Mesh) -> bool {
    if mesh.contains_attribute(Mesh::ATTRIBUTE_UV_0) {
        return false;
    }
    let uvs = vec![[0.5_f32, 0.5]; mesh.count_vertices()];
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    true
}
