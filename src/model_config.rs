//! The in-memory model description. Built up incrementally by the front-end
//! between renders, or deserialized in one go from a model description file.

use serde::Deserialize;

use crate::paths;

/// A level-of-detail row: screen-size threshold plus replacement mesh.
///
/// The screen size is an opaque numeric string; it is not validated here.
/// Incomplete rows are tolerated so the user can stage them, and are
/// skipped at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LodEntry {
    pub screen_size: String,
    pub replacement_mesh: String,
}

impl LodEntry {
    pub fn is_complete(&self) -> bool {
        !self.screen_size.is_empty() && !self.replacement_mesh.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollisionModel {
    pub path: String,
    pub mass: f64,
    pub concave: bool,
}

impl Default for CollisionModel {
    fn default() -> Self {
        Self {
            path: String::new(),
            mass: 35.0,
            concave: false,
        }
    }
}

/// A `$texturegroup` skin family: one name, one material per skin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextureGroup {
    pub name: String,
    pub materials: Vec<String>,
}

impl TextureGroup {
    /// Blank material rows are tolerated the same way incomplete LOD rows
    /// are; the group only renders if something is left.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.materials.iter().any(|material| !material.is_empty())
    }
}

/// Everything needed to emit a script. One instance per session, mutated
/// freely between renders and read exactly once per generate action.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "ModelConfigFile")]
pub struct ModelConfig {
    working_folder: String,
    pub model_name: String,
    pub body_name: String,
    pub body_mesh: String,
    /// Catalog key (`"category - subtype"`); `None` renders as `Default`.
    pub surfaceprop: Option<String>,
    pub scale: f64,
    static_prop: bool,
    cast_texture_shadows: bool,
    pub mostly_opaque: bool,
    pub collision: Option<CollisionModel>,
    pub texture_group: Option<TextureGroup>,
    pub lods: Vec<LodEntry>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            working_folder: String::new(),
            model_name: String::new(),
            body_name: String::new(),
            body_mesh: String::new(),
            surfaceprop: None,
            scale: 1.0,
            static_prop: false,
            cast_texture_shadows: false,
            mostly_opaque: false,
            collision: None,
            texture_group: None,
            lods: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn set_working_folder(&mut self, raw: &str) {
        self.working_folder = paths::normalize_working_folder(raw);
    }

    pub fn working_folder(&self) -> &str {
        &self.working_folder
    }

    /// Derived from the working folder on every call; never stored, so it
    /// cannot go stale when the folder changes.
    pub fn materials_path(&self) -> String {
        paths::derive_materials_path(&self.working_folder)
    }

    pub fn set_static_prop(&mut self, enabled: bool) {
        self.static_prop = enabled;
        if !enabled {
            self.cast_texture_shadows = false;
        }
    }

    pub fn static_prop(&self) -> bool {
        self.static_prop
    }

    /// Texture shadows only exist on static props; the request is dropped
    /// while the static-prop flag is off.
    pub fn set_cast_texture_shadows(&mut self, enabled: bool) {
        self.cast_texture_shadows = enabled && self.static_prop;
    }

    pub fn cast_texture_shadows(&self) -> bool {
        self.cast_texture_shadows
    }
}

/// On-disk shape of a model description. A hand-written file can violate
/// the field rules (slash convention, the shadow flag's dependency on
/// static-prop), so the conversion re-applies them through the setters.
#[derive(Deserialize)]
#[serde(default)]
struct ModelConfigFile {
    working_folder: String,
    model_name: String,
    body_name: String,
    body_mesh: String,
    surfaceprop: Option<String>,
    scale: f64,
    static_prop: bool,
    cast_texture_shadows: bool,
    mostly_opaque: bool,
    collision: Option<CollisionModel>,
    texture_group: Option<TextureGroup>,
    lods: Vec<LodEntry>,
}

impl Default for ModelConfigFile {
    fn default() -> Self {
        Self {
            working_folder: String::new(),
            model_name: String::new(),
            body_name: String::new(),
            body_mesh: String::new(),
            surfaceprop: None,
            scale: 1.0,
            static_prop: false,
            cast_texture_shadows: false,
            mostly_opaque: false,
            collision: None,
            texture_group: None,
            lods: Vec::new(),
        }
    }
}

impl From<ModelConfigFile> for ModelConfig {
    fn from(file: ModelConfigFile) -> Self {
        let mut config = ModelConfig {
            model_name: file.model_name,
            body_name: file.body_name,
            body_mesh: file.body_mesh,
            surfaceprop: file.surfaceprop,
            scale: file.scale,
            mostly_opaque: file.mostly_opaque,
            collision: file.collision,
            texture_group: file.texture_group,
            lods: file.lods,
            ..ModelConfig::default()
        };
        config.set_working_folder(&file.working_folder);
        config.set_static_prop(file.static_prop);
        config.set_cast_texture_shadows(file.cast_texture_shadows);
        config
    }
}
