//! Turns a [`ModelConfig`] into script text. Pure and deterministic: the
//! same config always produces byte-identical output, and nothing is
//! emitted unless every precondition holds.
//!
//! The directive order is a grammar contract with the model compiler and
//! must not be shuffled.

use crate::model_config::ModelConfig;
use crate::paths;

pub const MODEL_EXTENSION: &str = ".mdl";

/// The compiler's fallback physical material, used when no catalog key has
/// been chosen.
const DEFAULT_SURFACEPROP: &str = "Default";

/// Fixed name of the single generated sequence.
const SEQUENCE_NAME: &str = "idle";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no source mesh has been chosen for the body")]
    MissingBodyMesh,

    #[error("the working folder is not set")]
    MissingWorkingFolder,

    #[error("the model name is not set")]
    MissingModelName,
}

/// Renders the full script. All-or-nothing: preconditions are checked
/// before a single line is produced.
pub fn render(config: &ModelConfig) -> Result<String, ValidationError> {
    if config.body_mesh.trim().is_empty() {
        return Err(ValidationError::MissingBodyMesh);
    }
    if config.working_folder().is_empty() {
        return Err(ValidationError::MissingWorkingFolder);
    }
    if config.model_name.trim().is_empty() {
        return Err(ValidationError::MissingModelName);
    }

    let mesh = paths::file_basename(&config.body_mesh);
    let model_file = paths::ensure_extension(&config.model_name, MODEL_EXTENSION);

    let mut qc = String::new();
    qc.push_str("// Generated with QC Generator\n");
    qc.push_str("// Regenerate from the model description instead of editing by hand.\n");
    qc.push('\n');

    qc.push_str(&format!(
        "$modelname \"{}/{}\"\n",
        config.working_folder(),
        model_file
    ));
    qc.push_str(&format!("$body \"{}\" \"{}\"\n", config.body_name, mesh));
    qc.push_str(&format!(
        "$surfaceprop \"{}\"\n",
        surfaceprop_subtype(config.surfaceprop.as_deref())
    ));
    // Recomputed here rather than read from a stored field, so a late
    // working-folder change cannot leave a stale materials path behind.
    qc.push_str(&format!("$cdmaterials \"{}\"\n", config.materials_path()));

    if config.scale != 0.0 {
        qc.push_str(&format!("$scale {}\n", format_real(config.scale)));
    }

    qc.push_str(&format!("$sequence \"{}\" \"{}\"\n", SEQUENCE_NAME, mesh));

    if let Some(group) = config.texture_group.as_ref().filter(|group| group.is_complete()) {
        qc.push_str(&format!("$texturegroup \"{}\"\n", group.name));
        qc.push_str("{\n");
        for material in group.materials.iter().filter(|material| !material.is_empty()) {
            qc.push_str(&format!("\t{{ \"{}\" }}\n", material));
        }
        qc.push_str("}\n");
    }

    if config.static_prop() {
        qc.push_str("$staticprop\n");
    }
    // The static-prop dependency is enforced where the flags are set, not
    // re-checked here.
    if config.cast_texture_shadows() {
        qc.push_str("$casttextureshadows\n");
    }

    qc.push_str(if config.mostly_opaque {
        "$mostlyopaque\n"
    } else {
        "$opaque\n"
    });

    if let Some(collision) = config.collision.as_ref().filter(|c| !c.path.is_empty()) {
        qc.push_str(&format!("$collisionmodel \"{}\"\n", collision.path));
        qc.push_str("{\n");
        if collision.mass != 0.0 {
            qc.push_str(&format!("\t$mass {}\n", format_real(collision.mass)));
        }
        if collision.concave {
            qc.push_str("\t$concave\n");
        }
        qc.push_str("}\n");
    }

    for lod in config.lods.iter().filter(|lod| lod.is_complete()) {
        qc.push_str(&format!("$lod {}\n", lod.screen_size));
        qc.push_str("{\n");
        qc.push_str(&format!(
            "\treplacemodel \"{}\" \"{}\"\n",
            mesh, lod.replacement_mesh
        ));
        qc.push_str("}\n");
    }

    Ok(qc)
}

/// The catalog key is `"category - subtype"`; only the subtype goes into
/// the script.
fn surfaceprop_subtype(key: Option<&str>) -> &str {
    match key {
        Some(key) if !key.is_empty() => key.rsplit(" - ").next().unwrap_or(key),
        _ => DEFAULT_SURFACEPROP,
    }
}

/// Minimal decimal form that always keeps a fractional digit, so a whole
/// number renders as `35.0` rather than `35`.
fn format_real(value: f64) -> String {
    let mut text = format!("{}", value);
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
