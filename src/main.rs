use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use env_logger::Env;

use qc_generator::{
    game_filter,
    model_config::ModelConfig,
    qc_assembler,
    surfaceprop_catalog::SurfacePropCatalog,
};

const DEFAULT_CATALOG_PATH: &str = "assets/surfaceprop.json";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let model_path = PathBuf::from(
        args.next()
            .ok_or_else(|| anyhow::format_err!("usage: qc_generator <model.json> [output.qc]"))?,
    );
    let output_path = args.next().map(PathBuf::from);

    let catalog = load_catalog();

    let model_text = fs::read_to_string(&model_path)
        .with_context(|| format!("failed to read model description {:?}", model_path))?;
    let config: ModelConfig = serde_json::from_str(&model_text)
        .with_context(|| format!("model description {:?} is malformed", model_path))?;

    if let Some(key) = config.surfaceprop.as_deref() {
        if catalog.is_empty() {
            log::warn!("no catalog loaded, emitting surfaceprop key {:?} unchecked", key);
        } else {
            let entry = game_filter::resolve(&catalog, key)?;
            log::info!("surfaceprop {:?}: {}", entry.key, entry.description);
        }
    }

    let qc_text = qc_assembler::render(&config)?;

    let output_path = output_path.unwrap_or_else(|| default_output_path(&model_path, &config));
    fs::write(&output_path, qc_text)
        .with_context(|| format!("failed to write {:?}", output_path))?;
    log::info!("wrote {:?}", output_path);

    Ok(())
}

/// A missing or broken catalog is not fatal; the generator still works, it
/// just cannot check surfaceprop keys.
fn load_catalog() -> SurfacePropCatalog {
    let path = env::var_os("QC_SURFACEPROP")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

    match SurfacePropCatalog::load(&path) {
        Ok(catalog) => {
            log::info!("loaded {} surfaceprop entries from {:?}", catalog.len(), path);
            catalog
        }
        Err(err) => {
            log::warn!("continuing without a surfaceprop catalog: {}", err);
            SurfacePropCatalog::default()
        }
    }
}

fn default_output_path(model_path: &Path, config: &ModelConfig) -> PathBuf {
    let name = if config.model_name.is_empty() {
        "model"
    } else {
        config.model_name.trim_end_matches(qc_assembler::MODEL_EXTENSION)
    };
    model_path.with_file_name(format!("{}.qc", name))
}
