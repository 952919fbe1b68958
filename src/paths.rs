//! Path shaping for the script format: the model compiler wants forward
//! slashes and paths relative to fixed roots, regardless of what the user's
//! file dialogs produced.

use std::path::Path;

use relative_path::PathExt;

/// Compiled models and their materials both live under this prefix.
const MATERIALS_PREFIX: &str = "models/";

/// An auxiliary mesh that cannot be expressed relative to the primary mesh
/// directory, e.g. because the two live on different filesystem roots.
#[derive(Debug, thiserror::Error)]
#[error("cannot express {target:?} relative to {base:?}: {source}")]
pub struct RelativePathError {
    pub target: String,
    pub base: String,
    #[source]
    source: relative_path::RelativeToError,
}

/// Trims whitespace, converts backslashes, strips leading/trailing slashes.
/// Empty input stays empty, which callers treat as "unset".
pub fn normalize_working_folder(raw: &str) -> String {
    let forward = raw.trim().replace('\\', "/");
    forward.trim_matches('/').to_string()
}

/// Path of `target` relative to `base`, in forward-slash form.
pub fn relativize(target: &Path, base: &Path) -> Result<String, RelativePathError> {
    let relative = target.relative_to(base).map_err(|source| RelativePathError {
        target: target.display().to_string(),
        base: base.display().to_string(),
        source,
    })?;
    Ok(relative.to_string())
}

/// `""` for an unset folder, else `models/<folder>`. Callers recompute this
/// whenever the working folder changes instead of storing it.
pub fn derive_materials_path(working_folder: &str) -> String {
    if working_folder.is_empty() {
        String::new()
    } else {
        format!("{}{}", MATERIALS_PREFIX, working_folder)
    }
}

/// Appends `ext` unless `name` already carries it (exact, case-sensitive).
pub fn ensure_extension(name: &str, ext: &str) -> String {
    if name.ends_with(ext) {
        name.to_string()
    } else {
        format!("{}{}", name, ext)
    }
}

/// Final component of a user-entered path, tolerating either slash kind.
pub fn file_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_folder_is_trimmed_and_slashed() {
        assert_eq!(normalize_working_folder("  props_dev/dev  "), "props_dev/dev");
        assert_eq!(normalize_working_folder("\\props_dev\\dev\\"), "props_dev/dev");
        assert_eq!(normalize_working_folder("/props_dev/dev/"), "props_dev/dev");
        assert_eq!(normalize_working_folder("   "), "");
    }

    #[test]
    fn materials_path_is_prefixed_or_empty() {
        assert_eq!(derive_materials_path(""), "");
        assert_eq!(derive_materials_path("props_dev/dev"), "models/props_dev/dev");
    }

    #[test]
    fn extension_is_appended_once() {
        assert_eq!(ensure_extension("crate", ".mdl"), "crate.mdl");
        assert_eq!(ensure_extension("crate.mdl", ".mdl"), "crate.mdl");
        // Exact suffix match only.
        assert_eq!(ensure_extension("crate.MDL", ".mdl"), "crate.MDL.mdl");
    }

    #[test]
    fn basename_handles_both_slash_kinds() {
        assert_eq!(file_basename("work/meshes/crate.smd"), "crate.smd");
        assert_eq!(file_basename("work\\meshes\\crate.smd"), "crate.smd");
        assert_eq!(file_basename("crate.smd"), "crate.smd");
    }

    #[test]
    fn relativize_produces_forward_slashes() {
        let result = relativize(
            Path::new("/work/meshes/lod/crate_lod1.smd"),
            Path::new("/work/meshes"),
        )
        .unwrap();
        assert_eq!(result, "lod/crate_lod1.smd");
    }

    #[test]
    fn relativize_walks_up_through_siblings() {
        let result = relativize(
            Path::new("/work/collision/crate_phys.smd"),
            Path::new("/work/meshes"),
        )
        .unwrap();
        assert_eq!(result, "../collision/crate_phys.smd");
    }

    #[test]
    fn incomparable_paths_fail() {
        let err = relativize(Path::new("meshes/crate.smd"), Path::new("/work/meshes")).unwrap_err();
        assert_eq!(err.base, "/work/meshes");
    }
}
