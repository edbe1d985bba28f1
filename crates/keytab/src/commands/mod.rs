pub mod build;
pub mod check;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

/// Accepts either a manifest file or a directory holding `keytab.toml`.
pub fn resolve_manifest_path(path: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let resolved = if path.is_dir() {
        path.join(driver::MANIFEST_FILE_NAME)
    } else {
        path.to_owned()
    };
    if !resolved.is_file() {
        anyhow::bail!("no manifest found at `{resolved}`");
    }
    Ok(resolved)
}

/// The directory generated files land in when `--output` is not given: the
/// manifest's own directory.
pub fn default_out_dir(manifest_path: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    manifest_path
        .parent()
        .map(Utf8Path::to_owned)
        .context("manifest path has no parent directory")
}
