//! Manifest-driven generation: load `keytab.toml`, validate it, generate
//! every table, and write each output file when its content changes.

pub mod config;

pub use crate::config::{Manifest, TableConfig, MANIFEST_FILE_NAME};

use camino::{Utf8Path, Utf8PathBuf};
use codegen::KeyTable;
use common::files::write_if_changed;
use common::sink::{CodeSink, StringSink};
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::fmt;
use std::fs;
use std::io;

const GENERATED_BANNER: &str = "// Generated by keytab; do not edit.\n\n";

#[derive(Debug)]
pub enum Error {
    ManifestRead(Utf8PathBuf, io::Error),
    ManifestParse(Utf8PathBuf, toml::de::Error),
    InvalidPrefix { table: SmolStr, prefix: SmolStr },
    NonAsciiKey { table: SmolStr, key: String },
    Emit(codegen::EmitError),
    OutputWrite(Utf8PathBuf, io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ManifestRead(path, err) => {
                write!(f, "failed to read manifest `{path}`: {err}")
            }
            Error::ManifestParse(path, err) => {
                write!(f, "failed to parse manifest `{path}`: {err}")
            }
            Error::InvalidPrefix { table, prefix } => {
                write!(f, "table `{table}`: `{prefix}` is not a valid name prefix")
            }
            Error::NonAsciiKey { table, key } => {
                write!(
                    f,
                    "table `{table}`: key `{key}` is not ASCII; narrow-width tables index \
                     the query by byte"
                )
            }
            Error::Emit(err) => write!(f, "generation failed: {err}"),
            Error::OutputWrite(path, err) => {
                write!(f, "failed to write output `{path}`: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ManifestRead(_, err) => Some(err),
            Error::ManifestParse(_, err) => Some(err),
            Error::Emit(err) => Some(err),
            Error::OutputWrite(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<codegen::EmitError> for Error {
    fn from(err: codegen::EmitError) -> Self {
        Error::Emit(err)
    }
}

/// Outcome of a [`build`]: which output files changed.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub written: Vec<Utf8PathBuf>,
    pub unchanged: Vec<Utf8PathBuf>,
}

pub fn load_manifest(path: &Utf8Path) -> Result<Manifest, Error> {
    let content =
        fs::read_to_string(path).map_err(|err| Error::ManifestRead(path.to_owned(), err))?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|err| Error::ManifestParse(path.to_owned(), err))?;
    check(&manifest)?;
    Ok(manifest)
}

/// Validates every table of the manifest without generating anything.
pub fn check(manifest: &Manifest) -> Result<(), Error> {
    for table in &manifest.tables {
        let prefix = table.prefix();
        if !config::is_valid_prefix(prefix) {
            return Err(Error::InvalidPrefix {
                table: table.name.clone(),
                prefix: SmolStr::new(prefix),
            });
        }
        if table.char_width == config::WidthConfig::Narrow {
            if let Some(key) = table.keys.keys().find(|key| !key.is_ascii()) {
                return Err(Error::NonAsciiKey {
                    table: table.name.clone(),
                    key: key.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Generates every table of the manifest into `out_dir`.
///
/// Each table is rendered into memory first and written through the
/// update-on-change writer, so untouched outputs keep their timestamps.
pub fn build(manifest: &Manifest, out_dir: &Utf8Path) -> Result<BuildSummary, Error> {
    check(manifest)?;

    let mut summary = BuildSummary::default();
    for table in &manifest.tables {
        tracing::info!(
            target: "driver",
            "generating table `{}` ({} keys)",
            table.name,
            table.keys.len(),
        );
        let content = render_table(table)?;
        let path = out_dir.join(table.output_file());
        let written =
            write_if_changed(&path, &content).map_err(|err| Error::OutputWrite(path.clone(), err))?;
        if written {
            summary.written.push(path);
        } else {
            summary.unchanged.push(path);
        }
    }
    Ok(summary)
}

fn render_table(table: &TableConfig) -> Result<String, Error> {
    let entries: IndexMap<SmolStr, String> = table
        .keys
        .iter()
        .map(|(key, value)| (SmolStr::new(key), value.clone()))
        .collect();
    let key_table = KeyTable::build(entries);

    let mut sink = StringSink::new();
    sink.write(GENERATED_BANNER).map_err(codegen::EmitError::from)?;
    codegen::generate(&key_table, &table.to_codegen_config(), &mut sink)?;
    Ok(sink.into_string())
}
