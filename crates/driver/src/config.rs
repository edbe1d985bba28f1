//! The `keytab.toml` manifest: lookup table descriptions.

use camino::Utf8PathBuf;
use codegen::CharWidth;
use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;

pub const MANIFEST_FILE_NAME: &str = "keytab.toml";

/// Parsed manifest: one or more lookup tables to generate.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "table", default)]
    pub tables: Vec<TableConfig>,
}

/// One `[[table]]` entry.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TableConfig {
    pub name: SmolStr,
    /// Prefix of the generated names; defaults to `name`.
    pub prefix: Option<SmolStr>,
    /// Element type of the generated values array, inserted verbatim.
    pub value_type: String,
    #[serde(default)]
    pub char_width: WidthConfig,
    #[serde(default = "default_encapsulate")]
    pub encapsulate: bool,
    /// Output file, relative to the output directory; defaults to
    /// `<name>.inc`.
    pub output: Option<Utf8PathBuf>,
    /// Ordered key→value-expression map. Document order is index order, and
    /// TOML itself rejects duplicate keys.
    #[serde(default)]
    pub keys: IndexMap<String, String>,
}

fn default_encapsulate() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WidthConfig {
    #[default]
    Narrow,
    Wide,
}

impl From<WidthConfig> for CharWidth {
    fn from(width: WidthConfig) -> Self {
        match width {
            WidthConfig::Narrow => CharWidth::Narrow,
            WidthConfig::Wide => CharWidth::Wide,
        }
    }
}

impl TableConfig {
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(&self.name)
    }

    pub fn output_file(&self) -> Utf8PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(format!("{}.inc", self.name)))
    }

    pub fn to_codegen_config(&self) -> codegen::Config {
        codegen::Config {
            prefix: SmolStr::new(self.prefix()),
            value_type: self.value_type.clone(),
            char_width: self.char_width.into(),
            encapsulate: self.encapsulate,
        }
    }
}

fn is_valid_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True if `s` works as the stem of a C++ identifier.
pub fn is_valid_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(is_valid_prefix_char)
        }
        _ => false,
    }
}
