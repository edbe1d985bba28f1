//! Names of the generated artifacts, derived from the caller's prefix.

use smol_str::SmolStr;

/// Name of the generated keys array.
pub fn keys_array(prefix: &str) -> SmolStr {
    SmolStr::new(format!("{prefix}Keys"))
}

/// Name of the generated values array.
pub fn values_array(prefix: &str) -> SmolStr {
    SmolStr::new(format!("{prefix}Values"))
}

/// Name of the generated lookup class.
pub fn lookup_class(prefix: &str) -> SmolStr {
    SmolStr::new(format!("{prefix}LookupTable"))
}
