//! Shared plumbing for the keytab workspace: code sinks, file writers, test
//! diffing, and the internal-error panic hook.

pub mod diff;
pub mod files;
pub mod panic;
pub mod sink;
