//! Profile interchange formats.
//!
//! This module provides serialization and deserialization for language
//! profile definitions:
//!
//! - **JSON** - one object with `name`, `keywords`, `builtins`
//! - **YAML** - same shape, `.yaml`/`.yml`
//!
//! A loaded [`ProfileDef`] converts into a
//! [`LanguageProfile`](crate::profile::LanguageProfile) and can be
//! registered like the bundled ones. Only available with the `interchange`
//! feature.

mod error;
mod profile_def;

pub use error::InterchangeError;
pub use profile_def::ProfileDef;
