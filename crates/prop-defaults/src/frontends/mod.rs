//! Language frontends
//!
//! This module contains implementations of the `LanguageFrontend` trait.

mod strings;
pub mod typescript;

pub use typescript::TypeScriptFrontend;
