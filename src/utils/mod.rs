//! Utility modules for the glossary generator.

pub mod minify;
