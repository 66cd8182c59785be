// src/render/mod.rs
// =============================================================================
// This module turns fetched GitHub data into a Markdown document.
//
// Submodules:
// - helpers: ranking, truncation and link formatting
// - markdown: the fixed document template
// =============================================================================

mod helpers;
mod markdown;

pub use markdown::build_markdown;
