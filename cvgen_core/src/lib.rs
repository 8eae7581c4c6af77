//! `cvgen_core` is the core library for the cvgen CV generator. It renders a
//! CV document by substituting data from a structured JSON record into a text
//! template using a minimal Mustache-style syntax.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Template text
//!   → Lexer (tokenizes {{name}}, {{#name}}, {{/name}}, {{.}} placeholders)
//!   → Parser (pairs section markers, builds a tree of text/variable/section nodes)
//!   → Engine (evaluates the tree against scoped contexts, concatenates output)
//! ```
//!
//! ## Template Syntax
//!
//! - `{{name}}` — substitute the value bound to `name`. Names resolve from
//!   the innermost section scope outward to the top-level context; unresolved
//!   placeholders are left verbatim.
//! - `{{#name}}...{{/name}}` — a section. Absent, `null`, and scalar values
//!   suppress the body; a sequence repeats it once per element; a mapping
//!   renders it once with that mapping as the scope.
//! - `{{.}}` — the current sequence element, when it is a bare string.
//!
//! Rendering never fails: a placeholder with no matching context entry passes
//! through unchanged, so a partially-filled document is always produced.
//!
//! ## Key Types
//!
//! - [`Value`] — the context value model: scalar, sequence, or mapping.
//! - [`Node`] — a parsed template node.
//! - [`Preset`] — the built-in CV templates (classic, modern, colorful,
//!   ocean, purple).
//! - [`CvgenConfig`] — optional defaults loaded from `cvgen.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cvgen_core::Value;
//! use cvgen_core::render;
//!
//! let context: Value = serde_json::json!({
//! 	"name": "Ada Lovelace",
//! 	"skills": [{"v": "analysis"}, {"v": "notes"}],
//! })
//! .into();
//!
//! let output = render("{{name}}: {{#skills}}{{v}};{{/skills}}", &context);
//! assert_eq!(output, "Ada Lovelace: analysis;notes;");
//! ```

pub use config::*;
pub use data::*;
pub use engine::*;
pub use error::*;
pub use parser::*;
pub use presets::*;
pub use value::*;

pub mod config;
mod data;
mod engine;
mod error;
pub(crate) mod lexer;
mod parser;
mod presets;
mod value;
