//! Man page generation from argument-parser help models.
//!
//! The crate turns a structured description of a program's usage,
//! options, and help text into roff man page markup. The pieces layer
//! bottom-up: [`markup`] escapes and decorates text, [`structure`] is
//! the section tree with its empty-section elision rule, [`document`]
//! is the pre-seeded page template with its routing rules, and
//! [`formatter`] is the callback adapter an argument parser drives.
//! [`driver::render_model`] replays the whole callback sequence for a
//! deserialized [`model::HelpModel`].
//!
//! Line wrapping is deliberately left to the man page renderer; the
//! output contains no layout beyond the markup directives.

pub mod document;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod markup;
pub mod model;
pub mod structure;

pub use document::ManPage;
pub use driver::render_model;
pub use error::FormatError;
pub use formatter::ManPageFormatter;
pub use model::{ArgAction, ArgGroup, HelpModel, Nargs, NargsSymbol};
