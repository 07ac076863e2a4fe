//! Errors that abort a formatting pass.

use thiserror::Error;

/// A formatting pass either completes and returns the full page text, or
/// fails with one of these and the partially built page is discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// `end_section` was called with no subsection open.
    #[error("section end without a matching section start")]
    UnbalancedSectionEnd,

    /// `start_section` was called while another subsection is still open.
    /// Drivers may nest sections one level deep at most.
    #[error("subsection {requested:?} opened while {open:?} is still open")]
    NestedSection { open: String, requested: String },

    /// An action record exposes too little to render an invocation.
    #[error("malformed action: {0}")]
    MalformedAction(String),
}
