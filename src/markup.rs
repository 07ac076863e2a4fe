//! Roff text formatting helpers.
//!
//! Free-form text passes through a [`Sanitizer`] exactly once before it
//! enters the page tree; option flags and metavars are decorated through
//! [`ActionView`] so the escaping rules live in one place.

use crate::error::FormatError;
use crate::model::{ArgAction, Nargs, NargsSymbol};
use regex::{Captures, RegexBuilder};

/// Wrap a span of running text in bold font escapes.
pub fn bold(text: &str) -> String {
    format!("\\fB{text}\\fP")
}

/// Wrap a span of running text in italic font escapes.
pub fn italic(text: &str) -> String {
    format!("\\fI{text}\\fP")
}

/// Escape hyphens so roff renders them as literal dashes.
pub fn escape_dashes(text: &str) -> String {
    text.replace('-', "\\-")
}

/// One-pass sanitizer for free-form help text.
///
/// Escapes dashes, turns blank lines into paragraph directives, trims and
/// condenses whitespace, and neutralizes line-leading control characters.
/// Replacements are not rescanned, so inserted directives survive intact.
pub struct Sanitizer {
    pattern: regex::Regex,
    paragraph: String,
}

impl Sanitizer {
    /// Sanitizer emitting top-level `.PP` paragraphs.
    pub fn new() -> Self {
        Self::with_paragraph(".PP")
    }

    /// Sanitizer emitting `.IP` paragraphs, for indented option bodies.
    pub fn indented() -> Self {
        Self::with_paragraph(".IP")
    }

    fn with_paragraph(directive: &str) -> Self {
        // Alternation order is load-bearing: paragraph breaks must win
        // over line-edge trimming at the same position.
        let pattern = RegexBuilder::new(r"(-)|(\n\n+)|(^\s+|\s+$)|(\s\s+)|(^[.'])")
            .multi_line(true)
            .build()
            .expect("sanitizer pattern is valid");
        Sanitizer {
            pattern,
            paragraph: format!("\n{directive}\n"),
        }
    }

    /// Apply all rules in a single pass over `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                if caps.get(1).is_some() {
                    "\\-".to_string()
                } else if caps.get(2).is_some() {
                    self.paragraph.clone()
                } else if caps.get(3).is_some() {
                    String::new()
                } else if caps.get(4).is_some() {
                    " ".to_string()
                } else {
                    format!("\\&{}", &caps[0])
                }
            })
            .into_owned()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only formatting view over one action record.
///
/// Exposes the attributes the formatter needs with defaults supplied
/// here: flags render bold, metavars italic, and a missing metavar for an
/// optional is derived from its flag names. An action with neither flags
/// nor a metavar cannot be rendered at all.
pub struct ActionView<'a> {
    action: &'a ArgAction,
}

impl<'a> ActionView<'a> {
    pub fn new(action: &'a ArgAction) -> Self {
        ActionView { action }
    }

    /// An action without flag strings is a positional argument.
    pub fn is_positional(&self) -> bool {
        self.action.flags.is_empty()
    }

    /// Help text, empty when the record carries none.
    pub fn help(&self) -> &str {
        self.action.help.as_deref().unwrap_or("")
    }

    /// The italicized metavar: the explicit one when present, otherwise
    /// the default derived from the flag names.
    pub fn metavar(&self) -> Result<String, FormatError> {
        if let Some(metavar) = &self.action.metavar {
            return Ok(italic(&escape_dashes(metavar)));
        }
        if self.is_positional() {
            return Err(FormatError::MalformedAction(
                "positional argument without a metavar".to_string(),
            ));
        }
        Ok(default_metavar_for_optional(&self.action.flags))
    }

    /// The full option invocation: italic metavar for positionals, bold
    /// flags each followed by the argument shape for optionals.
    pub fn invocation(&self) -> Result<String, FormatError> {
        if self.is_positional() {
            return self.metavar();
        }
        let flags: Vec<String> = self
            .action
            .flags
            .iter()
            .map(|flag| bold(&escape_dashes(flag)))
            .collect();
        match self.format_args()? {
            None => Ok(flags.join(", ")),
            Some(args) => {
                let parts: Vec<String> = flags
                    .iter()
                    .map(|flag| format!("{flag} {args}"))
                    .collect();
                Ok(parts.join(", "))
            }
        }
    }

    /// The metavar shape implied by `nargs`, or `None` when the action
    /// consumes no value.
    pub fn format_args(&self) -> Result<Option<String>, FormatError> {
        let shaped = match self.action.nargs {
            Some(Nargs::Count(0)) => None,
            None => Some(self.metavar()?),
            Some(Nargs::Count(count)) => Some(vec![self.metavar()?; count].join(" ")),
            Some(Nargs::Symbolic(NargsSymbol::Optional)) => {
                Some(format!("[{}]", self.metavar()?))
            }
            Some(Nargs::Symbolic(NargsSymbol::ZeroOrMore)) => {
                Some(format!("[{} ...]", self.metavar()?))
            }
            Some(Nargs::Symbolic(NargsSymbol::OneOrMore)) => {
                Some(format!("{} ...", self.metavar()?))
            }
        };
        Ok(shaped)
    }
}

/// Default metavar for an optional: the first long flag (else the first
/// flag), stripped of leading dashes, uppercased, italicized.
pub fn default_metavar_for_optional(flags: &[String]) -> String {
    let source = flags
        .iter()
        .find(|flag| flag.starts_with("--"))
        .or_else(|| flags.first());
    let name = match source {
        Some(flag) => flag.trim_start_matches('-'),
        None => "ARG",
    };
    italic(&name.replace('-', "_").to_uppercase())
}
