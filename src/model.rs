//! Schema types for argument-parser help models.
//!
//! A help model is the structured description of a program's usage,
//! options, and help text that an argument-parsing library exposes
//! through its introspection hooks. The types here are deliberately
//! passive: the formatting layers treat them as opaque records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete help description for one program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpModel {
    /// Program name, required.
    pub prog: String,
    /// Optional suite name used in the page header instead of `prog`.
    #[serde(default)]
    pub suite: Option<String>,
    /// Optional one-line description shown in NAME.
    #[serde(default)]
    pub short_desc: Option<String>,
    /// Optional description text added after the usage line.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional epilog text added after all argument groups.
    #[serde(default)]
    pub epilog: Option<String>,
    /// Explicit usage invocation (without the program name). Synthesized
    /// from the actions when absent.
    #[serde(default)]
    pub usage: Option<String>,
    /// Header date override (YYYY-MM-DD). Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    /// Argument groups in declaration order.
    #[serde(default)]
    pub groups: Vec<ArgGroup>,
    /// Extra sections appended at the end of the page, title to body.
    #[serde(default)]
    pub extra_sections: BTreeMap<String, String>,
}

/// A titled group of actions, e.g. "positional arguments".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgGroup {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<ArgAction>,
}

/// One option or positional argument. An empty `flags` list marks a
/// positional, which must then carry a metavar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgAction {
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub metavar: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub nargs: Option<Nargs>,
}

/// How many values an action consumes: a fixed count, or one of the
/// `?`/`*`/`+` symbols. Absent means exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nargs {
    Count(usize),
    Symbolic(NargsSymbol),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NargsSymbol {
    #[serde(rename = "?")]
    Optional,
    #[serde(rename = "*")]
    ZeroOrMore,
    #[serde(rename = "+")]
    OneOrMore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_model_parses_with_defaults() {
        let model: HelpModel = serde_json::from_str(r#"{"prog": "tool"}"#).expect("parse");
        assert_eq!(model.prog, "tool");
        assert!(model.groups.is_empty());
        assert!(model.extra_sections.is_empty());
    }

    #[test]
    fn nargs_accepts_counts_and_symbols() {
        let action: ArgAction =
            serde_json::from_str(r#"{"flags": ["-v"], "nargs": 0}"#).expect("parse");
        assert_eq!(action.nargs, Some(Nargs::Count(0)));

        let action: ArgAction =
            serde_json::from_str(r#"{"flags": ["-f"], "nargs": "*"}"#).expect("parse");
        assert_eq!(
            action.nargs,
            Some(Nargs::Symbolic(NargsSymbol::ZeroOrMore))
        );
    }

    #[test]
    fn model_round_trips_through_json() {
        let model: HelpModel = serde_json::from_str(
            r#"{
                "prog": "tool",
                "short_desc": "does things",
                "groups": [
                    {"title": "options", "actions": [{"flags": ["-h", "--help"], "nargs": 0}]}
                ],
                "extra_sections": {"EXAMPLES": "do stuff"}
            }"#,
        )
        .expect("parse");
        let json = serde_json::to_string(&model).expect("serialize");
        let reparsed: HelpModel = serde_json::from_str(&json).expect("reparse");
        assert_eq!(reparsed.prog, model.prog);
        assert_eq!(reparsed.groups.len(), 1);
        assert_eq!(reparsed.extra_sections.len(), 1);
    }
}
