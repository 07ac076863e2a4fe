//! Callback-driven adapter that fills a [`ManPage`].
//!
//! An argument-parsing library drives this through the usual help
//! formatter hooks: open and close sections, add text, add the usage
//! line, add argument batches, and finally serialize. The position in
//! the tree is an explicit two-state machine instead of a saved-restore
//! slot, and unbalanced transitions fail fast.

use crate::document::ManPage;
use crate::error::FormatError;
use crate::markup::{bold, ActionView, Sanitizer};
use crate::model::ArgAction;
use std::collections::BTreeMap;

/// Where appended content currently lands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scope {
    /// At the page itself; text resolves per the page's routing rules.
    Root,
    /// Inside the named subsection under OPTIONS.
    InSubsection(String),
}

/// Help formatter that composes a man page instead of console help.
pub struct ManPageFormatter {
    prog_label: String,
    page: ManPage,
    scope: Scope,
    sanitize: Sanitizer,
    sanitize_indented: Sanitizer,
}

impl ManPageFormatter {
    /// Remember the program name and start from a fresh page template.
    /// The remaining arguments are passed through to [`ManPage::new`].
    pub fn new(
        prog: &str,
        suite: Option<&str>,
        short_desc: Option<&str>,
        extra_sections: &BTreeMap<String, String>,
        date: Option<&str>,
    ) -> Self {
        ManPageFormatter {
            prog_label: bold(prog),
            page: ManPage::new(prog, suite, short_desc, extra_sections, date),
            scope: Scope::Root,
            sanitize: Sanitizer::new(),
            sanitize_indented: Sanitizer::indented(),
        }
    }

    /// Descend into a subsection. The page routes the request under
    /// OPTIONS; opening a second level is a contract violation.
    pub fn start_section(&mut self, heading: &str) -> Result<(), FormatError> {
        if let Scope::InSubsection(open) = &self.scope {
            return Err(FormatError::NestedSection {
                open: open.clone(),
                requested: heading.to_string(),
            });
        }
        // Create the subsection at open time so group order follows the
        // callback order, not first-content order.
        self.page.subsection(heading);
        self.scope = Scope::InSubsection(heading.to_string());
        Ok(())
    }

    /// Ascend back to the page. Fails when no subsection is open.
    pub fn end_section(&mut self) -> Result<(), FormatError> {
        match self.scope {
            Scope::Root => Err(FormatError::UnbalancedSectionEnd),
            Scope::InSubsection(_) => {
                self.scope = Scope::Root;
                Ok(())
            }
        }
    }

    /// Append sanitized free-form text at the current position. Empty
    /// text is nothing to add.
    pub fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let sanitized = self.sanitize.apply(text);
        self.append(sanitized);
    }

    /// Append the usage line: the bolded program name followed by the
    /// usage invocation, which the caller has already formatted.
    pub fn add_usage(&mut self, usage: &str) {
        let line = if usage.is_empty() {
            self.prog_label.clone()
        } else {
            format!("{} {}", self.prog_label, usage)
        };
        self.append(line);
    }

    /// Append one indented block per action: a `.TP` marker, the option
    /// invocation, and the sanitized help text.
    pub fn add_arguments(&mut self, actions: &[ArgAction]) -> Result<(), FormatError> {
        for action in actions {
            let view = ActionView::new(action);
            let invocation = view.invocation()?;
            self.append(".TP".to_string());
            self.append(invocation);
            let help = view.help();
            if !help.is_empty() {
                let sanitized = self.sanitize_indented.apply(help);
                self.append(sanitized);
            }
        }
        Ok(())
    }

    /// Serialize the page. At the outermost scope this is the complete
    /// document text.
    pub fn format_help(&self) -> String {
        self.page.render()
    }

    fn append(&mut self, text: String) {
        match &self.scope {
            Scope::Root => {
                self.page.append_text(text);
            }
            Scope::InSubsection(title) => {
                self.page.subsection(title).append(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> ManPageFormatter {
        ManPageFormatter::new(
            "tool",
            None,
            Some("does things"),
            &BTreeMap::new(),
            Some("2026-08-06"),
        )
    }

    #[test]
    fn usage_and_description_fill_name_and_synopsis() {
        let mut fmt = formatter();
        fmt.add_usage("[-h]");
        fmt.add_text("Longer description.");
        let page = fmt.format_help();

        assert!(page.contains(".SH NAME\ntool \\- does things"));
        // Root-level text follows the usage line into SYNOPSIS; the
        // DESCRIPTION section stays empty and is elided.
        assert!(page.contains(".SH SYNOPSIS\n\\fBtool\\fP [-h]\nLonger description."));
        assert!(!page.contains(".SH DESCRIPTION"));
    }

    #[test]
    fn argument_groups_nest_under_options() {
        let mut fmt = formatter();
        fmt.start_section("positional arguments").expect("open");
        fmt.add_arguments(&[ArgAction {
            flags: vec!["-x".to_string()],
            metavar: None,
            help: Some("do x".to_string()),
            nargs: Some(crate::model::Nargs::Count(0)),
        }])
        .expect("arguments");
        fmt.end_section().expect("close");

        let page = fmt.format_help();
        assert!(page.contains(".SH OPTIONS\n.SS positional arguments\n.TP\n\\fB\\-x\\fP\ndo x"));
    }

    #[test]
    fn text_inside_a_section_stays_there() {
        let mut fmt = formatter();
        fmt.add_text("at root");
        fmt.start_section("group").expect("open");
        fmt.add_text("inside");
        fmt.end_section().expect("close");
        fmt.add_text("back at root");

        let page = fmt.format_help();
        assert!(page.contains(".SH SYNOPSIS\nat root\nback at root"));
        assert!(page.contains(".SS group\ninside"));
    }

    #[test]
    fn empty_text_is_nothing_to_add() {
        let mut fmt = formatter();
        fmt.add_usage("[-h]");
        fmt.add_text("");
        let with_empty = fmt.format_help();

        let mut fmt = formatter();
        fmt.add_usage("[-h]");
        assert_eq!(with_empty, fmt.format_help());
    }

    #[test]
    fn unbalanced_end_fails_fast() {
        let mut fmt = formatter();
        assert_eq!(fmt.end_section(), Err(FormatError::UnbalancedSectionEnd));
    }

    #[test]
    fn nested_sections_fail_fast() {
        let mut fmt = formatter();
        fmt.start_section("outer").expect("open");
        let err = fmt.start_section("inner").expect_err("nested open");
        assert_eq!(
            err,
            FormatError::NestedSection {
                open: "outer".to_string(),
                requested: "inner".to_string(),
            }
        );
    }

    #[test]
    fn malformed_action_aborts_the_batch() {
        let mut fmt = formatter();
        fmt.start_section("group").expect("open");
        let err = fmt
            .add_arguments(&[ArgAction {
                flags: Vec::new(),
                metavar: None,
                help: None,
                nargs: None,
            }])
            .expect_err("malformed");
        assert!(matches!(err, FormatError::MalformedAction(_)));
    }

    #[test]
    fn identical_callback_sequences_render_identically() {
        let run = || {
            let mut fmt = formatter();
            fmt.add_usage("[-h]");
            fmt.add_text("Longer description.");
            fmt.start_section("options").expect("open");
            fmt.add_arguments(&[ArgAction {
                flags: vec!["-h".to_string(), "--help".to_string()],
                metavar: None,
                help: Some("show this help".to_string()),
                nargs: Some(crate::model::Nargs::Count(0)),
            }])
            .expect("arguments");
            fmt.end_section().expect("close");
            fmt.format_help()
        };
        assert_eq!(run(), run());
    }
}
