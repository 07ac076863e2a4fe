//! The man page document template.
//!
//! A [`ManPage`] is a fixed set of top-level sections that callbacks fill
//! in. Text appended to the page itself lands in SYNOPSIS, and every
//! dynamically opened subsection is attached under OPTIONS no matter when
//! it is requested. Sections left empty disappear from the output.

use crate::markup::Sanitizer;
use crate::structure::{Section, SectionKind};
use std::collections::BTreeMap;

const SYNOPSIS: usize = 1;
const OPTIONS: usize = 3;

const FIXED_TITLES: [&str; 5] = ["NAME", "SYNOPSIS", "DESCRIPTION", "OPTIONS", "REMARKS"];

/// A man page pre-seeded with the usual top-level sections.
#[derive(Debug, Clone)]
pub struct ManPage {
    header_name: String,
    date: String,
    sections: Vec<Section>,
}

impl ManPage {
    /// Build the page template.
    ///
    /// `suite` overrides the name in the page header; `short_desc` turns
    /// the NAME body into `prog \- short_desc`; `extra_sections` are
    /// appended after REMARKS with their bodies sanitized once here.
    /// `date` defaults to today.
    pub fn new(
        prog: &str,
        suite: Option<&str>,
        short_desc: Option<&str>,
        extra_sections: &BTreeMap<String, String>,
        date: Option<&str>,
    ) -> Self {
        let mut sections: Vec<Section> = FIXED_TITLES
            .iter()
            .map(|title| Section::new(SectionKind::Section, *title))
            .collect();

        let name_line = match short_desc {
            Some(short_desc) => format!("{prog} \\- {short_desc}"),
            None => prog.to_string(),
        };
        sections[0].append(name_line);

        let sanitize = Sanitizer::new();
        for (title, body) in extra_sections {
            let mut section = Section::new(SectionKind::Section, title.as_str());
            section.append(sanitize.apply(body));
            sections.push(section);
        }

        ManPage {
            header_name: suite.unwrap_or(prog).to_string(),
            date: match date {
                Some(date) => date.to_string(),
                None => chrono::Local::now().date_naive().to_string(),
            },
            sections,
        }
    }

    /// Append top-level text. Always resolves to SYNOPSIS; the other
    /// fixed sections receive content only through explicit addressing.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.sections[SYNOPSIS].append(text);
        self
    }

    /// Open (or reopen) a subsection. Subsection requests on the page
    /// always attach under OPTIONS, regardless of what else has been
    /// appended so far.
    pub fn subsection(&mut self, title: &str) -> &mut Section {
        self.sections[OPTIONS].subsection(title)
    }

    /// Serialize the page: header line plus every non-empty top-level
    /// section in construction order.
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            ".TH \"{}\" 1 {} \"\" \"General Commands Manual\"",
            self.header_name, self.date
        )];
        for section in &self.sections {
            let rendered = section.render();
            if !rendered.is_empty() {
                lines.push(rendered);
            }
        }
        lines.join("\n")
    }
}
