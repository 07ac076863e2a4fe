//! Man page sectioning structure.
//!
//! Sections are named containers of text and nested subsections. The
//! serialization rule is the whole point: a section with no items renders
//! to nothing at all, and item order is document reading order.

/// Heading depth of a section node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Top-level `.SH` section.
    Section,
    /// Nested `.SS` subsection.
    Subsection,
}

impl SectionKind {
    fn tag(self) -> &'static str {
        match self {
            SectionKind::Section => "SH",
            SectionKind::Subsection => "SS",
        }
    }
}

/// One entry in a section body, in insertion order.
#[derive(Debug, Clone)]
pub enum Item {
    /// Pre-escaped text, appended verbatim.
    Text(String),
    /// A nested subsection.
    Section(Section),
}

/// A named, ordered container of text and subsections.
#[derive(Debug, Clone)]
pub struct Section {
    kind: SectionKind,
    title: String,
    items: Vec<Item>,
}

impl Section {
    pub fn new(kind: SectionKind, title: impl Into<String>) -> Self {
        Section {
            kind,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A section is empty when it has no direct items. Emptiness of
    /// descendants does not propagate upward: a nested subsection counts
    /// as an item even when it will itself render to nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a text item. Chainable.
    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(Item::Text(text.into()));
        self
    }

    /// Return the child subsection with `title`, creating and appending
    /// it when absent.
    pub fn subsection(&mut self, title: &str) -> &mut Section {
        let position = self
            .items
            .iter()
            .position(|item| matches!(item, Item::Section(section) if section.title == title));
        let index = match position {
            Some(index) => index,
            None => {
                self.items
                    .push(Item::Section(Section::new(SectionKind::Subsection, title)));
                self.items.len() - 1
            }
        };
        let Item::Section(section) = &mut self.items[index] else {
            unreachable!("index points at a section item");
        };
        section
    }

    /// Serialize depth-first. An empty section contributes nothing, not
    /// even a blank line; a non-empty one renders its heading followed by
    /// its items joined by newlines.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut lines = vec![format!(".{} {}", self.kind.tag(), self.title)];
        for item in &self.items {
            let rendered = match item {
                Item::Text(text) => text.clone(),
                Item::Section(section) => section.render(),
            };
            if !rendered.is_empty() {
                lines.push(rendered);
            }
        }
        lines.join("\n")
    }
}
