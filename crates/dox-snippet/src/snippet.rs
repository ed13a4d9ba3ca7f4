//! Tag and placeholder model, and its rendering to editor snippet text.
//!
//! A [`Snippet`] is a list of sections, each a list of [`Tag`]s. Rendering
//! emits one ` * ` comment line per tag, a blank ` * ` line between
//! sections, and the `*/` terminator:
//!
//! ```text
//!
//!  * @brief ${1:[brief description]}
//!  * @details ${2:[long description]}
//!  *
//!  * @param a ${3:[description]}
//!  */
//! ```

use std::fmt::{self, Write as _};

use dox_core::{TagKind, TagSigil};
use serde::Serialize;

pub const BRIEF_DEFAULT: &str = "[brief description]";
pub const DETAILS_DEFAULT: &str = "[long description]";
pub const DESCRIPTION_DEFAULT: &str = "[description]";

/// Body of an otherwise empty comment, with the final cursor stop inside it.
pub const CLOSING_BODY: &str = "\n * ${0}\n */";

/// A single comment continuation line.
pub const CONTINUATION: &str = "\n * ";

/// Escape text placed inside a `${N:...}` field.
#[must_use]
pub fn escape_field(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '$' | '}') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// A numbered tab stop with its pre-filled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub index: u32,
    pub default: String,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}:{}}}", self.index, escape_field(&self.default))
    }
}

/// One documentation command line, e.g. `@param value ${3:[description]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub kind: TagKind,
    /// Parameter name for `param`/`tparam`.
    pub subject: Option<String>,
    pub placeholder: Placeholder,
}

/// A run of tags rendered without blank lines between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Pad command names so the placeholders line up.
    pub aligned: bool,
    pub tags: Vec<Tag>,
}

impl Section {
    fn name_width(&self) -> usize {
        if !self.aligned {
            return 0;
        }
        self.tags
            .iter()
            .map(|tag| tag.kind.as_str().len())
            .max()
            .unwrap_or_default()
    }
}

/// An assembled comment body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    sections: Vec<Section>,
}

impl Snippet {
    #[must_use]
    pub fn builder() -> SnippetBuilder {
        SnippetBuilder::new()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All tags in output order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.sections.iter().flat_map(|section| section.tags.iter())
    }

    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.tags().count()
    }

    /// Render the comment body that follows a `/**` opener.
    #[must_use]
    pub fn render(&self, sigil: TagSigil) -> String {
        let mut out = String::new();

        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                out.push_str(CONTINUATION);
            }
            let width = section.name_width();
            for tag in &section.tags {
                let _ = write!(out, "\n * {sigil}{:<width$} ", tag.kind.as_str());
                if let Some(subject) = &tag.subject {
                    out.push_str(subject);
                    out.push(' ');
                }
                let _ = write!(out, "{}", tag.placeholder);
            }
        }

        out.push_str("\n */");
        out
    }
}

/// Builds a [`Snippet`], numbering placeholders from 1 in insertion order.
#[derive(Debug)]
pub struct SnippetBuilder {
    done: Vec<Section>,
    current: Section,
    next_index: u32,
}

impl Default for SnippetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Section::default(),
            next_index: 1,
        }
    }

    /// Add a tag without a subject.
    pub fn tag(&mut self, kind: TagKind, default: impl Into<String>) -> &mut Self {
        self.push(kind, None, default.into())
    }

    /// Add a tag naming `subject`, e.g. a parameter.
    pub fn subject_tag(
        &mut self,
        kind: TagKind,
        subject: impl Into<String>,
        default: impl Into<String>,
    ) -> &mut Self {
        self.push(kind, Some(subject.into()), default.into())
    }

    /// Align command names in the current section.
    pub const fn aligned(&mut self) -> &mut Self {
        self.current.aligned = true;
        self
    }

    /// Close the current section and start a new one.
    pub fn section(&mut self) -> &mut Self {
        self.done.push(std::mem::take(&mut self.current));
        self
    }

    #[must_use]
    pub fn build(mut self) -> Snippet {
        self.done.push(self.current);
        Snippet { sections: self.done }
    }

    fn push(&mut self, kind: TagKind, subject: Option<String>, default: String) -> &mut Self {
        let placeholder = Placeholder {
            index: self.next_index,
            default,
        };
        self.next_index += 1;
        self.current.tags.push(Tag {
            kind,
            subject,
            placeholder,
        });
        self
    }
}
