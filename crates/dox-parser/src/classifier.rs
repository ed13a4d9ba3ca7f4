//! Declaration classifier: priority-ordered pattern dispatch.
//!
//! Templated declarations try constructor, then function (both anchored on
//! the joined text), then class on the first declaration line. Plain
//! declarations try an anchored constructor, then a function anywhere in the
//! joined text, then a class anywhere on the first line. Constructors always
//! come first because their shape is a function shape without a return type.

use dox_core::{Declaration, DeclarationKind, TemplateParams};
use tracing::{debug, trace};

use crate::error::ParserError;
use crate::lines::join_logical;
use crate::patterns::{Anchor, DeclarationPattern, TemplateClause};
use crate::templates::extract_template_params;

/// Recognizes the declaration that follows a documentation comment opener.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    max_lines: usize,
}

impl Classifier {
    /// `max_lines` bounds how many lines after the first are joined.
    #[must_use]
    pub const fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Classify the declaration starting at `lines[0]`.
    ///
    /// `lines[0]` is the line right after the comment opener; later entries
    /// are lookahead. Extra lines beyond the lookahead bound are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::NoPatternMatch`] when no declaration pattern
    /// matches. This includes a template clause followed by something that is
    /// neither a function nor a class.
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Result<Declaration, ParserError> {
        let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();

        let result = match self.template_clause(&lines) {
            Some((clause, consumed)) => self.classify_templated(&clause, &lines[consumed..]),
            None => self.classify_plain(&lines),
        };

        match &result {
            Ok(decl) => debug!(kind = %decl.kind, name = %decl.name, "classified declaration"),
            Err(error) => debug!(%error, "declaration not recognized"),
        }
        result
    }

    /// Find a `template<...>` clause opening at `lines[0]`.
    ///
    /// The clause may span several lines; returns it with the number of lines
    /// it consumed.
    fn template_clause(&self, lines: &[&str]) -> Option<(TemplateClause, usize)> {
        let first = lines.first()?;
        if !TemplateClause::starts(first) {
            return None;
        }

        let mut text = String::new();
        for (idx, line) in lines.iter().take(self.max_lines.saturating_add(1)).enumerate() {
            if idx > 0 {
                text.push(' ');
            }
            text.push_str(line.trim());
            if let Some(clause) = TemplateClause::parse(&text) {
                trace!(inner = %clause.inner, rest = %clause.rest, "template clause");
                return Some((clause, idx + 1));
            }
        }

        trace!("template clause never closed");
        None
    }

    fn classify_templated(
        &self,
        clause: &TemplateClause,
        following: &[&str],
    ) -> Result<Declaration, ParserError> {
        let params = extract_template_params(&clause.inner);

        let mut decl_lines: Vec<&str> = Vec::with_capacity(following.len() + 1);
        if !clause.rest.is_empty() {
            decl_lines.push(&clause.rest);
        }
        decl_lines.extend_from_slice(following);

        let joined = join_logical(&decl_lines, self.max_lines);
        let first = decl_lines.first().copied().unwrap_or_default();

        let found = DeclarationPattern::Constructor
            .capture(&joined, Anchor::Start)
            .or_else(|| DeclarationPattern::Function.capture(&joined, Anchor::Start))
            .or_else(|| DeclarationPattern::Class.capture(first, Anchor::Start));

        found
            .map(|decl| into_templated(decl, params))
            .ok_or(ParserError::NoPatternMatch { text: joined })
    }

    fn classify_plain(&self, lines: &[&str]) -> Result<Declaration, ParserError> {
        let joined = join_logical(lines, self.max_lines);
        let first = lines.first().copied().unwrap_or_default();

        let found = DeclarationPattern::Constructor
            .capture(&joined, Anchor::Start)
            .or_else(|| DeclarationPattern::Function.capture(&joined, Anchor::Anywhere))
            .or_else(|| DeclarationPattern::Class.capture(first, Anchor::Anywhere));

        found.ok_or(ParserError::NoPatternMatch { text: joined })
    }
}

fn into_templated(mut decl: Declaration, params: TemplateParams) -> Declaration {
    decl.kind = match decl.kind {
        DeclarationKind::Function => DeclarationKind::TemplateFunction,
        DeclarationKind::Class => DeclarationKind::TemplateClass,
        other => other,
    };
    decl.with_template_params(params)
}
