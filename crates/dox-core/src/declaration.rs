//! Structural summary of one recognized C++ declaration.

use serde::{Deserialize, Serialize};

use crate::enums::DeclarationKind;

/// One function parameter as `(type, name)`.
///
/// `name` is empty for unnamed parameters and for the bare-`void` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPair {
    pub type_text: String,
    pub name: String,
}

impl ParameterPair {
    pub fn new(type_text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
            name: name.into(),
        }
    }

    /// The pair produced for an empty or single-token parameter list.
    #[must_use]
    pub fn void() -> Self {
        Self::new("void", "")
    }
}

/// Template parameter names in declaration order.
///
/// Behaves as an ordered set: inserting a name twice keeps the first
/// position, and names can be removed by value while reconciling them
/// against function parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParams {
    names: Vec<String>,
}

impl TemplateParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Append `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove `name`, preserving the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<S: Into<String>> FromIterator<S> for TemplateParams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut params = Self::new();
        for name in iter {
            params.insert(name);
        }
        params
    }
}

/// Result of one classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Declared name; for operators this is the `operator...` spelling.
    pub name: String,
    /// Captured return type text, absent for constructors and classes.
    pub return_type: Option<String>,
    /// Raw text between the parameter-list parentheses.
    pub raw_args: Option<String>,
    /// Names from a preceding `template<...>` clause.
    pub template_params: Option<TemplateParams>,
}

impl Declaration {
    /// A declaration of `kind` named `name` with no captures yet.
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            return_type: None,
            raw_args: None,
            template_params: None,
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: Option<String>) -> Self {
        self.return_type = return_type.filter(|r| !r.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_raw_args(mut self, raw_args: impl Into<String>) -> Self {
        self.raw_args = Some(raw_args.into());
        self
    }

    #[must_use]
    pub fn with_template_params(mut self, params: TemplateParams) -> Self {
        self.template_params = Some(params);
        self
    }

    /// Parameter text worth extracting: present, non-blank and not `void`.
    #[must_use]
    pub fn documentable_args(&self) -> Option<&str> {
        self.raw_args
            .as_deref()
            .map(str::trim)
            .filter(|args| !args.is_empty() && !args.eq_ignore_ascii_case("void"))
    }

    /// Whether a `return` tag belongs in the comment.
    #[must_use]
    pub fn documents_return(&self) -> bool {
        !self.kind.is_special_member()
            && self
                .return_type
                .as_deref()
                .is_some_and(|ret| ret.trim() != "void")
    }
}
