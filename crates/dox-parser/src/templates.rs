//! Template argument extractor: `template<...>` contents -> parameter names.

use std::sync::LazyLock;

use dox_core::TemplateParams;
use regex::Regex;

use crate::scan::{find_top_level, split_top_level, strip_calls};

static TRAILING_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<name>[A-Za-z_]\w*)\s*$").expect("TRAILING_IDENTIFIER regex is invalid")
});

/// Words that introduce a template parameter without naming it.
const TYPE_KEYWORDS: &[&str] = &["typename", "class"];

/// Extract template parameter names, in declaration order.
///
/// `inner` is the text between `template<` and its matching `>`.
/// `decltype(...)` and default arguments are discarded, then the trailing
/// identifier of each top-level comma-separated declaration is kept.
/// Unnamed parameters (`typename = void`, `class...`) contribute nothing.
#[must_use]
pub fn extract_template_params(inner: &str) -> TemplateParams {
    let stripped = strip_calls(inner, "decltype");

    let params: TemplateParams = split_top_level(&stripped, ',')
        .into_iter()
        .filter_map(template_param_name)
        .collect();

    tracing::debug!(before = inner, after = ?params, "extracted template parameters");
    params
}

fn template_param_name(declaration: &str) -> Option<&str> {
    let declaration = match find_top_level(declaration, '=') {
        Some(idx) => &declaration[..idx],
        None => declaration,
    };

    let name = TRAILING_IDENTIFIER
        .captures(declaration)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())?;

    let is_keyword_only =
        TYPE_KEYWORDS.contains(&name) && declaration.split_whitespace().count() == 1;
    (!is_keyword_only).then_some(name)
}
