//! Doxygen command completions offered after the tag sigil inside a comment.

use chrono::NaiveDate;
use dox_core::TagSigil;
use serde::Serialize;

/// `(trigger, insertion template)` pairs. In templates, `{sigil}` is replaced
/// by the configured sigil and `{today}` by the current date.
const CATALOG: &[(&str, &str)] = &[
    ("addtogroup", "addtogroup ${1:[group-name]} ${2:[group-title]}"),
    ("attention", "attention ${1:[attention-text]}"),
    ("author", "author ${1:[author]}"),
    ("authors", "authors ${1:[author]}"),
    ("brief", "brief ${1:[brief-text]}"),
    ("bug", "bug ${1:[bug-text]}"),
    ("code", "code \n* ${1:[text]}\n* {sigil}endcode"),
    ("copybrief", "copybrief ${1:[link-object]}"),
    ("copydetails", "copydetails ${1:[link-object]}"),
    ("copydoc", "copydoc ${1:[link-object]}"),
    ("copyright", "copyright ${1:[copyright-text]}"),
    ("date", "date ${1:{today}}"),
    ("defgroup", "defgroup ${1:[group-name]} ${2:[group-title]}"),
    ("deprecated", "deprecated ${1:[deprecated-text]}"),
    ("details", "details ${1:[detailed-text]}"),
    ("dir", "dir ${1:[path]}"),
    ("dontinclude", "dontinclude ${1:[file-name]}"),
    ("dot", "dot \n*   ${1:[dot-graph]}\n* {sigil}enddot"),
    ("f[", "f[\n*   ${1:[formula]}\n* {sigil}f]"),
    ("example", "example ${1:[file-name]}"),
    ("exception", "exception ${1:[exception-object]} ${2:[description]}"),
    ("ifdox", "if ${1:[section-name]} \n*   $2\n* {sigil}endif"),
    ("ifnot", "ifnot ${1:[section-name]} \n*   $2\n* {sigil}endif"),
    ("image", "image ${1:[format]} ${2:[file-name]}"),
    ("include", "include ${1:[file-name]}"),
    ("includedoc", "includedoc ${1:[file-name]}"),
    ("includelineno", "includelineno ${1:[file-name]}"),
    ("ingroup", "ingroup ${1:[group-name]...}"),
    ("internal", "internal\n*   ${1}\n* {sigil}endinternal"),
    ("invariant", "invariant ${1:[invariant-text]}"),
    ("line", "line ${1:[pattern]}"),
    ("mainpage", "mainpage ${1:[title]}"),
    ("msc", "msc \n*   ${1:[msc-graph]}\n* {sigil}endmsc"),
    ("name", "name ${1:[group-name]}"),
    ("note", "note ${1:[note-text]}"),
    ("overload", "overload ${1:[overload-object]}"),
    ("page", "page ${1:[page-name]} ${2:[page-title]}"),
    ("par", "par ${1:[paragraph-title]} ${2:[paragraph-text]}"),
    ("paragraph", "paragraph ${1:[paragraph-name]} ${2:[paragraph-title]}"),
    ("param", "param ${1:[parameter-name]} ${2:[description]}"),
    ("parblock", "parblock\n*   ${1:[paragraph-text]}\n* {sigil}endparblock"),
    ("post", "post ${1:[postcondition-text]}"),
    ("pre", "pre ${1:[precondition-text]}"),
    ("ref", "ref ${1:[reference-name]}"),
    ("related", "related ${1:[related-class]}"),
    ("relates", "relates ${1:[related-class]}"),
    ("relatedalso", "relatedalso ${1:[related-class]}"),
    ("relatesalso", "relatesalso ${1:[related-class]}"),
    ("remark", "remark ${1:[remark-text]}"),
    ("remarks", "remarks ${1:[remark-text]}"),
    ("result", "result ${1:[description]}"),
    ("return", "return ${1:[description]}"),
    ("returns", "returns ${1:[description]}"),
    ("retval", "retval ${1:[return-value]} ${2:[description]}"),
    ("secreflist", "secreflist\n*   {sigil}refitem ${1:[reference-items]...}\n* {sigil}endsecreflist"),
    ("section", "section ${1:[section-name]} ${2:[section-title]}"),
    ("see", "see ${1:[referencing-text]}"),
    ("short", "short ${1:[brief-text]}"),
    ("since", "since ${1:[since-text]}"),
    ("skip", "skip ${1:[pattern]}"),
    ("skipline", "skipline ${1:[pattern]}"),
    ("snippet", "snippet ${1:[file-name]} ${2:[block-id]}"),
    ("snippetdoc", "snippetdoc ${1:[file-name]} ${2:[block-id]}"),
    ("snippetlineno", "snippetlineno ${1:[file-name]} ${2:[block-id]}"),
    ("subpage", "subpage ${1:[page-name]} ${2:[page-text]}"),
    ("subsection", "subsection ${1:[subsection-name]} ${2:[subsection-title]}"),
    ("subsubsection", "subsubsection ${1:[subsubsection-name]} ${2:[subsubsection-title]}"),
    ("test", "test ${1:[test-description]}"),
    ("throw", "throw ${1:[exception-object]} ${2:[description]}"),
    ("throws", "throws ${1:[exception-object]} ${2:[description]}"),
    ("todo", "todo ${1:[todo-text]}"),
    ("tparam", "tparam ${1:[parameter-name]} ${2:[description]}"),
    ("until", "until ${1:[pattern]}"),
    ("verbatim", "verbatim\n* ${1:[verbatim-text]}\n* {sigil}endverbatim"),
    ("version", "version ${1:[version-text]}"),
    ("warning", "warning ${1:[warning-message]}"),
    ("weakgroup", "weakgroup ${1:[group-name]} ${2:[group-title]}"),
];

/// One completion entry: the word typed after the sigil and the snippet it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub trigger: &'static str,
    pub insertion: String,
}

/// The full catalog, in its fixed order.
#[must_use]
pub fn catalog(sigil: TagSigil, today: NaiveDate) -> Vec<Completion> {
    let sigil = sigil.to_string();
    let today = today.format("%Y-%m-%d").to_string();

    CATALOG
        .iter()
        .map(|&(trigger, template)| Completion {
            trigger,
            insertion: template.replace("{sigil}", &sigil).replace("{today}", &today),
        })
        .collect()
}

/// Completions for a cursor whose preceding character is `previous`.
///
/// Only offered inside a comment, right after the sigil; otherwise empty.
#[must_use]
pub fn completions_for(
    previous: Option<char>,
    in_comment: bool,
    sigil: TagSigil,
    today: NaiveDate,
) -> Vec<Completion> {
    if !in_comment || previous != Some(sigil.as_char()) {
        return Vec::new();
    }
    catalog(sigil, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn insertion(entries: &[Completion], trigger: &str) -> String {
        entries
            .iter()
            .find(|c| c.trigger == trigger)
            .map(|c| c.insertion.clone())
            .unwrap_or_else(|| panic!("missing {trigger}"))
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        let entries = catalog(TagSigil::At, today());
        assert_eq!(entries.len(), 77);
        assert_eq!(entries[0].trigger, "addtogroup");
        assert_eq!(entries[76].trigger, "weakgroup");
    }

    #[test]
    fn block_commands_close_with_configured_sigil() {
        let at = catalog(TagSigil::At, today());
        assert_eq!(insertion(&at, "code"), "code \n* ${1:[text]}\n* @endcode");

        let backslash = catalog(TagSigil::Backslash, today());
        assert_eq!(insertion(&backslash, "f["), "f[\n*   ${1:[formula]}\n* \\f]");
        assert_eq!(
            insertion(&backslash, "secreflist"),
            "secreflist\n*   \\refitem ${1:[reference-items]...}\n* \\endsecreflist"
        );
    }

    #[test]
    fn date_is_prefilled() {
        assert_eq!(
            insertion(&catalog(TagSigil::At, today()), "date"),
            "date ${1:2024-03-09}"
        );
    }

    #[test]
    fn offered_only_after_sigil_in_comment() {
        assert_eq!(completions_for(Some('@'), true, TagSigil::At, today()).len(), 77);
        assert!(completions_for(Some('@'), false, TagSigil::At, today()).is_empty());
        assert!(completions_for(Some('\\'), true, TagSigil::At, today()).is_empty());
        assert!(completions_for(None, true, TagSigil::At, today()).is_empty());
        assert!(!completions_for(Some('\\'), true, TagSigil::Backslash, today()).is_empty());
    }
}
