//! Snippet assembler: classified declaration -> ordered tag list.

use dox_core::{Declaration, TagKind};
use dox_parser::parse_arguments;

use crate::snippet::{BRIEF_DEFAULT, DESCRIPTION_DEFAULT, DETAILS_DEFAULT, Snippet};

/// Build the comment body for `decl`.
///
/// `brief` and `details` always come first, followed by a separate section
/// holding, in order:
///
/// - `tparam` per template parameter for template classes;
/// - `param` per function parameter (an unnamed one gets an empty subject),
///   then `tparam` for every template parameter that no function parameter
///   is declared with;
/// - `return` when the return type is present and not `void`.
///
/// Plain classes get `brief` and `details` only.
#[must_use]
pub fn assemble(decl: &Declaration) -> Snippet {
    let mut builder = Snippet::builder();
    builder
        .tag(TagKind::Brief, BRIEF_DEFAULT)
        .tag(TagKind::Details, DETAILS_DEFAULT)
        .section();

    let mut pending = decl.template_params.clone().unwrap_or_default();

    if decl.kind.has_parameters() {
        let pairs = decl
            .documentable_args()
            .map(parse_arguments)
            .unwrap_or_default();

        for pair in &pairs {
            // A template parameter bound to a function parameter is documented by the param.
            pending.remove(&pair.type_text);
            builder.subject_tag(TagKind::Param, &pair.name, DESCRIPTION_DEFAULT);
        }
    }

    for name in pending.iter() {
        builder.subject_tag(TagKind::Tparam, name, DESCRIPTION_DEFAULT);
    }

    if decl.documents_return() {
        builder.tag(TagKind::Return, DESCRIPTION_DEFAULT);
    }

    builder.build()
}
