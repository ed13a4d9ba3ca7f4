//! Declaration pattern table.
//!
//! Each [`DeclarationPattern`] pairs a regular expression with an extractor
//! that turns its captures into a [`Declaration`]. The classifier tries them
//! in a fixed priority order; every pattern is a pure function from text to
//! an optional capture.

use std::sync::LazyLock;

use dox_core::{Declaration, DeclarationKind};
use regex::{Captures, Regex};

use crate::scan::matching_close;

/// Leading specifiers that may precede a return type or constructor name.
const QUALIFIERS: &str = r"\s*(?:(?:inline|static|constexpr|consteval|friend|virtual|explicit|extern|const|\[\[.+?\]\])\s+)*";

/// Characters allowed inside a parameter list.
const ARGS: &str = r#"(?P<args>[:<>\[\]\(\),.*\&\w\s=\-+'"]*)"#;

static CONSTRUCTOR: LazyLock<PatternPair> = LazyLock::new(|| {
    PatternPair::compile(
        "CONSTRUCTOR",
        &format!(
            r"{QUALIFIERS}(?P<scope>(?:[A-Za-z_]\w*::)*)(?P<tilde>~)?(?P<name>[A-Za-z_]\w*)\s*\({ARGS}\).+"
        ),
    )
});

static FUNCTION: LazyLock<PatternPair> = LazyLock::new(|| {
    PatternPair::compile(
        "FUNCTION",
        &format!(
            r"{QUALIFIERS}(?P<return>(?:typename\s*)?[\w:<>]+(?:\s*[*&]+)?)?\s*(?P<subname>[A-Za-z_]\w*::)?(?P<name>operator\s*.{{1,2}}|[A-Za-z_:]\w*)\s*\({ARGS}\).+"
        ),
    )
});

static CLASS: LazyLock<PatternPair> = LazyLock::new(|| {
    PatternPair::compile(
        "CLASS",
        r"\s*\b(?:class|struct)\s+(?P<name>[A-Za-z_]\w*)\s*\{?",
    )
});

static TEMPLATE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*template\s*<").expect("TEMPLATE_START regex is invalid")
});

/// Where a pattern may start matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Only at the beginning of the text.
    Start,
    /// At the leftmost position where it matches.
    Anywhere,
}

/// The declaration shapes, listed in the order the classifier tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationPattern {
    /// Name with no return type, optional `~` and enclosing-class qualifier.
    Constructor,
    /// Optional specifiers and return type, possibly qualified name, parameter list.
    Function,
    /// `class` or `struct` followed by a name.
    Class,
}

impl DeclarationPattern {
    /// Apply this pattern to `text` and extract a declaration.
    #[must_use]
    pub fn capture(self, text: &str, anchor: Anchor) -> Option<Declaration> {
        let caps = self.pair().get(anchor).captures(text)?;
        match self {
            Self::Constructor => constructor_from(text, &caps),
            Self::Function => Some(function_from(text, &caps)),
            Self::Class => Some(Declaration::new(DeclarationKind::Class, &caps["name"])),
        }
    }

    fn pair(self) -> &'static PatternPair {
        match self {
            Self::Constructor => &CONSTRUCTOR,
            Self::Function => &FUNCTION,
            Self::Class => &CLASS,
        }
    }
}

/// A pattern compiled twice: anchored at the start and unanchored.
struct PatternPair {
    start: Regex,
    anywhere: Regex,
}

impl PatternPair {
    fn compile(label: &str, source: &str) -> Self {
        Self {
            start: Regex::new(&format!("^(?:{source})"))
                .unwrap_or_else(|e| panic!("{label} regex is invalid: {e}")),
            anywhere: Regex::new(source).unwrap_or_else(|e| panic!("{label} regex is invalid: {e}")),
        }
    }

    const fn get(&self, anchor: Anchor) -> &Regex {
        match anchor {
            Anchor::Start => &self.start,
            Anchor::Anywhere => &self.anywhere,
        }
    }
}

fn constructor_from(text: &str, caps: &Captures<'_>) -> Option<Declaration> {
    let name = &caps["name"];
    let is_destructor = caps.name("tilde").is_some();
    let enclosing = caps["scope"]
        .trim_end_matches("::")
        .rsplit("::")
        .next()
        .unwrap_or_default();

    // `Outer::method(...)` without a return type is not a constructor.
    if !is_destructor && !enclosing.is_empty() && enclosing != name {
        return None;
    }

    let kind = if is_destructor {
        DeclarationKind::Destructor
    } else {
        DeclarationKind::Constructor
    };
    Some(Declaration::new(kind, name).with_raw_args(balanced_args(text, caps)))
}

fn function_from(text: &str, caps: &Captures<'_>) -> Declaration {
    let name = caps["name"].trim();
    let qualified = caps
        .name("subname")
        .map_or_else(|| name.to_string(), |sub| format!("{}{name}", sub.as_str()));
    let return_type = caps.name("return").map(|m| m.as_str().trim().to_string());

    Declaration::new(DeclarationKind::Function, qualified)
        .with_return_type(return_type)
        .with_raw_args(balanced_args(text, caps))
}

/// Text between the parameter list's parentheses, balanced.
///
/// The regex capture is greedy and can run past the closing parenthesis of
/// the parameter list (e.g. into a constructor initializer list), so the
/// list is re-scanned from its opening parenthesis.
fn balanced_args(text: &str, caps: &Captures<'_>) -> String {
    let Some(args) = caps.name("args") else {
        return String::new();
    };
    let open = args.start().saturating_sub(1);
    text.get(open..)
        .and_then(|from_open| matching_close(from_open, '(', ')'))
        .map_or(args.as_str(), |close| &text[open + 1..open + close])
        .trim()
        .to_string()
}

/// A `template<...>` clause found at the start of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateClause {
    /// Text between `template<` and its matching `>`.
    pub inner: String,
    /// Whatever follows the clause on the same logical line.
    pub rest: String,
}

impl TemplateClause {
    /// Whether `line` opens a template clause, closed or not.
    #[must_use]
    pub fn starts(line: &str) -> bool {
        TEMPLATE_START.is_match(line)
    }

    /// Parse a clause whose closing `>` is present in `text`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let open = TEMPLATE_START.find(text)?.end() - 1;
        let close = open + matching_close(&text[open..], '<', '>')?;
        Some(Self {
            inner: text[open + 1..close].trim().to_string(),
            rest: text[close + 1..].trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn function_captures_return_name_and_args() {
        let decl = DeclarationPattern::Function
            .capture("int add(int a, int b);", Anchor::Start)
            .unwrap();
        assert_eq!(decl.kind, DeclarationKind::Function);
        assert_eq!(decl.name, "add");
        assert_eq!(decl.return_type.as_deref(), Some("int"));
        assert_eq!(decl.raw_args.as_deref(), Some("int a, int b"));
    }

    #[rstest]
    #[case("static inline int clamp(int v, int lo, int hi);", "clamp", Some("int"))]
    #[case("[[nodiscard]] virtual bool empty() const;", "empty", Some("bool"))]
    #[case("const T& front() const;", "front", Some("T&"))]
    #[case("int *find(int key);", "find", Some("int *"))]
    #[case("std::vector<int> values() const {", "values", Some("std::vector<int>"))]
    #[case("void Widget::resize(int w, int h) {", "Widget::resize", Some("void"))]
    #[case("bool operator==(const Foo& other) const;", "operator==", Some("bool"))]
    #[case("Foo& operator()(int i);", "operator()", Some("Foo&"))]
    #[case("typename Traits::value_type get(int i);", "get", Some("typename Traits::value_type"))]
    fn function_shapes(
        #[case] text: &str,
        #[case] name: &str,
        #[case] return_type: Option<&str>,
    ) {
        let decl = DeclarationPattern::Function
            .capture(text, Anchor::Start)
            .unwrap_or_else(|| panic!("no match for {text:?}"));
        assert_eq!(decl.name, name);
        assert_eq!(decl.return_type.as_deref(), return_type);
    }

    #[test]
    fn constructor_without_return_type() {
        let decl = DeclarationPattern::Constructor
            .capture("Foo(int x) {", Anchor::Start)
            .unwrap();
        assert_eq!(decl.kind, DeclarationKind::Constructor);
        assert_eq!(decl.name, "Foo");
        assert_eq!(decl.return_type, None);
        assert_eq!(decl.raw_args.as_deref(), Some("int x"));
    }

    #[test]
    fn constructor_args_stop_at_initializer_list() {
        let decl = DeclarationPattern::Constructor
            .capture("Foo(int x, int y) : base_(x), y_(y) {", Anchor::Start)
            .unwrap();
        assert_eq!(decl.raw_args.as_deref(), Some("int x, int y"));
    }

    #[rstest]
    #[case("~Foo();", "Foo")]
    #[case("virtual ~Foo() = default;", "Foo")]
    #[case("Foo::~Foo() {", "Foo")]
    fn destructors(#[case] text: &str, #[case] name: &str) {
        let decl = DeclarationPattern::Constructor
            .capture(text, Anchor::Start)
            .unwrap();
        assert_eq!(decl.kind, DeclarationKind::Destructor);
        assert_eq!(decl.name, name);
    }

    #[test]
    fn out_of_class_constructor_definition() {
        let decl = DeclarationPattern::Constructor
            .capture("ns::Foo::Foo(const Foo& other) {", Anchor::Start)
            .unwrap();
        assert_eq!(decl.kind, DeclarationKind::Constructor);
        assert_eq!(decl.name, "Foo");
    }

    #[rstest]
    #[case("int add(int a, int b);")]
    #[case("Foo::bar(int x) {")]
    #[case("class Box {")]
    fn not_constructors(#[case] text: &str) {
        assert_eq!(
            DeclarationPattern::Constructor.capture(text, Anchor::Start),
            None
        );
    }

    #[rstest]
    #[case("class Box {", "Box")]
    #[case("struct Point", "Point")]
    #[case("class Derived : public Base {", "Derived")]
    fn classes(#[case] text: &str, #[case] name: &str) {
        let decl = DeclarationPattern::Class
            .capture(text, Anchor::Start)
            .unwrap();
        assert_eq!(decl.kind, DeclarationKind::Class);
        assert_eq!(decl.name, name);
    }

    #[test]
    fn class_is_not_function() {
        assert_eq!(
            DeclarationPattern::Function.capture("class Box {", Anchor::Start),
            None
        );
    }

    #[test]
    fn anchored_function_rejects_leading_noise() {
        let text = "= delete; void f(int a);";
        assert_eq!(DeclarationPattern::Function.capture(text, Anchor::Start), None);
        let decl = DeclarationPattern::Function
            .capture(text, Anchor::Anywhere)
            .unwrap();
        assert_eq!(decl.name, "f");
    }

    #[test]
    fn template_clause_parses_nested_brackets() {
        let clause =
            TemplateClause::parse("template<typename T, typename A = std::allocator<T>> class Vec {")
                .unwrap();
        assert_eq!(clause.inner, "typename T, typename A = std::allocator<T>");
        assert_eq!(clause.rest, "class Vec {");
    }

    #[test]
    fn unclosed_template_clause() {
        assert!(TemplateClause::starts("template <typename T,"));
        assert_eq!(TemplateClause::parse("template <typename T,"), None);
        assert!(!TemplateClause::starts("int templated();"));
    }
}
