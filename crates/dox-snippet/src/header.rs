//! File-header template, used when the opener sits at the start of the document.

use chrono::NaiveDate;
use dox_config::HeaderConfig;
use dox_core::{TagKind, TagSigil};

use crate::snippet::{BRIEF_DEFAULT, DETAILS_DEFAULT, Snippet};

pub const DEFAULT_VERSION: &str = "1.0";

/// Tags of the file header, pre-filled from `header` and `today`.
#[must_use]
pub fn file_header(header: &HeaderConfig, today: NaiveDate) -> Snippet {
    let mut builder = Snippet::builder();
    builder
        .aligned()
        .tag(TagKind::Author, header.author.as_str())
        .tag(TagKind::Date, today.format("%Y-%m-%d").to_string())
        .tag(TagKind::Version, DEFAULT_VERSION)
        .section()
        .aligned()
        .tag(TagKind::Copyright, header.copyright.as_str())
        .tag(TagKind::Brief, BRIEF_DEFAULT)
        .tag(TagKind::Details, DETAILS_DEFAULT)
        .section();
    builder.build()
}

/// Render the text inserted after the characters already on `opener_line`.
///
/// The opener line is completed into a banner, the header comment follows on
/// its own lines, and a full banner closes it.
#[must_use]
pub fn render_file_header(
    snippet: &Snippet,
    opener_line: &str,
    header: &HeaderConfig,
    sigil: TagSigil,
) -> String {
    let banner = header.section_line();
    let remainder = banner.get(opener_line.len()..).unwrap_or_default();
    format!("{remainder}\n/**{}\n{banner}", snippet.render(sigil))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(width: usize) -> HeaderConfig {
        HeaderConfig {
            author: "Jane Doe".to_string(),
            copyright: "ACME".to_string(),
            section_line_length: width,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn renders_aligned_header_between_banners() {
        let config = header(12);
        let snippet = file_header(&config, today());
        let text = render_file_header(&snippet, "/**", &config, TagSigil::At);

        let expected = concat!(
            "********/",
            "\n/**",
            "\n * @author  ${1:Jane Doe}",
            "\n * @date    ${2:2024-03-09}",
            "\n * @version ${3:1.0}",
            "\n * ",
            "\n * @copyright ${4:ACME}",
            "\n * @brief     ${5:[brief description]}",
            "\n * @details   ${6:[long description]}",
            "\n * ",
            "\n */",
            "\n/**********/",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn opener_longer_than_banner_adds_no_remainder() {
        let config = header(4);
        let snippet = file_header(&config, today());
        let text = render_file_header(&snippet, "/******", &config, TagSigil::Backslash);
        assert!(text.starts_with("\n/**\n * \\author  ${1:Jane Doe}"));
        assert!(text.ends_with("\n/**/"));
    }

    #[test]
    fn header_has_six_placeholders() {
        assert_eq!(
            file_header(&HeaderConfig::default(), today()).placeholder_count(),
            6
        );
    }
}
