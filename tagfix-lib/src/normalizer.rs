//! The substitution rules that strip stray whitespace around tag delimiters.
//!
//! Each rule is a single left-to-right `replace_all` pass over the text.
//! The rules are applied independently and are never iterated to a fixpoint:
//! only matches present in the original content are rewritten.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening tags with whitespace after the delimiter: `< div` -> `<div`.
static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s+([a-zA-Z0-9]+)").expect("open-tag pattern compiles"));

/// Closing tags with whitespace before the delimiter: `</div >` -> `</div>`.
static CLOSE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</([a-zA-Z0-9]+)\s+>").expect("close-tag pattern compiles"));

/// Attribute assignments with whitespace around `=`: `id = "x"` -> `id="x"`.
/// Only runs when explicitly enabled.
static ATTR_EQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+=\s+""#).expect("attribute pattern compiles"));

/// Toggles for the individual substitution rules.
///
/// The tag rules always run; attribute spacing is left alone unless
/// [`fix_attributes`](FixOptions::fix_attributes) is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOptions {
    /// Also collapse whitespace around `=` before a double-quoted attribute
    /// value.
    pub fix_attributes: bool,
}

/// Per-rule match counts describing what a fix pass rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// Opening tags whose leading whitespace was removed.
    pub open_tags: usize,
    /// Closing tags whose trailing whitespace was removed.
    pub close_tags: usize,
    /// Attribute assignments that were tightened (zero unless enabled).
    pub attributes: usize,
}

impl FixOutcome {
    /// Total number of rewritten occurrences across all rules.
    pub fn total(&self) -> usize {
        self.open_tags + self.close_tags + self.attributes
    }

    /// Whether any rule matched at all.
    pub fn changed(&self) -> bool {
        self.total() > 0
    }
}

/// Applies the substitution rules to `content` and returns the rewritten
/// text together with the per-rule match counts.
///
/// Matches are counted against the input of each pass, so the counts reflect
/// exactly the occurrences that were rewritten.
pub fn fix_tags(content: &str, options: &FixOptions) -> (String, FixOutcome) {
    let open_tags = OPEN_TAG.find_iter(content).count();
    let fixed = OPEN_TAG.replace_all(content, "<$1");

    let close_tags = CLOSE_TAG.find_iter(&fixed).count();
    let fixed = CLOSE_TAG.replace_all(&fixed, "</$1>");

    let (fixed, attributes) = if options.fix_attributes {
        let attributes = ATTR_EQ.find_iter(&fixed).count();
        (ATTR_EQ.replace_all(&fixed, "=\"").into_owned(), attributes)
    } else {
        (fixed.into_owned(), 0)
    };

    let outcome = FixOutcome {
        open_tags,
        close_tags,
        attributes,
    };

    log::debug!(
        "fixed {} opening tag(s), {} closing tag(s), {} attribute(s)",
        outcome.open_tags,
        outcome.close_tags,
        outcome.attributes
    );

    (fixed, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fix(content: &str) -> String {
        fix_tags(content, &FixOptions::default()).0
    }

    #[rstest]
    #[case("< div>", "<div>")]
    #[case("<   div>", "<div>")]
    #[case("<\tdiv>", "<div>")]
    #[case("<\n  div>", "<div>")]
    #[case("< h1 id=\"top\">", "<h1 id=\"top\">")]
    fn removes_whitespace_after_opening_delimiter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(fix(input), expected);
    }

    #[rstest]
    #[case("</div >", "</div>")]
    #[case("</div   >", "</div>")]
    #[case("</div\t>", "</div>")]
    #[case("</section\n>", "</section>")]
    fn removes_whitespace_before_closing_delimiter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(fix(input), expected);
    }

    #[test]
    fn fixes_both_rules_across_a_fragment() {
        let input = "< section className=\"a\">\n  <p>hi</p>\n</section  >";
        let expected = "<section className=\"a\">\n  <p>hi</p>\n</section>";
        assert_eq!(fix(input), expected);
    }

    #[test]
    fn reports_per_rule_counts() {
        let input = "< div>< span></span ></div >";
        let (_, outcome) = fix_tags(input, &FixOptions::default());
        assert_eq!(outcome.open_tags, 2);
        assert_eq!(outcome.close_tags, 2);
        assert_eq!(outcome.attributes, 0);
        assert_eq!(outcome.total(), 4);
        assert!(outcome.changed());
    }

    #[test]
    fn content_without_matches_is_unchanged() {
        let input = "const x = 1 < 2;\nlet s = \"a > b\";\n";
        let (fixed, outcome) = fix_tags(input, &FixOptions::default());
        assert_eq!(fixed, input);
        assert!(!outcome.changed());
    }

    #[test]
    fn is_idempotent() {
        let input = "< div>\n  text\n</div >";
        let (once, _) = fix_tags(input, &FixOptions::default());
        let (twice, outcome) = fix_tags(&once, &FixOptions::default());
        assert_eq!(once, twice);
        assert!(!outcome.changed());
    }

    #[test]
    fn attribute_spacing_is_untouched_by_default() {
        let input = "<div id = \"x\" data-y = \"z\">";
        assert_eq!(fix(input), input);
    }

    #[test]
    fn attribute_spacing_is_tightened_when_enabled() {
        let options = FixOptions {
            fix_attributes: true,
        };
        let (fixed, outcome) = fix_tags("<div id = \"x\" data-y = \"z\">", &options);
        assert_eq!(fixed, "<div id=\"x\" data-y=\"z\">");
        assert_eq!(outcome.attributes, 2);
    }

    #[test]
    fn text_node_whitespace_is_preserved() {
        let input = "<p>  spaced   out  </p>";
        assert_eq!(fix(input), input);
    }

    // The name pattern is alphanumeric-only, so a hyphenated opening tag is
    // matched up to the hyphen and a hyphenated closing tag not at all.
    #[test]
    fn hyphenated_tag_names_follow_the_alphanumeric_boundary() {
        assert_eq!(fix("< my-component>"), "<my-component>");
        assert_eq!(fix("</my-component >"), "</my-component >");
    }

    #[test]
    fn non_ascii_tag_names_are_not_matched() {
        let input = "< タグ>text</タグ >";
        assert_eq!(fix(input), input);
    }

    #[test]
    fn non_ascii_content_round_trips() {
        let input = "< p>café – naïve 写真</p >";
        assert_eq!(fix(input), "<p>café – naïve 写真</p>");
    }

    // replace_all is a single pass: a rewrite never feeds a new match.
    #[test]
    fn substitution_is_single_pass_not_fixpoint() {
        assert_eq!(fix("<  <  div"), "<  <div");
    }

    #[test]
    fn crlf_whitespace_is_covered() {
        assert_eq!(fix("</div\r\n>"), "</div>");
        assert_eq!(fix("<\r\ndiv>"), "<div>");
    }
}
