//! The reasons a document is rejected for the fast path.

/// Why the decision scan chose escalation to a conformant HTML5 parser.
///
/// The numeric values are stable and shared with the C ABI; `0` is
/// reserved for the success case, which the Rust API expresses as
/// `Ok(())`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum FallbackReason {
    /// No `<` appeared anywhere in the input.
    NoTagDelimiter = 1,
    /// A NUL byte appeared in text or outside a quoted attribute value.
    ContainsNull = 2,
    /// A comment opened with `<!---`, whose parsing disagrees between
    /// lightweight and conformant parsers.
    CommentDashDashDash = 3,
    /// Unterminated or unparseable markup, or empty/degenerate input.
    MalformedTag = 4,
    /// A byte `>= 0x80` immediately followed a tag name.
    NonAsciiTagName = 5,
    /// A `:` inside a tag name.
    NamespacedTag = 6,
    /// Table structure too complex for the fast path (also covers the
    /// deliberately conservative `<hgroup>` and unbalanced `<select>`).
    TableHeuristics = 7,
    /// `<html>` or `<body>` appeared somewhere the fast path cannot
    /// reconcile with earlier content.
    HeadBodyPlacement = 8,
    /// Mis-nested inline formatting elements or headings, including any
    /// left open at end of input.
    FormattingMismatch = 9,
    /// An end tag for a void element.
    VoidEndTag = 10,
    /// A byte `>= 0x80` inside an attribute name.
    NonAsciiAttributeName = 11,
    /// A quote, NUL, or angle bracket where an attribute does not allow
    /// one, or an unterminated value.
    MalformedAttribute = 12,
    /// A `<script>`, `<style>`, or `<textarea>` without a matching end
    /// tag.
    RawTextUnterminated = 13,
}

impl FallbackReason {
    /// The stable numeric code used by the C ABI.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl std::error::Error for FallbackReason {}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.into())
    }
}

impl From<FallbackReason> for &'static str {
    fn from(val: FallbackReason) -> Self {
        match val {
            FallbackReason::NoTagDelimiter => "no-tag-delimiter",
            FallbackReason::ContainsNull => "contains-null",
            FallbackReason::CommentDashDashDash => "comment-dash-dash-dash",
            FallbackReason::MalformedTag => "malformed-tag",
            FallbackReason::NonAsciiTagName => "non-ascii-tag-name",
            FallbackReason::NamespacedTag => "namespaced-tag",
            FallbackReason::TableHeuristics => "table-heuristics",
            FallbackReason::HeadBodyPlacement => "head-body-placement",
            FallbackReason::FormattingMismatch => "formatting-mismatch",
            FallbackReason::VoidEndTag => "void-end-tag",
            FallbackReason::NonAsciiAttributeName => "non-ascii-attribute-name",
            FallbackReason::MalformedAttribute => "malformed-attribute",
            FallbackReason::RawTextUnterminated => "raw-text-unterminated",
        }
    }
}

impl From<&FallbackReason> for &'static str {
    fn from(val: &FallbackReason) -> Self {
        Into::<&'static str>::into(*val)
    }
}

#[cfg(test)]
mod test {
    use super::FallbackReason;

    #[test]
    fn codes_are_stable() {
        let table = [
            (FallbackReason::NoTagDelimiter, 1),
            (FallbackReason::ContainsNull, 2),
            (FallbackReason::CommentDashDashDash, 3),
            (FallbackReason::MalformedTag, 4),
            (FallbackReason::NonAsciiTagName, 5),
            (FallbackReason::NamespacedTag, 6),
            (FallbackReason::TableHeuristics, 7),
            (FallbackReason::HeadBodyPlacement, 8),
            (FallbackReason::FormattingMismatch, 9),
            (FallbackReason::VoidEndTag, 10),
            (FallbackReason::NonAsciiAttributeName, 11),
            (FallbackReason::MalformedAttribute, 12),
            (FallbackReason::RawTextUnterminated, 13),
        ];
        for (reason, code) in table {
            assert_eq!(reason.code(), code);
        }
    }

    #[test]
    fn displays_kebab_case() {
        assert_eq!(
            FallbackReason::RawTextUnterminated.to_string(),
            "raw-text-unterminated"
        );
        assert_eq!(FallbackReason::ContainsNull.to_string(), "contains-null");
    }
}
