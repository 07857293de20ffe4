//! Identity of the tags the scanner treats specially.

use crate::char_class::to_ascii_lower;

/// The closed set of recognized tag names.
///
/// Everything else classifies as `None` from [`TagName::from_bytes`] and
/// receives no structural tracking, only a self-closing hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagName {
    A,
    B,
    I,
    U,
    P,
    EM,
    STRONG,
    FONT,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    TABLE,
    TBODY,
    THEAD,
    TFOOT,
    TR,
    TD,
    TH,
    CAPTION,
    COLGROUP,
    COL,
    BASE,
    META,
    TITLE,
    STYLE,
    SCRIPT,
    LINK,
    BR,
    HR,
    IMG,
    EMBED,
    INPUT,
    WBR,
    AREA,
    PARAM,
    TRACK,
    SOURCE,
    NOSCRIPT,
    HGROUP,
    HTML,
    HEAD,
    BODY,
    TEXTAREA,
    SELECT,
}

/// ASCII-case-insensitive comparison against a lowercase tag name.
/// Any non-ASCII byte fails the comparison.
fn matches_tag(name: &[u8], tag: &[u8]) -> bool {
    if name.len() != tag.len() {
        return false;
    }
    name.iter().zip(tag).all(|(&b, &t)| b < 0x80 && to_ascii_lower(b) == t)
}

impl TagName {
    /// Classifies a tag name, ASCII-case-insensitively.
    ///
    /// Only lengths 1 through 8 can match. Dispatch is by length and
    /// lowercased first byte so that at most a handful of byte
    /// comparisons run for any input. Pure and allocation-free.
    pub fn from_bytes(name: &[u8]) -> Option<TagName> {
        use TagName::*;

        let first = match name.first() {
            Some(&b) => to_ascii_lower(b),
            None => return None,
        };

        match name.len() {
            1 => match first {
                b'a' => Some(A),
                b'b' => Some(B),
                b'i' => Some(I),
                b'p' => Some(P),
                b'u' => Some(U),
                _ => None,
            },
            2 => {
                let second = to_ascii_lower(name[1]);
                match first {
                    b'e' if second == b'm' => Some(EM),
                    b't' => match second {
                        b'r' => Some(TR),
                        b'd' => Some(TD),
                        b'h' => Some(TH),
                        _ => None,
                    },
                    b'b' if second == b'r' => Some(BR),
                    b'h' => match second {
                        b'r' => Some(HR),
                        b'1' => Some(H1),
                        b'2' => Some(H2),
                        b'3' => Some(H3),
                        b'4' => Some(H4),
                        b'5' => Some(H5),
                        b'6' => Some(H6),
                        _ => None,
                    },
                    _ => None,
                }
            }
            3 => match first {
                b'i' if matches_tag(name, b"img") => Some(IMG),
                b'c' if matches_tag(name, b"col") => Some(COL),
                b'w' if matches_tag(name, b"wbr") => Some(WBR),
                _ => None,
            },
            4 => match first {
                b'b' if matches_tag(name, b"base") => Some(BASE),
                b'b' if matches_tag(name, b"body") => Some(BODY),
                b'm' if matches_tag(name, b"meta") => Some(META),
                b'l' if matches_tag(name, b"link") => Some(LINK),
                b'h' if matches_tag(name, b"head") => Some(HEAD),
                b'h' if matches_tag(name, b"html") => Some(HTML),
                b'a' if matches_tag(name, b"area") => Some(AREA),
                b'f' if matches_tag(name, b"font") => Some(FONT),
                _ => None,
            },
            5 => match first {
                b't' if matches_tag(name, b"title") => Some(TITLE),
                b't' if matches_tag(name, b"table") => Some(TABLE),
                b't' if matches_tag(name, b"tbody") => Some(TBODY),
                b't' if matches_tag(name, b"thead") => Some(THEAD),
                b't' if matches_tag(name, b"tfoot") => Some(TFOOT),
                b't' if matches_tag(name, b"track") => Some(TRACK),
                b's' if matches_tag(name, b"style") => Some(STYLE),
                b'i' if matches_tag(name, b"input") => Some(INPUT),
                b'e' if matches_tag(name, b"embed") => Some(EMBED),
                b'p' if matches_tag(name, b"param") => Some(PARAM),
                _ => None,
            },
            6 => match first {
                b's' if matches_tag(name, b"script") => Some(SCRIPT),
                b's' if matches_tag(name, b"select") => Some(SELECT),
                b's' if matches_tag(name, b"source") => Some(SOURCE),
                b's' if matches_tag(name, b"strong") => Some(STRONG),
                b'h' if matches_tag(name, b"hgroup") => Some(HGROUP),
                _ => None,
            },
            7 => match first {
                b'c' if matches_tag(name, b"caption") => Some(CAPTION),
                _ => None,
            },
            8 => match first {
                b'c' if matches_tag(name, b"colgroup") => Some(COLGROUP),
                b'n' if matches_tag(name, b"noscript") => Some(NOSCRIPT),
                b't' if matches_tag(name, b"textarea") => Some(TEXTAREA),
                _ => None,
            },
            _ => None,
        }
    }

    /// Void elements can never carry an end tag.
    pub fn is_void(self) -> bool {
        use TagName::*;
        matches!(
            self,
            BR | HR | COL | IMG | EMBED | INPUT | META | BASE | WBR | AREA | LINK | PARAM | TRACK
                | SOURCE
        )
    }

    pub fn is_heading(self) -> bool {
        use TagName::*;
        matches!(self, H1 | H2 | H3 | H4 | H5 | H6)
    }

    /// Tags which participate in table structure tracking.
    pub fn is_table_structure(self) -> bool {
        use TagName::*;
        matches!(
            self,
            TABLE | TBODY | THEAD | TFOOT | TR | TD | TH | CAPTION | COLGROUP | COL
        )
    }

    /// Tags permitted directly inside a table frame when neither a
    /// caption nor a row is open.
    pub fn is_table_outside_row_allowed(self) -> bool {
        use TagName::*;
        matches!(
            self,
            TABLE | THEAD | TBODY | TFOOT | TR | COL | CAPTION | COLGROUP | STYLE | SCRIPT
        )
    }

    /// Tags which may appear inside `<head>` without implicitly closing it.
    pub fn is_head_allowed(self) -> bool {
        use TagName::*;
        matches!(self, BASE | META | TITLE | STYLE | SCRIPT | LINK)
    }

    /// Small stack id for the inline formatting subset, `None` otherwise.
    pub fn formatting_id(self) -> Option<u8> {
        use TagName::*;
        match self {
            A => Some(0),
            B => Some(1),
            I => Some(2),
            U => Some(3),
            EM => Some(4),
            FONT => Some(5),
            STRONG => Some(6),
            _ => None,
        }
    }

    /// The lowercase name closing a raw-text region, for the three tags
    /// whose content is consumed opaquely.
    pub fn raw_text_name(self) -> Option<&'static [u8]> {
        use TagName::*;
        match self {
            SCRIPT => Some(b"script"),
            STYLE => Some(b"style"),
            TEXTAREA => Some(b"textarea"),
            _ => None,
        }
    }
}
