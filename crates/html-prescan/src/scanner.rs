//! The single-pass scanners.
//!
//! Two drivers share the same tokenization grammar. The fallback scanner
//! enforces every structural rule and stops at the first violation; the
//! hint scanner tolerates everything and only reports hints. Both walk
//! the input with a forward-only cursor and never backtrack across a tag
//! boundary.

use memchr::memchr;

use crate::boolean_attrs::boolean_attribute_index;
use crate::char_class::{is_name_char, is_whitespace, to_ascii_lower};
use crate::fallback::FallbackReason;
use crate::hints::{BooleanHint, HintSink};
use crate::tag_name::TagName;

/// Stack of currently-open inline formatting elements, by small id.
///
/// An end tag for a formatting element must match the element on top of
/// this stack; closing one from deeper down is the mis-nesting the
/// adoption agency algorithm exists for, and the fast path refuses it.
struct FormattingStack {
    open: Vec<u8>,
}

impl FormattingStack {
    fn new() -> Self {
        Self {
            open: Vec::with_capacity(8),
        }
    }

    fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn push(&mut self, format_id: u8) {
        self.open.push(format_id);
    }

    /// Distance from the top of the stack to the nearest matching entry,
    /// `0` meaning the top itself.
    fn depth_from_top(&self, format_id: u8) -> Option<usize> {
        self.open.iter().rev().position(|&open_id| open_id == format_id)
    }

    fn pop(&mut self) {
        self.open.pop();
    }
}

/// Counters for one open `<table>` element.
#[derive(Clone, Copy, Default)]
struct TableFrame {
    caption_depth: u32,
    section_depth: u32,
    tr_depth: u32,
    cell_depth: u32,
}

/// One frame per open `<table>`, innermost on top.
struct TableStack {
    frames: Vec<TableFrame>,
}

impl TableStack {
    fn new() -> Self {
        Self {
            frames: Vec::with_capacity(4),
        }
    }

    fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn open(&mut self) {
        self.frames.push(TableFrame::default());
    }

    fn top(&self) -> Option<TableFrame> {
        self.frames.last().copied()
    }

    fn set_top(&mut self, frame: TableFrame) {
        if let Some(top) = self.frames.last_mut() {
            *top = frame;
        }
    }

    /// Applies an end tag to the innermost frame. Counters clamp at zero
    /// rather than going negative; closing a row also abandons any open
    /// cell count.
    fn close(&mut self, tag: TagName) {
        if self.frames.is_empty() {
            return;
        }
        if tag == TagName::TABLE {
            self.frames.pop();
            return;
        }
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        match tag {
            TagName::CAPTION => frame.caption_depth = frame.caption_depth.saturating_sub(1),
            TagName::TBODY | TagName::THEAD | TagName::TFOOT => {
                frame.section_depth = frame.section_depth.saturating_sub(1)
            }
            TagName::TR => {
                frame.tr_depth = frame.tr_depth.saturating_sub(1);
                frame.cell_depth = 0;
            }
            TagName::TD | TagName::TH => frame.cell_depth = frame.cell_depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Lowercases an unrecognized tag name into a transient buffer and hands
/// it to the sink. Names up to 64 bytes avoid the heap.
fn emit_unrecognized_tag_hint<S: HintSink>(sink: &mut S, name: &[u8], is_self_closing: bool) {
    let mut inline_buf = [0u8; 64];
    if name.len() <= inline_buf.len() {
        let lowered = &mut inline_buf[..name.len()];
        for (dst, &b) in lowered.iter_mut().zip(name) {
            *dst = to_ascii_lower(b);
        }
        sink.self_closing_hint(lowered, is_self_closing);
    } else {
        let lowered: Vec<u8> = name.iter().map(|&b| to_ascii_lower(b)).collect();
        sink.self_closing_hint(&lowered, is_self_closing);
    }
}

/// Advances past the opaque content of a raw-text element.
///
/// `tag` is the lowercase name which closes the region. The end tag may
/// carry attributes and whitespace before its `>`; the comparison of the
/// name itself is ASCII-case-insensitive and fails on any non-ASCII byte.
///
/// @return The index one past the end tag's `>`, or `None` when the
///         region never closes before the end of the document.
fn skip_raw_text(html: &[u8], tag: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j + tag.len() + 2 < html.len() {
        if html[j] == b'<' && html[j + 1] == b'/' {
            let candidate = &html[j + 2..j + 2 + tag.len()];
            if candidate
                .iter()
                .zip(tag)
                .all(|(&b, &t)| b < 0x80 && to_ascii_lower(b) == t)
            {
                let name_end = j + 2 + tag.len();
                let closer = memchr(b'>', &html[name_end..])?;
                return Some(name_end + closer + 1);
            }
        }
        j += 1;
    }
    None
}

/// How a start tag's attribute area ended.
struct TagEnd {
    /// Index one past the closing `>`.
    end: usize,
    /// Whether the `/>` form closed the tag.
    self_closing_by_slash: bool,
}

/// Whether the last non-whitespace byte between the tag name and the
/// closing `>` is a solidus. This deliberately cannot tell a solidus
/// that ended an unquoted attribute value from a true self-closing
/// flag; the downstream parser expects that reading.
fn closes_with_slash(html: &[u8], name_end: usize, end: usize) -> bool {
    let mut scan = end - 2;
    while scan > name_end && is_whitespace(html[scan]) {
        scan -= 1;
    }
    html[scan] == b'/'
}

pub(crate) fn scan_for_fallback<S: HintSink>(
    html: &[u8],
    sink: &mut S,
) -> Result<(), FallbackReason> {
    if html.is_empty() {
        return Err(FallbackReason::MalformedTag);
    }
    FallbackScanner {
        html,
        at: 0,
        sink,
        saw_tag_delimiter: false,
        saw_html_tag: false,
        saw_body_tag: false,
        in_head: false,
        saw_content_before_html: false,
        heading_open: false,
        open_tag_depth: 0,
        select_depth: 0,
        formatting: FormattingStack::new(),
        tables: TableStack::new(),
        boolean_scratch: Vec::new(),
    }
    .run()
}

/// The fallback-deciding pass.
///
/// State lives for exactly one scan. The first violation wins: every
/// error return unwinds straight out of `run`, so no later problem can
/// shadow an earlier one.
struct FallbackScanner<'h, 's, S: HintSink> {
    html: &'h [u8],
    at: usize,
    sink: &'s mut S,

    saw_tag_delimiter: bool,
    saw_html_tag: bool,
    saw_body_tag: bool,
    in_head: bool,
    saw_content_before_html: bool,
    heading_open: bool,
    open_tag_depth: u32,
    select_depth: u32,

    formatting: FormattingStack,
    tables: TableStack,

    /// Boolean occurrences of the tag currently being parsed. Flushed to
    /// the sink after the self-closing hint so that hints leave in the
    /// documented order; reused across tags.
    boolean_scratch: Vec<BooleanHint>,
}

impl<S: HintSink> FallbackScanner<'_, '_, S> {
    fn run(&mut self) -> Result<(), FallbackReason> {
        while self.at < self.html.len() {
            if self.html[self.at] == 0x00 {
                return Err(FallbackReason::ContainsNull);
            }
            if self.html[self.at] != b'<' {
                self.text_span()?;
                continue;
            }

            self.saw_tag_delimiter = true;
            let Some(&next) = self.html.get(self.at + 1) else {
                return Err(FallbackReason::MalformedTag);
            };
            match next {
                b'!' => self.markup_declaration()?,
                b'/' => self.end_tag()?,
                b'?' => self.processing_instruction()?,
                b if is_name_char(b) => self.start_tag()?,
                _ => return Err(FallbackReason::MalformedTag),
            }
        }

        if !self.saw_tag_delimiter {
            return Err(FallbackReason::NoTagDelimiter);
        }
        if self.heading_open || !self.formatting.is_empty() {
            return Err(FallbackReason::FormattingMismatch);
        }
        if self.select_depth > 0 {
            return Err(FallbackReason::TableHeuristics);
        }
        Ok(())
    }

    /// Consumes a text region up to the next `<` or the end of input.
    ///
    /// Text is never tokenized further, but two things matter here: a
    /// NUL byte anywhere in the span, and whether non-whitespace content
    /// appears at a point where it decides `<html>`/`<body>` placement.
    fn text_span(&mut self) -> Result<(), FallbackReason> {
        let html = self.html;
        let next_tag = match memchr(b'<', &html[self.at + 1..]) {
            Some(found) => self.at + 1 + found,
            None => html.len(),
        };

        if memchr(0x00, &html[self.at..next_tag]).is_some() {
            return Err(FallbackReason::ContainsNull);
        }

        if !self.saw_html_tag || (!self.saw_body_tag && !self.in_head) {
            let leading_whitespace = strspn!(&html[..next_tag], b' ' | b'\t' | b'\n' | b'\r', self.at);
            if self.at + leading_whitespace < next_tag {
                if !self.saw_html_tag {
                    self.saw_content_before_html = true;
                }
                if self.saw_html_tag && !self.saw_body_tag && !self.in_head {
                    self.saw_body_tag = true;
                }
            }
        }

        self.at = next_tag;
        Ok(())
    }

    /// `<!…`: a comment or a markup declaration such as a doctype.
    fn markup_declaration(&mut self) -> Result<(), FallbackReason> {
        let html = self.html;
        let i = self.at;

        /*
         * A comment opening with three dashes, `<!---`, is parsed
         * differently by permissive parsers than by the HTML5 algorithm,
         * so its mere presence forces the conformant route.
         */
        if i + 4 < html.len() && html[i + 2] == b'-' && html[i + 3] == b'-' && html[i + 4] == b'-' {
            return Err(FallbackReason::CommentDashDashDash);
        }

        if i + 3 < html.len() && html[i + 2] == b'-' && html[i + 3] == b'-' {
            let mut j = i + 4;
            while j + 2 < html.len() {
                if html[j] == b'-' && html[j + 1] == b'-' && html[j + 2] == b'>' {
                    self.at = j + 3;
                    return Ok(());
                }
                j += 1;
            }
            return Err(FallbackReason::MalformedTag);
        }

        // Doctypes and bogus declarations span to the nearest `>`.
        match memchr(b'>', &html[i + 2..]) {
            Some(closer) => {
                self.at = i + 2 + closer + 1;
                Ok(())
            }
            None => Err(FallbackReason::MalformedTag),
        }
    }

    fn processing_instruction(&mut self) -> Result<(), FallbackReason> {
        match memchr(b'>', &self.html[self.at + 2..]) {
            Some(closer) => {
                self.at = self.at + 2 + closer + 1;
                Ok(())
            }
            None => Err(FallbackReason::MalformedTag),
        }
    }

    fn end_tag(&mut self) -> Result<(), FallbackReason> {
        let html = self.html;
        let name_start = self.at + 2;
        let mut name_end = name_start;
        while name_end < html.len() && is_name_char(html[name_end]) {
            if html[name_end] == b':' {
                return Err(FallbackReason::NamespacedTag);
            }
            name_end += 1;
        }
        if name_end == name_start {
            return Err(FallbackReason::MalformedTag);
        }
        if name_end < html.len() && html[name_end] >= 0x80 {
            return Err(FallbackReason::NonAsciiTagName);
        }

        let tag = TagName::from_bytes(&html[name_start..name_end]);
        if tag.map_or(false, TagName::is_void) {
            return Err(FallbackReason::VoidEndTag);
        }

        if let Some(tag) = tag {
            if tag.is_table_structure() {
                self.tables.close(tag);
            }
            if tag == TagName::SELECT {
                self.select_depth = self.select_depth.saturating_sub(1);
            }
            if tag.is_heading() {
                self.heading_open = false;
            }
            if let Some(format_id) = tag.formatting_id() {
                match self.formatting.depth_from_top(format_id) {
                    Some(0) => self.formatting.pop(),
                    // Closing a formatting element from under another one
                    // is the crossed nesting the fast path cannot model.
                    Some(_) => return Err(FallbackReason::FormattingMismatch),
                    None => {}
                }
            }
            if tag == TagName::HEAD {
                self.in_head = false;
            } else if tag == TagName::BODY {
                self.saw_body_tag = true;
            }
        }
        self.open_tag_depth = self.open_tag_depth.saturating_sub(1);

        // Attributes on an end tag are skipped without validation.
        match memchr(b'>', &html[name_end..]) {
            Some(closer) => {
                self.at = name_end + closer + 1;
                Ok(())
            }
            None => Err(FallbackReason::MalformedTag),
        }
    }

    fn start_tag(&mut self) -> Result<(), FallbackReason> {
        let html = self.html;
        let name_start = self.at + 1;
        let mut name_end = name_start;
        while name_end < html.len() && is_name_char(html[name_end]) {
            if html[name_end] == b':' {
                return Err(FallbackReason::NamespacedTag);
            }
            name_end += 1;
        }
        if name_end < html.len() && html[name_end] >= 0x80 {
            return Err(FallbackReason::NonAsciiTagName);
        }

        let tag = TagName::from_bytes(&html[name_start..name_end]);
        self.apply_start_tag_structure(tag)?;

        let tag_end = self.parse_attributes(name_end)?;
        let is_self_closing =
            tag_end.self_closing_by_slash || closes_with_slash(html, name_end, tag_end.end);

        if tag.is_none() {
            emit_unrecognized_tag_hint(self.sink, &html[name_start..name_end], is_self_closing);
        }
        for hint in self.boolean_scratch.drain(..) {
            self.sink.boolean_hint(hint.index, hint.is_boolean_usage);
        }

        /*
         * Raw-text elements swallow everything to their end tag; the
         * element and its closer cancel out, so none of the open-element
         * accounting below applies to them.
         */
        if !is_self_closing {
            if let Some(raw_name) = tag.and_then(TagName::raw_text_name) {
                return match skip_raw_text(html, raw_name, tag_end.end) {
                    Some(past_closer) => {
                        self.at = past_closer;
                        Ok(())
                    }
                    None => Err(FallbackReason::RawTextUnterminated),
                };
            }
        }

        if !is_self_closing {
            if let Some(format_id) = tag.and_then(TagName::formatting_id) {
                self.formatting.push(format_id);
            }
            if tag == Some(TagName::SELECT) {
                self.select_depth += 1;
            }
            self.open_tag_depth += 1;
        }
        self.at = tag_end.end;
        Ok(())
    }

    /// Structural rules evaluated before a start tag's attributes.
    fn apply_start_tag_structure(&mut self, tag: Option<TagName>) -> Result<(), FallbackReason> {
        use TagName::*;

        // Conservatively treated as too complex for the fast path.
        if tag == Some(HGROUP) {
            return Err(FallbackReason::TableHeuristics);
        }

        if tag == Some(TABLE) {
            // A nested table is only tolerated inside a cell.
            if self.tables.top().map_or(false, |frame| frame.cell_depth == 0) {
                return Err(FallbackReason::TableHeuristics);
            }
            self.tables.open();
        } else if self.tables.is_empty() {
            if tag.map_or(false, TagName::is_table_structure) {
                return Err(FallbackReason::TableHeuristics);
            }
        } else if let Some(mut frame) = self.tables.top() {
            let is_structure = tag.map_or(false, TagName::is_table_structure);
            if frame.caption_depth > 0 && is_structure {
                return Err(FallbackReason::TableHeuristics);
            }
            match tag {
                Some(CAPTION) => frame.caption_depth += 1,
                Some(TBODY) | Some(THEAD) | Some(TFOOT) => frame.section_depth += 1,
                Some(TR) => {
                    frame.tr_depth += 1;
                    frame.cell_depth = 0;
                }
                Some(TD) | Some(TH) => {
                    if frame.tr_depth == 0 {
                        return Err(FallbackReason::TableHeuristics);
                    }
                    frame.cell_depth += 1;
                }
                _ => {}
            }
            if frame.caption_depth == 0
                && frame.tr_depth == 0
                && !tag.map_or(false, TagName::is_table_outside_row_allowed)
            {
                return Err(FallbackReason::TableHeuristics);
            }
            self.tables.set_top(frame);
        }

        if tag.map_or(false, TagName::is_heading) {
            if self.heading_open {
                return Err(FallbackReason::FormattingMismatch);
            }
            self.heading_open = true;
        }

        // A paragraph opening inside `<b>`, `<a>`, etc. forces the block
        // boundary handling the fast path does not implement.
        if tag == Some(P) && !self.formatting.is_empty() {
            return Err(FallbackReason::FormattingMismatch);
        }

        if tag == Some(HTML) {
            if self.saw_content_before_html {
                return Err(FallbackReason::HeadBodyPlacement);
            }
            self.saw_html_tag = true;
        }

        if self.saw_html_tag && !self.saw_body_tag {
            if tag == Some(HEAD) {
                self.in_head = true;
            } else if tag == Some(BODY) {
                self.saw_body_tag = true;
                self.in_head = false;
            } else if self.in_head {
                if !tag.map_or(false, TagName::is_head_allowed) {
                    // A body-ish tag implicitly closes the head.
                    self.in_head = false;
                    self.saw_body_tag = true;
                }
            } else if !tag.map_or(false, TagName::is_head_allowed) {
                self.saw_body_tag = true;
            }
        } else if tag == Some(BODY)
            && !self.saw_html_tag
            && (self.saw_content_before_html || self.open_tag_depth > 0)
        {
            return Err(FallbackReason::HeadBodyPlacement);
        }

        Ok(())
    }

    /// Parses the attribute area of a start tag, validating as it goes.
    ///
    /// Boolean occurrences land in `boolean_scratch` rather than going to
    /// the sink directly: the self-closing determination is not known
    /// until the closing `>` is found, and the self-closing hint must be
    /// delivered first.
    fn parse_attributes(&mut self, name_end: usize) -> Result<TagEnd, FallbackReason> {
        let html = self.html;
        self.boolean_scratch.clear();
        let mut j = name_end;
        loop {
            j += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', j);
            if j >= html.len() {
                return Err(FallbackReason::MalformedTag);
            }
            if html[j] == b'>' {
                return Ok(TagEnd {
                    end: j + 1,
                    self_closing_by_slash: false,
                });
            }
            if html[j] == b'/' && html.get(j + 1) == Some(&b'>') {
                return Ok(TagEnd {
                    end: j + 2,
                    self_closing_by_slash: true,
                });
            }

            let attr_start = j;
            while j < html.len() {
                let b = html[j];
                if is_whitespace(b) || b == b'=' || b == b'>' || b == b'/' {
                    break;
                }
                if b >= 0x80 {
                    return Err(FallbackReason::NonAsciiAttributeName);
                }
                if b == b'"' || b == b'\'' || b == 0x00 || b == b'<' {
                    return Err(FallbackReason::MalformedAttribute);
                }
                j += 1;
            }
            if attr_start == j {
                return Err(FallbackReason::MalformedAttribute);
            }
            let boolean_index = boolean_attribute_index(&html[attr_start..j]);

            j += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', j);
            if j < html.len() && html[j] == b'=' {
                j += 1;
                j += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', j);
                if j >= html.len() {
                    return Err(FallbackReason::MalformedAttribute);
                }
                match html[j] {
                    quote @ (b'"' | b'\'') => {
                        j += 1;
                        if j >= html.len() {
                            return Err(FallbackReason::MalformedAttribute);
                        }
                        let closer = match memchr(quote, &html[j..]) {
                            Some(closer) => closer,
                            None => return Err(FallbackReason::MalformedAttribute),
                        };
                        if memchr(0x00, &html[j..j + closer]).is_some() {
                            return Err(FallbackReason::MalformedAttribute);
                        }
                        j += closer + 1;
                    }
                    b'<' | b'=' => return Err(FallbackReason::MalformedAttribute),
                    _ => {
                        while j < html.len() && !is_whitespace(html[j]) && html[j] != b'>' {
                            match html[j] {
                                b'<' | b'"' | b'\'' => {
                                    return Err(FallbackReason::MalformedAttribute)
                                }
                                _ => j += 1,
                            }
                        }
                    }
                }
                if let Some(index) = boolean_index {
                    self.boolean_scratch.push(BooleanHint {
                        index,
                        is_boolean_usage: false,
                    });
                }
            } else if let Some(index) = boolean_index {
                self.boolean_scratch.push(BooleanHint {
                    index,
                    is_boolean_usage: true,
                });
            }
        }
    }
}

pub(crate) fn scan_hints_into<S: HintSink>(html: &[u8], sink: &mut S) {
    HintScanner { html, at: 0, sink }.run();
}

/// The hint-only pass.
///
/// Shares the fallback scanner's grammar but never rejects: anomalies
/// are tolerated and unterminated constructs end the scan silently. No
/// structural state is kept at all.
struct HintScanner<'h, 's, S: HintSink> {
    html: &'h [u8],
    at: usize,
    sink: &'s mut S,
}

impl<S: HintSink> HintScanner<'_, '_, S> {
    fn run(&mut self) {
        let html = self.html;
        while self.at < html.len() {
            if html[self.at] != b'<' {
                match memchr(b'<', &html[self.at + 1..]) {
                    Some(found) => {
                        self.at = self.at + 1 + found;
                        continue;
                    }
                    None => return,
                }
            }
            let Some(&next) = html.get(self.at + 1) else {
                return;
            };
            match next {
                b'!' => {
                    if !self.markup_declaration() {
                        return;
                    }
                }
                b'/' => {
                    self.at = match memchr(b'>', &html[self.at + 2..]) {
                        Some(closer) => self.at + 2 + closer + 1,
                        None => html.len(),
                    };
                }
                b'?' => {
                    match memchr(b'>', &html[self.at + 2..]) {
                        Some(closer) => self.at = self.at + 2 + closer + 1,
                        None => return,
                    }
                }
                b if is_name_char(b) => self.tag(),
                _ => self.at += 1,
            }
        }
    }

    /// @return Whether scanning can continue past the construct.
    fn markup_declaration(&mut self) -> bool {
        let html = self.html;
        let i = self.at;
        if i + 3 < html.len() && html[i + 2] == b'-' && html[i + 3] == b'-' {
            let mut j = i + 4;
            while j + 2 < html.len() {
                if html[j] == b'-' && html[j + 1] == b'-' && html[j + 2] == b'>' {
                    self.at = j + 3;
                    return true;
                }
                j += 1;
            }
            return false;
        }
        self.at = match memchr(b'>', &html[i + 2..]) {
            Some(closer) => i + 2 + closer + 1,
            None => html.len(),
        };
        true
    }

    fn tag(&mut self) {
        let html = self.html;
        let name_start = self.at + 1;
        let mut name_end = name_start;
        while name_end < html.len() && is_name_char(html[name_end]) {
            name_end += 1;
        }

        /*
         * Find the closing `>` with awareness of quoted attribute values,
         * tracking the last non-whitespace byte outside quotes on the
         * way: a trailing solidus marks the tag self-closing.
         */
        let mut j = name_end;
        let mut is_self_closing = false;
        let mut quote: Option<u8> = None;
        let mut last_non_whitespace = 0u8;
        while j < html.len() {
            let b = html[j];
            match quote {
                Some(open_quote) => {
                    if b == open_quote {
                        quote = None;
                    }
                }
                None => {
                    if b == b'"' || b == b'\'' {
                        quote = Some(b);
                    } else if b == b'>' {
                        if last_non_whitespace == b'/' {
                            is_self_closing = true;
                        }
                        break;
                    } else if !is_whitespace(b) {
                        last_non_whitespace = b;
                    }
                }
            }
            j += 1;
        }

        let tag = TagName::from_bytes(&html[name_start..name_end]);
        if tag.is_none() {
            emit_unrecognized_tag_hint(self.sink, &html[name_start..name_end], is_self_closing);
        }

        // Attribute walk, tolerant: anything that fails to parse simply
        // stops the walk for this tag.
        let mut k = name_end;
        while k < html.len() {
            k += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', k);
            if k >= html.len() {
                break;
            }
            if html[k] == b'>' {
                break;
            }
            if html[k] == b'/' && html.get(k + 1) == Some(&b'>') {
                break;
            }

            let attr_start = k;
            k += strcspn!(html, b' ' | b'\t' | b'\n' | b'\r' | b'=' | b'>' | b'/', k);
            if attr_start == k {
                break;
            }
            let boolean_index = boolean_attribute_index(&html[attr_start..k]);
            let mut is_boolean_usage = true;

            k += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', k);
            if k < html.len() && html[k] == b'=' {
                is_boolean_usage = false;
                k += 1;
                k += strspn!(html, b' ' | b'\t' | b'\n' | b'\r', k);
                if k >= html.len() {
                    break;
                }
                match html[k] {
                    open_quote @ (b'"' | b'\'') => {
                        k += 1;
                        if k < html.len() {
                            k = match memchr(open_quote, &html[k..]) {
                                Some(closer) => k + closer + 1,
                                None => html.len(),
                            };
                        }
                    }
                    _ => {
                        k += strcspn!(html, b' ' | b'\t' | b'\n' | b'\r' | b'>', k);
                    }
                }
            }
            if let Some(index) = boolean_index {
                self.sink.boolean_hint(index, is_boolean_usage);
            }
        }

        let past_tag = if j < html.len() { j + 1 } else { html.len() };
        if !is_self_closing {
            if let Some(raw_name) = tag.and_then(TagName::raw_text_name) {
                self.at = match skip_raw_text(html, raw_name, past_tag) {
                    Some(past_closer) => past_closer,
                    // Unterminated raw text ends the scan silently.
                    None => html.len(),
                };
                return;
            }
        }
        self.at = past_tag;
    }
}
