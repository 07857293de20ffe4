//! A fast-path HTML pre-scanner.
//!
//! One linear pass over a byte buffer decides whether a document is
//! simple enough for a permissive lightweight parser or must escalate to
//! a fully conformant HTML5 parser. While deciding, the scanner emits
//! hints the downstream parser wants anyway: whether unrecognized open
//! tags self-closed, and where recognized boolean attributes occurred.
//!
//! The scanner builds no DOM, decodes no character references, and never
//! retains the input. It either accepts a document it fully understands
//! or names the first reason it cannot.
//!
//! ```
//! use html_prescan::{should_fallback, FallbackReason, NoopSink};
//!
//! let mut sink = NoopSink;
//! assert!(should_fallback(b"<p>hello</p>", &mut sink).is_ok());
//! assert_eq!(
//!     should_fallback(b"<x:y>", &mut sink),
//!     Err(FallbackReason::NamespacedTag),
//! );
//! ```

#![allow(non_camel_case_types)]

#[macro_use]
mod macros;

pub mod boolean_attrs;
mod char_class;
pub mod fallback;
pub mod hints;
mod scanner;
pub mod tag_name;

pub use boolean_attrs::{boolean_attribute_index, BOOLEAN_ATTRIBUTE_NAMES};
pub use fallback::FallbackReason;
pub use hints::{BooleanHint, HintSink, NoopSink};
pub use tag_name::TagName;

use hints::CollectingSink;

/// Scans for hints only, tolerating any input.
///
/// This never fails and checks nothing structural; it stops silently at
/// the end of input or at an unterminated construct. The sink receives
/// self-closing hints and boolean-attribute hints in document order.
pub fn scan_hints<S: HintSink>(html: &[u8], sink: &mut S) {
    scanner::scan_hints_into(html, sink);
}

/// Like [`scan_hints`], but boolean hints are collected and returned
/// rather than delivered through the sink, which only sees self-closing
/// hints.
pub fn scan_hints_collect<S: HintSink>(html: &[u8], sink: &mut S) -> Vec<BooleanHint> {
    let mut collecting = CollectingSink::new(sink);
    scanner::scan_hints_into(html, &mut collecting);
    collecting.into_pairs()
}

/// Decides whether the document needs the conformant parser.
///
/// Returns `Ok(())` when the fast path may handle the document, or the
/// first violation found. Hints are emitted up to the point of failure.
pub fn should_fallback<S: HintSink>(html: &[u8], sink: &mut S) -> Result<(), FallbackReason> {
    let verdict = scanner::scan_for_fallback(html, sink);
    #[cfg(feature = "tracing")]
    if let Err(reason) = verdict {
        tracing::debug!(reason = <&str>::from(reason), "escalating to full HTML5 parser");
    }
    verdict
}

/// Like [`should_fallback`], but boolean hints are collected and
/// returned. The pair list holds whatever was gathered before a failure,
/// so callers get the partial hints even on a fallback verdict.
pub fn should_fallback_collect<S: HintSink>(
    html: &[u8],
    sink: &mut S,
) -> (Result<(), FallbackReason>, Vec<BooleanHint>) {
    let mut collecting = CollectingSink::new(sink);
    let verdict = scanner::scan_for_fallback(html, &mut collecting);
    #[cfg(feature = "tracing")]
    if let Err(reason) = verdict {
        tracing::debug!(reason = <&str>::from(reason), "escalating to full HTML5 parser");
    }
    (verdict, collecting.into_pairs())
}
