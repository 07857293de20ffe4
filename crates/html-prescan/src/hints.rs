//! Hint delivery.
//!
//! The scanners report two kinds of hints to the downstream parser. Both
//! delivery modes, callbacks and a collected pair buffer, are expressed
//! over one sink trait so that the scanners need not care which is
//! active.

/// One recognized boolean attribute occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BooleanHint {
    /// Index of the name in [`crate::BOOLEAN_ATTRIBUTE_NAMES`].
    pub index: u8,
    /// `true` when the attribute appeared without a value.
    pub is_boolean_usage: bool,
}

/// Receives hints in document order as a scan discovers them.
///
/// Within a single element the self-closing hint arrives before any of
/// that element's boolean-attribute hints.
pub trait HintSink {
    /// An open tag whose name the scanner does not recognize.
    ///
    /// `name` holds the lowercased tag name and is only valid for the
    /// duration of the call; it may reference a transient buffer. Do not
    /// retain it.
    fn self_closing_hint(&mut self, name: &[u8], is_self_closing: bool);

    /// A recognized boolean attribute on an open tag.
    fn boolean_hint(&mut self, index: u8, is_boolean_usage: bool);
}

/// Discards every hint. Useful when only the fallback verdict matters.
#[derive(Default)]
pub struct NoopSink;

impl HintSink for NoopSink {
    fn self_closing_hint(&mut self, _name: &[u8], _is_self_closing: bool) {}
    fn boolean_hint(&mut self, _index: u8, _is_boolean_usage: bool) {}
}

/// Adapter for the `_collect` entry points: forwards self-closing hints
/// to the caller's sink and accumulates boolean hints for hand-off.
pub(crate) struct CollectingSink<'a, S: HintSink> {
    inner: &'a mut S,
    pairs: Vec<BooleanHint>,
}

impl<'a, S: HintSink> CollectingSink<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            pairs: Vec::new(),
        }
    }

    pub fn into_pairs(self) -> Vec<BooleanHint> {
        self.pairs
    }
}

impl<S: HintSink> HintSink for CollectingSink<'_, S> {
    fn self_closing_hint(&mut self, name: &[u8], is_self_closing: bool) {
        self.inner.self_closing_hint(name, is_self_closing);
    }

    fn boolean_hint(&mut self, index: u8, is_boolean_usage: bool) {
        self.pairs.push(BooleanHint {
            index,
            is_boolean_usage,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn collecting_sink_splits_hint_kinds() {
        struct SelfClosingOnly(Vec<(Vec<u8>, bool)>, usize);
        impl HintSink for SelfClosingOnly {
            fn self_closing_hint(&mut self, name: &[u8], is_self_closing: bool) {
                self.0.push((name.to_vec(), is_self_closing));
            }
            fn boolean_hint(&mut self, _: u8, _: bool) {
                self.1 += 1;
            }
        }

        let mut user = SelfClosingOnly(Vec::new(), 0);
        let mut collecting = CollectingSink::new(&mut user);
        collecting.self_closing_hint(b"custom", true);
        collecting.boolean_hint(9, true);
        collecting.boolean_hint(3, false);

        let pairs = collecting.into_pairs();
        assert_eq!(
            pairs,
            vec![
                BooleanHint {
                    index: 9,
                    is_boolean_usage: true
                },
                BooleanHint {
                    index: 3,
                    is_boolean_usage: false
                },
            ]
        );
        assert_eq!(user.0, vec![(b"custom".to_vec(), true)]);
        // The wrapped sink's boolean callback must never fire.
        assert_eq!(user.1, 0);
    }
}
