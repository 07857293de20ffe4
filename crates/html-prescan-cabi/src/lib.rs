//! C entry points for the pre-scanner.
//!
//! Thin plumbing only: callbacks are nullable function pointers with a
//! caller context, boolean pairs can be collected into a heap buffer
//! whose ownership transfers to the caller, and the fallback verdict is
//! an `int` plus a reason code. All scanning behavior lives in the
//! `html-prescan` crate.

#![allow(non_camel_case_types)]

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::ffi::c_void;
use std::ptr;
use std::slice;

use html_prescan::{BooleanHint, FallbackReason, HintSink};

/// Receives one self-closing hint. `name` points at `length` lowercased
/// name bytes valid only for the duration of the call.
pub type prescan_record_selfclosing_fn =
    Option<unsafe extern "C" fn(name: *const u8, length: i32, is_self_closing: i32, ctx: *mut c_void)>;

/// Receives one boolean-attribute hint as a table index and a flag for
/// the valueless form.
pub type prescan_record_boolean_fn =
    Option<unsafe extern "C" fn(index: i32, is_boolean: i32, ctx: *mut c_void)>;

/// Reason codes written through `reason_out`; `0` means no fallback.
pub const PRESCAN_FALLBACK_NONE: i32 = 0;
pub const PRESCAN_FALLBACK_MALFORMED_TAG: i32 = 4;

fn c_bool(x: bool) -> i32 {
    match x {
        false => 0,
        true => 1,
    }
}

/// Bridges the C callback pair onto the sink trait.
struct CallbackSink {
    record_self_closing: prescan_record_selfclosing_fn,
    record_boolean: prescan_record_boolean_fn,
    ctx: *mut c_void,
}

impl HintSink for CallbackSink {
    fn self_closing_hint(&mut self, name: &[u8], is_self_closing: bool) {
        if let Some(record) = self.record_self_closing {
            unsafe {
                record(
                    name.as_ptr(),
                    name.len() as i32,
                    c_bool(is_self_closing),
                    self.ctx,
                );
            }
        }
    }

    fn boolean_hint(&mut self, index: u8, is_boolean_usage: bool) {
        if let Some(record) = self.record_boolean {
            unsafe { record(index as i32, c_bool(is_boolean_usage), self.ctx) };
        }
    }
}

unsafe fn input_slice<'a>(bytes: *const u8, length: i32) -> Option<&'a [u8]> {
    if bytes.is_null() || length <= 0 {
        return None;
    }
    Some(slice::from_raw_parts(bytes, length as usize))
}

/// Moves collected pairs into a heap buffer laid out as
/// `[index, isBoolean, …]` of `2 * count` values.
///
/// The allocation carries one hidden leading slot holding its total
/// length so that [`prescan_free_int32`] can reconstruct the layout from
/// the bare pointer. An empty collection hands back a null pointer.
fn pairs_into_raw(pairs: &[BooleanHint]) -> (*mut i32, i32) {
    if pairs.is_empty() {
        return (ptr::null_mut(), 0);
    }
    let total = 2 * pairs.len() + 1;
    let layout = Layout::array::<i32>(total).expect("pair buffer size must fit in memory");
    unsafe {
        let base = alloc(layout) as *mut i32;
        if base.is_null() {
            handle_alloc_error(layout);
        }
        *base = total as i32;
        let mut slot = base.add(1);
        for pair in pairs {
            *slot = pair.index as i32;
            slot = slot.add(1);
            *slot = c_bool(pair.is_boolean_usage);
            slot = slot.add(1);
        }
        (base.add(1), pairs.len() as i32)
    }
}

unsafe fn write_pairs(pairs: Vec<BooleanHint>, out_pairs: *mut *mut i32, out_count: *mut i32) {
    let (buffer, count) = pairs_into_raw(&pairs);
    if !out_count.is_null() {
        *out_count = count;
    }
    if !out_pairs.is_null() {
        *out_pairs = buffer;
    } else {
        prescan_free_int32(buffer);
    }
}

/// Releases a pair buffer returned by one of the `_collect` entry
/// points. Null-safe. Passing any other pointer is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn prescan_free_int32(ptr: *mut i32) {
    if ptr.is_null() {
        return;
    }
    let base = ptr.sub(1);
    let total = *base as usize;
    let layout = Layout::array::<i32>(total).expect("pair buffer size must fit in memory");
    dealloc(base as *mut u8, layout);
}

/// Hint-only scan with callback delivery. Never signals failure; a null
/// `bytes` or non-positive `length` emits nothing.
#[no_mangle]
pub unsafe extern "C" fn prescan_scan_hints(
    bytes: *const u8,
    length: i32,
    record_self_closing: prescan_record_selfclosing_fn,
    record_boolean: prescan_record_boolean_fn,
    ctx: *mut c_void,
) {
    let Some(html) = input_slice(bytes, length) else {
        return;
    };
    let mut sink = CallbackSink {
        record_self_closing,
        record_boolean,
        ctx,
    };
    html_prescan::scan_hints(html, &mut sink);
}

/// Hint-only scan collecting boolean pairs. Ownership of `*out_pairs`
/// transfers to the caller; release it with [`prescan_free_int32`].
#[no_mangle]
pub unsafe extern "C" fn prescan_scan_hints_collect(
    bytes: *const u8,
    length: i32,
    record_self_closing: prescan_record_selfclosing_fn,
    ctx: *mut c_void,
    out_pairs: *mut *mut i32,
    out_count: *mut i32,
) {
    let Some(html) = input_slice(bytes, length) else {
        write_pairs(Vec::new(), out_pairs, out_count);
        return;
    };
    let mut sink = CallbackSink {
        record_self_closing,
        record_boolean: None,
        ctx,
    };
    let pairs = html_prescan::scan_hints_collect(html, &mut sink);
    write_pairs(pairs, out_pairs, out_count);
}

/// Decision scan with callback delivery.
///
/// Returns `1` when the document must fall back to a conformant parser
/// (with the reason code in `*reason_out`), `0` on success (reason `0`).
#[no_mangle]
pub unsafe extern "C" fn prescan_should_fallback(
    bytes: *const u8,
    length: i32,
    record_self_closing: prescan_record_selfclosing_fn,
    record_boolean: prescan_record_boolean_fn,
    ctx: *mut c_void,
    reason_out: *mut i32,
) -> i32 {
    let Some(html) = input_slice(bytes, length) else {
        if !reason_out.is_null() {
            *reason_out = PRESCAN_FALLBACK_MALFORMED_TAG;
        }
        return 1;
    };
    let mut sink = CallbackSink {
        record_self_closing,
        record_boolean,
        ctx,
    };
    finish_verdict(html_prescan::should_fallback(html, &mut sink), reason_out)
}

/// Decision scan collecting boolean pairs. The pair buffer transfers to
/// the caller even on a fallback verdict, holding whatever was gathered
/// before the violation.
#[no_mangle]
pub unsafe extern "C" fn prescan_should_fallback_collect(
    bytes: *const u8,
    length: i32,
    record_self_closing: prescan_record_selfclosing_fn,
    ctx: *mut c_void,
    reason_out: *mut i32,
    out_pairs: *mut *mut i32,
    out_count: *mut i32,
) -> i32 {
    let Some(html) = input_slice(bytes, length) else {
        if !reason_out.is_null() {
            *reason_out = PRESCAN_FALLBACK_MALFORMED_TAG;
        }
        write_pairs(Vec::new(), out_pairs, out_count);
        return 1;
    };
    let mut sink = CallbackSink {
        record_self_closing,
        record_boolean: None,
        ctx,
    };
    let (verdict, pairs) = html_prescan::should_fallback_collect(html, &mut sink);
    write_pairs(pairs, out_pairs, out_count);
    finish_verdict(verdict, reason_out)
}

unsafe fn finish_verdict(verdict: Result<(), FallbackReason>, reason_out: *mut i32) -> i32 {
    match verdict {
        Ok(()) => {
            if !reason_out.is_null() {
                *reason_out = PRESCAN_FALLBACK_NONE;
            }
            0
        }
        Err(reason) => {
            if !reason_out.is_null() {
                *reason_out = reason.code();
            }
            1
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct Recorded {
        self_closing: Vec<(Vec<u8>, i32)>,
        booleans: Vec<(i32, i32)>,
    }

    unsafe extern "C" fn record_self_closing(
        name: *const u8,
        length: i32,
        is_self_closing: i32,
        ctx: *mut c_void,
    ) {
        let recorded = &mut *(ctx as *mut Recorded);
        let name = slice::from_raw_parts(name, length as usize).to_vec();
        recorded.self_closing.push((name, is_self_closing));
    }

    unsafe extern "C" fn record_boolean(index: i32, is_boolean: i32, ctx: *mut c_void) {
        let recorded = &mut *(ctx as *mut Recorded);
        recorded.booleans.push((index, is_boolean));
    }

    #[test]
    fn callbacks_receive_hints() {
        let html = b"<CustomTag disabled checked=\"y\"/>";
        let mut recorded = Recorded::default();
        let verdict = unsafe {
            prescan_should_fallback(
                html.as_ptr(),
                html.len() as i32,
                Some(record_self_closing),
                Some(record_boolean),
                &mut recorded as *mut Recorded as *mut c_void,
                ptr::null_mut(),
            )
        };
        assert_eq!(verdict, 0);
        assert_eq!(recorded.self_closing, vec![(b"customtag".to_vec(), 1)]);
        assert_eq!(recorded.booleans, vec![(9, 1), (3, 0)]);
    }

    #[test]
    fn collected_pairs_round_trip_through_the_free_helper() {
        let html = b"<input disabled><input checked=\"y\">";
        let mut pairs: *mut i32 = ptr::null_mut();
        let mut count: i32 = -1;
        let mut reason: i32 = -1;
        let verdict = unsafe {
            prescan_should_fallback_collect(
                html.as_ptr(),
                html.len() as i32,
                None,
                ptr::null_mut(),
                &mut reason,
                &mut pairs,
                &mut count,
            )
        };
        assert_eq!(verdict, 0);
        assert_eq!(reason, PRESCAN_FALLBACK_NONE);
        assert_eq!(count, 2);
        let values = unsafe { slice::from_raw_parts(pairs, 2 * count as usize) };
        assert_eq!(values, &[9, 1, 3, 0]);
        unsafe { prescan_free_int32(pairs) };
    }

    #[test]
    fn empty_collections_return_a_null_buffer() {
        let html = b"<p>no booleans</p>";
        let mut pairs: *mut i32 = ptr::null_mut();
        let mut count: i32 = -1;
        unsafe {
            prescan_scan_hints_collect(
                html.as_ptr(),
                html.len() as i32,
                None,
                ptr::null_mut(),
                &mut pairs,
                &mut count,
            );
        }
        assert!(pairs.is_null());
        assert_eq!(count, 0);
        unsafe { prescan_free_int32(pairs) };
    }

    #[test]
    fn degenerate_input_is_a_malformed_tag_verdict() {
        let mut reason: i32 = -1;
        let verdict = unsafe {
            prescan_should_fallback(ptr::null(), 10, None, None, ptr::null_mut(), &mut reason)
        };
        assert_eq!(verdict, 1);
        assert_eq!(reason, PRESCAN_FALLBACK_MALFORMED_TAG);

        let html = b"<p>x</p>";
        let mut reason: i32 = -1;
        let verdict = unsafe {
            prescan_should_fallback(html.as_ptr(), 0, None, None, ptr::null_mut(), &mut reason)
        };
        assert_eq!(verdict, 1);
        assert_eq!(reason, PRESCAN_FALLBACK_MALFORMED_TAG);
    }

    #[test]
    fn partial_pairs_transfer_on_fallback() {
        let html = b"<input disabled><x:y>";
        let mut pairs: *mut i32 = ptr::null_mut();
        let mut count: i32 = -1;
        let mut reason: i32 = -1;
        let verdict = unsafe {
            prescan_should_fallback_collect(
                html.as_ptr(),
                html.len() as i32,
                None,
                ptr::null_mut(),
                &mut reason,
                &mut pairs,
                &mut count,
            )
        };
        assert_eq!(verdict, 1);
        assert_eq!(reason, FallbackReason::NamespacedTag.code());
        assert_eq!(count, 1);
        let values = unsafe { slice::from_raw_parts(pairs, 2) };
        assert_eq!(values, &[9, 1]);
        unsafe { prescan_free_int32(pairs) };
    }

    #[test]
    fn null_out_pointers_are_tolerated() {
        let html = b"<input disabled>";
        let verdict = unsafe {
            prescan_should_fallback_collect(
                html.as_ptr(),
                html.len() as i32,
                None,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        assert_eq!(verdict, 0);
    }
}
