//! C ABI for host languages
//!
//! A dictionary arrives as `char**` plus a count and text arrives as a
//! NUL-terminated `char*`. Results go back as a heap [`FfiResult`] that the
//! host must hand to [`free_result`] exactly once.
//!
//! Inputs are only read, never written. A NULL return means the call
//! failed (allocation failure, invalid UTF-8, NULL dictionary with a
//! non-zero count, negative count); an empty result means nothing matched.

use crate::error::{MatchError, MatchResult};
use crate::matching;
use crate::result::ResultCollection;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::ptr;
use tracing::warn;

/// Result block returned to the host
///
/// `found_array` points at `size` NUL-terminated strings owned by the
/// library until [`free_result`] is called.
#[repr(C)]
#[derive(Debug)]
pub struct FfiResult {
    pub found_array: *mut *mut c_char,
    pub size: c_int,
}

/// Borrow the host's dictionary array as string slices
///
/// # Safety
/// `array` must point to `n` valid NUL-terminated strings that outlive `'a`.
unsafe fn read_dictionary<'a>(array: *const *const c_char, n: c_int) -> MatchResult<Vec<&'a str>> {
    if n < 0 {
        return Err(MatchError::InvalidLength(i64::from(n)));
    }
    let n = n as usize;
    if n == 0 {
        return Ok(Vec::new());
    }
    if array.is_null() {
        return Err(MatchError::NullPointer("dictionary"));
    }

    let items = unsafe { std::slice::from_raw_parts(array, n) };
    let mut entries = Vec::new();
    entries.try_reserve_exact(n)?;
    for &item in items {
        if item.is_null() {
            return Err(MatchError::NullPointer("dictionary entry"));
        }
        entries.push(unsafe { CStr::from_ptr(item) }.to_str()?);
    }
    Ok(entries)
}

/// Borrow host text; NULL reads as the empty string
///
/// # Safety
/// `text` must be NULL or a valid NUL-terminated string that outlives `'a`.
unsafe fn read_text<'a>(text: *const c_char) -> MatchResult<&'a str> {
    if text.is_null() {
        return Ok("");
    }
    Ok(unsafe { CStr::from_ptr(text) }.to_str()?)
}

fn to_c_string(value: String) -> MatchResult<CString> {
    CString::new(value).map_err(|_| MatchError::InteriorNul)
}

/// Move a collection into a heap [`FfiResult`]
///
/// Every string is converted before any pointer is released to the host,
/// so a failure part way through leaks nothing.
fn into_ffi_result(results: ResultCollection) -> MatchResult<*mut FfiResult> {
    let len = results.len();
    let size = c_int::try_from(len).map_err(|_| MatchError::InvalidLength(len as i64))?;

    let mut owned: Vec<CString> = Vec::new();
    owned.try_reserve_exact(len)?;
    for value in results {
        owned.push(to_c_string(value)?);
    }

    let mut raw: Vec<*mut c_char> = Vec::new();
    raw.try_reserve_exact(len)?;
    raw.extend(owned.into_iter().map(CString::into_raw));

    let found_array = Box::into_raw(raw.into_boxed_slice()).cast::<*mut c_char>();
    Ok(Box::into_raw(Box::new(FfiResult { found_array, size })))
}

fn finish<T>(operation: &str, outcome: MatchResult<*mut T>) -> *mut T {
    match outcome {
        Ok(pointer) => pointer,
        Err(e) => {
            warn!(operation, error = %e, "ffi call failed");
            ptr::null_mut()
        }
    }
}

/// Find dictionary entries that are suffixes of the words of `string`
///
/// # Safety
/// `commands` must point to `n` valid NUL-terminated strings; `string` must
/// be NULL or NUL-terminated. The returned pointer must be released with
/// [`free_result`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn find_commands(
    commands: *const *const c_char,
    string: *const c_char,
    n: c_int,
) -> *mut FfiResult {
    let outcome = unsafe { read_dictionary(commands, n) }.and_then(|dictionary| {
        let phrase = unsafe { read_text(string) }?;
        into_ffi_result(matching::find_commands(&dictionary, phrase)?)
    });
    finish("find_commands", outcome)
}

/// Find every dictionary entry that is a prefix of `content`, longest first
///
/// # Safety
/// Same as [`find_commands`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn multi_find_prefix(
    prefixes: *const *const c_char,
    content: *const c_char,
    n: c_int,
) -> *mut FfiResult {
    let outcome = unsafe { read_dictionary(prefixes, n) }.and_then(|dictionary| {
        let content = unsafe { read_text(content) }?;
        into_ffi_result(matching::find_all_prefixes(&dictionary, content)?)
    });
    finish("multi_find_prefix", outcome)
}

/// Find the longest dictionary entry that is a prefix of `content`
///
/// Returns an owned copy, `""` when nothing matches. Release it with
/// [`free_string`].
///
/// # Safety
/// Same as [`find_commands`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn find_prefix(
    prefixes: *const *const c_char,
    content: *const c_char,
    n: c_int,
) -> *mut c_char {
    let outcome = unsafe { read_dictionary(prefixes, n) }.and_then(|dictionary| {
        let content = unsafe { read_text(content) }?;
        let found = matching::find_first_prefix(&dictionary, content)?;
        Ok(to_c_string(found)?.into_raw())
    });
    finish("find_prefix", outcome)
}

/// Release a result returned by [`find_commands`] or [`multi_find_prefix`]
///
/// Frees every string, the array and the block itself. NULL is ignored.
///
/// # Safety
/// `result` must come from this library and must not be used or released
/// again afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_result(result: *mut FfiResult) {
    if result.is_null() {
        return;
    }
    let result = unsafe { Box::from_raw(result) };
    if result.found_array.is_null() {
        return;
    }

    let len = usize::try_from(result.size).unwrap_or(0);
    let array = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(result.found_array, len)) };
    for &value in array.iter() {
        if !value.is_null() {
            drop(unsafe { CString::from_raw(value) });
        }
    }
}

/// Release a string returned by [`find_prefix`]. NULL is ignored.
///
/// # Safety
/// `value` must come from [`find_prefix`] and must not be released twice.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_string(value: *mut c_char) {
    if !value.is_null() {
        drop(unsafe { CString::from_raw(value) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_strings(values: &[&str]) -> (Vec<CString>, Vec<*const c_char>) {
        let owned: Vec<CString> = values.iter().map(|v| CString::new(*v).unwrap()).collect();
        let pointers = owned.iter().map(|c| c.as_ptr()).collect();
        (owned, pointers)
    }

    unsafe fn collect(result: *mut FfiResult) -> Vec<String> {
        assert!(!result.is_null());
        let block = unsafe { &*result };
        let items = unsafe { std::slice::from_raw_parts(block.found_array, block.size as usize) };
        let values = items
            .iter()
            .map(|&p| unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string())
            .collect();
        unsafe { free_result(result) };
        values
    }

    #[test]
    fn test_find_commands_roundtrip() {
        let (_keep, dict) = c_strings(&["run", "build"]);
        let phrase = CString::new("prun build").unwrap();
        let found = unsafe { collect(find_commands(dict.as_ptr(), phrase.as_ptr(), 2)) };
        assert_eq!(found, vec!["run", "build"]);
    }

    #[test]
    fn test_empty_dictionary_null_pointer() {
        let phrase = CString::new("anything").unwrap();
        let found = unsafe { collect(multi_find_prefix(ptr::null(), phrase.as_ptr(), 0)) };
        assert!(found.is_empty());
    }

    #[test]
    fn test_invalid_inputs_return_null() {
        let phrase = CString::new("x").unwrap();
        unsafe {
            assert!(find_commands(ptr::null(), phrase.as_ptr(), 3).is_null());
            assert!(find_commands(ptr::null(), phrase.as_ptr(), -1).is_null());
        }

        let bad = [0xffu8, 0xfe, 0];
        let (_keep, dict) = c_strings(&["a"]);
        let result = unsafe { multi_find_prefix(dict.as_ptr(), bad.as_ptr().cast(), 1) };
        assert!(result.is_null());
    }

    #[test]
    fn test_find_prefix_sentinel() {
        let (_keep, dict) = c_strings(&["?"]);
        let content = CString::new("!help").unwrap();
        unsafe {
            let found = find_prefix(dict.as_ptr(), content.as_ptr(), 1);
            assert!(!found.is_null());
            assert_eq!(CStr::from_ptr(found).to_bytes(), b"");
            free_string(found);
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe {
            free_result(ptr::null_mut());
            free_string(ptr::null_mut());
        }
    }
}
