// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

//! penlint_ffi: C-compatible FFI layer over the Penlint engine.
//!
//! This crate exposes a stable C ABI that can be consumed by any language
//! with C FFI support (Swift, Python/ctypes, C#/P-Invoke, ...).
//!
//! Memory management rules:
//! - Opaque `Document` and `LintGroup` pointers: created by the
//!   `penlint_create_*` functions, freed exactly once by the matching
//!   `penlint_free_*` functions.
//! - Returned strings: caller must free with `penlint_free_string`.
//! - The lint array returned by `penlint_run_lints`: caller frees with
//!   `penlint_free_lints` (or each element with `penlint_free_lint` plus
//!   the array itself via `penlint_free_lints` with the elements nulled).
//! - All input strings are UTF-8 encoded, null-terminated C strings. The
//!   engine copies what it needs at construction time and never retains a
//!   reference to a caller-supplied buffer.
//! - Invalid input (null pointers, bad UTF-8, out-of-range indices) yields
//!   a null/sentinel return, never a crash.

use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use penlint_core::{core_version, Document, Lint, LintConfig, LintGroup};

// ── Helpers ─────────────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Interior NUL bytes cannot cross the C string boundary; such strings are
/// reported as allocation failure (null) rather than truncated silently.
fn str_to_c(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ── Version / strings ───────────────────────────────────────────

/// Returns the engine version. Caller frees with `penlint_free_string`.
#[no_mangle]
pub extern "C" fn penlint_version() -> *mut c_char {
    str_to_c(core_version())
}

/// Frees a string allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn penlint_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Document lifecycle ──────────────────────────────────────────

/// Creates a document from plain text.
///
/// Returns an opaque pointer, or null if `text` is null or not valid UTF-8
/// (the parse-error channel). Caller frees with `penlint_free_document`.
#[no_mangle]
pub unsafe extern "C" fn penlint_create_document(text: *const c_char) -> *mut Document {
    if text.is_null() {
        return ptr::null_mut();
    }
    let bytes = unsafe { CStr::from_ptr(text) }.to_bytes();
    match Document::from_bytes(bytes) {
        Ok(doc) => Box::into_raw(Box::new(doc)),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a document created by `penlint_create_document`.
#[no_mangle]
pub unsafe extern "C" fn penlint_free_document(doc: *mut Document) {
    if !doc.is_null() {
        drop(unsafe { Box::from_raw(doc) });
    }
}

/// Returns an owned copy of the document's text, independent of the handle.
/// Caller frees with `penlint_free_string`. Null if `doc` is null.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_document_text(doc: *const Document) -> *mut c_char {
    let Some(doc) = (unsafe { doc.as_ref() }) else {
        return ptr::null_mut();
    };
    str_to_c(doc.text())
}

/// Number of tokens in the document. 0 if `doc` is null.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_token_count(doc: *const Document) -> c_int {
    let Some(doc) = (unsafe { doc.as_ref() }) else {
        return 0;
    };
    doc.token_count() as c_int
}

// ── Lint group lifecycle ────────────────────────────────────────

/// Creates a lint group.
///
/// `rules` is an optional comma-separated list of rule ids; pass null for
/// the curated default set. Returns null if any listed rule id is unknown.
/// Caller frees with `penlint_free_lint_group`.
#[no_mangle]
pub unsafe extern "C" fn penlint_create_lint_group(rules: *const c_char) -> *mut LintGroup {
    let group = if rules.is_null() {
        Ok(LintGroup::curated())
    } else {
        let Some(list) = cstr_to_str(rules) else {
            return ptr::null_mut();
        };
        let config = LintConfig {
            rules: list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            ..LintConfig::default()
        };
        LintGroup::from_config(&config)
    };

    match group {
        Ok(group) => Box::into_raw(Box::new(group)),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a lint group created by `penlint_create_lint_group`.
#[no_mangle]
pub unsafe extern "C" fn penlint_free_lint_group(group: *mut LintGroup) {
    if !group.is_null() {
        drop(unsafe { Box::from_raw(group) });
    }
}

// ── Running lints ───────────────────────────────────────────────

/// Runs the group against the document.
///
/// On success writes the number of lints to `count` and returns a
/// heap-allocated array of owned lint pointers; the caller frees it with
/// `penlint_free_lints`. Returns null (count untouched) on null arguments.
/// Rule faults are contained by the engine and surface here as an absence
/// of that rule's lints, never as a failed call.
#[no_mangle]
pub unsafe extern "C" fn penlint_run_lints(
    doc: *const Document,
    group: *const LintGroup,
    count: *mut c_int,
) -> *mut *mut Lint {
    if count.is_null() {
        return ptr::null_mut();
    }
    let (Some(doc), Some(group)) = (unsafe { doc.as_ref() }, unsafe { group.as_ref() }) else {
        return ptr::null_mut();
    };

    let outcome = group.run(doc);
    let mut raw: Vec<*mut Lint> = outcome
        .lints
        .into_iter()
        .map(|lint| Box::into_raw(Box::new(lint)))
        .collect();

    unsafe {
        *count = raw.len() as c_int;
    }

    let result = raw.as_mut_ptr();
    std::mem::forget(raw);
    result
}

/// Frees a lint array returned by `penlint_run_lints`, including every
/// non-null element.
#[no_mangle]
pub unsafe extern "C" fn penlint_free_lints(lints: *mut *mut Lint, count: c_int) {
    if lints.is_null() || count <= 0 {
        return;
    }
    let lints = unsafe { Vec::from_raw_parts(lints, count as usize, count as usize) };
    for lint in lints {
        if !lint.is_null() {
            drop(unsafe { Box::from_raw(lint) });
        }
    }
}

/// Frees a single lint. Use with `penlint_free_lints` only after nulling
/// the freed element in the array.
#[no_mangle]
pub unsafe extern "C" fn penlint_free_lint(lint: *mut Lint) {
    if !lint.is_null() {
        drop(unsafe { Box::from_raw(lint) });
    }
}

// ── Lint inspection ─────────────────────────────────────────────

/// The lint's message. Caller frees with `penlint_free_string`.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_lint_message(lint: *const Lint) -> *mut c_char {
    let Some(lint) = (unsafe { lint.as_ref() }) else {
        return ptr::null_mut();
    };
    str_to_c(&lint.message)
}

/// The lint's rule id. Caller frees with `penlint_free_string`.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_lint_rule_id(lint: *const Lint) -> *mut c_char {
    let Some(lint) = (unsafe { lint.as_ref() }) else {
        return ptr::null_mut();
    };
    str_to_c(&lint.rule_id)
}

/// Writes the lint's span (char offsets, half-open) to `start`/`end`.
/// Returns false on null arguments.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_lint_span(
    lint: *const Lint,
    start: *mut i64,
    end: *mut i64,
) -> bool {
    if start.is_null() || end.is_null() {
        return false;
    }
    let Some(lint) = (unsafe { lint.as_ref() }) else {
        return false;
    };
    unsafe {
        *start = lint.span.start as i64;
        *end = lint.span.end as i64;
    }
    true
}

/// Number of suggested replacements. 0 if `lint` is null.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_lint_suggestion_count(lint: *const Lint) -> c_int {
    let Some(lint) = (unsafe { lint.as_ref() }) else {
        return 0;
    };
    lint.suggestion_count() as c_int
}

/// The suggestion at `index`, or null when the index is out of range.
/// Caller frees with `penlint_free_string`.
#[no_mangle]
pub unsafe extern "C" fn penlint_get_lint_suggestion_text(
    lint: *const Lint,
    index: c_int,
) -> *mut c_char {
    let Some(lint) = (unsafe { lint.as_ref() }) else {
        return ptr::null_mut();
    };
    if index < 0 {
        return ptr::null_mut();
    }
    match lint.suggestion_at(index as usize) {
        Ok(text) => str_to_c(text),
        Err(_) => ptr::null_mut(),
    }
}
