// C entry points for host apps. Every function returns a heap-allocated
// JSON string that must be released with `lipi_free_string`.
use crate::config::TranslateConfig;
use crate::core::classifier::resolve_script;
use crate::core::converter::Transliterator;
use crate::core::tokenizer::tokenize;
use crate::translate::translate_url;
use libc::c_char;
use log::{error, warn};
use serde::Serialize;
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Invalid UTF-8 is replaced with U+FFFD so the caller still gets cells.
fn read_arg<'a>(s: *const c_char) -> Cow<'a, str> {
    if s.is_null() {
        return Cow::Borrowed("");
    }
    let arg = unsafe { CStr::from_ptr(s) }.to_string_lossy();
    if let Cow::Owned(_) = arg {
        warn!("argument was not valid UTF-8; replaced invalid bytes");
    }
    arg
}

fn to_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot occur in serde_json output or in our URLs.
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn json_call<T: Serialize>(name: &str, fallback: &str, f: impl FnOnce() -> T) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        serde_json::to_string(&f()).unwrap_or_else(|_| fallback.to_string())
    }));
    let json = result.unwrap_or_else(|_| {
        error!("panic in {name}");
        fallback.to_string()
    });
    to_c_string(json)
}

/// `[{"content": "...", "kind": "word"|"whitespace"}, ...]`
#[no_mangle]
pub extern "C" fn lipi_tokenize(text: *const c_char) -> *mut c_char {
    let text = read_arg(text);
    json_call("lipi_tokenize", "[]", || tokenize(&text))
}

/// `["na", "ma", ...]`, one entry per character of `word`.
#[no_mangle]
pub extern "C" fn lipi_transliterate(word: *const c_char) -> *mut c_char {
    let word = read_arg(word);
    json_call("lipi_transliterate", "[]", || {
        Transliterator::new().transliterate(&word)
    })
}

/// JSON string naming the script, e.g. `"telugu"`.
#[no_mangle]
pub extern "C" fn lipi_resolve_script(word: *const c_char) -> *mut c_char {
    let word = read_arg(word);
    json_call("lipi_resolve_script", "\"unknown\"", || resolve_script(&word))
}

/// Plain (non-JSON) translate URL using the default service settings.
#[no_mangle]
pub extern "C" fn lipi_translate_url(word: *const c_char) -> *mut c_char {
    let word = read_arg(word);
    let result = catch_unwind(AssertUnwindSafe(|| {
        translate_url(&word, &TranslateConfig::default())
    }));
    match result {
        Ok(url) => to_c_string(url),
        Err(_) => {
            error!("panic in lipi_translate_url");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn lipi_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
