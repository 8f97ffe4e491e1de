//! Reads the host page's query parameters from inside a WASM module.
//!
//! The host exposes five functions in the `env` namespace; [`HostParams`]
//! wraps them and [`read_params`] rebuilds the `(key, value)` pairs.

#[cfg(target_arch = "wasm32")]
mod ffi {
    #[link(wasm_import_module = "env")]
    extern "C" {
        pub fn param_count() -> i32;
        pub fn param_key_length(entry: i32) -> i32;
        pub fn param_key_letter(entry: i32, index: i32) -> i32;
        pub fn param_value_length(entry: i32) -> i32;
        pub fn param_value_letter(entry: i32, index: i32) -> i32;
    }
}

/// The five host accessors. Indices must stay below the reported counts.
pub trait ParamSource {
    fn count(&self) -> i32;
    fn key_length(&self, entry: i32) -> i32;
    fn key_letter(&self, entry: i32, index: i32) -> i32;
    fn value_length(&self, entry: i32) -> i32;
    fn value_letter(&self, entry: i32, index: i32) -> i32;
}

/// Accessors backed by the host imports.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostParams;

// SAFETY: each import takes and returns plain `i32`s and touches no guest
// memory. Out-of-range indices trap in the host instead of returning.
#[cfg(target_arch = "wasm32")]
impl ParamSource for HostParams {
    fn count(&self) -> i32 {
        unsafe { ffi::param_count() }
    }

    fn key_length(&self, entry: i32) -> i32 {
        unsafe { ffi::param_key_length(entry) }
    }

    fn key_letter(&self, entry: i32, index: i32) -> i32 {
        unsafe { ffi::param_key_letter(entry, index) }
    }

    fn value_length(&self, entry: i32) -> i32 {
        unsafe { ffi::param_value_length(entry) }
    }

    fn value_letter(&self, entry: i32, index: i32) -> i32 {
        unsafe { ffi::param_value_letter(entry, index) }
    }
}

/// All parameters in host order, duplicates included.
pub fn read_params<S: ParamSource + ?Sized>(source: &S) -> Vec<(String, String)> {
    (0..source.count())
        .map(|entry| (read_key(source, entry), read_value(source, entry)))
        .collect()
}

/// First value stored under `key`, without decoding the other values.
pub fn find_param<S: ParamSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    (0..source.count())
        .find(|&entry| read_key(source, entry) == key)
        .map(|entry| read_value(source, entry))
}

pub fn read_key<S: ParamSource + ?Sized>(source: &S, entry: i32) -> String {
    decode(source.key_length(entry), |j| source.key_letter(entry, j))
}

pub fn read_value<S: ParamSource + ?Sized>(source: &S, entry: i32) -> String {
    decode(source.value_length(entry), |j| source.value_letter(entry, j))
}

fn decode(len: i32, letter: impl Fn(i32) -> i32) -> String {
    // Hosts hand out UTF-16 code units; unpaired surrogates become U+FFFD.
    let units = (0..len).map(|j| letter(j) as u16);
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
