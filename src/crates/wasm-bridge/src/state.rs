use crate::query::{ParamEntry, QueryParams};
use querybridge_errors::internal::{IndexOutOfRange, ParamField};
use querybridge_errors::BridgeError;

/// Parameters captured for one instance, read by the host imports.
///
/// Accessors take the raw `i32` indices arriving over the WASM ABI. Guests
/// are expected to stay within `entry_count` and the reported lengths; any
/// other index (negative ones included) yields `IndexOutOfRange`.
#[derive(Debug, Clone, Default)]
pub struct BridgeState {
    params: QueryParams,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_query(query: &str) -> Self {
        Self::from_params(QueryParams::parse(query))
    }

    pub fn from_params(params: QueryParams) -> Self {
        Self { params }
    }

    /// Capture the current page's query parameters.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Result<Self, BridgeError> {
        let search = crate::location::current_search()?;
        Ok(Self::from_query(&search))
    }

    /// Replace the captured parameters.
    pub fn initialize(&mut self, query: &str) {
        self.initialize_with(QueryParams::parse(query));
    }

    pub fn initialize_with(&mut self, params: QueryParams) {
        tracing::debug!(entries = params.len(), "Captured query parameters");
        self.params = params;
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn entry_count(&self) -> i32 {
        clamp_len(self.params.len())
    }

    pub fn key_length(&self, entry: i32) -> Result<i32, BridgeError> {
        Ok(clamp_len(self.entry(entry)?.key_units().len()))
    }

    pub fn key_char_code(&self, entry: i32, index: i32) -> Result<i32, BridgeError> {
        let units = self.entry(entry)?.key_units();
        code_unit_at(units, index, ParamField::Key)
    }

    pub fn value_length(&self, entry: i32) -> Result<i32, BridgeError> {
        Ok(clamp_len(self.entry(entry)?.value_units().len()))
    }

    pub fn value_char_code(&self, entry: i32, index: i32) -> Result<i32, BridgeError> {
        let units = self.entry(entry)?.value_units();
        code_unit_at(units, index, ParamField::Value)
    }

    fn entry(&self, entry: i32) -> Result<&ParamEntry, BridgeError> {
        usize::try_from(entry)
            .ok()
            .and_then(|i| self.params.get(i))
            .ok_or_else(|| out_of_range(ParamField::Entry, entry, self.params.len()))
    }
}

fn code_unit_at(units: &[u16], index: i32, field: ParamField) -> Result<i32, BridgeError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| units.get(i))
        .map(|unit| i32::from(*unit))
        .ok_or_else(|| out_of_range(field, index, units.len()))
}

fn out_of_range(field: ParamField, index: i32, len: usize) -> BridgeError {
    BridgeError::IndexOutOfRange(IndexOutOfRange {
        field,
        index: i64::from(index),
        len,
    })
}

fn clamp_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault(err: BridgeError) -> IndexOutOfRange {
        match err {
            BridgeError::IndexOutOfRange(fault) => fault,
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    fn key_of(state: &BridgeState, entry: i32) -> String {
        let len = state.key_length(entry).unwrap();
        let units: Vec<u16> = (0..len)
            .map(|j| state.key_char_code(entry, j).unwrap() as u16)
            .collect();
        String::from_utf16(&units).unwrap()
    }

    #[test]
    fn counts_and_lengths() {
        let state = BridgeState::from_query("?a=1&bb=");
        assert_eq!(state.entry_count(), 2);
        assert_eq!(state.key_length(0).unwrap(), 1);
        assert_eq!(state.value_length(0).unwrap(), 1);
        assert_eq!(state.key_length(1).unwrap(), 2);
        assert_eq!(state.value_length(1).unwrap(), 0);
    }

    #[test]
    fn char_codes_use_code_units() {
        let state = BridgeState::from_query("?a=%E2%82%AC%F0%9F%98%80");
        assert_eq!(state.key_char_code(0, 0).unwrap(), 'a' as i32);
        assert_eq!(state.value_length(0).unwrap(), 3);
        assert_eq!(state.value_char_code(0, 0).unwrap(), 0x20AC);
        assert_eq!(state.value_char_code(0, 1).unwrap(), 0xD83D);
        assert_eq!(state.value_char_code(0, 2).unwrap(), 0xDE00);
    }

    #[test]
    fn keys_round_trip_through_char_codes() {
        let state = BridgeState::from_query("?caf%C3%A9=1&%F0%9F%8E%B2=2&plain=3");
        assert_eq!(key_of(&state, 0), "café");
        assert_eq!(key_of(&state, 1), "\u{1F3B2}");
        assert_eq!(key_of(&state, 2), "plain");
    }

    #[test]
    fn empty_state_has_no_entries() {
        let state = BridgeState::new();
        assert_eq!(state.entry_count(), 0);
        let fault = fault(state.key_length(0).unwrap_err());
        assert_eq!(fault.field, ParamField::Entry);
        assert_eq!(fault.len, 0);
    }

    #[test]
    fn entry_index_out_of_range() {
        let state = BridgeState::from_query("?a=1");
        let fault = fault(state.value_length(1).unwrap_err());
        assert_eq!(fault.field, ParamField::Entry);
        assert_eq!(fault.index, 1);
        assert_eq!(fault.len, 1);
    }

    #[test]
    fn negative_indices_are_out_of_range() {
        let state = BridgeState::from_query("?a=1");
        assert_eq!(fault(state.key_length(-1).unwrap_err()).index, -1);

        let fault = fault(state.key_char_code(0, -3).unwrap_err());
        assert_eq!(fault.field, ParamField::Key);
        assert_eq!(fault.index, -3);
    }

    #[test]
    fn char_index_past_end_reports_field() {
        let state = BridgeState::from_query("?key=v");
        let key_fault = fault(state.key_char_code(0, 3).unwrap_err());
        assert_eq!(key_fault.field, ParamField::Key);
        assert!(state.key_char_code(0, 2).is_ok());

        let value_fault = fault(state.value_char_code(0, 1).unwrap_err());
        assert_eq!(value_fault.field, ParamField::Value);
        assert_eq!(value_fault.len, 1);
    }

    #[test]
    fn initialize_overwrites_previous_capture() {
        let mut state = BridgeState::from_query("?a=1&b=2&c=3");
        state.initialize("?z=9");
        assert_eq!(state.entry_count(), 1);
        assert_eq!(key_of(&state, 0), "z");

        state.initialize("");
        assert_eq!(state.entry_count(), 0);
    }
}
