use querybridge_errors::BridgeError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use url::Url;

/// One decoded `key=value` pair.
///
/// Both halves are kept twice: as the decoded `String` and as UTF-16 code
/// units, since guests index characters the way browser strings do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEntry {
    key: String,
    value: String,
    key_units: Vec<u16>,
    value_units: Vec<u16>,
}

impl ParamEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let key_units = key.encode_utf16().collect();
        let value_units = value.encode_utf16().collect();
        Self {
            key,
            value,
            key_units,
            value_units,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key_units(&self) -> &[u16] {
        &self.key_units
    }

    pub fn value_units(&self) -> &[u16] {
        &self.value_units
    }
}

impl Serialize for ParamEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParamEntry", 4)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("key_length", &self.key_units.len())?;
        state.serialize_field("value_length", &self.value_units.len())?;
        state.end()
    }
}

/// Ordered query parameters. Duplicate keys stay separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<ParamEntry>,
}

impl QueryParams {
    /// Parse a query string with `URLSearchParams` rules: one leading `?` is
    /// dropped, `+` is a space and percent escapes are decoded.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let entries = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| ParamEntry::new(key, value))
            .collect();
        Self { entries }
    }

    /// Capture the query component of a full URL.
    pub fn from_url(raw: &str) -> Result<Self, BridgeError> {
        let url = Url::parse(raw).map_err(|e| BridgeError::BadUrl(format!("{raw}: {e}")))?;
        Ok(Self::parse(url.query().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParamEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamEntry> {
        self.entries.iter()
    }

    /// First value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(ParamEntry::value)
    }
}

impl FromIterator<ParamEntry> for QueryParams {
    fn from_iter<I: IntoIterator<Item = ParamEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a ParamEntry;
    type IntoIter = std::slice::Iter<'a, ParamEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
