//! Pipe-delimited `key=value` codec with URL-safe base64 transport encoding.
//!
//! Field order is caller-significant: the seal is computed over the encoded
//! string, so both sides must produce the exact same byte sequence.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use super::errors::{DecodeError, EncodeError};

/// Separator between `key=value` segments.
const FIELD_SEPARATOR: char = '|';

/// Separator between a key and its value.
const KV_SEPARATOR: char = '=';

/// URL-safe base64 without padding on encode; decode tolerates both padded
/// and unpadded input but rejects bytes outside the alphabet.
const TRANSPORT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Insertion-ordered string mapping.
///
/// Preserves the order keys were first inserted in, so that
/// `decode(encode(fields))` round-trips order-preservingly. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair, replacing the value in place if the key
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Encodes ordered fields as `key=value` segments joined with `|`, then
/// applies the transport encoding.
///
/// # Errors
///
/// Returns `EncodeError::ReservedCharacter` if any key or value contains
/// `|` or `=`.
pub fn encode(fields: &FieldMap) -> Result<String, EncodeError> {
    let mut segments = Vec::with_capacity(fields.len());
    for (key, value) in fields.iter() {
        reject_reserved(key)?;
        reject_reserved(value)?;
        segments.push(format!("{key}{KV_SEPARATOR}{value}"));
    }
    let joined = segments.join(&FIELD_SEPARATOR.to_string());
    Ok(TRANSPORT.encode(joined.as_bytes()))
}

/// Reverses the transport encoding and parses the `key=value` segments.
///
/// # Errors
///
/// Returns `DecodeError` if the transport encoding is invalid, the bytes are
/// not UTF-8, a segment lacks `=`, or a key repeats with a different value.
/// A key repeating with the same value is tolerated.
pub fn decode(transport_encoded: &str) -> Result<FieldMap, DecodeError> {
    let trimmed = transport_encoded.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }

    let raw = TRANSPORT
        .decode(trimmed)
        .map_err(|e| DecodeError::Transport(e.to_string()))?;
    let text = String::from_utf8(raw).map_err(|_| DecodeError::NotUtf8)?;

    let mut fields = FieldMap::new();
    for segment in text.split(FIELD_SEPARATOR) {
        let (key, value) = segment
            .split_once(KV_SEPARATOR)
            .ok_or_else(|| DecodeError::MissingSeparator(segment.to_string()))?;
        match fields.get(key) {
            Some(existing) if existing != value => {
                return Err(DecodeError::ConflictingKey(key.to_string()));
            }
            Some(_) => {}
            None => fields.insert(key, value),
        }
    }
    Ok(fields)
}

fn reject_reserved(text: &str) -> Result<(), EncodeError> {
    for ch in [FIELD_SEPARATOR, KV_SEPARATOR] {
        if text.contains(ch) {
            return Err(EncodeError::ReservedCharacter {
                field: text.to_string(),
                ch,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ══════════════════════════════════════════════════════════════
    // Encoding Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn encode_joins_fields_in_supplied_order() {
        let map = fields(&[("merchantId", "m1"), ("amount", "5000")]);

        let encoded = encode(&map).unwrap();

        let raw = TRANSPORT.decode(&encoded).unwrap();
        assert_eq!(String::from_utf8(raw).unwrap(), "merchantId=m1|amount=5000");
    }

    #[test]
    fn encode_rejects_pipe_in_value() {
        let map = fields(&[("orderId", "INV|42")]);

        let result = encode(&map);

        assert!(matches!(
            result,
            Err(EncodeError::ReservedCharacter { ch: '|', .. })
        ));
    }

    #[test]
    fn encode_rejects_equals_in_value() {
        let map = fields(&[("returnUrl", "https://example.org/return?qfKey=abc")]);

        let result = encode(&map);

        assert!(matches!(
            result,
            Err(EncodeError::ReservedCharacter { ch: '=', .. })
        ));
    }

    #[test]
    fn encode_rejects_reserved_character_in_key() {
        let map = fields(&[("bad|key", "value")]);

        assert!(encode(&map).is_err());
    }

    #[test]
    fn encode_output_is_unpadded() {
        let map = fields(&[("a", "b")]);

        let encoded = encode(&map).unwrap();

        assert!(!encoded.ends_with('='));
    }

    // ══════════════════════════════════════════════════════════════
    // Decoding Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn decode_accepts_padded_input() {
        let padded = TRANSPORT_PADDED.encode("responseCode=00|amount=5000");

        let map = decode(&padded).unwrap();

        assert_eq!(map.get("responseCode"), Some("00"));
        assert_eq!(map.get("amount"), Some("5000"));
    }

    #[test]
    fn decode_accepts_unpadded_input() {
        let unpadded = TRANSPORT.encode("responseCode=00|orderId=INV-42");

        let map = decode(&unpadded).unwrap();

        assert_eq!(map.get("orderId"), Some("INV-42"));
    }

    #[test]
    fn decode_rejects_foreign_alphabet() {
        // '+' belongs to the standard alphabet, not the URL-safe one.
        let result = decode("ab+cd");

        assert!(matches!(result, Err(DecodeError::Transport(_))));
    }

    #[test]
    fn decode_rejects_empty_payload() {
        assert_eq!(decode(""), Err(DecodeError::Empty));
        assert_eq!(decode("   "), Err(DecodeError::Empty));
    }

    #[test]
    fn decode_rejects_segment_without_separator() {
        let encoded = TRANSPORT.encode("responseCode=00|garbage");

        let result = decode(&encoded);

        assert_eq!(result, Err(DecodeError::MissingSeparator("garbage".into())));
    }

    #[test]
    fn decode_rejects_conflicting_duplicate_key() {
        let encoded = TRANSPORT.encode("amount=5000|amount=9999");

        let result = decode(&encoded);

        assert_eq!(result, Err(DecodeError::ConflictingKey("amount".into())));
    }

    #[test]
    fn decode_tolerates_identical_duplicate_key() {
        let encoded = TRANSPORT.encode("amount=5000|amount=5000");

        let map = decode(&encoded).unwrap();

        assert_eq!(map.get("amount"), Some("5000"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn decode_splits_on_first_equals_only() {
        let encoded = TRANSPORT.encode("note=a:b:c");

        let map = decode(&encoded).unwrap();

        assert_eq!(map.get("note"), Some("a:b:c"));
    }

    #[test]
    fn decode_rejects_non_utf8_bytes() {
        let encoded = TRANSPORT.encode([0xff, 0xfe, 0x00]);

        assert_eq!(decode(&encoded), Err(DecodeError::NotUtf8));
    }

    // ══════════════════════════════════════════════════════════════
    // FieldMap Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn field_map_preserves_insertion_order() {
        let mut map = FieldMap::new();
        map.insert("z", "1");
        map.insert("a", "2");
        map.insert("m", "3");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn field_map_insert_replaces_in_place() {
        let mut map = FieldMap::new();
        map.insert("first", "1");
        map.insert("second", "2");
        map.insert("first", "updated");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["first", "second"]);
        assert_eq!(map.get("first"), Some("updated"));
    }

    // ══════════════════════════════════════════════════════════════
    // Round-Trip Property
    // ══════════════════════════════════════════════════════════════

    /// Padded engine only used to produce padded test fixtures.
    const TRANSPORT_PADDED: GeneralPurpose = GeneralPurpose::new(
        &alphabet::URL_SAFE,
        GeneralPurposeConfig::new(),
    );

    proptest! {
        #[test]
        fn round_trip_preserves_fields_and_order(
            pairs in proptest::collection::vec(
                ("[a-zA-Z][a-zA-Z0-9]{0,11}", "[a-zA-Z0-9 _.:/-]{0,16}"),
                1..8,
            )
        ) {
            let map: FieldMap = pairs
                .into_iter()
                .collect();

            let decoded = decode(&encode(&map).unwrap()).unwrap();

            prop_assert_eq!(decoded, map);
        }
    }
}
