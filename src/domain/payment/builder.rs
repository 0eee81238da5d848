//! Outbound request builder.
//!
//! Assembles the canonical ordered field list, encodes it and seals it.
//! The field order below is the gateway's expected order; the seal depends
//! on it, so it must be reproduced exactly.

use secrecy::SecretString;

use crate::domain::wire::{self, FieldMap};

use super::currency;
use super::errors::RequestError;
use super::fields;
use super::request::{PaymentRequest, SignedPayload};

/// Builds signed payloads for one merchant configuration.
///
/// Deterministic: identical input produces identical output. No randomness
/// and no internally generated timestamps.
pub struct RequestBuilder {
    key_version: u32,
    interface_version: String,
}

impl RequestBuilder {
    pub fn new(key_version: u32, interface_version: impl Into<String>) -> Self {
        Self {
            key_version,
            interface_version: interface_version.into(),
        }
    }

    /// Assembles, encodes and seals a payment request.
    ///
    /// Canonical field order: merchantId, keyVersion, normalReturnUrl,
    /// automaticResponseUrl, customerId, orderId, amount, currencyCode,
    /// then any extra fields in caller order.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` for an empty merchant id, a missing or
    /// unsupported currency, or field content carrying wire delimiters.
    /// Empty order references are unrepresentable by `OrderReference`.
    pub fn build(
        &self,
        request: &PaymentRequest,
        secret: &SecretString,
    ) -> Result<SignedPayload, RequestError> {
        if request.merchant_id.is_empty() {
            return Err(RequestError::MissingMerchantId);
        }
        if request.currency.is_empty() {
            return Err(RequestError::MissingCurrency);
        }
        let currency_code = currency::numeric_code(&request.currency)
            .ok_or_else(|| RequestError::UnsupportedCurrency(request.currency.clone()))?;

        let mut map = FieldMap::new();
        map.insert(fields::MERCHANT_ID, &request.merchant_id);
        map.insert(fields::KEY_VERSION, self.key_version.to_string());
        map.insert(fields::NORMAL_RETURN_URL, &request.return_url);
        map.insert(fields::AUTOMATIC_RESPONSE_URL, &request.notify_url);
        map.insert(fields::CUSTOMER_ID, &request.customer_id);
        map.insert(fields::ORDER_ID, request.order_reference.as_str());
        map.insert(fields::AMOUNT, request.amount.to_string());
        map.insert(fields::CURRENCY_CODE, currency_code);
        for (key, value) in &request.extra_fields {
            map.insert(key, value);
        }

        let data = wire::encode(&map)?;
        let seal = wire::compute_seal(&data, secret);
        Ok(SignedPayload {
            data,
            seal,
            encoding: "base64".to_string(),
            interface_version: self.interface_version.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderReference;
    use crate::domain::wire::{decode, verify_seal};

    fn secret() -> SecretString {
        SecretString::new("s3cr3t".to_string())
    }

    fn request() -> PaymentRequest {
        PaymentRequest {
            merchant_id: "merchant-001".into(),
            order_reference: OrderReference::new("INV-42").unwrap(),
            amount: 5000,
            currency: "EUR".into(),
            return_url: "https://shop.example.org/return".into(),
            notify_url: "https://shop.example.org/ipn".into(),
            customer_id: "cust-7".into(),
            extra_fields: vec![("customerLanguage".into(), "en".into())],
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Field Assembly Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn build_uses_canonical_field_order() {
        let payload = RequestBuilder::new(1, "HP_2.3").build(&request(), &secret()).unwrap();

        let map = decode(&payload.data).unwrap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();

        assert_eq!(
            keys,
            vec![
                "merchantId",
                "keyVersion",
                "normalReturnUrl",
                "automaticResponseUrl",
                "customerId",
                "orderId",
                "amount",
                "currencyCode",
                "customerLanguage",
            ]
        );
    }

    #[test]
    fn build_writes_numeric_currency_and_minor_units() {
        let payload = RequestBuilder::new(1, "HP_2.3").build(&request(), &secret()).unwrap();

        let map = decode(&payload.data).unwrap();

        assert_eq!(map.get("currencyCode"), Some("978"));
        assert_eq!(map.get("amount"), Some("5000"));
        assert_eq!(map.get("orderId"), Some("INV-42"));
    }

    #[test]
    fn build_seals_the_transport_encoded_data() {
        let payload = RequestBuilder::new(1, "HP_2.3").build(&request(), &secret()).unwrap();

        assert!(verify_seal(&payload.data, &secret(), &payload.seal));
        assert_eq!(payload.encoding, "base64");
        assert_eq!(payload.interface_version, "HP_2.3");
    }

    #[test]
    fn build_is_deterministic() {
        let builder = RequestBuilder::new(1, "HP_2.3");

        let first = builder.build(&request(), &secret()).unwrap();
        let second = builder.build(&request(), &secret()).unwrap();

        assert_eq!(first, second);
    }

    // ══════════════════════════════════════════════════════════════
    // Validation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn build_rejects_empty_merchant_id() {
        let mut req = request();
        req.merchant_id.clear();

        let result = RequestBuilder::new(1, "HP_2.3").build(&req, &secret());

        assert_eq!(result.unwrap_err(), RequestError::MissingMerchantId);
    }

    #[test]
    fn build_rejects_missing_currency() {
        let mut req = request();
        req.currency.clear();

        let result = RequestBuilder::new(1, "HP_2.3").build(&req, &secret());

        assert_eq!(result.unwrap_err(), RequestError::MissingCurrency);
    }

    #[test]
    fn build_rejects_unsupported_currency() {
        let mut req = request();
        req.currency = "XTS".into();

        let result = RequestBuilder::new(1, "HP_2.3").build(&req, &secret());

        assert_eq!(
            result.unwrap_err(),
            RequestError::UnsupportedCurrency("XTS".into())
        );
    }

    #[test]
    fn build_rejects_url_carrying_wire_delimiters() {
        let mut req = request();
        req.return_url = "https://shop.example.org/return?qfKey=abc".into();

        let result = RequestBuilder::new(1, "HP_2.3").build(&req, &secret());

        assert!(matches!(result, Err(RequestError::Encode(_))));
    }
}
