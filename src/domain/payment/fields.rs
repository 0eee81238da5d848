//! Wire field names shared by the outbound builder and inbound verifier.

pub const MERCHANT_ID: &str = "merchantId";
pub const KEY_VERSION: &str = "keyVersion";
pub const NORMAL_RETURN_URL: &str = "normalReturnUrl";
pub const AUTOMATIC_RESPONSE_URL: &str = "automaticResponseUrl";
pub const CUSTOMER_ID: &str = "customerId";
pub const ORDER_ID: &str = "orderId";
pub const AMOUNT: &str = "amount";
pub const CURRENCY_CODE: &str = "currencyCode";
pub const RESPONSE_CODE: &str = "responseCode";
pub const TRANSACTION_REFERENCE: &str = "transactionReference";
