//! ISO-4217 numeric currency codes accepted by the gateway.

/// Alpha to numeric ISO-4217 mapping for the currencies the gateway supports.
static NUMERIC_CODES: &[(&str, &str)] = &[
    ("EUR", "978"),
    ("USD", "840"),
    ("CHF", "756"),
    ("GBP", "826"),
    ("CAD", "124"),
    ("JPY", "392"),
    ("MXP", "484"),
    ("TRL", "792"),
    ("AUD", "036"),
    ("NZD", "554"),
    ("NOK", "578"),
    ("BRC", "986"),
    ("ARP", "032"),
    ("KHR", "116"),
    ("TWD", "901"),
    ("SEK", "752"),
    ("DKK", "208"),
    ("KRW", "410"),
    ("SGD", "702"),
];

/// Returns the numeric wire code for an alpha currency code, if supported.
pub fn numeric_code(alpha: &str) -> Option<&'static str> {
    NUMERIC_CODES
        .iter()
        .find(|(code, _)| *code == alpha)
        .map(|(_, numeric)| *numeric)
}
