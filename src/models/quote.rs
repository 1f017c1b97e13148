//! Quote rules shared by both frontends.
//!
//! Unparsable text is never an error here: amounts and rates that do not
//! parse as base-10 integers count as zero.

/// Shown in place of a quote when the interest rate could not be fetched.
pub const INTEREST_UNAVAILABLE: &str = "Could not get interest. Sorry!";

/// Shown as the backend version when the version could not be fetched.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Parses a form value into an amount. Anything that is not a base-10
/// integer yields 0; negative values pass through unclamped.
pub fn parse_amount(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// Parses a backend response body into an interest rate, same policy as
/// [`parse_amount`].
pub fn parse_interest_rate(body: &str) -> i64 {
    body.parse().unwrap_or(0)
}

/// Builds the quote sentence, or an empty string when there is nothing to
/// quote.
pub fn compute_quote(amount: i64, interest_rate: i64) -> String {
    if amount <= 0 {
        return String::new();
    }

    // truncates toward zero
    let total = amount.wrapping_mul(interest_rate) / 100;
    format!(
        "With rate {}% you will pay  {} extra interest",
        interest_rate, total
    )
}
