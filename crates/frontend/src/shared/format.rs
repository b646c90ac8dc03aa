//! Display formatting for amounts and guest details

/// Rupee amount with two decimals
///
/// ```
/// # use frontdesk_frontend::shared::format::format_currency;
/// assert_eq!(format_currency(1500.0), "₹1500.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Group an Aadhar number as `XXXX XXXX XXXX`. Existing whitespace is ignored.
pub fn format_aadhar(value: &str) -> String {
    let chars: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    chars
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Upper-case the first character of every word, leave the rest as typed
pub fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_word = false;
    for c in value.chars() {
        let word = is_word_char(c);
        if word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = word;
    }
    out
}

/// Lenient amount parse: blank or garbage counts as zero
pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Paid plus remaining, only when there is something to show
pub fn compute_total(paid: &str, remaining: &str) -> Option<f64> {
    let total = parse_amount(paid) + parse_amount(remaining);
    (total > 0.0).then_some(total)
}
