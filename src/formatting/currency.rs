use rust_decimal::{Decimal, RoundingStrategy};

pub const NOT_AVAILABLE: &str = "N/A";

const SYMBOL: &str = "Rp";
const NBSP: char = '\u{a0}';

/// Rupiah in id-ID style, e.g. "Rp 150.000" (non-breaking space).
pub fn format_currency(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format_rupiah(amount),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let number = match digits.split_once('.') {
        Some((whole, fraction)) => format!("{},{}", group_thousands(whole), fraction),
        None => group_thousands(&digits),
    };

    format!("{}{}{}{}", sign, SYMBOL, NBSP, number)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
