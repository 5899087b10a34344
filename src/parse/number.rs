//! Single-cell numeric parsing.
//!
//! Accepts the shapes people paste out of spreadsheets: optional sign,
//! optional currency symbol (before or after the sign), digits with `.` and
//! `,` separators, optional trailing `%`. Commas are always treated as
//! grouping separators and stripped; the percent sign is ignored rather
//! than converted to a fraction.

/// Currency symbols allowed as a single prefix
const CURRENCY_SYMBOLS: [char; 5] = ['$', '\u{20AC}', '\u{00A3}', '\u{00A5}', '\u{20A9}'];

/// Parse one text cell into a number.
///
/// Returns `None` for anything that does not match
/// `[sign]? [currency]? [sign]? [digits , .]+ [%]?` or whose digit body is
/// malformed (no digits, repeated decimal points). When a sign appears both
/// before and after the currency symbol, the first one wins.
///
/// # Examples
/// - `"424."` -> `Some(424.0)`
/// - `"-$1"` -> `Some(-1.0)`
/// - `"$-1"` -> `Some(-1.0)`
/// - `"1,234.5"` -> `Some(1234.5)`
/// - `"$"` -> `None`
pub fn try_parse_number(text: &str) -> Option<f64> {
    let mut rest = text;

    let outer_sign = take_sign(&mut rest);
    if let Some(symbol) = rest.chars().next() {
        if CURRENCY_SYMBOLS.contains(&symbol) {
            rest = &rest[symbol.len_utf8()..];
        }
    }
    let inner_sign = take_sign(&mut rest);

    let rest = rest.strip_suffix('%').unwrap_or(rest);
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }
    if !rest.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let sign = outer_sign.or(inner_sign).unwrap_or("");
    let body: String = rest.chars().filter(|&c| c != ',').collect();
    format!("{sign}{body}").parse::<f64>().ok()
}

/// Consume a leading `+`/`-` and return it
fn take_sign<'a>(rest: &mut &'a str) -> Option<&'a str> {
    match rest.as_bytes().first() {
        Some(b'-') => {
            let sign = &rest[..1];
            *rest = &rest[1..];
            Some(sign)
        }
        Some(b'+') => {
            let sign = &rest[..1];
            *rest = &rest[1..];
            Some(sign)
        }
        _ => None,
    }
}
