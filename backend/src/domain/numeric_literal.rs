//! Grammar for text that counts as a number.
//!
//! Trimming strips the ECMAScript whitespace and line terminator set from
//! both ends: Unicode `White_Space` without U+0085 (NEL), plus the
//! byte-order mark (U+FEFF). The trimmed text is numeric when it matches:
//!
//! ```text
//! StrNumericLiteral  ::= NonDecimalInteger | StrDecimalLiteral
//! NonDecimalInteger  ::= ("0x" | "0X") HexDigit+
//!                      | ("0o" | "0O") OctDigit+
//!                      | ("0b" | "0B") BinDigit+
//! StrDecimalLiteral  ::= Sign? ( "Infinity" | DecimalBody Exponent? )
//! DecimalBody        ::= Digit+ ( "." Digit* )? | "." Digit+
//! Exponent           ::= ("e" | "E") Sign? Digit+
//! Sign               ::= "+" | "-"
//! ```
//!
//! Digits are ASCII. `NaN`, digit separators and signed non-decimal integers
//! are rejected.

const SIGNS: [char; 2] = ['+', '-'];

/// Trim the whitespace the grammar ignores around a literal.
///
/// # Examples
/// ```
/// use hello_kit::domain::numeric_literal::trim_literal;
///
/// assert_eq!(trim_literal("\u{feff}  456 \n"), "456");
/// ```
#[must_use]
pub fn trim_literal(text: &str) -> &str {
    text.trim_matches(is_literal_padding)
}

fn is_literal_padding(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Return whether `text` is a complete numeric literal once trimmed.
///
/// Blank text is never numeric.
///
/// # Examples
/// ```
/// use hello_kit::domain::numeric_literal::is_numeric_literal;
///
/// assert!(is_numeric_literal("  456  "));
/// assert!(is_numeric_literal("-1.5e3"));
/// assert!(!is_numeric_literal("abc123"));
/// assert!(!is_numeric_literal("   "));
/// ```
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    let literal = trim_literal(text);
    !literal.is_empty() && (is_non_decimal_integer(literal) || is_decimal_literal(literal))
}

fn is_non_decimal_integer(literal: &str) -> bool {
    let radix = match literal.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return false,
    };
    literal
        .get(2..)
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}

fn is_decimal_literal(literal: &str) -> bool {
    let unsigned = literal.strip_prefix(SIGNS).unwrap_or(literal);
    if unsigned == "Infinity" {
        return true;
    }

    match unsigned.split_once(['e', 'E']) {
        Some((body, exponent)) => is_decimal_body(body) && is_exponent(exponent),
        None => is_decimal_body(unsigned),
    }
}

fn is_decimal_body(body: &str) -> bool {
    match body.split_once('.') {
        Some((integral, fraction)) => {
            !(integral.is_empty() && fraction.is_empty())
                && all_ascii_digits(integral)
                && all_ascii_digits(fraction)
        }
        None => !body.is_empty() && all_ascii_digits(body),
    }
}

fn is_exponent(exponent: &str) -> bool {
    let digits = exponent.strip_prefix(SIGNS).unwrap_or(exponent);
    !digits.is_empty() && all_ascii_digits(digits)
}

fn all_ascii_digits(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_digit())
}
