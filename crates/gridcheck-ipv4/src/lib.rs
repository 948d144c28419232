//! Syntactic validation of dotted-quad IPv4 address strings.
//!
//! A candidate is valid iff splitting it on the literal `.` yields exactly
//! four segments, each of which is a plain decimal rendering of an integer
//! in `0..=255`: one to three ASCII digits, no sign, no whitespace, and no
//! leading zero unless the segment is exactly `0`.
//!
//! Both functions are total: every input, however malformed, maps to a
//! return value. Leading, trailing, or doubled dots produce empty segments,
//! which fail the length rule like any other bad segment — there is no
//! special casing.
//!
//! # Examples
//!
//! ```
//! use gridcheck_ipv4::{is_valid, parse_quad};
//!
//! assert!(is_valid("192.168.1.1"));
//! assert!(is_valid("0.0.0.0"));
//!
//! assert!(!is_valid("192.168.01.1")); // leading zero
//! assert!(!is_valid("192.168.1.256")); // out of range
//! assert!(!is_valid("192.168..1")); // empty segment
//!
//! assert_eq!(parse_quad("10.0.0.1"), Some([10, 0, 0, 1]));
//! ```

/// Checks whether `candidate` is a well-formed dotted-quad IPv4 address.
///
/// Equivalent to `parse_quad(candidate).is_some()`.
///
/// # Examples
///
/// ```
/// use gridcheck_ipv4::is_valid;
///
/// assert!(is_valid("255.255.255.255"));
/// assert!(!is_valid("1.2.3"));
/// assert!(!is_valid("1.2.3.4.5"));
/// assert!(!is_valid(" 192.168.1.1"));
/// ```
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    parse_quad(candidate).is_some()
}

/// Parses `candidate` into its four octets.
///
/// Returns `Some` exactly when `candidate` is a well-formed dotted-quad
/// address, carrying the decoded octets in order.
///
/// # Examples
///
/// ```
/// use gridcheck_ipv4::parse_quad;
///
/// assert_eq!(parse_quad("192.168.1.1"), Some([192, 168, 1, 1]));
/// assert_eq!(parse_quad("0.0.0.0"), Some([0, 0, 0, 0]));
/// assert_eq!(parse_quad("192.168.1.256"), None);
/// ```
#[must_use]
pub fn parse_quad(candidate: &str) -> Option<[u8; 4]> {
    let mut octets = [0; 4];
    let mut segments = candidate.split('.');
    for octet in &mut octets {
        *octet = parse_octet(segments.next()?)?;
    }
    if segments.next().is_some() {
        return None;
    }
    Some(octets)
}

/// Decodes one dot-delimited segment, rejecting empty, oversized,
/// non-digit, zero-padded, and out-of-range forms.
fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || segment.len() > 3 {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    // at most three digits, so the widened parse cannot overflow
    let value: u16 = segment.parse().ok()?;
    u8::try_from(value).ok()
}
