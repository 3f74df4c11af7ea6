/// Split `s` at the first occurrence of `c`, dropping the separator.
///
/// Returns `None` if `c` doesn't occur in `s`.
pub(crate) fn split_once<'a>(s: &'a [u8], c: u8) -> Option<(&'a [u8], &'a [u8])> {
    s.iter()
        .position(|b| *b == c)
        .map(|n| (&s[0..n], &s[n + 1..]))
}

/// Parse a canonical decimal number: ASCII digits only, no sign, and no
/// leading zero unless the number is zero itself.
pub(crate) fn parse_decimal(s: &[u8]) -> Option<u64> {
    if s.is_empty() || (s.len() > 1 && s[0] == b'0') {
        return None;
    }

    s.iter().try_fold(0u64, |acc, c| {
        if c.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u64::from(c - b'0'))
        } else {
            None
        }
    })
}
