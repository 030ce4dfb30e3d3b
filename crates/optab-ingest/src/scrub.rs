//! Cell scrubbing shared by both decoders.
//!
//! Raw exports carry a UTF-8 byte-order-mark and the SOH/STX control
//! characters (0x01, 0x02) left behind by the upstream extraction job.

const SCRUB_CHARS: [char; 3] = ['\u{feff}', '\u{01}', '\u{02}'];

/// Normalize a header cell: scrub characters removed, trimmed, lowercased.
pub(crate) fn normalize_header(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|ch| !SCRUB_CHARS.contains(ch)).collect();
    cleaned.trim().to_lowercase()
}

/// Normalize a data cell: scrub characters become a single space so the
/// tokens around them never merge, then the result is trimmed.
pub(crate) fn normalize_cell(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|ch| if SCRUB_CHARS.contains(&ch) { ' ' } else { ch })
        .collect();
    cleaned.trim().to_string()
}
