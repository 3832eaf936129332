//! Character set sniffing for quote pages.
//!
//! The site has served Shift_JIS, EUC-JP and UTF-8 over the years, and the
//! `Content-Type` charset has not always matched the bytes. The body is
//! decoded with an encoding detected from the bytes themselves.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Picks the encoding of `bytes`: a byte order mark wins, otherwise the
/// detector's guess, hinted with the top-level domain the page came from.
pub fn sniff_encoding(bytes: &[u8], tld: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(tld.filter(|t| is_plain_tld(t)).map(str::as_bytes), true)
}

/// Decodes a response body with the sniffed encoding.
///
/// Malformed sequences become U+FFFD; the rest of the page is kept so the
/// fields that did survive can still be extracted.
pub fn decode_body(bytes: &[u8], tld: Option<&str>) -> String {
    let encoding = sniff_encoding(bytes, tld);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!("body has bytes malformed for {}, replaced", used.name());
    } else {
        tracing::debug!("decoded {} bytes as {}", bytes.len(), used.name());
    }
    text.into_owned()
}

/// Last label of a host name, when it looks like a TLD the detector accepts.
pub fn tld_of(host: &str) -> Option<&str> {
    host.rsplit('.').next().filter(|t| is_plain_tld(t))
}

fn is_plain_tld(tld: &str) -> bool {
    !tld.is_empty() && tld.bytes().all(|b| b.is_ascii_lowercase())
}
