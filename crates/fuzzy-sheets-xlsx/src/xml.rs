//! Small helpers shared by the part readers and writers

use std::borrow::Cow;

use quick_xml::events::BytesStart;

/// Unescaped value of the attribute named `key`, if present
pub(crate) fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Boolean attribute in the OOXML sense: absent, `1` or `true` mean set
pub(crate) fn flag(e: &BytesStart<'_>, key: &[u8]) -> bool {
    attr(e, key).map_or(true, |v| v == "1" || v.eq_ignore_ascii_case("true"))
}

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Character encoded by an Excel `_xHHHH_` sequence at the start of `s`
fn escaped_char(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || !s.starts_with("_x") || bytes[6] != b'_' {
        return None;
    }
    let hex = s.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Decode Excel's `_xHHHH_` escapes (`_x000D_` is CR, `_x005F_` an underscore)
pub(crate) fn decode_excel_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains("_x") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("_x") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match escaped_char(tail) {
            Some(c) => {
                out.push(c);
                rest = &tail[7..];
            }
            None => {
                out.push('_');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    (c < ' ' && c != '\t' && c != '\n') || c == '\u{FFFE}' || c == '\u{FFFF}'
}

/// Encode characters XML text cannot carry as `_xHHHH_`
///
/// CR is encoded too since XML parsers normalize it to LF. An underscore that
/// would otherwise start a valid escape becomes `_x005F_`.
pub(crate) fn encode_excel_escapes(s: &str) -> Cow<'_, str> {
    if !s.chars().any(needs_escape) && !s.contains("_x") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for (i, c) in s.char_indices() {
        if needs_escape(c) || (c == '_' && escaped_char(&s[i..]).is_some()) {
            out.push_str(&format!("_x{:04X}_", c as u32));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
