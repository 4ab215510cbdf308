//! String literal decoding for import paths.
//!
//! Import paths are written as interpreted (`"fmt"`) or raw (`` `fmt` ``)
//! string literals. The tree keeps the literal text verbatim.

/// Decode a string literal to its value.
///
/// Returns `None` when `raw` is not a well-formed literal.
pub fn unquote(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if bytes[bytes.len() - 1] != quote {
        return None;
    }
    let body = &raw[1..raw.len() - 1];

    match quote {
        b'`' => {
            if body.contains('`') {
                return None;
            }
            // Carriage returns are discarded from raw literals.
            Some(body.replace('\r', ""))
        }
        b'"' => unescape(body),
        _ => None,
    }
}

fn unescape(body: &str) -> Option<String> {
    // `\x` and octal escapes denote single bytes, so decode to bytes and
    // validate UTF-8 at the end.
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {}
            _ => {
                push_char(&mut out, c);
                continue;
            }
        }

        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => out.push(u8::try_from(take_digits(&mut chars, 2, 16)?).ok()?),
            'u' => push_char(&mut out, char::from_u32(take_digits(&mut chars, 4, 16)?)?),
            'U' => push_char(&mut out, char::from_u32(take_digits(&mut chars, 8, 16)?)?),
            d @ '0'..='7' => {
                let value = d.to_digit(8)? * 64 + take_digits(&mut chars, 2, 8)?;
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        value = value * radix + chars.next()?.to_digit(radix)?;
    }
    Some(value)
}

/// Render `value` as an interpreted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
