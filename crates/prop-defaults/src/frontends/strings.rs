//! Decoding of string and template literal tokens
//!
//! Decoding works on UTF-16 code units, the way the language defines string
//! values, so that escaped surrogate pairs (`"\uD83D\uDE00"`) combine into one
//! character. Unpaired surrogates become U+FFFD.

/// Decode a quoted string token, quotes included.
pub(crate) fn decode_string(raw: &str) -> String {
    decode(strip_delimiters(raw), false)
}

/// Decode a template token without substitutions, backticks included.
pub(crate) fn decode_template(raw: &str) -> String {
    decode(strip_delimiters(raw), true)
}

fn strip_delimiters(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'' | '`') => {
            chars.as_str()
        }
        _ => raw,
    }
}

fn decode(body: &str, template: bool) -> String {
    let mut units: Vec<u16> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => decode_escape(&mut chars, &mut units),
            // Template literals normalize raw line terminators.
            '\r' if template => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                units.push(u16::from(b'\n'));
            }
            _ => push_char(&mut units, c),
        }
    }

    String::from_utf16_lossy(&units)
}

fn decode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, units: &mut Vec<u16>) {
    let Some(c) = chars.next() else {
        return;
    };
    match c {
        'n' => units.push(0x0A),
        'r' => units.push(0x0D),
        't' => units.push(0x09),
        'b' => units.push(0x08),
        'f' => units.push(0x0C),
        'v' => units.push(0x0B),
        '0'..='7' => units.push(take_octal(c, chars)),
        'x' => match take_hex(chars, 2) {
            Some(code) => units.push(code as u16),
            None => push_char(units, 'x'),
        },
        'u' => decode_unicode_escape(chars, units),
        // Line continuations contribute nothing.
        '\r' => {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
        }
        '\n' | '\u{2028}' | '\u{2029}' => {}
        other => push_char(units, other),
    }
}

fn decode_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    units: &mut Vec<u16>,
) {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut code: u32 = 0;
        let mut digits = 0;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) {
            code = code.saturating_mul(16).saturating_add(d);
            digits += 1;
            chars.next();
        }
        if chars.peek() == Some(&'}') {
            chars.next();
        }
        match char::from_u32(code) {
            Some(ch) if digits > 0 => push_char(units, ch),
            _ if digits > 0 && code <= 0xFFFF => units.push(code as u16),
            _ => units.push(0xFFFD),
        }
        return;
    }

    match take_hex(chars, 4) {
        Some(code) => units.push(code as u16),
        None => push_char(units, 'u'),
    }
}

/// Consume exactly `count` hex digits, or nothing.
fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, count: usize) -> Option<u32> {
    let lookahead: Vec<char> = chars.clone().take(count).collect();
    if lookahead.len() != count || !lookahead.iter().all(char::is_ascii_hexdigit) {
        return None;
    }
    let mut code = 0;
    for c in lookahead {
        code = code * 16 + c.to_digit(16)?;
        chars.next();
    }
    Some(code)
}

/// Legacy octal escape starting at `first`: at most `\377`, so a leading
/// `4`-`7` takes one more digit and `0`-`3` up to two more.
fn take_octal(first: char, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u16 {
    let mut code = first.to_digit(8).unwrap_or(0);
    let max_digits = if code <= 3 { 3 } else { 2 };
    for _ in 1..max_digits {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(d) => {
                code = code * 8 + d;
                chars.next();
            }
            None => break,
        }
    }
    code as u16
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings() {
        assert_eq!(decode_string("'hello'"), "hello");
        assert_eq!(decode_string("\"\""), "");
        assert_eq!(decode_string("\"it's\""), "it's");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_string(r#""a\nb\tc""#), "a\nb\tc");
        assert_eq!(decode_string(r#"'\'\"\\'"#), "'\"\\");
        assert_eq!(decode_string(r#""\b\f\v\0""#), "\u{8}\u{c}\u{b}\0");
        assert_eq!(decode_string(r#""\q""#), "q");
    }

    #[test]
    fn test_legacy_octal_escapes() {
        assert_eq!(decode_string(r"'\01'"), "\u{1}");
        assert_eq!(decode_string(r"'\101'"), "A");
        assert_eq!(decode_string(r"'\377'"), "\u{ff}");
        assert_eq!(decode_string(r"'\400'"), " 0");
        assert_eq!(decode_string(r"'\08'"), "\u{0}8");
        assert_eq!(decode_string(r"'\7a'"), "\u{7}a");
    }

    #[test]
    fn test_non_octal_digit_escapes() {
        assert_eq!(decode_string(r"'\8\9'"), "89");
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(decode_string(r#""\x41B\u{43}""#), "ABC");
        assert_eq!(decode_string(r#""\u{1F600}""#), "😀");
        assert_eq!(decode_string(r#""\uD83D\uDE00""#), "😀");
        assert_eq!(decode_string(r#""\uD83D""#), "\u{FFFD}");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(decode_string("'one \\\ntwo'"), "one two");
        assert_eq!(decode_string("'one \\\r\ntwo'"), "one two");
    }

    #[test]
    fn test_template_normalizes_line_endings() {
        assert_eq!(decode_template("`a\r\nb\rc`"), "a\nb\nc");
        assert_eq!(decode_template(r"`\`\${x}`"), "`${x}");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(decode_string("'héllo wörld'"), "héllo wörld");
    }
}
