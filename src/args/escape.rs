//! Escaper — make every argument survive the supervisor's command-line parser.
//!
//! The supervisor expands `%` specifiers and `$` variables, splits on
//! whitespace, and honours C-style quoting. Escaping applies to the whole
//! command, payload included: it is about exec-line parsing, not about
//! container semantics.
//!
//! See <https://www.freedesktop.org/software/systemd/man/systemd.service.html#Command%20lines>.

use thiserror::Error;

/// Characters that force an argument into a quoted string.
const QUOTE_TRIGGERS: &[char] = &[' ', '\t'];

/// Escape each argument of `command`. Returns a new vector of the same length.
pub fn escape_systemd_arguments(command: &[String]) -> Vec<String> {
    command.iter().map(|a| escape_systemd_argument(a)).collect()
}

/// Escape a single argument.
///
/// `$` and `%` are always doubled. Then either the whole argument is quoted
/// (it contains a space or tab) or its backslashes are doubled, never both:
/// quoting already escapes backslashes.
pub fn escape_systemd_argument(arg: &str) -> String {
    let doubled = arg.replace('$', "$$").replace('%', "%%");

    if doubled.contains(QUOTE_TRIGGERS) {
        quote_c_string(&doubled)
    } else if doubled.contains('\\') {
        doubled.replace('\\', "\\\\")
    } else {
        doubled
    }
}

/// Wrap `s` in double quotes using C escape sequences.
///
/// Printable characters pass through, including non-ASCII. `"` and `\`
/// are backslash-escaped, control characters use their short form when
/// one exists, and anything else [`is_printable`] rejects becomes
/// `\xNN` / `\uNNNN` / `\UNNNNNNNN`.
pub fn quote_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            ' ' => out.push(' '),
            c if !is_printable(c) => {
                let cp = c as u32;
                if cp < 0x80 {
                    out.push_str(&format!("\\x{:02x}", cp));
                } else if cp < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", cp));
                } else {
                    out.push_str(&format!("\\U{:08x}", cp));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `c` may appear unescaped inside a quoted argument.
///
/// Controls, whitespace other than the ASCII space, format characters,
/// private-use code points and noncharacters are not printable.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let cp = c as u32;
    let format = matches!(
        cp,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    );
    let private_use = matches!(cp, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD);
    let noncharacter = (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE;
    !(format || private_use || noncharacter)
}

/// Errors from [`unescape_systemd_argument`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnescapeError {
    #[error("trailing backslash")]
    DanglingBackslash,

    #[error("unknown escape sequence '\\{0}'")]
    InvalidEscape(char),

    #[error("escape sequence does not encode a valid character")]
    InvalidCodepoint,

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("unquoted whitespace splits the argument")]
    UnquotedWhitespace,
}

/// Decode one escaped argument the way the supervisor does.
///
/// Specifiers (`%%`) are resolved on the raw text, then quotes and C
/// escapes, then variables (`$$`). Inverse of [`escape_systemd_argument`].
pub fn unescape_systemd_argument(escaped: &str) -> Result<String, UnescapeError> {
    let specifiers = escaped.replace("%%", "%");
    let mut out = String::with_capacity(specifiers.len());
    let mut quote: Option<char> = None;
    let mut chars = specifiers.chars();

    while let Some(c) = chars.next() {
        match (c, quote) {
            ('\\', _) => out.push(unescape_one(&mut chars)?),
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => return Err(UnescapeError::UnquotedWhitespace),
            (c, _) => out.push(c),
        }
    }

    if quote.is_some() {
        return Err(UnescapeError::UnterminatedQuote);
    }
    Ok(out.replace("$$", "$"))
}

fn unescape_one<I>(chars: &mut I) -> Result<char, UnescapeError>
where
    I: Iterator<Item = char>,
{
    let c = chars.next().ok_or(UnescapeError::DanglingBackslash)?;
    let decoded = match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        's' => ' ',
        '\\' | '"' | '\'' => c,
        'x' => hex_char(chars, 2)?,
        'u' => hex_char(chars, 4)?,
        'U' => hex_char(chars, 8)?,
        '0'..='7' => {
            let mut cp = c.to_digit(8).unwrap_or(0);
            for _ in 0..2 {
                let d = chars
                    .next()
                    .and_then(|d| d.to_digit(8))
                    .ok_or(UnescapeError::InvalidEscape(c))?;
                cp = cp * 8 + d;
            }
            char::from_u32(cp).ok_or(UnescapeError::InvalidCodepoint)?
        }
        other => return Err(UnescapeError::InvalidEscape(other)),
    };
    Ok(decoded)
}

fn hex_char<I>(chars: &mut I, digits: usize) -> Result<char, UnescapeError>
where
    I: Iterator<Item = char>,
{
    let mut cp = 0u32;
    for _ in 0..digits {
        let d = chars
            .next()
            .and_then(|d| d.to_digit(16))
            .ok_or(UnescapeError::InvalidCodepoint)?;
        cp = cp * 16 + d;
    }
    char::from_u32(cp).ok_or(UnescapeError::InvalidCodepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_argument_is_unchanged() {
        assert_eq!(escape_systemd_argument("alpine"), "alpine");
        assert_eq!(escape_systemd_argument(""), "");
    }

    #[test]
    fn dollar_and_percent_are_doubled() {
        assert_eq!(escape_systemd_argument("$HOME"), "$$HOME");
        assert_eq!(escape_systemd_argument("50%"), "50%%");
        assert_eq!(escape_systemd_argument("%n$$"), "%%n$$$$");
    }

    #[test]
    fn whitespace_triggers_quoting() {
        assert_eq!(escape_systemd_argument("hello world"), "\"hello world\"");
        assert_eq!(escape_systemd_argument("a\tb"), "\"a\\tb\"");
    }

    #[test]
    fn backslash_doubled_only_without_whitespace() {
        assert_eq!(escape_systemd_argument("a\\b"), "a\\\\b");
        assert_eq!(escape_systemd_argument("a\\ b"), "\"a\\\\ b\"");
    }

    #[test]
    fn quotes_inside_quoted_argument_are_escaped() {
        assert_eq!(
            escape_systemd_argument("say \"hi\" now"),
            "\"say \\\"hi\\\" now\""
        );
    }

    #[test]
    fn newline_without_space_is_left_alone() {
        assert_eq!(escape_systemd_argument("a\nb"), "a\nb");
    }

    #[test]
    fn quote_c_string_uses_hex_for_other_controls() {
        assert_eq!(quote_c_string("\u{1b}[0m"), "\"\\x1b[0m\"");
        assert_eq!(quote_c_string("a\u{85}b"), "\"a\\u0085b\"");
        assert_eq!(quote_c_string("héllo"), "\"héllo\"");
    }

    #[test]
    fn quote_c_string_escapes_format_and_private_use_characters() {
        assert_eq!(quote_c_string("a\u{200b}b"), "\"a\\u200bb\"");
        assert_eq!(quote_c_string("soft\u{ad}hyphen"), "\"soft\\u00adhyphen\"");
        assert_eq!(quote_c_string("\u{feff}"), "\"\\ufeff\"");
        assert_eq!(quote_c_string("\u{e000}"), "\"\\ue000\"");
        assert_eq!(quote_c_string("\u{e0001}"), "\"\\U000e0001\"");
        assert_eq!(quote_c_string("\u{a0}"), "\"\\u00a0\"");
    }

    #[test]
    fn printable_characters() {
        for c in ['a', ' ', 'é', '€', '日', '😀', '~'] {
            assert!(is_printable(c), "{:?} should be printable", c);
        }
        for c in ['\t', '\u{7f}', '\u{200b}', '\u{2028}', '\u{fffe}', '\u{10ffff}'] {
            assert!(!is_printable(c), "{:?} should not be printable", c);
        }
    }

    #[test]
    fn unescape_rejects_malformed_input() {
        assert_eq!(
            unescape_systemd_argument("\"open"),
            Err(UnescapeError::UnterminatedQuote)
        );
        assert_eq!(
            unescape_systemd_argument("a\\"),
            Err(UnescapeError::DanglingBackslash)
        );
        assert_eq!(
            unescape_systemd_argument("a b"),
            Err(UnescapeError::UnquotedWhitespace)
        );
        assert_eq!(
            unescape_systemd_argument("\\q"),
            Err(UnescapeError::InvalidEscape('q'))
        );
    }

    #[test]
    fn unescape_decodes_numeric_escapes() {
        assert_eq!(
            unescape_systemd_argument("\"\\x41\\u00e9\\101\"").as_deref(),
            Ok("AéA")
        );
    }
}
