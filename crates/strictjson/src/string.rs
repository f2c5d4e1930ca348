//! String grammar: quoted text, escapes, and surrogate-pair validation.
//!
//! Strings are the only construct where the parser may materialize new
//! data. Until the first escape, the scan tracks a borrowed span of the
//! input; the first backslash copies the prefix into an owned buffer and
//! decoding continues there.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::code_unit::CodeUnit;
use crate::error::{ErrorKind, ParseError, fail};
use crate::options::ParseOptions;
use crate::scanner::Scanner;

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Consumes one string token, both quotes included, and returns the decoded
/// text. The scanner must be positioned at the opening quote.
///
/// Escape-free strings come back as a borrowed span of the input buffer.
/// Raw units at or above U+0020 pass through verbatim, whatever encoding
/// they are in; raw control characters pass through too unless
/// [`ParseOptions::reject_control_characters`] is set.
pub(crate) fn scan_string<'a, U: CodeUnit>(
    scanner: &mut Scanner<'a, U>,
    options: ParseOptions,
) -> Result<Cow<'a, [U]>, ParseError> {
    scanner.advance();
    let start = scanner.offset();
    let mut decoded: Option<Vec<U>> = None;

    loop {
        let Some(unit) = scanner.peek() else {
            return fail(ErrorKind::ExpectedStringEnd, scanner.offset());
        };

        if unit.is(b'"') {
            let text = match decoded {
                Some(buf) => Cow::Owned(buf),
                None => Cow::Borrowed(scanner.slice(start, scanner.offset())),
            };
            scanner.advance();
            return Ok(text);
        }

        if unit.is(b'\\') {
            let buf = decoded.get_or_insert_with(|| scanner.slice(start, scanner.offset()).to_vec());
            scan_escape(scanner, buf)?;
            continue;
        }

        if unit.is_control() && options.reject_control_characters {
            return fail(ErrorKind::ExpectedStringEnd, scanner.offset());
        }

        if let Some(buf) = &mut decoded {
            buf.push(unit);
        }
        scanner.advance();
    }
}

/// Decodes one backslash escape into `out`. The scanner is at the
/// backslash on entry and past the escape on success.
fn scan_escape<U: CodeUnit>(
    scanner: &mut Scanner<'_, U>,
    out: &mut Vec<U>,
) -> Result<(), ParseError> {
    let escape_start = scanner.offset();
    scanner.advance();

    // Unknown escapes report at the escaped character itself, end of input
    // included.
    let Some(unit) = scanner.peek() else {
        return fail(ErrorKind::InvalidEscape, scanner.offset());
    };

    if unit.is(b'"') || unit.is(b'\\') || unit.is(b'/') {
        out.push(unit);
        scanner.advance();
        return Ok(());
    }
    if unit.is(b'b') {
        out.push(U::from_ascii(0x08));
        scanner.advance();
        return Ok(());
    }
    if unit.is(b'f') {
        out.push(U::from_ascii(0x0C));
        scanner.advance();
        return Ok(());
    }
    if unit.is(b'n') {
        out.push(U::from_ascii(b'\n'));
        scanner.advance();
        return Ok(());
    }
    if unit.is(b'r') {
        out.push(U::from_ascii(b'\r'));
        scanner.advance();
        return Ok(());
    }
    if unit.is(b't') {
        out.push(U::from_ascii(b'\t'));
        scanner.advance();
        return Ok(());
    }
    if unit.is(b'u') {
        scanner.advance();
        return scan_unicode_escape(scanner, out, escape_start);
    }

    fail(ErrorKind::InvalidEscape, scanner.offset())
}

/// Decodes a `\uXXXX` escape, validating surrogate pairing. The scanner is
/// past the `u` on entry; `escape_start` is the backslash's offset, where
/// malformed hex reports.
fn scan_unicode_escape<U: CodeUnit>(
    scanner: &mut Scanner<'_, U>,
    out: &mut Vec<U>,
    escape_start: usize,
) -> Result<(), ParseError> {
    let Some(high) = read_hex4(scanner) else {
        return fail(ErrorKind::InvalidUnicodeEscape, escape_start);
    };

    if !HIGH_SURROGATES.contains(&high) {
        // Lone low surrogates included: the grammar only constrains what
        // must follow a high surrogate.
        U::push_code_point(out, high);
        return Ok(());
    }

    // The paired low escape must start exactly here; both surrogate
    // diagnostics report this offset.
    let resume = scanner.offset();
    if !(scanner.eat(b'\\') && scanner.eat(b'u')) {
        return fail(ErrorKind::ExpectedSurrogatePair, resume);
    }
    let Some(low) = read_hex4(scanner) else {
        return fail(ErrorKind::ExpectedSurrogatePair, resume);
    };
    if !LOW_SURROGATES.contains(&low) {
        return fail(ErrorKind::InvalidSurrogatePair, resume);
    }

    let code_point = 0x1_0000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    U::push_code_point(out, code_point);
    Ok(())
}

fn read_hex4<U: CodeUnit>(scanner: &mut Scanner<'_, U>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        let digit = scanner.peek()?.hex_digit()?;
        scanner.advance();
        value = (value << 4) | digit;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use super::scan_string;
    use crate::options::ParseOptions;
    use crate::scanner::Scanner;

    #[test]
    fn escape_free_strings_borrow_from_the_input() {
        let mut scanner = Scanner::new(b"\"abc\" ".as_slice());
        let text = scan_string(&mut scanner, ParseOptions::default()).unwrap();
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(&*text, b"abc");
        assert_eq!(scanner.offset(), 5);
    }

    #[test]
    fn escapes_switch_to_an_owned_buffer() {
        let mut scanner = Scanner::new(b"\"a\\nb\"".as_slice());
        let text = scan_string(&mut scanner, ParseOptions::default()).unwrap();
        assert!(matches!(text, Cow::Owned(_)));
        assert_eq!(&*text, b"a\nb");
    }

    #[test]
    fn surrogate_pairs_decode_to_one_code_point() {
        let mut scanner = Scanner::new(b"\"\\ud83d\\ude00\"".as_slice());
        let text = scan_string(&mut scanner, ParseOptions::default()).unwrap();
        assert_eq!(&*text, "😀".as_bytes());
    }
}
