/// Permissiveness switches for [`parse_with`](crate::parse_with).
///
/// The default is full strict mode: a container root, no leading zeros,
/// mandatory fractional and exponent digits, case-sensitive literals, and
/// complete escape and surrogate validation.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Whether to accept any JSON value as the document root.
    ///
    /// Strict mode requires the first non-whitespace character to open an
    /// array or an object. With this set, a string, number, or literal may
    /// stand alone as the whole document.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_scalar_root: bool,

    /// Whether an unescaped control character (below U+0020) terminates a
    /// string with `Expected end-of-string '"'` at the character's offset.
    ///
    /// When unset, raw control characters pass through as string content,
    /// the same way raw multi-byte sequences do.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_control_characters: bool,
}
