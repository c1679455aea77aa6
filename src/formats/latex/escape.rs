//! LaTeX character escaping
//!
//! Three ordered transformations: HTML entity decoding, reserved-character
//! escaping, and spelled-out substitutions for the two characters without a
//! single-character escape. The order matters: decoding must run before
//! escaping (a decoded `&` still needs its prefix), and the caret/tilde
//! substitutions must not have their own braces re-escaped — the single
//! character scan below never revisits emitted text, which is equivalent.

/// The engine's escape prefix.
pub const ESCAPE_PREFIX: char = '\\';

/// Characters with special syntactic meaning in LaTeX that take a
/// single-character escape.
pub const RESERVED: [char; 7] = ['$', '&', '#', '%', '_', '{', '}'];

/// Escape raw user text so it is syntactically valid LaTeX. Total; never fails.
///
/// A reserved character already immediately preceded by the escape prefix is
/// left alone, so text that flowed through a prior transformation pass is not
/// double-escaped. This guard misfires on a literal backslash followed by a
/// reserved character in user text; documented limitation.
pub fn escape(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let mut out = String::with_capacity(decoded.len());
    let mut prev: Option<char> = None;
    for c in decoded.chars() {
        match c {
            _ if RESERVED.contains(&c) => {
                if prev != Some(ESCAPE_PREFIX) {
                    out.push(ESCAPE_PREFIX);
                }
                out.push(c);
            }
            '^' => out.push_str("\\textasciicircum{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            _ => out.push(c),
        }
        prev = Some(c);
    }
    out
}

/// Decode the fixed set of textual entities the editing surface emits.
pub fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
