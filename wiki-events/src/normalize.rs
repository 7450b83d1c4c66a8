//! Content normalization applied to every text run before it reaches a listener.
//!
//! The pipeline is fixed:
//!
//! 1. runs of tabs and spaces collapse to a single space,
//! 2. HTML entities are decoded exactly once (the decoded output is never
//!    scanned again, so `&amp;lt;` becomes `&lt;` and stays there),
//! 3. non-breaking spaces become ordinary spaces.
//!
//! Leading and trailing whitespace is not touched here: the structural
//! cleanup pass of the converter owns that.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static HORIZONTAL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t ]+").expect("whitespace pattern is valid"));

const NBSP: char = '\u{00A0}';

// Longest named entity in the table below, bounds the scan for `;`.
const MAX_ENTITY_NAME: usize = 8;
const MAX_DEC_DIGITS: usize = 7;
const MAX_HEX_DIGITS: usize = 6;

/// Runs the whole normalization pipeline on one text run.
pub fn normalize_content(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let decoded = decode_entities(&collapsed);
    replace_non_breaking_spaces(&decoded).into_owned()
}

/// Collapses every run of tabs and spaces into one space. Newlines are kept.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    HORIZONTAL_WHITESPACE.replace_all(text, " ")
}

pub fn replace_non_breaking_spaces(text: &str) -> Cow<'_, str> {
    if text.contains(NBSP) {
        Cow::Owned(text.replace(NBSP, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Decodes named and numeric entities in a single left-to-right pass.
///
/// Unknown names, malformed numerics and invalid scalar values are copied
/// through unchanged.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match decode_one(candidate) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decodes the entity at the start of `input` (which begins with `&`),
/// returning the character and the number of bytes consumed.
fn decode_one(input: &str) -> Option<(char, usize)> {
    let body = &input[1..];
    if let Some(numeric) = body.strip_prefix('#') {
        let (digits, radix, prefix_len, max) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16, 3, MAX_HEX_DIGITS),
            None => (numeric, 10, 2, MAX_DEC_DIGITS),
        };
        let end = digits.find(';')?;
        if end == 0 || end > max {
            return None;
        }
        let value = u32::from_str_radix(&digits[..end], radix).ok()?;
        if value == 0 {
            return None;
        }
        let decoded = char::from_u32(value)?;
        return Some((decoded, prefix_len + end + 1));
    }

    let end = body
        .char_indices()
        .take(MAX_ENTITY_NAME + 1)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let decoded = named_entity(&body[..end])?;
    Some((decoded, end + 2))
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => NBSP,
        "shy" => '\u{00AD}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "deg" => '°',
        "plusmn" => '±',
        "times" => '×',
        "divide" => '÷',
        "micro" => 'µ',
        "middot" => '·',
        "sect" => '§',
        "para" => '¶',
        "cent" => '¢',
        "pound" => '£',
        "yen" => '¥',
        "euro" => '€',
        "iexcl" => '¡',
        "iquest" => '¿',
        "laquo" => '«',
        "raquo" => '»',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "sbquo" => '\u{201A}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "bdquo" => '\u{201E}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "bull" => '\u{2022}',
        "prime" => '\u{2032}',
        "larr" => '\u{2190}',
        "rarr" => '\u{2192}',
        "uarr" => '\u{2191}',
        "darr" => '\u{2193}',
        "harr" => '\u{2194}',
        "ne" => '\u{2260}',
        "le" => '\u{2264}',
        "ge" => '\u{2265}',
        "infin" => '\u{221E}',
        "frac12" => '½',
        "frac14" => '¼',
        "frac34" => '¾',
        "sup2" => '²',
        "sup3" => '³',
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Auml" => 'Ä',
        "Ccedil" => 'Ç',
        "Eacute" => 'É',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "auml" => 'ä',
        "aring" => 'å',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "ntilde" => 'ñ',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "alpha" => 'α',
        "beta" => 'β',
        "gamma" => 'γ',
        "delta" => 'δ',
        "pi" => 'π',
        "sigma" => 'σ',
        "omega" => 'ω',
        _ => return None,
    };
    Some(c)
}

/// Whitespace the cleanup pass strips from the edges of a tag's content.
/// Non-breaking spaces are content, not padding.
pub fn is_strippable(c: char) -> bool {
    c.is_whitespace() && !matches!(c, NBSP | '\u{2007}' | '\u{202F}')
}

pub fn strip_leading(text: &str) -> &str {
    text.trim_start_matches(is_strippable)
}

pub fn strip_trailing(text: &str) -> &str {
    text.trim_end_matches(is_strippable)
}
