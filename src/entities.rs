//! Character reference decoding for text content.
//!
//! Decoding is total: anything that is not a recognized reference is copied
//! through unchanged, including bare `&`, `'` and `"` characters.

/// Longest reference body considered (`&` and `;` excluded).
const MAX_REFERENCE_LEN: usize = 32;

/// Decode named and numeric character references.
///
/// Recognized forms are `&name;` for the names in the built-in table,
/// `&#NNN;` (decimal) and `&#xHHH;` (hex). Unknown names, missing
/// semicolons and numeric values that are not Unicode scalar values pass
/// through as literal text.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos + 1..];

        match decode_reference(candidate) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode one reference at the start of `s` (just after the `&`).
/// Returns the character and the number of bytes consumed, `;` included.
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let end = s
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &s[..end];

    let ch = if let Some(num) = body.strip_prefix('#') {
        decode_numeric(num)?
    } else {
        if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        lookup_named(body)?
    };

    Some((ch, end + 1))
}

fn decode_numeric(num: &str) -> Option<char> {
    let value = match num.strip_prefix(['x', 'X']) {
        Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            u32::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()) => num.parse().ok()?,
        None => return None,
    };

    if value == 0 {
        return None;
    }
    char::from_u32(value)
}

/// Look up a named reference. Names are case-sensitive.
pub fn lookup_named(name: &str) -> Option<char> {
    let ch = match name {
        // Markup-significant
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',

        // Spaces
        "nbsp" => '\u{00A0}',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        "zwnj" => '\u{200C}',
        "zwj" => '\u{200D}',
        "lrm" => '\u{200E}',
        "rlm" => '\u{200F}',
        "shy" => '\u{00AD}',

        // Quotes and guillemets
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "sbquo" => '\u{201A}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "bdquo" => '\u{201E}',
        "laquo" => '\u{00AB}',
        "raquo" => '\u{00BB}',
        "lsaquo" => '\u{2039}',
        "rsaquo" => '\u{203A}',
        "prime" => '\u{2032}',
        "Prime" => '\u{2033}',

        // Punctuation
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "bull" => '\u{2022}',
        "middot" => '\u{00B7}',
        "dagger" => '\u{2020}',
        "Dagger" => '\u{2021}',
        "permil" => '\u{2030}',
        "sect" => '\u{00A7}',
        "para" => '\u{00B6}',
        "iexcl" => '\u{00A1}',
        "iquest" => '\u{00BF}',
        "brvbar" => '\u{00A6}',
        "uml" => '\u{00A8}',
        "acute" => '\u{00B4}',
        "cedil" => '\u{00B8}',
        "macr" => '\u{00AF}',
        "ordf" => '\u{00AA}',
        "ordm" => '\u{00BA}',

        // Symbols
        "copy" => '\u{00A9}',
        "reg" => '\u{00AE}',
        "trade" => '\u{2122}',
        "deg" => '\u{00B0}',
        "micro" => '\u{00B5}',
        "not" => '\u{00AC}',
        "curren" => '\u{00A4}',
        "cent" => '\u{00A2}',
        "pound" => '\u{00A3}',
        "yen" => '\u{00A5}',
        "euro" => '\u{20AC}',

        // Superscripts and fractions
        "sup1" => '\u{00B9}',
        "sup2" => '\u{00B2}',
        "sup3" => '\u{00B3}',
        "frac14" => '\u{00BC}',
        "frac12" => '\u{00BD}',
        "frac34" => '\u{00BE}',

        // Math and arrows
        "times" => '\u{00D7}',
        "divide" => '\u{00F7}',
        "plusmn" => '\u{00B1}',
        "minus" => '\u{2212}',
        "ne" => '\u{2260}',
        "le" => '\u{2264}',
        "ge" => '\u{2265}',
        "infin" => '\u{221E}',
        "larr" => '\u{2190}',
        "uarr" => '\u{2191}',
        "rarr" => '\u{2192}',
        "darr" => '\u{2193}',
        "harr" => '\u{2194}',

        // Latin letters
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Acirc" => 'Â',
        "Auml" => 'Ä',
        "Aring" => 'Å',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ecirc" => 'Ê',
        "Iacute" => 'Í',
        "Ntilde" => 'Ñ',
        "Oacute" => 'Ó',
        "Ouml" => 'Ö',
        "Oslash" => 'Ø',
        "Uacute" => 'Ú',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "iacute" => 'í',
        "iuml" => 'ï',
        "ntilde" => 'ñ',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yuml" => 'ÿ',

        _ => return None,
    };
    Some(ch)
}
