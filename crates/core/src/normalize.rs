//! Bidder name normalization.
//!
//! Names are used as keys in the bid table, so `" harry   haCkeR "` and
//! `"Harry Hacker"` must land on the same entry.

/// Trim a name, collapse internal whitespace and title-case it.
///
/// Title-casing works on runs of cased letters: the first letter of each run
/// is titlecased and the rest are lowercased. Digits and punctuation end a
/// run, so `"KUNG-FU"` becomes `"Kung-Fu"` while `"noSpacE"` becomes
/// `"Nospace"`. A blank name normalizes to the empty string.
///
/// When a case mapping expands to several characters (`"ß"` uppercases to
/// `"SS"`) the run rule is applied to the characters produced, giving `"Ss"`.
/// Because of that, normalizing an already normalized name never changes it.
/// Final sigma is not special-cased: `"ΣΑΣ"` becomes `"Σασ"`.
pub fn normalize_name(name: &str) -> String {
    let collapsed = name
        .split(is_name_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    title_case(&collapsed)
}

/// Whether a name is empty or made only of whitespace.
pub fn is_blank(name: &str) -> bool {
    name.chars().all(is_name_space)
}

/// Unicode whitespace plus the ASCII information separators (`\x1c`-`\x1f`),
/// which Python's `str.isspace` also counts.
fn is_name_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if !is_cased(c) {
            out.push(c);
            prev_cased = false;
        } else if prev_cased {
            for lower in c.to_lowercase() {
                push_mapped(&mut out, lower, &mut prev_cased);
            }
        } else if let Some(title) = titlecase_form(c) {
            out.push(title);
            prev_cased = true;
        } else {
            for upper in c.to_uppercase() {
                push_mapped(&mut out, upper, &mut prev_cased);
            }
        }
    }
    out
}

/// Push one character of a case mapping, lowercasing it if it no longer
/// starts a run.
fn push_mapped(out: &mut String, c: char, prev_cased: &mut bool) {
    if !is_cased(c) {
        out.push(c);
        *prev_cased = false;
    } else if *prev_cased {
        out.extend(c.to_lowercase());
    } else {
        out.push(c);
        *prev_cased = true;
    }
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

/// Letters of general category Lt.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{1c5}'
            | '\u{1c8}'
            | '\u{1cb}'
            | '\u{1f2}'
            | '\u{1f88}'..='\u{1f8f}'
            | '\u{1f98}'..='\u{1f9f}'
            | '\u{1fa8}'..='\u{1faf}'
            | '\u{1fbc}'
            | '\u{1fcc}'
            | '\u{1ffc}'
    )
}

/// Single-character titlecase mappings that differ from the uppercase one.
fn titlecase_form(c: char) -> Option<char> {
    let title = match c {
        '\u{1c4}'..='\u{1c6}' => '\u{1c5}',
        '\u{1c7}'..='\u{1c9}' => '\u{1c8}',
        '\u{1ca}'..='\u{1cc}' => '\u{1cb}',
        '\u{1f1}'..='\u{1f3}' => '\u{1f2}',
        // Greek with ypogegrammeni: lowercase forms sit 8 below the titlecase ones
        '\u{1f80}'..='\u{1faf}' => {
            let code = u32::from(c);
            let code = if (code & 0x8) == 0 { code + 8 } else { code };
            char::from_u32(code)?
        }
        '\u{1fb3}' | '\u{1fbc}' => '\u{1fbc}',
        '\u{1fc3}' | '\u{1fcc}' => '\u{1fcc}',
        '\u{1ff3}' | '\u{1ffc}' => '\u{1ffc}',
        _ => return None,
    };
    Some(title)
}
