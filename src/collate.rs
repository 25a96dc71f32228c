//! Fixed English collation with numeric ordering of digit runs.
//!
//! Labels must order the same on every machine, so nothing here consults the
//! process locale. The ordering follows the CLDR root order for the characters
//! that appear in practice: whitespace, then punctuation and symbols in the
//! table below, then numbers (compared by value), then letters (compared by
//! base letter, so `é` sorts with `e`). Accents decide next, then case, with
//! lowercase first.

use std::cmp::Ordering;

// CLDR root order of ASCII punctuation followed by ASCII symbols
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punctuation,
    Number,
    Letter,
    Other,
}

#[derive(Debug, Clone, Copy)]
enum Element<'a> {
    // digits with leading zeros removed
    Number(&'a str),
    Char(char),
}

impl Element<'_> {
    fn class(&self) -> Class {
        match self {
            Element::Number(_) => Class::Number,
            Element::Char(c) if c.is_whitespace() => Class::Space,
            Element::Char(c) if PUNCTUATION.contains(*c) => Class::Punctuation,
            Element::Char(c) if c.is_alphabetic() => Class::Letter,
            Element::Char(_) => Class::Other,
        }
    }
}

fn elements(s: &str) -> Vec<Element<'_>> {
    let mut elements = Vec::new();
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            let end = rest.find(|d: char| !d.is_ascii_digit()).unwrap_or(rest.len());
            let digits = rest[..end].trim_start_matches('0');
            elements.push(Element::Number(digits));
            rest = &rest[end..];
        } else {
            elements.push(Element::Char(c));
            rest = &rest[c.len_utf8()..];
        }
    }
    elements
}

// Secondary weights, in DUCET order of the combining marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Accent {
    Acute,
    Grave,
    Breve,
    Circumflex,
    Caron,
    Ring,
    Diaeresis,
    DoubleAcute,
    Tilde,
    DotAbove,
    Cedilla,
    Ogonek,
    Macron,
}

// Lowercase Latin letters with a diacritic, mapped to their base letter.
const ACCENTED: &[(char, char, Accent)] = {
    use Accent::*;
    &[
        ('á', 'a', Acute), ('à', 'a', Grave), ('ă', 'a', Breve), ('â', 'a', Circumflex), ('å', 'a', Ring),
        ('ä', 'a', Diaeresis), ('ã', 'a', Tilde), ('ą', 'a', Ogonek), ('ā', 'a', Macron),
        ('ć', 'c', Acute), ('ĉ', 'c', Circumflex), ('č', 'c', Caron), ('ċ', 'c', DotAbove), ('ç', 'c', Cedilla),
        ('ď', 'd', Caron),
        ('é', 'e', Acute), ('è', 'e', Grave), ('ĕ', 'e', Breve), ('ê', 'e', Circumflex), ('ě', 'e', Caron),
        ('ë', 'e', Diaeresis), ('ė', 'e', DotAbove), ('ę', 'e', Ogonek), ('ē', 'e', Macron),
        ('ğ', 'g', Breve), ('ĝ', 'g', Circumflex), ('ġ', 'g', DotAbove), ('ģ', 'g', Cedilla),
        ('ĥ', 'h', Circumflex),
        ('í', 'i', Acute), ('ì', 'i', Grave), ('ĭ', 'i', Breve), ('î', 'i', Circumflex), ('ï', 'i', Diaeresis),
        ('ĩ', 'i', Tilde), ('į', 'i', Ogonek), ('ī', 'i', Macron),
        ('ĵ', 'j', Circumflex),
        ('ķ', 'k', Cedilla),
        ('ĺ', 'l', Acute), ('ľ', 'l', Caron), ('ļ', 'l', Cedilla),
        ('ń', 'n', Acute), ('ň', 'n', Caron), ('ñ', 'n', Tilde), ('ņ', 'n', Cedilla),
        ('ó', 'o', Acute), ('ò', 'o', Grave), ('ŏ', 'o', Breve), ('ô', 'o', Circumflex), ('ö', 'o', Diaeresis),
        ('ő', 'o', DoubleAcute), ('õ', 'o', Tilde), ('ō', 'o', Macron),
        ('ŕ', 'r', Acute), ('ř', 'r', Caron), ('ŗ', 'r', Cedilla),
        ('ś', 's', Acute), ('ŝ', 's', Circumflex), ('š', 's', Caron), ('ş', 's', Cedilla),
        ('ť', 't', Caron), ('ţ', 't', Cedilla),
        ('ú', 'u', Acute), ('ù', 'u', Grave), ('ŭ', 'u', Breve), ('û', 'u', Circumflex), ('ů', 'u', Ring),
        ('ü', 'u', Diaeresis), ('ű', 'u', DoubleAcute), ('ũ', 'u', Tilde), ('ų', 'u', Ogonek), ('ū', 'u', Macron),
        ('ŵ', 'w', Circumflex),
        ('ý', 'y', Acute), ('ŷ', 'y', Circumflex), ('ÿ', 'y', Diaeresis),
        ('ź', 'z', Acute), ('ž', 'z', Caron), ('ż', 'z', DotAbove),
    ]
};

// Letters that sort as their own letter directly after the base.
const STROKED: &[(char, char)] = &[('đ', 'd'), ('ħ', 'h'), ('ł', 'l'), ('ø', 'o'), ('ŧ', 't')];

// (base letter, follows base, accent)
fn letter_key(c: char) -> (char, bool, Option<Accent>) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    if let Some(&(_, base, accent)) = ACCENTED.iter().find(|(letter, ..)| *letter == lower) {
        return (base, false, Some(accent));
    }
    match STROKED.iter().find(|(letter, _)| *letter == lower) {
        Some(&(_, base)) => (base, true, None),
        None => (lower, false, None),
    }
}

fn primary(a: &Element, b: &Element) -> Ordering {
    let by_class = a.class().cmp(&b.class());
    if by_class != Ordering::Equal {
        return by_class;
    }
    match (a, b) {
        (Element::Number(x), Element::Number(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (Element::Char(x), Element::Char(y)) => match a.class() {
            Class::Punctuation => PUNCTUATION.find(*x).cmp(&PUNCTUATION.find(*y)),
            Class::Letter => {
                let (x_base, x_after, _) = letter_key(*x);
                let (y_base, y_after, _) = letter_key(*y);
                (x_base, x_after).cmp(&(y_base, y_after))
            }
            _ => x.cmp(y),
        },
        // same class implies same variant
        _ => Ordering::Equal,
    }
}

fn secondary(a: &[Element], b: &[Element]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if let (Element::Char(x), Element::Char(y)) = (x, y) {
            let order = letter_key(*x).2.cmp(&letter_key(*y).2);
            if order != Ordering::Equal {
                return order;
            }
        }
    }
    Ordering::Equal
}

fn tertiary(a: &[Element], b: &[Element]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if let (Element::Char(x), Element::Char(y)) = (x, y) {
            match (x.is_lowercase() && y.is_uppercase(), x.is_uppercase() && y.is_lowercase()) {
                (true, _) => return Ordering::Less,
                (_, true) => return Ordering::Greater,
                _ => (),
            }
        }
    }
    Ordering::Equal
}

/// Compares two labels under the fixed English, numeric-aware collation.
///
/// The result is total: strings that collate equal (such as `"01"` and `"1"`)
/// fall back to code point order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let left = elements(a);
    let right = elements(b);
    left.iter()
        .zip(&right)
        .map(|(x, y)| primary(x, y))
        .find(|order| *order != Ordering::Equal)
        .unwrap_or_else(|| left.len().cmp(&right.len()))
        .then_with(|| secondary(&left, &right))
        .then_with(|| tertiary(&left, &right))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(compare("2", "10"), Ordering::Less);
        assert_eq!(compare("item9", "item10"), Ordering::Less);
        assert_eq!(compare("007", "7"), Ordering::Less, "leading zeros only break ties");
    }

    #[test]
    fn letters_ignore_case_until_tied() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("a", "A"), Ordering::Less);
        assert_eq!(compare("B", "a"), Ordering::Greater);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(compare("\u{e9}clair", "fig"), Ordering::Less);
        assert_eq!(compare("résumé", "rose"), Ordering::Less);
        assert_eq!(compare("über", "uz"), Ordering::Less);
        assert_eq!(compare("ølen", "oz"), Ordering::Greater, "stroked letters follow their base");
        assert_eq!(compare("ølen", "pa"), Ordering::Less);
    }

    #[test]
    fn accents_break_ties_before_case() {
        assert_eq!(compare("resume", "résumé"), Ordering::Less);
        assert_eq!(compare("résumé", "Resume"), Ordering::Greater, "accent outranks case");
        assert_eq!(compare("cote", "côte"), Ordering::Less);
        assert_eq!(compare("côte", "coté"), Ordering::Greater, "first accent difference decides");
        assert_eq!(compare("Résumé", "résumé"), Ordering::Greater);
    }

    #[test]
    fn classes_are_ordered() {
        assert_eq!(compare(" ", "_"), Ordering::Less);
        assert_eq!(compare("-", "0"), Ordering::Less);
        assert_eq!(compare("9", "a"), Ordering::Less);
        assert_eq!(compare("sidebar", "sidebar-2"), Ordering::Less);
    }
}
