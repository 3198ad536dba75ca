// Harf Built-in Tables
// Latin -> Arabic substitutions and two-key diacritic rules

/// Single Latin letters and their Arabic counterparts.
///
/// Order matters: it is the order keys appear on the on-screen keyboard.
/// Several keys share a target (`e`, `y`, `i` all give `ي`).
pub const BASIC_LETTERS: &[(char, char)] = &[
    ('q', 'ق'),
    ('w', 'و'),
    ('e', 'ي'),
    ('r', 'ر'),
    ('t', 'ت'),
    ('y', 'ي'),
    ('u', 'ء'),
    ('i', 'ي'),
    ('o', 'و'),
    ('p', 'ب'),
    ('a', 'ا'),
    ('s', 'س'),
    ('d', 'د'),
    ('f', 'ف'),
    ('g', 'ع'),
    ('h', 'ه'),
    ('j', 'ج'),
    ('k', 'ك'),
    ('l', 'ل'),
    ('z', 'ز'),
    ('x', 'ش'),
    ('c', 'ث'),
    ('v', 'ذ'),
    ('b', 'ب'),
    ('n', 'ن'),
    ('m', 'م'),
    ('H', 'ح'),
    ('S', 'ص'),
    ('D', 'ض'),
    ('T', 'ط'),
    ('Z', 'ظ'),
    ('Y', 'ى'),
];

/// Punctuation keys. The apostrophe maps to itself so that it is
/// intercepted and can act as a diacritic trigger.
pub const ADDITIONAL_KEYS: &[(char, char)] = &[
    ('-', 'ء'),
    ('\'', '\''),
    ('?', '؟'),
    ('!', '!'),
    (',', '،'),
    (';', '؛'),
    (':', ':'),
];

/// `(base, trigger, result)`: typing `trigger` right after `base` replaces
/// `base` with `result`.
pub const DIACRITIC_RULES: &[(char, char, char)] = &[
    ('ت', '\'', 'ث'),
    ('ح', '\'', 'خ'),
    ('د', '\'', 'ذ'),
    ('س', '\'', 'ش'),
    ('ص', '\'', 'ض'),
    ('ط', '\'', 'ظ'),
    ('ع', '\'', 'غ'),
    ('ء', 'a', 'أ'),
    ('ا', 'a', 'آ'),
    ('ي', '\'', 'ى'),
    ('ه', '\'', 'ة'),
    ('ق', '\'', 'ڨ'),
    ('ك', '\'', 'ڭ'),
    ('ر', '\'', 'ز'),
];

/// Name of the built-in basic letter table
pub const BASIC_TABLE: &str = "letters";

/// Name of the built-in punctuation table
pub const ADDITIONAL_TABLE: &str = "punctuation";
