// src/domain/slug/translit.rs
//! Character table for Russian-to-Latin transliteration.
//!
//! Each entry maps one source character to its Latin spelling. Hard and soft
//! signs map to the empty string so they disappear from slugs instead of
//! splitting a word in two.

const TABLE: &[(char, &str)] = &[
    // three-letter replacements
    ('щ', "sch"),
    ('Щ', "Sch"),
    // two-letter replacements
    ('ё', "yo"),
    ('Ё', "Yo"),
    ('ж', "zh"),
    ('Ж', "Zh"),
    ('ц', "ts"),
    ('Ц', "Ts"),
    ('ч', "ch"),
    ('Ч', "Ch"),
    ('ш', "sh"),
    ('Ш', "Sh"),
    ('ы', "yi"),
    ('Ы', "Yi"),
    ('ю', "yu"),
    ('Ю', "Yu"),
    ('я', "ya"),
    ('Я', "Ya"),
    ('ї', "yi"),
    ('Ї', "Yi"),
    ('є', "ye"),
    ('Є', "Ye"),
    // one-letter replacements
    ('а', "a"),
    ('А', "A"),
    ('б', "b"),
    ('Б', "B"),
    ('в', "v"),
    ('В', "V"),
    ('г', "g"),
    ('Г', "G"),
    ('ґ', "g"),
    ('Ґ', "G"),
    ('д', "d"),
    ('Д', "D"),
    ('е', "e"),
    ('Е', "E"),
    ('з', "z"),
    ('З', "Z"),
    ('и', "i"),
    ('И', "I"),
    ('і', "i"),
    ('І', "I"),
    ('й', "j"),
    ('Й', "J"),
    ('к', "k"),
    ('К', "K"),
    ('л', "l"),
    ('Л', "L"),
    ('м', "m"),
    ('М', "M"),
    ('н', "n"),
    ('Н', "N"),
    ('о', "o"),
    ('О', "O"),
    ('п', "p"),
    ('П', "P"),
    ('р', "r"),
    ('Р', "R"),
    ('с', "s"),
    ('С', "S"),
    ('т', "t"),
    ('Т', "T"),
    ('у', "u"),
    ('У', "U"),
    ('ў', "u"),
    ('Ў', "U"),
    ('ф', "f"),
    ('Ф', "F"),
    ('х', "h"),
    ('Х', "H"),
    ('э', "e"),
    ('Э', "E"),
    // signs vanish
    ('ъ', ""),
    ('Ъ', ""),
    ('ь', ""),
    ('Ь', ""),
    // punctuation with a meaning worth keeping
    ('&', " and "),
    ('№', " "),
    ('–', "-"),
    ('—', "-"),
    ('‒', "-"),
    ('−', "-"),
];

/// Latin spelling for `ch`, if the table knows it.
pub fn lookup(ch: char) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|(source, _)| *source == ch)
        .map(|(_, latin)| *latin)
}

/// Replace every table character in `input`, leaving everything else as is.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match lookup(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}
