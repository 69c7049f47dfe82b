//! Porter stemming algorithm implementation.
//!
//! Reduces English words to a stem by stripping suffixes in five rule
//! steps, each guarded by the *measure* `m` of the remaining stem (the
//! number of vowel-consonant sequences in it):
//!
//! 1. Plurals and `-ed`/`-ing` (with clean-up), then terminal `y` → `i`
//! 2. Double suffixes such as `-ational` → `-ate`, `-iveness` → `-ive` (m > 0)
//! 3. `-icate` → `-ic`, `-ful` → `""`, `-ness` → `""`, ... (m > 0)
//! 4. Single suffixes such as `-ance`, `-ment`, `-ive` (m > 1)
//! 5. Final `-e` and `-ll` tidying
//!
//! The rules are those of NLTK's default `PorterStemmer` mode, so stems
//! line up with vocabularies fitted in that ecosystem:
//!
//! - a small pool of irregular forms (`dying` → `die`, `skies` → `sky`);
//! - `-ies` → `-ie` and `-ied` → `-ie` for four-letter words;
//! - `y` → `i` only after a consonant that is not the first letter;
//! - extra step 2 rules `-bli`, `-fulli`, `-lessli` and `-logi`;
//! - a vowel-consonant pair counts as `*o` in two-letter stems.
//!
//! Words of two letters or fewer are returned unchanged (after lowercasing).
//!
//! # Examples
//!
//! ```
//! use feedback_classifier::analysis::token_filter::stem::Stemmer;
//! use feedback_classifier::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("Relational"), "relat");
//! assert_eq!(stemmer.stem("library"), "librari");
//! assert_eq!(stemmer.stem("delay"), "delay");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
    ("lessli", "less"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Stems for words the suffix rules get wrong.
fn irregular_form(word: &str) -> Option<&'static str> {
    let stem = match word {
        "sky" | "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "news" => "news",
        "inning" | "innings" => "inning",
        "outing" | "outings" => "outing",
        "canning" | "cannings" => "canning",
        "howe" => "howe",
        "proceed" => "proceed",
        "exceed" => "exceed",
        "succeed" => "succeed",
        _ => return None,
    };
    Some(stem)
}

// Longer suffixes precede the shorter suffixes they end with.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Stateless; a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Whether the letter at `pos` is a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel, and a
    /// vowel after a consonant.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[u8]) -> usize {
        let n = word.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && Self::is_consonant(word, i) {
            i += 1;
        }

        loop {
            while i < n && !Self::is_consonant(word, i) {
                i += 1;
            }
            if i >= n {
                return m;
            }
            m += 1;
            while i < n && Self::is_consonant(word, i) {
                i += 1;
            }
        }
    }

    fn contains_vowel(word: &[u8]) -> bool {
        (0..word.len()).any(|i| !Self::is_consonant(word, i))
    }

    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && Self::is_consonant(word, n - 1)
    }

    /// `*o`: ends consonant-vowel-consonant, where the last consonant is not
    /// w, x or y. A two-letter vowel-consonant stem also qualifies.
    fn ends_cvc(word: &[u8]) -> bool {
        let n = word.len();
        if n == 2 {
            return !Self::is_consonant(word, 0) && Self::is_consonant(word, 1);
        }
        n >= 3
            && Self::is_consonant(word, n - 3)
            && !Self::is_consonant(word, n - 2)
            && Self::is_consonant(word, n - 1)
            && !matches!(word[n - 1], b'w' | b'x' | b'y')
    }

    /// Stem length if `word` ends with `suffix`.
    fn stem_len(word: &[u8], suffix: &str) -> Option<usize> {
        word.ends_with(suffix.as_bytes())
            .then(|| word.len() - suffix.len())
    }

    fn step1a(word: &mut Vec<u8>) {
        if word.len() == 4 && word.ends_with(b"ies") {
            word.pop();
        } else if word.ends_with(b"sses") || word.ends_with(b"ies") {
            word.truncate(word.len() - 2);
        } else if word.ends_with(b"ss") {
            // unchanged
        } else if word.ends_with(b"s") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<u8>) {
        if let Some(stem) = Self::stem_len(word, "ied") {
            word.truncate(stem);
            word.push(b'i');
            if stem == 1 {
                word.push(b'e');
            }
            return;
        }

        if let Some(stem) = Self::stem_len(word, "eed") {
            if Self::measure(&word[..stem]) > 0 {
                word.pop();
            }
            return;
        }

        let stem = Self::stem_len(word, "ed").or_else(|| Self::stem_len(word, "ing"));
        let Some(stem) = stem else {
            return;
        };
        if !Self::contains_vowel(&word[..stem]) {
            return;
        }
        word.truncate(stem);

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some(b'l') | Some(b's') | Some(b'z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step1c(word: &mut [u8]) {
        let n = word.len();
        if n > 2 && word[n - 1] == b'y' && Self::is_consonant(word, n - 2) {
            word[n - 1] = b'i';
        }
    }

    fn step2(word: &mut Vec<u8>) {
        // `-alli` is reduced first and the result goes through step 2 again.
        if let Some(stem) = Self::stem_len(word, "alli") {
            if Self::measure(&word[..stem]) > 0 {
                word.truncate(stem + 2);
                Self::step2(word);
                return;
            }
        }

        // The `l` of `-logi` counts towards the measure.
        if let Some(stem) = Self::stem_len(word, "logi") {
            if Self::measure(&word[..stem + 1]) > 0 {
                word.pop();
            }
            return;
        }

        Self::replace_suffix(word, STEP2_RULES, 0);
    }

    /// Replace the first matching suffix when the stem measure exceeds `min_measure`.
    fn replace_suffix(word: &mut Vec<u8>, rules: &[(&str, &str)], min_measure: usize) {
        for (suffix, replacement) in rules {
            if let Some(stem) = Self::stem_len(word, suffix) {
                if Self::measure(&word[..stem]) > min_measure {
                    word.truncate(stem);
                    word.extend_from_slice(replacement.as_bytes());
                }
                return;
            }
        }
    }

    fn step4(word: &mut Vec<u8>) {
        for suffix in STEP4_SUFFIXES {
            let Some(stem) = Self::stem_len(word, suffix) else {
                continue;
            };
            if *suffix == "ion" && !matches!(word[..stem].last(), Some(b's') | Some(b't')) {
                continue;
            }
            if Self::measure(&word[..stem]) > 1 {
                word.truncate(stem);
            }
            return;
        }
    }

    fn step5(word: &mut Vec<u8>) {
        if let Some(stem) = Self::stem_len(word, "e") {
            let m = Self::measure(&word[..stem]);
            if m > 1 || (m == 1 && !Self::ends_cvc(&word[..stem])) {
                word.pop();
            }
        }

        if Self::measure(word) > 1 && Self::ends_with_double_consonant(word) && word.ends_with(b"l")
        {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if let Some(stem) = irregular_form(&lowered) {
            return stem.to_string();
        }
        if lowered.len() <= 2 || !lowered.bytes().all(|b| b.is_ascii_lowercase()) {
            return lowered;
        }

        let mut bytes = lowered.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::step2(&mut bytes);
        Self::replace_suffix(&mut bytes, STEP3_RULES, 0);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        // Only ASCII letters were ever written.
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
