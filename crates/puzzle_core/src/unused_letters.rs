pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const FULL_MASK: u32 = (1 << 26) - 1;

/// Set of lowercase Latin letters, one bit per letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the letters observed in `text` after lowercasing it.
    /// Anything outside `a`-`z` is ignored.
    pub fn from_text(text: &str) -> Self {
        text.chars()
            .flat_map(char::to_lowercase)
            .fold(Self::new(), |mut set, letter| {
                set.insert(letter);
                set
            })
    }

    pub fn insert(&mut self, letter: char) -> bool {
        let Some(bit) = letter_bit(letter) else {
            return false;
        };
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    pub fn contains(&self, letter: char) -> bool {
        letter_bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == FULL_MASK
    }

    pub fn complement(&self) -> Self {
        Self(!self.0 & FULL_MASK)
    }

    pub fn letters(&self) -> String {
        ALPHABET.chars().filter(|letter| self.contains(*letter)).collect()
    }
}

fn letter_bit(letter: char) -> Option<u32> {
    letter
        .is_ascii_lowercase()
        .then(|| 1 << (letter as u32 - 'a' as u32))
}

/// Returns the letters that never appear in `input`, lowercase and in alphabetical order.
pub fn find_unused_letters(input: &str) -> String {
    LetterSet::from_text(input).complement().letters()
}

pub fn used_letters(input: &str) -> String {
    LetterSet::from_text(input).letters()
}

pub fn is_pangram(input: &str) -> bool {
    LetterSet::from_text(input).is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pangram_leaves_nothing_unused() {
        assert_eq!(
            find_unused_letters("A quick brown fox jumps over the lazy dog"),
            ""
        );
        assert!(is_pangram("A quick brown fox jumps over the lazy dog"));
    }

    #[test]
    fn sentence_reports_missing_letters() {
        assert_eq!(
            find_unused_letters("A slow yellow fox crawls under the proactive dog"),
            "bjkmqz"
        );
    }

    #[test]
    fn hello_world() {
        assert_eq!(find_unused_letters("Hello World"), "abcfgijkmnpqstuvxyz");
        assert_eq!(used_letters("Hello World"), "dehlorw");
    }

    #[test]
    fn empty_input_misses_whole_alphabet() {
        assert_eq!(find_unused_letters(""), ALPHABET);
        assert!(LetterSet::from_text("").is_empty());
    }

    #[test]
    fn non_latin_and_punctuation_are_ignored() {
        assert_eq!(find_unused_letters("123 !? ÄÖÜ ß 漢字"), ALPHABET);
    }

    #[test]
    fn kelvin_sign_lowercases_to_k() {
        // U+212A lowercases to ASCII 'k'.
        assert!(!find_unused_letters("\u{212A}").contains('k'));
    }

    #[test]
    fn insert_reports_new_letters_only() {
        let mut set = LetterSet::new();
        assert!(set.insert('a'));
        assert!(!set.insert('a'));
        assert!(!set.insert('A'));
        assert!(!set.insert('1'));
        assert_eq!(set.len(), 1);
        assert_eq!(set.complement().len(), 25);
    }
}
