use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterExample {
    pub text: &'static str,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChamberExample {
    pub position: &'static str,
    pub speed: i64,
    pub description: &'static str,
}

pub const LETTER_EXAMPLES: &[LetterExample] = &[
    LetterExample {
        text: "A slow yellow fox crawls under the proactive dog",
        expected: "bjkmqz",
    },
    LetterExample {
        text: "A quick brown fox jumps over the lazy dog",
        expected: "",
    },
    LetterExample {
        text: "Hello World",
        expected: "abcfgijkmnpqstuvxyz",
    },
];

pub const CHAMBER_EXAMPLES: &[ChamberExample] = &[
    ChamberExample {
        position: "..R....",
        speed: 2,
        description: "Single particle moving right",
    },
    ChamberExample {
        position: "RR..LRL",
        speed: 3,
        description: "Multiple particles with different directions",
    },
    ChamberExample {
        position: "LRLR.LRLR",
        speed: 2,
        description: "Complex particle interactions",
    },
    ChamberExample {
        position: "RLRLRLRLRL",
        speed: 10,
        description: "High-speed particles (all exit quickly)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animate, find_unused_letters};

    #[test]
    fn letter_examples_match_their_expected_output() {
        for example in LETTER_EXAMPLES {
            assert_eq!(find_unused_letters(example.text), example.expected);
        }
    }

    #[test]
    fn chamber_examples_are_valid_inputs() {
        for example in CHAMBER_EXAMPLES {
            let trace = animate(example.position, example.speed).expect("preset must be valid");
            assert_eq!(trace.width(), example.position.len());
        }
    }
}
