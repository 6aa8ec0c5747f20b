/// Colour of one submitted letter against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    Match,        // Green
    PartialMatch, // Yellow
    NoMatch,      // Gray
}

impl LetterFeedback {
    pub fn to_char(self) -> char {
        match self {
            Self::Match => 'G',
            Self::PartialMatch => 'Y',
            Self::NoMatch => 'X',
        }
    }
}

/// Score `guess` against `solution`, ignoring case.
///
/// Greens are assigned first; a repeated guess letter only turns yellow while
/// unmatched copies of it remain in the solution.
pub fn get_feedback(guess: &str, solution: &str) -> Vec<LetterFeedback> {
    let guess_chars: Vec<char> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut solution_chars: Vec<Option<char>> = solution
        .chars()
        .map(|c| Some(c.to_ascii_lowercase()))
        .collect();
    let mut feedback = vec![LetterFeedback::NoMatch; guess_chars.len()];

    // First pass: greens
    for (i, &g) in guess_chars.iter().enumerate() {
        if solution_chars.get(i).copied().flatten() == Some(g) {
            feedback[i] = LetterFeedback::Match;
            solution_chars[i] = None;
        }
    }
    // Second pass: yellows
    for (i, &g) in guess_chars.iter().enumerate() {
        if feedback[i] == LetterFeedback::Match {
            continue;
        }
        if let Some(pos) = solution_chars.iter().position(|&c| c == Some(g)) {
            feedback[i] = LetterFeedback::PartialMatch;
            solution_chars[pos] = None;
        }
    }
    feedback
}

pub fn feedback_string(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_green() {
        assert_eq!(feedback_string(&get_feedback("CRANE", "crane")), "GGGGG");
    }

    #[test]
    fn test_mixed_feedback() {
        // R, A, E in place; C and N absent from FRAME
        assert_eq!(feedback_string(&get_feedback("crane", "frame")), "XGGXG");
        assert_eq!(feedback_string(&get_feedback("words", "crane")), "XXYXX");
    }

    #[test]
    fn test_repeated_letters_respect_counts() {
        assert_eq!(feedback_string(&get_feedback("speed", "crepe")), "XYGYX");
        // CREPE has two Es: one green, one left for the first yellow, none for the second
        assert_eq!(feedback_string(&get_feedback("eerie", "crepe")), "YXYXG");
    }

    #[test]
    fn test_longer_words() {
        assert_eq!(
            feedback_string(&get_feedback("planet", "planer")),
            "GGGGGX"
        );
    }
}
