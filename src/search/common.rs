use crate::base::{wrap1, Factor, Word};

/// Wrap `letters` (possibly collected from a `Word::backtrack` call) into a
/// plain `Vec<Letter>` factor content, so detectors never have to juggle
/// `Word` wrappers for intermediate pieces.
pub fn backtrack_content(content: &[crate::base::Letter]) -> Vec<crate::base::Letter> {
    Word::from_letters(content.to_vec()).backtrack().letters().to_vec()
}

/// Build the factor that starts right after `prev` ends and runs for `len`
/// letters (`len == 0` yields an empty factor anchored at that position).
pub fn factor_after(word: &Word, prev: &Factor, len: usize) -> Factor {
    let n = word.len();
    let start = wrap1(prev.finish as i64 + 1, n);
    factor_of_len(word, start, len)
}

/// Build the factor running from `start` for `len` letters.
pub fn factor_from(word: &Word, start: usize, len: usize) -> Factor {
    let n = word.len();
    let finish = wrap1(start as i64 + len as i64 - 1, n);
    Factor::at(word, start, finish)
}

/// Like `factor_from`, but handles the degenerate `len == 0` case (the
/// quarter-turn criterion's only admitted empty factor).
pub fn factor_of_len(word: &Word, start: usize, len: usize) -> Factor {
    if len == 0 {
        Factor::empty_before(start, word.len())
    } else {
        factor_from(word, start, len)
    }
}
