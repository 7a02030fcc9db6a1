use rand::seq::SliceRandom;
use rand::Rng;

/// Noise characters scattered between the decoy words
pub const SPECIAL_CHARACTERS: &[char] = &[
    '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '=', '{', '}', '[', ']', ';',
    ':', '\'', '"', '<', '>', '.', ',', '/', '?', '-', '_',
];

/// Distance in characters between the starts of two consecutive words.
///
/// Returns `None` for an empty word list.
pub fn word_interval(size: usize, word_count: usize) -> Option<usize> {
    size.checked_div(word_count)
}

/// Builds a leak string of exactly `size` characters.
///
/// Word `k` (upper-cased) starts at character offset `k * interval`; every
/// other offset holds a random [`SPECIAL_CHARACTERS`] entry. Callers must make
/// sure no word is longer than the interval, otherwise later words shift and
/// the output overruns `size`.
pub fn generate<R: Rng + ?Sized>(words: &[String], size: usize, rng: &mut R) -> String {
    let interval = match word_interval(size, words.len()) {
        Some(interval) if interval > 0 => interval,
        _ => return filler(size, rng),
    };

    let mut leak = String::with_capacity(size);
    let mut len = 0;
    let mut pending = words.iter();
    let mut next_word = pending.next();

    while len < size {
        match next_word {
            Some(word) if len % interval == 0 => {
                let upper = word.to_uppercase();
                len += upper.chars().count();
                leak.push_str(&upper);
                next_word = pending.next();
            }
            _ => {
                leak.push(random_special(rng));
                len += 1;
            }
        }
    }

    leak
}

fn filler<R: Rng + ?Sized>(size: usize, rng: &mut R) -> String {
    (0..size).map(|_| random_special(rng)).collect()
}

fn random_special<R: Rng + ?Sized>(rng: &mut R) -> char {
    // the pool is a non-empty constant
    *SPECIAL_CHARACTERS.choose(rng).unwrap_or(&'.')
}
