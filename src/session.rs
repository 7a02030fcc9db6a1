use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::distance::{hamming, levenshtein, DistanceError};
use crate::leak;
use crate::logutil::escape_unicode;

pub const DEFAULT_SIZE: usize = 1000;

pub const SUCCESS_MESSAGE: &str = ">> Congratulations. You broke the password!";
pub const FAILURE_MESSAGE: &str = ">> Incorrect password.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("leak size must be positive")]
    ZeroSize,

    #[error("word {word:?} has {len} characters but only {interval} fit between words")]
    WordTooLong {
        word: String,
        len: usize,
        interval: usize,
    },
}

/// Both similarity metrics for a rejected guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    pub levenshtein: Result<usize, DistanceError>,
    pub hamming: Result<usize, DistanceError>,
}

impl Distances {
    fn between(guess: &str, password: &str) -> Self {
        Self {
            levenshtein: levenshtein(guess, password),
            hamming: hamming(guess, password),
        }
    }

    fn report(&self) -> String {
        let levenshtein = match self.levenshtein {
            Ok(d) => format!("Levenshtein distance is [{d}]"),
            Err(_) => "Levenshtein distance cannot be calculated.".to_string(),
        };
        let hamming = match self.hamming {
            Ok(d) => format!("Hamming distance is [{d}]"),
            Err(_) => "Hamming distance cannot be calculated.".to_string(),
        };
        format!("{levenshtein}\n{hamming}")
    }
}

/// Outcome of pressing enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub matched: bool,
    pub message: String,
    pub distances: Option<Distances>,
}

/// One round of the game: a fixed word list, a hidden password and whatever
/// the player has typed since the last submission.
#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    words: Vec<String>,
    size: usize,
    password: String,
    input: Vec<char>,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(words: Vec<String>, size: usize) -> Result<Self, SessionError> {
        Self::with_rng(words, size, StdRng::from_entropy())
    }

    pub fn with_seed(words: Vec<String>, size: usize, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(words, size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(words: Vec<String>, size: usize, mut rng: R) -> Result<Self, SessionError> {
        validate(&words, size)?;

        let password = words[rng.gen_range(0..words.len())].to_uppercase();
        debug!(
            "session created: {} words, leak size {}",
            words.len(),
            size
        );

        Ok(Self {
            words,
            size,
            password,
            input: Vec::new(),
            rng,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Generate a fresh leak string; filler differs on every call
    pub fn prompt(&mut self) -> String {
        leak::generate(&self.words, self.size, &mut self.rng)
    }

    pub fn append_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn reset_input(&mut self) {
        self.input.clear();
    }

    pub fn input(&self) -> String {
        self.input.iter().collect::<String>().to_uppercase()
    }

    /// Compare the typed input against the password. Input is left untouched.
    pub fn submit(&self) -> Submission {
        let guess = self.input();
        debug!("submitted guess {}", escape_unicode(&guess));

        if guess == self.password {
            return Submission {
                matched: true,
                message: SUCCESS_MESSAGE.to_string(),
                distances: None,
            };
        }

        let distances = Distances::between(&guess, &self.password);
        Submission {
            matched: false,
            message: format!("{FAILURE_MESSAGE}\n{}", distances.report()),
            distances: Some(distances),
        }
    }
}

fn validate(words: &[String], size: usize) -> Result<(), SessionError> {
    if words.is_empty() {
        return Err(SessionError::EmptyWordList);
    }
    if size == 0 {
        return Err(SessionError::ZeroSize);
    }

    let interval = leak::word_interval(size, words.len()).unwrap_or(0);
    for word in words {
        let len = word.to_uppercase().chars().count();
        if len > interval {
            return Err(SessionError::WordTooLong {
                word: word.clone(),
                len,
                interval,
            });
        }
    }
    Ok(())
}
