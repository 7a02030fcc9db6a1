use clap::Parser;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;
use crate::session::{Session, SessionError};
use crate::word_list::{SupportedWordList, WordList, WordListError};

/// hack the terminal: find the password hidden in the memory leak
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    version,
    about,
    long_about = "Guess the password hidden among decoy words in a leaked memory dump. Wrong guesses report their Levenshtein and Hamming distance to the password."
)]
pub struct Cli {
    /// number of characters in the leaked memory dump
    #[clap(short = 's', long)]
    pub size: Option<usize>,

    /// built-in word list to hide the password in
    #[clap(short = 'l', long, value_enum)]
    pub word_list: Option<SupportedWordList>,

    /// only use this many randomly chosen words from the list
    #[clap(short = 'w', long)]
    pub number_of_words: Option<usize>,

    /// JSON word list file ({"name", "size", "words"}) used instead of a built-in list
    #[clap(short = 'f', long)]
    pub word_file: Option<PathBuf>,

    /// seed for a reproducible round
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    WordList(#[from] WordListError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Effective settings after layering command line flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub size: usize,
    pub word_list: SupportedWordList,
    pub word_file: Option<PathBuf>,
    pub number_of_words: Option<usize>,
    pub seed: Option<u64>,
}

impl RuntimeSettings {
    pub fn from_config_and_cli(cfg: &Config, cli: &Cli) -> Self {
        let configured_list = SupportedWordList::from_name(&cfg.word_list).unwrap_or_else(|| {
            warn!(
                "unknown word list {:?} in config, using classic",
                cfg.word_list
            );
            SupportedWordList::Classic
        });

        Self {
            size: cli.size.unwrap_or(cfg.size),
            word_list: cli.word_list.unwrap_or(configured_list),
            word_file: cli.word_file.clone(),
            number_of_words: cli.number_of_words.or(cfg.number_of_words),
            seed: cli.seed,
        }
    }

    fn load_words(&self) -> Result<WordList, WordListError> {
        match &self.word_file {
            Some(path) => WordList::from_file(path),
            None => self.word_list.load(),
        }
    }

    /// Resolve the word list and start a new round
    pub fn build_session(&self) -> Result<Session, SetupError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let list = self.load_words()?;
        let words = match self.number_of_words {
            Some(n) => list.get_random(n, &mut rng),
            None => list.words,
        };
        debug!("using word list {:?} with {} words", list.name, words.len());

        Ok(Session::with_rng(words, self.size, rng)?)
    }
}
