use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

static LANG_DIR: Dir = include_dir!("src/lang");

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list {0:?} not found")]
    NotFound(String),

    #[error("unable to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word list {0:?} has no words")]
    Empty(String),
}

/// Word lists compiled into the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SupportedWordList {
    Classic,
    Extended,
}

impl SupportedWordList {
    pub fn load(&self) -> Result<WordList, WordListError> {
        WordList::embedded(&self.to_string().to_lowercase())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    /// Load one of the lists bundled under `src/lang`
    pub fn embedded(name: &str) -> Result<Self, WordListError> {
        let file = LANG_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| WordListError::NotFound(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| WordListError::NotFound(name.to_string()))?;

        Self::parse(contents)
    }

    /// Load a list from a JSON file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(json: &str) -> Result<Self, WordListError> {
        let mut list: WordList = serde_json::from_str(json)?;
        list.words = list
            .words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if list.words.is_empty() {
            return Err(WordListError::Empty(list.name));
        }
        Ok(list)
    }

    /// Pick `num` distinct words in random order, or the whole list when
    /// `num` is larger than it.
    pub fn get_random<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Vec<String> {
        self.words.choose_multiple(rng, num).cloned().collect()
    }
}
