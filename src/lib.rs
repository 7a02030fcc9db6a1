// Library surface for headless/integration tests and reuse.
pub mod app;
pub mod config;
pub mod distance;
pub mod leak;
pub mod logutil;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod ui;
pub mod word_list;

pub use distance::{hamming, levenshtein, DistanceError};
pub use session::{Session, SessionError, Submission};
