use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};

use crate::logutil::escape_unicode;
use crate::session::{Session, Submission};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Guessing,
    Unlocked,
}

/// What the game loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub submission: Submission,
}

/// Interactive game state layered over a [`Session`]
#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub leak: String,
    pub state: AppState,
    pub attempts: Vec<Attempt>,
}

impl App {
    pub fn new(mut session: Session) -> Self {
        let leak = session.prompt();
        Self {
            session,
            leak,
            state: AppState::Guessing,
            attempts: Vec::new(),
        }
    }

    pub fn typed(&self) -> String {
        self.session.input()
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // ctrl+c to quit, other chords are ignored
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::Continue,
            };
        }

        if self.state == AppState::Unlocked {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => {
                self.submit();
                Action::Continue
            }
            KeyCode::Char(c) => {
                debug!("key {}", escape_unicode(&c.to_string()));
                self.session.append_input(c);
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn submit(&mut self) {
        let guess = self.session.input();
        let submission = self.session.submit();

        if submission.matched {
            info!("password found after {} attempts", self.attempts.len() + 1);
            self.state = AppState::Unlocked;
        } else {
            self.session.reset_input();
        }

        self.attempts.push(Attempt { guess, submission });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app() -> App {
        let words = vec!["drown".to_string(), "whole".to_string()];
        App::new(Session::with_seed(words, 10, 8).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            assert_eq!(press(app, KeyCode::Char(c)), Action::Continue);
        }
    }

    #[test]
    fn test_new_app_generates_leak_once() {
        let app = create_test_app();
        assert_eq!(app.leak.chars().count(), 10);
        assert!(app.leak.contains("DROWN"));
        assert!(app.leak.contains("WHOLE"));
        assert_eq!(app.state, AppState::Guessing);
    }

    #[test]
    fn test_typing_echoes_upper_case() {
        let mut app = create_test_app();
        type_str(&mut app, "wh");
        assert_eq!(app.typed(), "WH");
    }

    #[test]
    fn test_wrong_guess_resets_input_and_records_attempt() {
        let mut app = create_test_app();
        let wrong = if app.session.password() == "DROWN" {
            "crown"
        } else {
            "whale"
        };
        type_str(&mut app, wrong);
        assert_eq!(press(&mut app, KeyCode::Enter), Action::Continue);

        assert_eq!(app.state, AppState::Guessing);
        assert_eq!(app.typed(), "");
        let attempt = app.last_attempt().unwrap();
        assert_eq!(attempt.guess, wrong.to_uppercase());
        assert!(!attempt.submission.matched);
    }

    #[test]
    fn test_correct_guess_unlocks_and_next_key_quits() {
        let mut app = create_test_app();
        let password = app.session.password().to_lowercase();
        type_str(&mut app, &password);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Unlocked);
        assert!(app.last_attempt().unwrap().submission.matched);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Action::Quit);
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app = create_test_app();
        assert_eq!(press(&mut app, KeyCode::Esc), Action::Quit);
        assert_eq!(
            app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(app.typed(), "");
    }
}
