use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use tally_core::menu::Menu;
use tally_core::order::{Console, Rejection, SENTINEL};
use tally_core::{Result, TallyError};

/// Rustyline helper that completes and hints menu item names.
#[derive(Clone)]
struct MenuHelper {
    candidates: Vec<String>,
}

impl MenuHelper {
    fn new(menu: &Menu) -> Self {
        let mut candidates: Vec<String> = menu.items().map(|i| i.name.to_string()).collect();
        candidates.push(SENTINEL.to_string());
        Self { candidates }
    }

    /// Candidates starting with `prefix`, ignoring case.
    fn matching(&self, prefix: &str) -> impl Iterator<Item = &String> {
        let prefix = prefix.to_lowercase();
        self.candidates
            .iter()
            .filter(move |c| c.to_lowercase().starts_with(&prefix))
    }

    fn is_candidate(&self, line: &str) -> bool {
        let line = line.trim();
        self.candidates.iter().any(|c| c.eq_ignore_ascii_case(line))
    }
}

impl Helper for MenuHelper {}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        let candidates: Vec<Pair> = self
            .matching(line)
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for MenuHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_candidate(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for MenuHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }

        self.matching(line)
            .find(|c| c.len() > line.len())
            .and_then(|c| c.get(line.len()..))
            .map(str::to_string)
    }
}

impl Validator for MenuHelper {}

/// Interactive console backed by a rustyline editor.
pub struct RustylineConsole {
    editor: Editor<MenuHelper, DefaultHistory>,
}

impl RustylineConsole {
    pub fn new(menu: &Menu) -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(MenuHelper::new(menu)));
        Ok(Self { editor })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Err(TallyError::Cancelled),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(TallyError::input(e.to_string())),
        }
    }

    fn reject(&mut self, rejection: &Rejection) {
        println!("{}", rejection.to_string().yellow());
    }
}
