//! Player input for the REPL.
//!
//! An interactive terminal gets a rustyline editor with command-word completion and
//! history kept under the user's data directory. Anything else (pipes, CI) is read
//! line by line from stdin. [`ScriptedInput`] replays canned lines for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// What came back from one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the REPL can read player input from.
pub trait LineSource {
    /// Show `prompt` (if the source is interactive) and read one line.
    ///
    /// # Errors
    /// - if the underlying reader fails
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Tab-completes the command word at the start of the line.
struct CommandCompleter {
    words: Vec<String>,
}
impl Helper for CommandCompleter {}
impl Hinter for CommandCompleter {
    type Hint = String;
}
impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = command_candidates(&self.words, line, pos);
        let pairs = matches
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Where the completed word starts and which command words fit what is typed so far.
/// Arguments are never completed.
fn command_candidates<'a>(words: &'a [String], line: &str, pos: usize) -> (usize, Vec<&'a str>) {
    let typed = line.get(..pos).unwrap_or(line);
    let word = typed.trim_start();
    let start = typed.len() - word.len();
    if word.is_empty() || word.contains(char::is_whitespace) {
        return (start, Vec::new());
    }
    let word = word.to_lowercase();
    let matches = words
        .iter()
        .map(String::as_str)
        .filter(|candidate| candidate.starts_with(&word))
        .collect();
    (start, matches)
}

type ReplEditor = Editor<CommandCompleter, DefaultHistory>;

/// Reads player input from the terminal, preferring rustyline.
///
/// Without an editor, lines are read plainly from stdin.
pub struct InputManager {
    editor: Option<Box<ReplEditor>>,
    history: Option<PathBuf>,
}

impl InputManager {
    /// Build an input manager that tab-completes the given command words.
    pub fn new<'a>(command_words: impl IntoIterator<Item = &'a str>) -> Self {
        let plain = InputManager {
            editor: None,
            history: None,
        };
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal; reading plain lines");
            return plain;
        }
        let mut editor = match ReplEditor::new() {
            Ok(editor) => editor,
            Err(err) => {
                warn!("rustyline unavailable ({err}); reading plain lines");
                return plain;
            },
        };
        let words = command_words.into_iter().map(str::to_string).collect();
        editor.set_helper(Some(CommandCompleter { words }));

        let history = history_path();
        if let Some(path) = &history
            && path.exists()
            && let Err(err) = editor.load_history(path)
        {
            warn!("could not load history from {}: {err}", path.display());
        }
        InputManager {
            editor: Some(Box::new(editor)),
            history,
        }
    }

    fn save_history(&mut self) {
        let (Some(editor), Some(path)) = (self.editor.as_mut(), self.history.as_ref()) else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(err) = std::fs::create_dir_all(dir)
        {
            warn!("could not create {}: {err}", dir.display());
            return;
        }
        if let Err(err) = editor.save_history(path) {
            warn!("could not save history to {}: {err}", path.display());
        }
    }
}

impl LineSource for InputManager {
    /// Falls back to plain stdin for good if the editor hits an unexpected error.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return read_plain_line(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = editor.add_history_entry(line.as_str())
                {
                    warn!("could not record history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => {
                warn!("rustyline failed ({err}); switching to plain input");
                self.save_history();
                self.editor = None;
                read_plain_line(prompt)
            },
        }
    }
}

impl Drop for InputManager {
    fn drop(&mut self) {
        self.save_history();
    }
}

fn read_plain_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(InputEvent::Line(line))
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("gvzork").join("history.txt"))
}

/// Replays a fixed sequence of lines, then reports end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}
