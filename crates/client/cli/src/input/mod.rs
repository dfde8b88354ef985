//! Input processing for the CLI client.
//!
//! [`Prompt`] wraps a line reader and a writer so menu flows stay agnostic
//! about whether they talk to a terminal or to scripted input. Hidden password
//! entry goes through `crossterm` raw mode only when attached to a terminal.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// Errors raised while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input reached end-of-file or the user pressed Ctrl-C/Ctrl-D.
    #[error("input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// How secrets (passwords) are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretMode {
    /// Read keys in raw mode without echo.
    ///
    /// Keys come straight from the terminal, bypassing the prompt's line
    /// reader: text typed ahead and already buffered by the reader is not
    /// seen by the password prompt.
    Hidden,
    /// Read a plain line (stdin is not a terminal).
    Plain,
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    secret_mode: SecretMode,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, secret_mode: SecretMode) -> Self {
        Self {
            input,
            output,
            secret_mode,
        }
    }

    /// Write one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> PromptResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Ask a question and return the answer without its trailing newline.
    pub fn ask(&mut self, question: &str) -> PromptResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a secret without echoing it when on a terminal.
    pub fn ask_secret(&mut self, question: &str) -> PromptResult<String> {
        match self.secret_mode {
            SecretMode::Plain => self.ask(question),
            SecretMode::Hidden => {
                write!(self.output, "{}", question)?;
                self.output.flush()?;
                let secret = read_hidden_line()?;
                writeln!(self.output)?;
                secret.ok_or(PromptError::Closed)
            }
        }
    }

    /// Ask until the answer is a number in `1..=max`.
    pub fn ask_index(&mut self, question: &str, max: usize) -> PromptResult<usize> {
        loop {
            let answer = self.ask(question)?;
            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                Ok(_) => self.say(format!("Please enter a number between 1 and {}.", max))?,
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Read one line from the terminal in raw mode, without echo.
///
/// Returns `None` on Ctrl-C, or on Ctrl-D with an empty buffer.
fn read_hidden_line() -> io::Result<Option<String>> {
    terminal::enable_raw_mode()?;
    let result = read_hidden_keys();
    terminal::disable_raw_mode()?;
    result
}

fn read_hidden_keys() -> io::Result<Option<String>> {
    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        else {
            continue;
        };

        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Enter => return Ok(Some(secret)),
            KeyCode::Char('c') if ctrl => return Ok(None),
            KeyCode::Char('d') if ctrl && secret.is_empty() => return Ok(None),
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) if !ctrl => secret.push(c),
            _ => {}
        }
    }
}
