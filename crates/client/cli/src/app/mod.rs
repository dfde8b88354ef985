//! Menu flows tying the prompt, the arena, and battle narration together.
use std::io::{BufRead, Write};

use battle_core::{AccountName, BattleError, Creature, ErrorSeverity};
use battle_runtime::{AccountError, AccountRepository, Arena, BattleReport, RuntimeError};
use thiserror::Error;

use crate::input::{Prompt, PromptError};
use crate::presentation::format::{
    format_creature_entry, format_opponent_entry, format_record_line, format_report,
};

const INVALID_MENU_CHOICE: &str = "Invalid choice. Please select 1, 2, or 3.\n";

/// Failures that end the interactive session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl BattleError for AppError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Prompt(PromptError::Closed) => ErrorSeverity::Recoverable,
            Self::Prompt(PromptError::Io(_)) => ErrorSeverity::Fatal,
            Self::Account(inner) => inner.severity(),
            Self::Runtime(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Prompt(PromptError::Closed) => "PROMPT_CLOSED",
            Self::Prompt(PromptError::Io(_)) => "PROMPT_IO",
            Self::Account(inner) => inner.error_code(),
            Self::Runtime(inner) => inner.error_code(),
        }
    }
}

type AppResult<T> = Result<T, AppError>;

pub struct CliApp<R, W, Repo> {
    prompt: Prompt<R, W>,
    arena: Arena<Repo>,
}

impl<R, W, Repo> CliApp<R, W, Repo>
where
    R: BufRead,
    W: Write,
    Repo: AccountRepository,
{
    pub fn new(prompt: Prompt<R, W>, arena: Arena<Repo>) -> Self {
        Self { prompt, arena }
    }

    /// Run the main menu until the user exits or input closes.
    pub fn run(&mut self) -> AppResult<()> {
        tracing::info!("CLI client starting...");
        match self.main_menu() {
            Err(AppError::Prompt(PromptError::Closed)) => {
                tracing::info!("Input closed, exiting");
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    severity = %err.severity(),
                    code = err.error_code(),
                    "Session ended: {}",
                    err
                );
                Err(err)
            }
            Ok(()) => Ok(()),
        }
    }

    fn main_menu(&mut self) -> AppResult<()> {
        loop {
            self.prompt.say("=== Creature Battle Game ===")?;
            self.prompt.say("1. Register")?;
            self.prompt.say("2. Login")?;
            self.prompt.say("3. Exit")?;
            let choice = self.prompt.ask("Select an option: ")?;

            match choice.trim() {
                "1" => self.register()?,
                "2" => {
                    if let Some(user) = self.login()? {
                        self.user_menu(&user)?;
                    }
                }
                "3" => {
                    self.prompt.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompt.say(INVALID_MENU_CHOICE)?,
            }
        }
    }

    fn register(&mut self) -> AppResult<()> {
        self.prompt.say("\n=== Register ===")?;

        let username = loop {
            let username = self.prompt.ask("Enter a username: ")?.trim().to_string();
            if username.is_empty() {
                self.prompt.say("Username cannot be empty.")?;
            } else if self.arena.accounts().is_registered(&username)? {
                self.prompt
                    .say("Username already exists. Please choose a different one.")?;
            } else {
                break username;
            }
        };

        loop {
            let password = self.prompt.ask_secret("Enter a password: ")?;
            let confirmation = self.prompt.ask_secret("Confirm password: ")?;

            match self
                .arena
                .accounts()
                .register(&username, &password, &confirmation)
            {
                Ok(name) => {
                    self.prompt
                        .say(format!("Account created successfully for {}!\n", name))?;
                    return Ok(());
                }
                Err(AccountError::PasswordMismatch) => {
                    self.prompt.say("Passwords do not match. Please try again.")?;
                }
                Err(AccountError::EmptyPassword) => {
                    self.prompt.say("Password cannot be empty.")?;
                }
                Err(AccountError::UsernameTaken(_)) => {
                    self.prompt
                        .say("Username already exists. Please choose a different one.\n")?;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn login(&mut self) -> AppResult<Option<AccountName>> {
        self.prompt.say("\n=== Login ===")?;
        let username = self.prompt.ask("Enter your username: ")?;
        if !self.arena.accounts().is_registered(&username)? {
            self.prompt
                .say("Username does not exist. Please register first.\n")?;
            return Ok(None);
        }

        let password = self.prompt.ask_secret("Enter your password: ")?;
        match self.arena.accounts().login(&username, &password) {
            Ok(name) => {
                self.prompt
                    .say(format!("Logged in successfully as {}!\n", name))?;
                Ok(Some(name))
            }
            Err(AccountError::WrongPassword) => {
                self.prompt.say("Incorrect password. Please try again.\n")?;
                Ok(None)
            }
            Err(AccountError::UnknownUser(_)) => {
                self.prompt
                    .say("Username does not exist. Please register first.\n")?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn user_menu(&mut self, user: &AccountName) -> AppResult<()> {
        loop {
            self.prompt.say(format!("=== Welcome, {}! ===", user))?;
            self.prompt.say("1. View Statistics")?;
            self.prompt.say("2. Battle")?;
            self.prompt.say("3. Logout")?;
            let choice = self.prompt.ask("Select an option: ")?;

            match choice.trim() {
                "1" => self.show_statistics(user)?,
                "2" => self.battle_menu(user)?,
                "3" => {
                    self.prompt.say(format!("Logging out {}...\n", user))?;
                    return Ok(());
                }
                _ => self.prompt.say(INVALID_MENU_CHOICE)?,
            }
        }
    }

    fn show_statistics(&mut self, user: &AccountName) -> AppResult<()> {
        let record = self.arena.accounts().record(user)?;
        self.prompt.say("\n=== Your Statistics ===")?;
        self.prompt.say(format!("Wins: {}", record.wins))?;
        self.prompt.say(format!("Losses: {}\n", record.losses))?;
        Ok(())
    }

    fn battle_menu(&mut self, user: &AccountName) -> AppResult<()> {
        self.prompt.say("\n=== Battle Mode ===")?;
        self.prompt.say("1. Battle against another user")?;
        self.prompt.say("2. Battle against the computer")?;
        let choice = self.prompt.ask("Select battle mode: ")?;

        match choice.trim() {
            "1" => self.battle_user(user),
            "2" => self.battle_computer(user),
            _ => {
                self.prompt
                    .say("Invalid choice. Returning to user menu.\n")?;
                Ok(())
            }
        }
    }

    fn battle_user(&mut self, user: &AccountName) -> AppResult<()> {
        let opponents = self.arena.accounts().opponents(user)?;
        if opponents.is_empty() {
            self.prompt.say(
                "No other users available to battle. Please register another account.\n",
            )?;
            return Ok(());
        }

        self.prompt.say("\nAvailable opponents:")?;
        for (index, (name, record)) in opponents.iter().enumerate() {
            self.prompt
                .say(format_opponent_entry(index + 1, name.as_str(), record))?;
        }
        let choice = self
            .prompt
            .ask_index("Select an opponent by number: ", opponents.len())?;
        let opponent = opponents[choice - 1].0.clone();

        self.prompt
            .say(format!("\nYou are battling against {}!\n", opponent))?;
        self.prompt
            .say(format!("=== {}'s Turn to Select a Creature ===", user))?;
        let creature = self.select_creature()?;

        let report = self.arena.battle_account(user, creature, &opponent)?;
        self.prompt.say(format!(
            "{} selected {}!\n",
            opponent, report.second.creature.name
        ))?;
        self.narrate(&report)
    }

    fn battle_computer(&mut self, user: &AccountName) -> AppResult<()> {
        self.prompt.say("\n=== Computer Battle ===")?;
        self.prompt
            .say(format!("=== {}'s Turn to Select a Creature ===", user))?;
        let creature = self.select_creature()?;

        let report = self.arena.battle_computer(user, creature)?;
        self.prompt.say(format!(
            "Computer selected {}!\n",
            report.second.creature.name
        ))?;
        self.narrate(&report)
    }

    fn select_creature(&mut self) -> AppResult<Creature> {
        self.prompt.say("=== Select Your Creature ===")?;
        self.prompt.say("Available creatures:")?;
        let entries: Vec<String> = self
            .arena
            .catalog()
            .iter()
            .enumerate()
            .map(|(index, creature)| format_creature_entry(index + 1, creature))
            .collect();
        for entry in &entries {
            self.prompt.say(entry)?;
        }

        let choice = self
            .prompt
            .ask_index("Select a creature by number: ", entries.len())?;
        // ask_index keeps the choice within the catalog
        let creature = self.arena.catalog().as_slice()[choice - 1].clone();
        self.prompt
            .say(format!("You selected {}!\n", creature.name))?;
        Ok(creature)
    }

    fn narrate(&mut self, report: &BattleReport) -> AppResult<()> {
        for line in format_report(report) {
            self.prompt.say(line)?;
        }

        let credited = [&report.update.win_credited, &report.update.loss_credited];
        for name in credited.into_iter().flatten() {
            let record = self.arena.accounts().record(name)?;
            self.prompt.say(format_record_line(name, &record))?;
        }
        if !report.update.is_empty() {
            self.prompt.say("")?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (Prompt<R, W>, Arena<Repo>) {
        (self.prompt, self.arena)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use battle_runtime::InMemoryAccountRepo;

    use super::*;
    use crate::input::SecretMode;

    type ScriptedApp = CliApp<Cursor<Vec<u8>>, Vec<u8>, InMemoryAccountRepo>;

    fn app(script: &str) -> ScriptedApp {
        let prompt = Prompt::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            SecretMode::Plain,
        );
        let arena = Arena::builder(InMemoryAccountRepo::new())
            .seed(42)
            .build()
            .unwrap();
        CliApp::new(prompt, arena)
    }

    fn run(script: &str) -> (String, Arena<InMemoryAccountRepo>) {
        let mut app = app(script);
        app.run().unwrap();
        let (prompt, arena) = app.into_parts();
        (String::from_utf8(prompt.into_output()).unwrap(), arena)
    }

    #[test]
    fn closed_input_exits_quietly() {
        let (output, _) = run("");
        assert!(output.contains("=== Creature Battle Game ==="));
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn register_retries_until_valid() {
        let (output, arena) = run("1\n\nash\nabc\nxyz\n\n\npw\npw\n1\nash\nmisty\npw\npw\n3\n");

        assert!(output.contains("Username cannot be empty."));
        assert!(output.contains("Passwords do not match. Please try again."));
        assert!(output.contains("Password cannot be empty."));
        assert!(output.contains("Account created successfully for ash!"));
        assert!(output.contains("Username already exists. Please choose a different one."));
        assert!(arena.accounts().is_registered("ash").unwrap());
        assert!(arena.accounts().is_registered("misty").unwrap());
    }

    #[test]
    fn login_reports_unknown_user_and_wrong_password() {
        let (output, _) = run("1\nash\npw\npw\n2\nghost\n2\nash\nnope\n9\n3\n");

        assert!(output.contains("Username does not exist. Please register first."));
        assert!(output.contains("Incorrect password. Please try again."));
        assert!(output.contains("Invalid choice. Please select 1, 2, or 3."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn statistics_start_at_zero() {
        let (output, _) = run("1\nash\npw\npw\n2\nash\npw\n1\n3\n3\n");

        assert!(output.contains("Logged in successfully as ash!"));
        assert!(output.contains("Wins: 0\nLosses: 0\n"));
        assert!(output.contains("Logging out ash..."));
    }

    #[test]
    fn user_battle_requires_another_account() {
        let (output, _) = run("1\nash\npw\npw\n2\nash\npw\n2\n1\n2\n7\n3\n3\n");

        assert!(output.contains("No other users available to battle."));
        assert!(output.contains("Invalid choice. Returning to user menu."));
    }

    #[test]
    fn user_battle_records_one_win_and_one_loss() {
        let script = "1\nash\npw\npw\n1\ngary\npw\npw\n2\nash\npw\n2\n1\n1\n10\n3\n3\n";
        let (output, arena) = run(script);

        assert!(output.contains("1. gary (Wins: 0, Losses: 0)"));
        assert!(output.contains("You are battling against gary!"));
        assert!(output.contains("You selected Snorlax!"));
        assert!(output.contains("=== Battle Start ==="));
        assert!(output.contains("wins the battle!"));

        assert!(output.contains("ash's record is now Wins: "));
        assert!(output.contains("gary's record is now Wins: "));

        let ash = arena.accounts().record(&AccountName::new("ash")).unwrap();
        let gary = arena.accounts().record(&AccountName::new("gary")).unwrap();
        assert_eq!(ash.wins + gary.wins, 1);
        assert_eq!(ash.losses + gary.losses, 1);
    }

    #[test]
    fn computer_battle_updates_only_the_player() {
        let (output, arena) = run("1\nash\npw\npw\n2\nash\npw\n2\n2\nx\n0\n4\n3\n3\n");

        assert!(output.contains("=== Computer Battle ==="));
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Please enter a number between 1 and 10."));
        assert!(output.contains("You selected Pikachu!"));
        assert!(output.contains("Computer selected "));
        assert!(output.contains("ash's record is now Wins: "));
        assert!(!output.contains("Computer's record"));

        let record = arena.accounts().record(&AccountName::new("ash")).unwrap();
        assert_eq!(record.wins + record.losses, 1);
        assert_eq!(arena.accounts().opponents(&AccountName::new("ash")).unwrap().len(), 0);
    }

    #[test]
    fn session_errors_keep_their_classification() {
        let closed = AppError::from(PromptError::Closed);
        assert_eq!(closed.error_code(), "PROMPT_CLOSED");
        assert!(closed.severity().is_recoverable());

        let self_battle = AppError::from(RuntimeError::SelfBattle(AccountName::new("ash")));
        assert_eq!(self_battle.error_code(), "RUNTIME_SELF_BATTLE");
        assert_eq!(self_battle.severity(), ErrorSeverity::Validation);

        let taken = AppError::from(AccountError::UsernameTaken(AccountName::new("ash")));
        assert_eq!(taken.error_code(), "ACCOUNT_USERNAME_TAKEN");
        assert_eq!(taken.severity(), ErrorSeverity::Recoverable);
    }
}
