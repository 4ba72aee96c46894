//! Line-oriented interactive session.
//!
//! Reads one menu command per line, runs the matching handler and writes
//! the outcome. `create` asks for the record fields one prompt at a time,
//! in the same order as the entry form.

use std::io::{BufRead, Write};

use anyhow::Context;

use stockroom_core::Field;
use stockroom_inventory::NewRecord;

use crate::commands::{self, AppState};
use crate::types::{Notification, Outcome};

const BANNER: &str = "Storage Management";

const HELP: &str = "\
Commands:
  load           Load previous session from the storage file
  create         Create an item
  show           Show storage
  find [ID]      Find an item
  delete [ID]    Delete an item
  recent         Most recent products
  save           Save current session to the storage file
  help           Show this list
  quit           Leave
";

/// A parsed menu command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load,
    Create,
    Show,
    Find(Option<String>),
    Delete(Option<String>),
    Recent,
    Save,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// Everything after the verb is the argument, so `find 4 2` asks for
    /// the id `"4 2"` rather than `"4"`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        let command = match verb.to_ascii_lowercase().as_str() {
            "load" => ShellCommand::Load,
            "create" | "add" => ShellCommand::Create,
            "show" | "list" => ShellCommand::Show,
            "find" => ShellCommand::Find(arg),
            "delete" => ShellCommand::Delete(arg),
            "recent" => ShellCommand::Recent,
            "save" => ShellCommand::Save,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command {other:?}; type help for a list")),
        };
        Ok(Some(command))
    }
}

/// Prompt shown for each field of the create form.
fn form_prompt(field: Field) -> &'static str {
    match field {
        Field::ItemId => "itemID",
        Field::Product => "Product Name",
        Field::Quantity => "Quantity",
        Field::FirstName => "First Name",
        Field::LastName => "Last Name",
        Field::PhoneNumber => "Phone Number (xxx-xxx-xxxx)",
        Field::Email => "Email",
    }
}

/// Interactive session over any line source and sink.
pub struct Session<R, W> {
    state: AppState,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: AppState, input: R, output: W, json: bool) -> Self {
        Self {
            state,
            input,
            output,
            json,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the optional start-up load, then read commands until `quit` or
    /// end of input.
    pub fn run(&mut self, autoload: bool) -> anyhow::Result<()> {
        if !self.json {
            writeln!(self.output, "{BANNER}\n\n{HELP}")?;
        }
        if autoload {
            let outcome = commands::load_session(&mut self.state);
            self.emit(&outcome)?;
        }

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(msg) => {
                    tracing::warn!(input = %line, "unknown command");
                    self.emit(&unknown_command(msg))?;
                    continue;
                }
            };
            tracing::debug!(?command, "dispatching");

            let outcome = match command {
                ShellCommand::Quit => break,
                ShellCommand::Help => Outcome::report(HELP),
                ShellCommand::Load => commands::load_session(&mut self.state),
                ShellCommand::Save => commands::save_session(&self.state),
                ShellCommand::Show => commands::show_items(&self.state),
                ShellCommand::Recent => commands::most_recent_items(&self.state),
                ShellCommand::Find(arg) => match self.item_id_arg(arg)? {
                    Some(id) => commands::find_item(&self.state, &id),
                    None => break,
                },
                ShellCommand::Delete(arg) => match self.item_id_arg(arg)? {
                    Some(id) => commands::delete_item(&mut self.state, &id),
                    None => break,
                },
                ShellCommand::Create => match self.read_form()? {
                    Some(candidate) => commands::create_item(&mut self.state, candidate),
                    None => break,
                },
            };
            self.emit(&outcome)?;
        }

        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn item_id_arg(&mut self, arg: Option<String>) -> anyhow::Result<Option<String>> {
        match arg {
            Some(id) => Ok(Some(id)),
            None => self.prompt("ItemID: "),
        }
    }

    /// Collect all seven fields; `None` when input ends midway.
    fn read_form(&mut self) -> anyhow::Result<Option<NewRecord>> {
        let mut candidate = NewRecord::default();
        for field in Field::ALL {
            let prompt = format!("{}: ", form_prompt(field));
            match self.prompt(&prompt)? {
                Some(value) => *candidate.slot_mut(field) = value,
                None => return Ok(None),
            }
        }
        Ok(Some(candidate))
    }

    /// Show `prompt` (text mode only) and read one line without its line
    /// terminator. Surrounding spaces are kept; they are part of the value.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if !self.json {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn emit(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        if self.json {
            let encoded = serde_json::to_string(outcome).context("failed to encode outcome")?;
            writeln!(self.output, "{encoded}")?;
        } else {
            write!(self.output, "{outcome}")?;
        }
        Ok(())
    }
}

fn unknown_command(msg: String) -> Outcome {
    Notification::error("Unknown Command", msg).into()
}
