//! Interactive session for the slang dictionary.
//!
//! The session owns the terminal side of the program: it prints the menu,
//! reads and checks user input, calls into the prefix index and renders the
//! results. It is generic over its input and output so the whole loop can
//! be driven from memory in tests.

mod render;
mod rules;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

pub use render::Renderer;
pub use rules::InputRules;

use crate::config::SlangConfig;
use crate::data_structures::prefix_index::{InsertOutcome, PrefixIndex};
use crate::error::input::InputError;
use crate::error::DictResult;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Insert or update a term
    Release,
    /// Exact lookup of a term
    Search,
    /// List terms starting with a prefix
    Prefix,
    /// List every term
    ListAll,
    /// Leave the session
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Release),
            2 => Some(Self::Search),
            3 => Some(Self::Prefix),
            4 => Some(Self::ListAll),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A single interactive run of the dictionary menu.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    rules: InputRules,
    renderer: Renderer,
    title: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: &SlangConfig) -> Self {
        Self {
            input,
            output,
            rules: InputRules::new(&config.input),
            renderer: Renderer::new(config.display.format),
            title: config.display.title.clone(),
        }
    }

    /// Runs the menu loop against `index` until the user exits or input ends.
    pub fn run(&mut self, index: &mut PrefixIndex) -> DictResult<()> {
        info!("Session started");

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                info!("Input closed, ending session");
                break;
            };

            let flow = match MenuChoice::from_input(&line) {
                Some(choice) => {
                    debug!(?choice, "Menu choice");
                    self.dispatch(choice, index)?
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        info!(terms = index.len(), "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, index: &mut PrefixIndex) -> DictResult<Flow> {
        match choice {
            MenuChoice::Release => self.release(index),
            MenuChoice::Search => self.search(index),
            MenuChoice::Prefix => self.list_prefix(index),
            MenuChoice::ListAll => self.list_all(index),
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you... Have a nice day :)")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> DictResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.title)?;
        writeln!(self.output, "1. Release a new slang word")?;
        writeln!(self.output, "2. Search a slang word")?;
        writeln!(
            self.output,
            "3. View all slang words starting with a certain prefix word"
        )?;
        writeln!(self.output, "4. View all slang words")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn release(&mut self, index: &mut PrefixIndex) -> DictResult<Flow> {
        let term_hint = self.rules.term_hint();
        let Some(term) = self.prompt_valid(
            &format!("Input a new slang word [{term_hint}]: "),
            &format!("Invalid slang word. {term_hint}. Try again: "),
            InputRules::check_term,
        )?
        else {
            return Ok(Flow::Exit);
        };

        let description_hint = self.rules.description_hint();
        let Some(description) = self.prompt_valid(
            &format!("Input a new slang word description [{description_hint}]: "),
            &format!("Invalid description. {description_hint}. Try again: "),
            InputRules::check_description,
        )?
        else {
            return Ok(Flow::Exit);
        };

        let outcome = index.insert(&term, description);
        debug!(%term, ?outcome, "Released slang word");
        match outcome {
            InsertOutcome::Created => {
                writeln!(self.output, "Successfully released new slang word.")?
            }
            InsertOutcome::Updated => writeln!(self.output, "Successfully updated a slang word.")?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, index: &PrefixIndex) -> DictResult<Flow> {
        let term_hint = self.rules.term_hint();
        let Some(term) = self.prompt_valid(
            "Enter the slang word to search: ",
            &format!("Invalid slang word. {term_hint}. Try again: "),
            InputRules::check_term,
        )?
        else {
            return Ok(Flow::Exit);
        };

        match index.search(&term) {
            Some(description) => {
                debug!(%term, "Lookup hit");
                self.renderer.lookup(&mut self.output, &term, description)?;
            }
            None => {
                debug!(%term, "Lookup miss");
                writeln!(self.output, "There is no word \"{term}\" in the dictionary.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_prefix(&mut self, index: &PrefixIndex) -> DictResult<Flow> {
        let Some(prefix) = self.prompt("Enter the prefix: ")? else {
            return Ok(Flow::Exit);
        };

        let entries = index.prefix_search(&prefix);
        debug!(%prefix, matches = entries.len(), "Prefix search");
        if entries.is_empty() {
            writeln!(self.output, "There is no prefix \"{prefix}\" in the dictionary.")?;
        } else {
            writeln!(self.output, "Words starts with \"{prefix}\":")?;
            self.renderer.entries(&mut self.output, &entries)?;
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self, index: &PrefixIndex) -> DictResult<Flow> {
        let entries = index.all_entries();
        debug!(count = entries.len(), "Listing all slang words");
        if entries.is_empty() {
            writeln!(self.output, "There is no slang word yet in the dictionary.")?;
        } else {
            writeln!(self.output, "List of all slang words in the dictionary:")?;
            self.renderer.entries(&mut self.output, &entries)?;
        }
        Ok(Flow::Continue)
    }

    /// Prompts until `check` accepts the value. `None` means input ended.
    fn prompt_valid<F>(&mut self, text: &str, retry: &str, check: F) -> DictResult<Option<String>>
    where
        F: Fn(&InputRules, &str) -> Result<(), InputError>,
    {
        let mut next = self.prompt(text)?;
        while let Some(value) = next {
            match check(&self.rules, &value) {
                Ok(()) => return Ok(Some(value)),
                Err(reason) => {
                    warn!(%value, %reason, "Rejected input");
                    next = self.prompt(retry)?;
                }
            }
        }
        Ok(None)
    }

    fn prompt(&mut self, text: &str) -> DictResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its surrounding whitespace. `None` at end of input.
    fn read_line(&mut self) -> DictResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
