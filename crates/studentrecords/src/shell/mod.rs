//! Interactive menu shell for studentrecords.
//!
//! The shell owns the [`RecordStore`] for the whole session and talks to the
//! user through a [`Terminal`]. It is generic over its streams so that a
//! session can be scripted from a buffer.

pub mod prompt;

use std::io::{BufRead, Stderr, Write};

use tracing::debug;

use crate::config::DEFAULT_BANNER;
use crate::error::Result;
use crate::store::RecordStore;
use crate::student::Student;

pub use prompt::Terminal;

/// Menu line listing every choice.
const MENU: &str = "1. Add  2. Update  3. Delete  4. Get  5. List  6. SearchName  0. Exit";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add or overwrite a record.
    Add,
    /// Replace an existing record.
    Update,
    /// Remove a record.
    Delete,
    /// Show one record.
    Get,
    /// Show all records.
    List,
    /// Show records whose name contains a substring.
    SearchName,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Map a (trimmed) menu reply to a choice.
    #[must_use]
    pub fn parse(reply: &str) -> Option<Self> {
        match reply {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Get),
            "5" => Some(Self::List),
            "6" => Some(Self::SearchName),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop.
#[derive(Debug)]
pub struct Shell<R, W, E = Stderr> {
    store: RecordStore,
    terminal: Terminal<R, W, E>,
    banner: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over a store and a pair of streams.
    ///
    /// Load and save failures are reported on stderr.
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self::from_terminal(store, Terminal::new(input, output))
    }
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    /// Create a shell that reports load and save failures on `errors`.
    pub fn with_errors(store: RecordStore, input: R, output: W, errors: E) -> Self {
        Self::from_terminal(store, Terminal::with_errors(input, output, errors))
    }

    fn from_terminal(store: RecordStore, terminal: Terminal<R, W, E>) -> Self {
        Self {
            store,
            terminal,
            banner: DEFAULT_BANNER.to_string(),
        }
    }

    /// Replace the heading printed above the menu.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// End the shell and hand back its store.
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        self.store
    }

    /// Fill the store from its backing file.
    ///
    /// A file that cannot be read or parsed is reported as `Load failed: ...`
    /// and the session starts with an empty table. Returns the number of
    /// records loaded.
    ///
    /// # Errors
    ///
    /// Returns an error only if the report cannot be written.
    pub fn load(&mut self) -> Result<usize> {
        match self.store.load() {
            Ok(count) => Ok(count),
            Err(err) => {
                self.terminal.report(format_args!("Load failed: {err}"))?;
                Ok(0)
            }
        }
    }

    /// Run the menu loop until the user chooses exit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] if input ends before exit is
    /// chosen, or an I/O error if the terminal cannot be used. Save failures
    /// are reported and never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let reply = self.terminal.prompt_trimmed("Choice")?;

            let flow = match MenuChoice::parse(&reply) {
                Some(choice) => {
                    debug!("Menu choice {:?}", choice);
                    self.dispatch(choice)?
                }
                None => {
                    self.terminal.say("Invalid")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                self.terminal.flush()?;
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.terminal.say(format_args!("\n{}", self.banner))?;
        self.terminal.say(MENU)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => {
                let student = self.read_student()?;
                let outcome = self.store.add(student).map(|()| true);
                self.settle(outcome)?;
                self.terminal.say("Added.")?;
            }
            MenuChoice::Update => {
                let id = self.terminal.prompt_trimmed("ID to update")?;
                let student = self.read_student()?;
                let outcome = self.store.update(&id, student);
                let found = self.settle(outcome)?;
                self.terminal
                    .say(if found { "Updated." } else { "ID not found." })?;
            }
            MenuChoice::Delete => {
                let id = self.terminal.prompt_trimmed("ID to delete")?;
                let outcome = self.store.delete(&id);
                let found = self.settle(outcome)?;
                self.terminal
                    .say(if found { "Deleted." } else { "ID not found." })?;
            }
            MenuChoice::Get => {
                let id = self.terminal.prompt_trimmed("ID")?;
                match self.store.get(&id) {
                    Some(student) => self.terminal.say(student)?,
                    None => self.terminal.say("Not found")?,
                }
            }
            MenuChoice::List => {
                for student in self.store.list() {
                    self.terminal.say(student)?;
                }
            }
            MenuChoice::SearchName => {
                let query = self.terminal.prompt("Name contains")?;
                for student in self.store.search_by_name(&query) {
                    self.terminal.say(student)?;
                }
            }
            MenuChoice::Exit => {
                self.terminal.say("Bye")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Collect a full record from the user.
    ///
    /// Text fields are kept exactly as typed; semester and CGPA are asked
    /// for again until they parse.
    fn read_student(&mut self) -> Result<Student> {
        let name = self.terminal.prompt("Name")?;
        let id = self.terminal.prompt("ID")?;
        let branch = self.terminal.prompt("Branch")?;
        let semester = self.terminal.prompt_number("Semester", "semester")?;
        let gpa = self.terminal.prompt_number("CGPA", "CGPA")?;

        Ok(Student::new(id, name, branch, semester, gpa))
    }

    /// Report a failed save and return whether the mutation was applied.
    ///
    /// A save error always follows an applied mutation.
    fn settle(&mut self, outcome: Result<bool>) -> Result<bool> {
        match outcome {
            Ok(found) => Ok(found),
            Err(err) => {
                self.terminal.report(format_args!("Save failed: {err}"))?;
                Ok(true)
            }
        }
    }
}
