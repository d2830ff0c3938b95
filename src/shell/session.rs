//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::ShellConfig;
use crate::error::PayrollError;
use crate::registry::PayrollRegistry;

use super::input::{InputError, parse_base_pay, parse_bonus_percent, parse_menu_choice, parse_name};
use super::render::{render_average, render_error, render_listing, render_menu};
use super::MenuChoice;

/// Whether the menu loop keeps going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A single interactive session over a line-oriented input and an output.
///
/// The session owns the registry for its whole lifetime. End of input at
/// any prompt ends the session the same way as choosing "Exit".
///
/// # Example
///
/// ```
/// use payroll_registry::config::ShellConfig;
/// use payroll_registry::shell::Session;
///
/// let input = "1\nPlumbing\n100\n0\n3\n0\n";
/// let mut output = Vec::new();
///
/// let mut session = Session::new(ShellConfig::default(), input.as_bytes(), &mut output);
/// session.run().unwrap();
/// assert_eq!(session.registry().len(), 1);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Average pay: 100.00"));
/// ```
pub struct Session<R, W> {
    registry: PayrollRegistry,
    config: ShellConfig,
    input: R,
    output: W,
    session_id: Uuid,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty registry.
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            registry: PayrollRegistry::new(),
            config,
            input,
            output,
            session_id: Uuid::new_v4(),
        }
    }

    /// Returns the session's registry.
    pub fn registry(&self) -> &PayrollRegistry {
        &self.registry
    }

    /// Consumes the session, returning its registry.
    pub fn into_registry(self) -> PayrollRegistry {
        self.registry
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned; payroll errors are reported to the
    /// user and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        let span = info_span!("session", session_id = %self.session_id);
        let _guard = span.enter();
        info!("Session started");

        loop {
            self.output.write_all(render_menu().as_bytes())?;
            let Some(number) = self.prompt("Your choice: ", |line| {
                parse_menu_choice(line, MenuChoice::LOWEST, MenuChoice::HIGHEST)
            })?
            else {
                break;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                continue;
            };

            if self.run_choice(choice)? == Flow::Exit {
                break;
            }
        }

        info!(entries = self.registry.len(), "Session ended");
        self.output.flush()
    }

    fn run_choice(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        debug!(?choice, "Menu choice selected");
        match choice {
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting.")?;
                Ok(Flow::Exit)
            }
            MenuChoice::AddWorkType => self.add_work_type(),
            MenuChoice::ListAll => {
                let listing = self.registry.list_all();
                let text = render_listing(&listing, self.config.display.listing_format)?;
                self.output.write_all(text.as_bytes())?;
                Ok(Flow::Continue)
            }
            MenuChoice::AveragePay => {
                match self.registry.calculate_average_pay() {
                    Ok(average) => {
                        let text = render_average(average, self.config.display.decimal_places);
                        self.output.write_all(text.as_bytes())?;
                    }
                    Err(err) => self.report(&err)?,
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn add_work_type(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter work type name: ", parse_name)? else {
            return Ok(Flow::Exit);
        };
        let Some(base_pay) = self.prompt("Enter base pay: ", parse_base_pay)? else {
            return Ok(Flow::Exit);
        };
        let Some(bonus_percent) =
            self.prompt("Enter bonus percent (0 if none): ", parse_bonus_percent)?
        else {
            return Ok(Flow::Exit);
        };

        match self.registry.add_work_type(&name, base_pay, bonus_percent) {
            Ok(()) => writeln!(self.output, "Work type added.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &PayrollError) -> io::Result<()> {
        warn!(error = %error, "Payroll operation rejected");
        self.output.write_all(render_error(error).as_bytes())
    }

    /// Prompts until `parse` accepts a line; `None` means input ended.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
