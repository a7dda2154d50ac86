//! Line-oriented browsing session over stdin.
//!
//! Each command maps onto one pager operation; the view is printed again
//! after every command that changes it.

use super::output::{io_error, write_notifications, write_view};
use crate::core::pager::{Pager, SearchOutcome};
use crate::display::{DisplayOptions, MemorySurface};
use crate::error::{AppError, CliError};
use crate::utils::text::split_command;
use crate::utils::validation::parse_page_number;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  page <n>           show page n
  next / prev        show the following or preceding page
  search <text>      search by initial or by part of the name
  reset              leave the search and show the full roster
  click <id> [text]  activate a rendered control, with text in the search field
  controls           list clickable element ids
  help               show this help
  quit               leave the session";

/// What one input line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Page(usize),
    Next,
    Prev,
    Search(String),
    Reset,
    Click { id: String, input: String },
    Controls,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(None);
        };

        let command = match verb {
            "page" | "p" => SessionCommand::Page(parse_page_number(rest)?),
            "next" | "n" => SessionCommand::Next,
            "prev" => SessionCommand::Prev,
            "search" | "s" => SessionCommand::Search(rest.to_string()),
            "reset" => SessionCommand::Reset,
            "click" => {
                let (id, input) = split_command(rest).ok_or_else(|| {
                    CliError::InvalidArguments("click needs an element id".to_string())
                })?;
                SessionCommand::Click {
                    id: id.to_string(),
                    input: input.to_string(),
                }
            }
            "controls" => SessionCommand::Controls,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => {
                return Err(CliError::UnknownCommand {
                    command: other.to_string(),
                }
                .into());
            }
        };

        Ok(Some(command))
    }
}

pub struct InteractiveSession<'p, 'a> {
    pager: &'p mut Pager<'a, MemorySurface>,
    options: DisplayOptions,
    prompt: bool,
}

impl<'p, 'a> InteractiveSession<'p, 'a> {
    pub fn new(pager: &'p mut Pager<'a, MemorySurface>, options: DisplayOptions) -> Self {
        Self {
            pager,
            options,
            prompt: false,
        }
    }

    /// Print a prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until `quit` or end of input.
    ///
    /// Command errors are reported on `out` and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        write_view(out, self.pager, &self.options)?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "roster> ").map_err(io_error)?;
                out.flush().map_err(io_error)?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.map_err(io_error)?;

            match SessionCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => {
                    if let Err(err) = self.execute(command, out) {
                        writeln!(out, "Error: {}", err).map_err(io_error)?;
                    }
                }
                Err(err) => {
                    writeln!(out, "Error: {}", err).map_err(io_error)?;
                }
            }
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<(), AppError> {
        match command {
            SessionCommand::Page(page) => self.pager.show_page(page),
            SessionCommand::Next => {
                let next = self.pager.current_page() + 1;
                if next > self.pager.page_count() {
                    writeln!(out, "Already on the last page").map_err(io_error)?;
                    return Ok(());
                }
                self.pager.show_page(next);
            }
            SessionCommand::Prev => {
                let current = self.pager.current_page();
                if current <= 1 {
                    writeln!(out, "Already on the first page").map_err(io_error)?;
                    return Ok(());
                }
                self.pager.show_page(current - 1);
            }
            SessionCommand::Search(query) => {
                if self.pager.search_students(&query) == SearchOutcome::Ignored {
                    writeln!(out, "Type a name or a single letter to search")
                        .map_err(io_error)?;
                    return Ok(());
                }
            }
            SessionCommand::Reset => self.pager.reset_page(),
            SessionCommand::Click { id, input } => self.pager.activate(&id, &input)?,
            SessionCommand::Controls => {
                for binding in self.pager.bindings() {
                    writeln!(out, "{:<24} {:?}", binding.element_id, binding.control)
                        .map_err(io_error)?;
                }
                return Ok(());
            }
            SessionCommand::Help => {
                writeln!(out, "{}", HELP).map_err(io_error)?;
                return Ok(());
            }
            SessionCommand::Quit => return Ok(()),
        }

        if self.pager.surface().notifications().is_empty() {
            write_view(out, self.pager, &self.options)
        } else {
            write_notifications(out, self.pager)
        }
    }
}
