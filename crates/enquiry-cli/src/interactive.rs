//! Line-oriented question loop.

use std::io::{self, BufRead, Write};

use enquiry_map::{Matcher, Responder};
use enquiry_model::Directory;
use tracing::{debug, info};

use crate::answer::Answer;
use crate::session::Session;

pub const GREETING: &str = "Ask where someone is, e.g. \"Where is Dr. Manoj Pandey?\" or \
                            \"HOD room number\".\nCommands: :history, :clear, :quit";

/// Everything one conversation needs besides its input and output.
pub struct Conversation<'a> {
    pub directory: &'a Directory,
    pub matcher: Matcher,
    pub responder: Responder,
    pub session: Session,
}

impl<'a> Conversation<'a> {
    pub fn new(directory: &'a Directory, responder: Responder) -> Self {
        Self {
            directory,
            matcher: Matcher::default(),
            responder,
            session: Session::new(),
        }
    }

    /// Reads queries until end of input or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{GREETING}")?;
        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            match line.trim() {
                "" => continue,
                ":quit" | ":exit" => break,
                ":history" => self.show_history(output)?,
                ":clear" => {
                    self.session.clear();
                    writeln!(output, "History cleared.")?;
                }
                query => self.answer(query, output)?,
            }
        }
        info!(queries = self.session.len(), "session ended");
        Ok(())
    }

    /// Prints the reply and any suggestions. Only matched answers are kept in
    /// the history.
    fn answer<W: Write>(&mut self, query: &str, output: &mut W) -> io::Result<()> {
        let answer = Answer::new(query, self.directory, &self.matcher, &mut self.responder);
        debug!(speech = %answer.spoken, "speech output");
        writeln!(output, "{}", answer.response)?;
        if answer.outcome.has_suggestions() {
            let names: Vec<&str> = answer
                .outcome
                .suggestions
                .iter()
                .map(|entry| entry.full_name.as_str())
                .collect();
            writeln!(output, "Suggestions: {}", names.join(", "))?;
        }
        if answer.found() {
            self.session.record(answer.query, answer.response);
        }
        Ok(())
    }

    fn show_history<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.session.is_empty() {
            writeln!(output, "No history yet.")
        } else {
            writeln!(output, "{}", self.session.render_recent())
        }
    }
}
