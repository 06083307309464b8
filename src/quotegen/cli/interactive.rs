//! # Interactive Mode
//!
//! A line-oriented loop that owns a [`Session`] for as long as it runs. Plain
//! input submits a topic; slash commands act on the current result set:
//!
//! | input             | effect                                        |
//! |-------------------|-----------------------------------------------|
//! | `<topic>`         | submit a topic                                |
//! | `/topic <n|name>` | submit a topic shortcut (see `/topics`)       |
//! | `/next`, `/n`     | next quote, wrapping around                   |
//! | `/copy`, `/c`     | copy the current quote to the clipboard       |
//! | `/topics`         | list topic shortcuts                          |
//! | `/help`           | this table, roughly                           |
//! | `/quit`, `/q`     | leave (so does end of input)                  |
//!
//! Validation errors, clipboard failures and undecodable input lines are
//! printed inline; none of them ends the loop or changes the session.

use super::render::{render_current, render_messages, render_topics};
use quotegen::api::QuoteApi;
use quotegen::clipboard::ClipboardSink;
use quotegen::commands::CmdMessage;
use quotegen::error::Result;
use quotegen::session::Session;
use std::io::{BufRead, Write};

const PROMPT: &str = "topic> ";

const HELP: &str = "Type a topic and press enter.
  /topic <n|name>  pick a topic shortcut
  /next, /n        next quote
  /copy, /c        copy the current quote
  /topics          list topics
  /quit, /q        leave";

enum Flow {
    Continue,
    Quit,
}

pub fn run<R, W, C>(
    api: &QuoteApi,
    mut input: R,
    out: &mut W,
    clipboard: &C,
    use_color: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: ClipboardSink + ?Sized,
{
    let mut session = Session::new();
    let mut repl = Repl {
        api,
        session: &mut session,
        out,
        clipboard,
        use_color,
    };

    writeln!(repl.out, "{}", render_topics(&api.topics().topics, use_color))?;
    writeln!(repl.out, "{}", HELP)?;

    let mut buf = Vec::new();
    loop {
        write!(repl.out, "{}", PROMPT)?;
        repl.out.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let flow = match std::str::from_utf8(&buf) {
            Ok(line) => repl.handle_line(line)?,
            Err(_) => {
                repl.message(CmdMessage::warning("Input is not valid UTF-8"))?;
                Flow::Continue
            }
        };
        if let Flow::Quit = flow {
            break;
        }
    }
    writeln!(repl.out)?;
    Ok(())
}

struct Repl<'a, W: Write, C: ClipboardSink + ?Sized> {
    api: &'a QuoteApi,
    session: &'a mut Session,
    out: &'a mut W,
    clipboard: &'a C,
    use_color: bool,
}

impl<W: Write, C: ClipboardSink + ?Sized> Repl<'_, W, C> {
    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            self.submit(line)?;
            return Ok(Flow::Continue);
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(n, a)| (n, a.trim()))
            .unwrap_or((command, ""));

        match name {
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            "next" | "n" => {
                if self.session.next().is_some() {
                    self.show_current()?;
                } else if self.session.cursor().is_some() {
                    self.message(CmdMessage::warning("No quotes to show"))?;
                } else {
                    self.message(CmdMessage::warning("Submit a topic first"))?;
                }
            }
            "copy" | "c" => {
                let result = self.api.copy_quote(self.clipboard, self.session.current());
                self.messages(&result.messages)?;
            }
            "topics" => {
                let result = self.api.topics();
                writeln!(self.out, "{}", render_topics(&result.topics, self.use_color))?;
            }
            "topic" => match self.api.shortcut(arg).map(str::to_string) {
                Some(topic) => self.submit(&topic)?,
                None => self.message(CmdMessage::warning(format!(
                    "Unknown topic shortcut: {}",
                    arg
                )))?,
            },
            "help" | "h" => writeln!(self.out, "{}", HELP)?,
            other => self.message(CmdMessage::warning(format!("Unknown command: /{}", other)))?,
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self, topic: &str) -> Result<()> {
        if !self.api.config().loading_delay().is_zero() && !topic.is_empty() {
            self.message(CmdMessage::info("Generating..."))?;
        }
        match self.api.submit(&mut *self.session, topic) {
            Ok(result) => {
                self.messages(&result.messages)?;
                self.show_current()
            }
            Err(e) => self.message(CmdMessage::error(e.to_string())),
        }
    }

    fn show_current(&mut self) -> Result<()> {
        if let (Some(topic), Some(quote), Some(cursor)) = (
            self.session.topic(),
            self.session.current(),
            self.session.cursor(),
        ) {
            let rendered = render_current(
                topic.as_str(),
                quote,
                cursor,
                self.session.quotes().len(),
                self.use_color,
            );
            writeln!(self.out, "{}", rendered)?;
        }
        Ok(())
    }

    fn message(&mut self, message: CmdMessage) -> Result<()> {
        self.messages(&[message])
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        if !messages.is_empty() {
            writeln!(self.out, "{}", render_messages(messages, self.use_color))?;
        }
        Ok(())
    }
}
