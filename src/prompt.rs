use std::io::{BufRead, Write};
use log::debug;
use crate::error::{LauncherError, Result};
use crate::model::ExecMode;

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line of user-facing text. Output failures are ignored,
    /// there is nowhere left to report them.
    pub fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
        let _ = self.output.flush();
    }

    /// Reads one answer with the line terminator stripped.
    pub fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => return Err(LauncherError::InputClosed),
            Ok(_) => {}
            Err(e) => {
                debug!("Reading stdin failed: {}", e);
                return Err(LauncherError::ReadInput(e));
            }
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn ask_mode(&mut self) -> Result<ExecMode> {
        loop {
            match self.read_answer()?.as_str() {
                "1" => return Ok(ExecMode::Path),
                "2" => return Ok(ExecMode::Command),
                _ => self.say("Invalid answer, choose either '1' or '2'."),
            }
        }
    }

    pub fn ask_exec(&mut self) -> Result<String> {
        self.ask_non_empty("Your input has to be non-empty, try again.")
    }

    pub fn ask_name(&mut self) -> Result<String> {
        self.ask_non_empty("The name has to be non-empty, try again.")
    }

    /// `None` when the user leaves the answer empty.
    pub fn ask_icon(&mut self) -> Result<Option<String>> {
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer))
        }
    }

    /// Yes only when the answer starts with `y`.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question);
        Ok(self.read_answer()?.starts_with('y'))
    }

    fn ask_non_empty(&mut self, retry_message: &str) -> Result<String> {
        loop {
            let answer = self.read_answer()?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(retry_message);
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
