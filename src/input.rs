use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::OnceLock;

use phf::phf_map;
use regex::Regex;

use crate::error::ChoiceError;

/// Source of the lines a player types.
///
/// Returning `None` means the source is exhausted and no further choice can
/// be made.
pub trait InputSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Reads lines from standard input.
#[derive(Default)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(error) => {
                log::warn!("Failed to read input: {error}");
                None
            }
        }
    }
}

/// Replays a fixed list of lines, then reports exhaustion.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> ScriptedInput
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Input for players that never get asked, such as test fixtures.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn next_line(&mut self) -> Option<String> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Pass,
    ShowHand,
    Play(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
    Pass,
    Hand,
}

const KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "p" => Keyword::Pass,
    "pass" => Keyword::Pass,
    "h" => Keyword::Hand,
    "hand" => Keyword::Hand,
};

fn command_regex() -> &'static Regex {
    static COMMAND: OnceLock<Regex> = OnceLock::new();
    COMMAND.get_or_init(|| {
        Regex::new(r"^\s*(?:(?<word>[A-Za-z]+)|(?<cost>\d+))\s*$").expect("command pattern compiles")
    })
}

impl Command {
    /// Parses one line typed by a player.
    pub fn parse(input: &str) -> Result<Command, ChoiceError> {
        let invalid = || ChoiceError::Invalid(input.trim().to_string());
        let captures = command_regex().captures(input).ok_or_else(invalid)?;

        if let Some(word) = captures.name("word") {
            return match KEYWORDS.get(word.as_str().to_ascii_lowercase().as_str()) {
                Some(Keyword::Pass) => Ok(Command::Pass),
                Some(Keyword::Hand) => Ok(Command::ShowHand),
                None => Err(invalid()),
            };
        }

        captures
            .name("cost")
            .and_then(|cost| cost.as_str().parse::<u32>().ok())
            .map(Command::Play)
            .ok_or_else(invalid)
    }
}
