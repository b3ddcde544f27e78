//! Command-line parsing into typed commands
//!
//! One input line holds a keyword followed by optional fields. A field is a
//! word starting with a single lowercase letter and `/`, and its value runs
//! until the next field marker:
//!
//! ```
//! use clialgo::domain::Command;
//!
//! let cmd = Command::parse("add n/binary heap t/HEAP i/7");
//! assert_eq!(
//!     cmd,
//!     Command::Add {
//!         name: "binary heap".to_string(),
//!         topic: "HEAP".to_string(),
//!         importance: 7,
//!     }
//! );
//! ```
//!
//! Parsing never fails: malformed input becomes [`Command::Invalid`].

use crate::domain::entry::{FileEntry, DEFAULT_IMPORTANCE, MAX_IMPORTANCE};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([a-z])/(.*)$").unwrap())
}

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add n/NAME t/TOPIC [i/IMPORTANCE]`
    Add {
        name: String,
        topic: String,
        importance: u8,
    },

    /// `remove n/NAME`
    Remove { name: String },

    /// `list`
    List,

    /// `filter k/KEYWORD ...`
    Filter(FilterQuery),

    /// `export`
    Export,

    /// `help [c/COMMAND_TYPE]`
    Help(Option<HelpTopic>),

    /// `exit`
    Exit,

    /// Unrecognized keyword or malformed fields, with the reason
    Invalid(String),

    /// A topic outside the fixed taxonomy was given to `add`
    InvalidTopic(String),
}

/// Selection criteria for `filter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterQuery {
    /// `filter k/topic t/TOPIC`
    Topic(String),

    /// `filter k/importance [t/TOPIC] [i/MIN]`
    Importance { topic: Option<String>, min: u8 },
}

/// Keywords that have their own help page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Add,
    Remove,
    List,
    Filter,
    Export,
    Exit,
}

impl FromStr for HelpTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(HelpTopic::Add),
            "remove" => Ok(HelpTopic::Remove),
            "list" => Ok(HelpTopic::List),
            "filter" => Ok(HelpTopic::Filter),
            "export" => Ok(HelpTopic::Export),
            "exit" => Ok(HelpTopic::Exit),
            _ => Err(format!("No help page for '{}'", s)),
        }
    }
}

impl fmt::Display for HelpTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            HelpTopic::Add => "add",
            HelpTopic::Remove => "remove",
            HelpTopic::List => "list",
            HelpTopic::Filter => "filter",
            HelpTopic::Export => "export",
            HelpTopic::Exit => "exit",
        };
        write!(f, "{}", keyword)
    }
}

type Fields = BTreeMap<char, String>;

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Self {
        match Self::try_parse(line) {
            Ok(command) => command,
            Err(reason) => Command::Invalid(reason),
        }
    }

    /// Keyword used for diagnostics
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
            Command::List => "list",
            Command::Filter(_) => "filter",
            Command::Export => "export",
            Command::Help(_) => "help",
            Command::Exit => "exit",
            Command::Invalid(_) => "invalid",
            Command::InvalidTopic(_) => "invalid-topic",
        }
    }

    fn try_parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, rest)) = words.split_first() else {
            return Err("Empty command".to_string());
        };
        let fields = parse_fields(rest)?;

        match *keyword {
            "add" => {
                expect_only(&fields, &['n', 't', 'i'])?;
                let name = required(&fields, 'n')?;
                if !FileEntry::is_valid_name(&name) {
                    return Err(format!("Name '{}' must be a plain file name", name));
                }
                let topic = required(&fields, 't')?;
                let importance = match fields.get(&'i') {
                    Some(value) => parse_importance(value)?,
                    None => DEFAULT_IMPORTANCE,
                };
                Ok(Command::Add {
                    name,
                    topic,
                    importance,
                })
            }
            "remove" => {
                expect_only(&fields, &['n'])?;
                Ok(Command::Remove {
                    name: required(&fields, 'n')?,
                })
            }
            "list" => {
                expect_only(&fields, &[])?;
                Ok(Command::List)
            }
            "filter" => {
                expect_only(&fields, &['k', 't', 'i'])?;
                parse_filter(&fields).map(Command::Filter)
            }
            "export" => {
                expect_only(&fields, &[])?;
                Ok(Command::Export)
            }
            "help" => {
                expect_only(&fields, &['c'])?;
                match fields.get(&'c') {
                    Some(_) => {
                        let keyword = required(&fields, 'c')?;
                        keyword.parse().map(|topic| Command::Help(Some(topic)))
                    }
                    None => Ok(Command::Help(None)),
                }
            }
            "exit" => {
                expect_only(&fields, &[])?;
                Ok(Command::Exit)
            }
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}

fn parse_fields(words: &[&str]) -> Result<Fields, String> {
    let mut fields = Fields::new();
    let mut current: Option<char> = None;

    for word in words {
        if let Some(caps) = field_regex().captures(word) {
            let key = caps[1].chars().next().unwrap_or_default();
            if fields.contains_key(&key) {
                return Err(format!("Field '{}/' given more than once", key));
            }
            fields.insert(key, caps[2].to_string());
            current = Some(key);
            continue;
        }

        match current {
            Some(key) => {
                let value = fields.entry(key).or_default();
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(word);
            }
            None => return Err(format!("Unexpected '{}' before any field", word)),
        }
    }

    for value in fields.values_mut() {
        *value = value.trim().to_string();
    }

    Ok(fields)
}

fn expect_only(fields: &Fields, allowed: &[char]) -> Result<(), String> {
    match fields.keys().find(|key| !allowed.contains(key)) {
        Some(key) => Err(format!("Unexpected field '{}/'", key)),
        None => Ok(()),
    }
}

fn required(fields: &Fields, key: char) -> Result<String, String> {
    match fields.get(&key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(format!("Field '{}/' must not be empty", key)),
        None => Err(format!("Missing field '{}/'", key)),
    }
}

fn parse_importance(value: &str) -> Result<u8, String> {
    match value.parse::<u8>() {
        Ok(n) if (1..=MAX_IMPORTANCE).contains(&n) => Ok(n),
        _ => Err(format!(
            "Importance must be a number from 1 to {}, got '{}'",
            MAX_IMPORTANCE, value
        )),
    }
}

fn parse_filter(fields: &Fields) -> Result<FilterQuery, String> {
    let keyword = required(fields, 'k')?;
    match keyword.as_str() {
        "topic" => {
            if fields.contains_key(&'i') {
                return Err("Field 'i/' is only valid with k/importance".to_string());
            }
            Ok(FilterQuery::Topic(required(fields, 't')?))
        }
        "importance" => {
            let topic = match fields.get(&'t') {
                Some(_) => Some(required(fields, 't')?),
                None => None,
            };
            let min = match fields.get(&'i') {
                Some(value) => parse_importance(value)?,
                None => 1,
            };
            Ok(FilterQuery::Importance { topic, min })
        }
        other => Err(format!(
            "Filter keyword must be 'topic' or 'importance', got '{}'",
            other
        )),
    }
}
