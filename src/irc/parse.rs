//! Nom-based IRC line parser.
//!
//! IRC message format:
//! ```text
//! [@tags] [:prefix] <command> [params...] [:trailing]
//! ```
//! Tags are recognised and dropped; nothing in the bot uses them.

use std::str::FromStr;

use nom::{
    IResult,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    error::ErrorKind,
    sequence::preceded,
};

use crate::error::ProtocolError;

/// RFC 2812: at most 15 parameters.
const MAX_PARAMS: usize = 15;

fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command name (1*letter or 3digit).
fn parse_command(input: &str) -> IResult<&str, &str> {
    let (rest, cmd) = take_while1(|c: char| c.is_ascii_alphanumeric())(input)?;

    let is_all_letters = cmd.chars().all(|c| c.is_ascii_alphabetic());
    let is_three_digits = cmd.len() == 3 && cmd.chars().all(|c| c.is_ascii_digit());

    if is_all_letters || is_three_digits {
        Ok((rest, cmd))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::AlphaNumeric,
        )))
    }
}

/// Split the parameters following the command.
///
/// Consecutive spaces count as one separator. A parameter starting with `:`
/// is the trailing parameter and runs to the end of the line.
fn parse_params(input: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut rest = input;

    while rest.starts_with(' ') && params.len() < MAX_PARAMS {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

fn parse_line(input: &str) -> IResult<&str, (Option<&str>, &str, Vec<&str>)> {
    let (input, _tags) = opt(parse_tags)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = parse_command(input)?;
    let params = parse_params(input);
    Ok(("", (prefix, command, params)))
}

/// An inbound IRC line with owned components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcLine {
    /// Raw prefix without the leading `:`, e.g. `nick!user@host`.
    pub prefix: Option<String>,
    /// Command name, upper-cased, or a three digit numeric.
    pub command: String,
    pub params: Vec<String>,
}

impl IrcLine {
    /// Nickname part of the prefix.
    pub fn nick(&self) -> Option<&str> {
        self.prefix
            .as_deref()
            .map(|p| p.split(['!', '@']).next().unwrap_or(p))
            .filter(|n| !n.is_empty())
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

impl FromStr for IrcLine {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        let (_, (prefix, command, params)) =
            parse_line(line).map_err(|_| ProtocolError::Malformed(line.to_string()))?;

        Ok(Self {
            prefix: prefix.map(str::to_string),
            command: command.to_ascii_uppercase(),
            params: params.into_iter().map(str::to_string).collect(),
        })
    }
}
