//! Command-line parsing for the interpreter.
//!
//! A line is split on spaces and newlines only; tabs and other whitespace stay
//! inside tokens so that the handle check can reject them later.

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    List,
    Save,
    Add { handle: &'a str, followers: u64 },
    Update { handle: &'a str, followers: u64 },
    Exit { arg: Option<&'a str> },
}

impl<'a> Command<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Save => "save",
            Command::Add { .. } => "add",
            Command::Update { .. } => "update",
            Command::Exit { .. } => "exit",
        }
    }

    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let mut tokens = tokenize(line);
        let name = tokens.next().ok_or(CommandError::MissingCommand)?;

        match name {
            "list" => match tokens.next() {
                None => Ok(Command::List),
                Some(_) => Err(CommandError::UnexpectedArguments("list")),
            },
            "save" => match tokens.next() {
                None => Ok(Command::Save),
                Some(_) => Err(CommandError::UnexpectedArguments("save")),
            },
            "exit" => Ok(Command::Exit {
                arg: tokens.next(),
            }),
            "add" | "update" => {
                let usage = if name == "add" { "add" } else { "update" };
                let (handle, followers) = match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(handle), Some(followers), None) => (handle, followers),
                    _ => return Err(CommandError::Usage(usage)),
                };
                let followers = parse_followers(followers)?;
                if name == "add" {
                    Ok(Command::Add { handle, followers })
                } else {
                    Ok(Command::Update { handle, followers })
                }
            }
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }
}

pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\n']).filter(|token| !token.is_empty())
}

/// Strict follower-count argument parser: the whole token must be unsigned
/// decimal digits that fit in a `u64`.
pub fn parse_followers(token: &str) -> Result<u64, CommandError> {
    if token.starts_with('-') {
        return Err(CommandError::NegativeFollowers);
    }

    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, rest) = token.split_at(end);
    if digits.is_empty() {
        return Err(CommandError::FollowersNotInteger);
    }

    let followers = digits
        .parse::<u64>()
        .map_err(|_| CommandError::FollowersTooLarge)?;
    if !rest.is_empty() {
        return Err(CommandError::FollowersTrailing(rest.to_string()));
    }
    Ok(followers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(Command::parse("list\n"), Ok(Command::List));
        assert_eq!(Command::parse("  save  "), Ok(Command::Save));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit { arg: None }));
        assert_eq!(
            Command::parse("exit fr extra"),
            Ok(Command::Exit { arg: Some("fr") })
        );
    }

    #[test]
    fn blank_line_is_missing_command() {
        assert_eq!(Command::parse("\n"), Err(CommandError::MissingCommand));
        assert_eq!(Command::parse(""), Err(CommandError::MissingCommand));
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert_eq!(
            Command::parse("LIST"),
            Err(CommandError::Unrecognized("LIST".into()))
        );
    }

    #[test]
    fn list_and_save_reject_arguments() {
        assert_eq!(
            Command::parse("list all"),
            Err(CommandError::UnexpectedArguments("list"))
        );
        assert_eq!(
            Command::parse("save now"),
            Err(CommandError::UnexpectedArguments("save"))
        );
    }

    #[test]
    fn add_and_update_need_exactly_two_arguments() {
        assert_eq!(Command::parse("add @a"), Err(CommandError::Usage("add")));
        assert_eq!(
            Command::parse("update @a 1 2"),
            Err(CommandError::Usage("update"))
        );
        assert_eq!(
            Command::parse("add @alice 10\n"),
            Ok(Command::Add {
                handle: "@alice",
                followers: 10
            })
        );
        assert_eq!(
            Command::parse("update @alice 20"),
            Ok(Command::Update {
                handle: "@alice",
                followers: 20
            })
        );
    }

    #[test]
    fn tabs_stay_inside_tokens() {
        let tokens: Vec<_> = tokenize("add @a\tb 1\n").collect();
        assert_eq!(tokens, vec!["add", "@a\tb", "1"]);
    }

    #[test]
    fn follower_argument_is_strict() {
        assert_eq!(parse_followers("0"), Ok(0));
        assert_eq!(parse_followers("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_followers("-1"), Err(CommandError::NegativeFollowers));
        assert_eq!(parse_followers("abc"), Err(CommandError::FollowersNotInteger));
        assert_eq!(parse_followers("+5"), Err(CommandError::FollowersNotInteger));
        assert_eq!(
            parse_followers("12abc"),
            Err(CommandError::FollowersTrailing("abc".into()))
        );
        assert_eq!(
            parse_followers("18446744073709551616"),
            Err(CommandError::FollowersTooLarge)
        );
    }

    #[test]
    fn bad_follower_count_rejects_whole_command() {
        assert_eq!(
            Command::parse("add @alice 10k"),
            Err(CommandError::FollowersTrailing("k".into()))
        );
    }
}
