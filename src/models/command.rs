use crate::types::{Month, TrackedSymbol, Year};

/// Arguments shared by the `count`, `ranking` and `user` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub symbol: TrackedSymbol,
    pub month: Option<Month>,
    pub year: Option<Year>,
}

impl QueryArgs {
    /// Parses `<symbol> [month] [year]`.
    ///
    /// Returns `None` when the symbol is missing or a period component is not a number.
    fn from_tokens(tokens: &[&str]) -> Option<Self> {
        let symbol = tokens.first()?;

        let month = match tokens.get(1) {
            Some(month) => Some(month.parse::<Month>().ok()?),
            None => None,
        };
        let year = match tokens.get(2) {
            Some(year) => Some(year.parse::<Year>().ok()?),
            None => None,
        };

        Some(QueryArgs {
            symbol: symbol.to_string(),
            month,
            year,
        })
    }
}

/// A structured `!emoji` request.
///
/// Query variants carry `None` when their arguments are missing or malformed, in which case
/// the caller replies with usage instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Option<TrackedSymbol>),
    Remove(Option<TrackedSymbol>),
    Count(Option<QueryArgs>),
    Ranking(Option<QueryArgs>),
    User(Option<QueryArgs>),
    List,
    Help,
    Unknown,
}

impl Command {
    /// Parses a command line, or returns `None` if `text` is not addressed to the bot.
    ///
    /// Any text starting with `prefix` is a command. When the prefix is not followed by
    /// whitespace (`!emojis`, `!emoji🎉`) the command is `Unknown`.
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let rest = text.strip_prefix(prefix)?;

        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Some(Command::Unknown);
        }

        let mut tokens = rest.split_whitespace();
        let verb = tokens.next();
        let args: Vec<&str> = tokens.collect();
        let symbol = args.first().map(|symbol| symbol.to_string());

        let command = match verb {
            Some("add") => Command::Add(symbol),
            Some("remove") => Command::Remove(symbol),
            Some("count") => Command::Count(QueryArgs::from_tokens(&args)),
            Some("ranking") => Command::Ranking(QueryArgs::from_tokens(&args)),
            Some("user") => Command::User(QueryArgs::from_tokens(&args)),
            Some("list") => Command::List,
            Some("help") => Command::Help,
            _ => Command::Unknown,
        };

        Some(command)
    }
}
