use crate::config::Command;
use crate::err::ResolutionError;
use crate::table::CommandTable;
use crate::target::build_url;

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Show the command directory instead of redirecting.
    List,
    /// The keyword named a command; the argument is whatever followed it.
    Direct {
        command: &'a Command,
        argument: &'a [u8],
    },
    /// Nothing matched; the whole query goes to the default command.
    FallbackDefault {
        command: &'a Command,
        argument: &'a [u8],
    },
}

impl<'a> Resolution<'a> {
    /// The redirect target, or `None` for `List`.
    pub fn target(&self) -> Option<(&'a Command, &'a [u8], String)> {
        match *self {
            Resolution::List => None,
            Resolution::Direct { command, argument }
            | Resolution::FallbackDefault { command, argument } => {
                Some((command, argument, build_url(command, argument)))
            }
        }
    }
}

/// Queries are bytes: a decoded query parameter doesn't have to be UTF-8, and whatever
/// isn't text is passed through to the target url as-is.
pub fn resolve<'a, Q: AsRef<[u8]> + ?Sized>(
    query: &'a Q,
    table: &'a CommandTable,
) -> Result<Resolution<'a>, ResolutionError> {
    let query = query.as_ref();
    if matches!(query, b"" | b"list" | b"help") {
        return Ok(Resolution::List);
    }

    let (keyword, rest) = match query.iter().position(|&b| b == b' ') {
        Some(i) => (&query[..i], &query[i + 1..]),
        None => (query, &query[query.len()..]),
    };

    match std::str::from_utf8(keyword).ok().and_then(|k| table.get(k)) {
        Some(command) => Ok(Resolution::Direct {
            command,
            argument: rest,
        }),
        None => match table.default_command() {
            Some(command) => Ok(Resolution::FallbackDefault {
                command,
                argument: query,
            }),
            None => Err(ResolutionError::NoDefaultAvailable),
        },
    }
}
