use clap::{ArgAction, Parser};
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::ops::Deref;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Redirect search-style queries to shortcut urls",
    long_about = "Redirect search-style queries to shortcut urls

Queries are read from the q parameter as <command> <arguments>.
Examples:
- GET /?q=g rust lifetimes (redirects to command g with 'rust lifetimes')
- GET /?q=rust lifetimes (no command named rust, redirects to the default)
- GET /?q=list (shows all commands)"
)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Socket address to listen on
    #[arg(short, long, default_value = "localhost:8182")]
    pub listen: SocketAddrsFromDns,

    #[arg(
        help = "Path to the command config (--help for more)",
        long_help = r#"Path to the command config, a JSON document:
    {
      "maintainers": ["someone"],
      "commands": [
        {
          "name": "g",
          "aliases": ["google"],
          "url": "https://www.google.com",
          "url_with_params": "https://www.google.com/search?q=%s",
          "description": "Search Google",
          "usage": "g <terms>"
        },
        {
          "name": "ddg",
          "default": true,
          "url": "https://duckduckgo.com",
          "url_with_params": "https://duckduckgo.com/?q=%s"
        }
      ]
    }
    - exactly one command must be the default
    - url_with_params must contain exactly one %s"#
    )]
    #[arg(short, long)]
    pub config: PathBuf,

    /// Base URL of this service, used in the search provider description (e.g. https://example.org)
    #[arg(short = 'u', long, default_value = "")]
    pub base_url: String,

    /// PNG file to serve as the icon, instead of the built-in one
    #[arg(long)]
    pub icon: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct SocketAddrsFromDns(Vec<SocketAddr>);

impl Deref for SocketAddrsFromDns {
    type Target = [SocketAddr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for SocketAddrsFromDns {
    type Err = io::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let addrs = arg.to_socket_addrs()?.collect::<Vec<_>>();
        match addrs.len() {
            0 => Err(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                "Resolved to zero addresses",
            )),
            _ => Ok(Self(addrs)),
        }
    }
}
