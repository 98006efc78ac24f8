use std::path::PathBuf;

use p2o_core::session::Tab;

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a `:` command is a collection URL.
    Submit(String),
    Tab(Tab),
    Download(Option<PathBuf>),
    Copy,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Paste a Postman Collection API URL to convert it, or use a command:
  :tab <overview|endpoints|models|raw>   switch the displayed tab
  :download [dir]                        write the specification as JSON
  :copy                                  copy the specification to the clipboard
  :help                                  show this help
  :quit                                  leave the session";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("tab" | "t", Some(tab)) => match tab.parse() {
            Ok(tab) => Command::Tab(tab),
            Err(msg) => Command::Unknown(msg),
        },
        ("download" | "d", dir) => Command::Download(dir.map(PathBuf::from)),
        ("copy" | "c", None) => Command::Copy,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Unknown(format!("unknown command :{rest} (try :help)")),
    }
}
