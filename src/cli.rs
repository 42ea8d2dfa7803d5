use std::env;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: demo_hello <args-file> | demo_hello doc";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the module against the args file written by the host.
    Run(PathBuf),
    /// Print module documentation.
    Doc,
    /// Nothing usable on the command line; carries the failure message.
    Usage(String),
}

pub fn get_command() -> Command {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_command(&args)
}

pub fn parse_command(args: &[String]) -> Command {
    match args {
        [] => Command::Usage("No argument file provided".to_string()),
        [cmd] if cmd == "doc" || cmd == "--doc" => Command::Doc,
        [path] => Command::Run(PathBuf::from(path)),
        [_, extra, ..] => Command::Usage(format!("Unexpected argument: {}", extra)),
    }
}
