use crate::command::edit::EditArgs;
use crate::command::help::Help;
use crate::command::version::Version;

mod edit;
mod help;
mod version;

pub enum Command {
    Edit(EditArgs),
    Help,
    Version,
}

impl Command {
    pub fn parse(args: impl Iterator<Item = String>) -> eyre::Result<Self> {
        let args: Vec<String> = args.collect();
        if args.iter().any(|arg| arg == "--help" || arg == "-h") {
            return Ok(Self::Help);
        }
        if args.iter().any(|arg| arg == "--version") {
            return Ok(Self::Version);
        }
        EditArgs::parse(args.into_iter()).map(Self::Edit)
    }

    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Edit(args) => args.execute(),
            Command::Help => Help::execute(),
            Command::Version => Version::execute(),
        }
    }
}
