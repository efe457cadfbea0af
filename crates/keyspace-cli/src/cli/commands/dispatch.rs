use super::super::args::*;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Path(args) => super::path::run(args, cli.strict_segments),
        Command::Extract(args) => Ok(super::extract::run(args)),
        Command::Parse(args) => super::parse::run(args),
        Command::Categories(args) => super::categories::run(args),
    }
}
