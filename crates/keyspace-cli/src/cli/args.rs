use clap::{Parser, Subcommand};
use keyspace_core::PropertyType;

#[derive(Parser)]
#[command(
    name = "keyspace",
    version,
    about = "Render and inspect cluster coordination-store paths"
)]
pub struct Cli {
    /// Reject identifiers containing '/' (also KEYSPACE_STRICT_SEGMENTS=1)
    #[arg(long, global = true)]
    pub strict_segments: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the path of a property node
    Path(PathArgs),
    /// Recover the instance name from a path
    Extract(ExtractArgs),
    /// Parse a path back into its cluster and key
    Parse(ParseArgs),
    /// List property categories and their scope
    Categories(CategoriesArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Category token, e.g. IDEALSTATES or currentstates
    pub category: PropertyType,

    #[arg(long)]
    pub cluster: String,

    /// Participant the node belongs to
    #[arg(long)]
    pub instance: Option<String>,

    /// Resource name under IDEALSTATES / EXTERNALVIEW
    #[arg(long, conflicts_with_all = ["instance", "controller"])]
    pub resource: Option<String>,

    /// Session id (CURRENTSTATES only)
    #[arg(long, requires = "instance")]
    pub session: Option<String>,

    /// Unit/partition key (CURRENTSTATES only)
    #[arg(long, requires = "session")]
    pub unit: Option<String>,

    /// Address the category under the controller subtree
    #[arg(long, conflicts_with = "instance")]
    pub controller: bool,

    /// Emit JSON instead of the bare path
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    pub path: String,

    /// Require the exact /<cluster>/INSTANCES/<instance> shape
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    pub path: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoriesArgs {
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "keyspace",
            "path",
            "currentstates",
            "--cluster",
            "c",
            "--instance",
            "n",
            "--session",
            "s",
            "--unit",
            "u",
        ])
        .unwrap();
        let Command::Path(args) = cli.cmd else {
            panic!("expected path command");
        };
        assert_eq!(args.category, PropertyType::CurrentStates);
        assert_eq!(args.unit.as_deref(), Some("u"));
        assert!(!cli.strict_segments);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["keyspace", "path", "CONFIGS", "--cluster", "c"]).is_err());
    }

    #[test]
    fn test_unit_requires_session() {
        assert!(Cli::try_parse_from([
            "keyspace",
            "path",
            "CURRENTSTATES",
            "--cluster",
            "c",
            "--instance",
            "n",
            "--unit",
            "u",
        ])
        .is_err());
    }

    #[test]
    fn test_strict_segments_is_global() {
        let cli =
            Cli::try_parse_from(["keyspace", "extract", "/c/x", "--strict-segments"]).unwrap();
        assert!(cli.strict_segments);
    }
}
