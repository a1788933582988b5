use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::commands::admins::AdminExport;

#[derive(Parser, Debug)]
#[command(name = "repo-admins")]
#[command(about = "query repository admins", version)]
#[command(after_help = "EXAMPLES:
    repo-admins --owner acme --repo widgets --file admins.csv
    repo-admins -o acme -r widgets -f admins.csv --delay 1000")]
pub struct Cli {
    /// Organization or user that owns the repository
    #[arg(long, short)]
    pub owner: String,

    /// Repository name
    #[arg(long, short)]
    pub repo: String,

    /// Name of output file
    #[arg(long, short)]
    pub file: PathBuf,

    /// Delay between GitHub API requests in milliseconds. If you are hitting API rate limits, increase this value.
    #[arg(long, short, default_value = "500")]
    pub delay: u64,

    /// Log every request and show the cause chain of errors
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn export(&self) -> AdminExport {
        AdminExport {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            file: self.file.clone(),
            delay: Duration::from_millis(self.delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_and_default_delay() {
        let cli = Cli::try_parse_from(["repo-admins", "-o", "acme", "-r", "widgets", "-f", "out.csv"])
            .expect("valid args");
        let export = cli.export();

        assert_eq!(export.owner, "acme");
        assert_eq!(export.repo, "widgets");
        assert_eq!(export.file, PathBuf::from("out.csv"));
        assert_eq!(export.delay, Duration::from_millis(500));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_long_flags_with_delay() {
        let cli = Cli::try_parse_from([
            "repo-admins",
            "--owner",
            "acme",
            "--repo",
            "widgets",
            "--file",
            "out.csv",
            "--delay",
            "0",
        ])
        .expect("valid args");

        assert_eq!(cli.export().delay, Duration::ZERO);
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        let result = Cli::try_parse_from(["repo-admins", "--owner", "acme", "--file", "out.csv"]);
        assert!(result.is_err());
    }
}
