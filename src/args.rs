use clap::Parser;

/// Use the UEM API to find Mac devices running an old Hub agent and run the
/// InstallPackagedMacOSXAgent command on those.
#[derive(Parser, Debug)]
#[command(name = "hubsweep")]
pub struct Args {
    /// Which macOS Hub versions are acceptable, space separated
    #[arg(
        short = 'V',
        long,
        value_name = "VERSIONS",
        value_delimiter = ' ',
        num_args = 1..,
        default_values_t = ["22.12.0.9".to_string(), "23.01.0.19".to_string()]
    )]
    pub versions: Vec<String>,

    /// Which macOS keychain to use for settings and credentials
    #[arg(short, long, default_value = "autopkg_tools_launcher_keychain")]
    pub keychain: String,

    /// Increment output verbosity; may be specified multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Fetch only, do not run the install command
    #[arg(short, long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["hubsweep"]).unwrap();
        assert_eq!(args.versions, vec!["22.12.0.9", "23.01.0.19"]);
        assert_eq!(args.keychain, "autopkg_tools_launcher_keychain");
        assert_eq!(args.verbose, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn versions_split_on_spaces() {
        let args = Args::try_parse_from(["hubsweep", "-V", "23.01.0.19 23.02.1.1"]).unwrap();
        assert_eq!(args.versions, vec!["23.01.0.19", "23.02.1.1"]);
    }

    #[test]
    fn verbose_is_repeatable() {
        let args = Args::try_parse_from(["hubsweep", "-vvv", "--dry-run"]).unwrap();
        assert_eq!(args.verbose, 3);
        assert!(args.dry_run);
    }
}
