use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile in the profile file that holds the API base URL.
    /// If the profile is not configured, the built-in base URL is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Base URL
    /// Optional. Overrides the base URL from the profile.
    #[clap(short = 'u', long, help = "API base URL, overrides the profile")]
    base_url: Option<String>,

    /// Verbose mode
    /// Optional. Log requests and state changes at info level.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test"]);
        assert_eq!(args.profile(), "test");
        assert_eq!(args.base_url(), None);
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_base_url() {
        let args = CommandLineArgs::parse_from(["program", "--base-url", "http://localhost:3000"]);
        assert_eq!(args.base_url(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-u", "http://x", "-v"]);
        assert_eq!(args.profile(), "dev");
        assert_eq!(args.base_url(), Some("http://x"));
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert_eq!(args.base_url(), None);
        assert!(!args.verbose());
    }
}
