use clap::Parser;
use std::path::PathBuf;

/// Version string: "0.3.2" for releases, "0.3.2@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "igdb", bin_name = "igdb", version = get_version())]
#[command(
    about = "Interactive tracker for social media handles",
    long_about = "Interactive tracker for social media handles.\n\n\
        Commands at the prompt: list, add HANDLE FOLLOWERS, update HANDLE FOLLOWERS, save, exit [fr]"
)]
pub struct Cli {
    /// Database file (load path and save target)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory containing igdb.json
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level_override(&self) -> Option<&'static str> {
        self.verbose.then_some("debug")
    }
}
