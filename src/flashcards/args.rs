use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "flashcards", bin_name = "flashcards", version = get_version())]
#[command(about = "Interactive flashcard trainer", long_about = None)]
pub struct Cli {
    /// Load cards from this file before the first prompt
    #[arg(long = "import_from", alias = "import-from", value_name = "PATH")]
    pub import_from: Option<PathBuf>,

    /// Save cards to this file on exit
    #[arg(long = "export_to", alias = "export-to", value_name = "PATH")]
    pub export_to: Option<PathBuf>,

    /// Directory holding config.json (defaults to $FLASHCARDS_HOME, then the user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
