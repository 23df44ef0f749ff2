use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Sentiment endpoint
    /// Optional. URL the text is POSTed to. Falls back to SENTILINE_ENDPOINT,
    /// then http://localhost:8000/sentiment.
    #[clap(short = 'e', long, help = "sentiment endpoint URL")]
    endpoint: Option<String>,

    /// One-shot text
    /// Optional. Analyze this text once and print the label instead of
    /// starting the interactive view. Use '-' to read from stdin.
    #[clap(short = 't', long, help = "analyze once and print the result ('-' reads stdin)")]
    text: Option<String>,

    /// Log level
    /// Optional. Any tracing filter directive, e.g. 'debug' or 'sentiline=trace'.
    #[clap(short = 'l', long, help = "log level filter")]
    log_level: Option<String>,

    /// Log file
    /// Optional. Where interactive mode writes its log.
    #[clap(long, help = "log file path for interactive mode")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    endpoint: Option<String>,
    text: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            text: args.text,
            log_level: args.log_level,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn endpoint(&self) -> Option<&String> {
        self.endpoint.as_ref()
    }

    pub fn text(&self) -> Option<&String> {
        self.text.as_ref()
    }

    pub fn log_level(&self) -> Option<&String> {
        self.log_level.as_ref()
    }

    pub fn log_file(&self) -> Option<&String> {
        self.log_file.as_ref()
    }

    /// True when the user asked for a single analysis without the view
    pub fn is_one_shot(&self) -> bool {
        self.text.is_some()
    }
}
