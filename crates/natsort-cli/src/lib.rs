use std::path::PathBuf;

/// Sort lines of text in an order that makes sense for a human
#[derive(argh::FromArgs)]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// files to read lines from, stdin is read when none are given
    #[argh(positional)]
    pub files: Vec<PathBuf>,
    /// BCP-47 locale tag used to collate non-numeric text
    #[argh(option, short = 'l', long = "locale")]
    pub locale: Option<String>,
    /// reverse the sorted order
    #[argh(switch, short = 'r', long = "reverse")]
    pub reverse: bool,
    /// drop repeated lines after sorting
    #[argh(switch, short = 'u', long = "unique")]
    pub unique: bool,
    /// options `error`, `warn`, `info`, `debug` or `trace`
    #[argh(option, long = "log-level")]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    argh::from_env()
}
