use crate::config::{FetchConfig, DEFAULT_USER_AGENT, PIXIV_DIC_BASE_URL};
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::{validate_path, Validate};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str = "Usage: viewer-history <title-or-html-file> [--csv output.csv]";
pub const USAGE_EXAMPLE: &str = "Example: \nviewer-history \"ブルーアーカイブ\" --csv ブルーアーカイブ.csv";

const HELP_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

#[derive(Debug, Clone, Parser)]
#[command(name = "viewer-history", version)]
#[command(about = "Extract daily view history from a Pixiv Encyclopedia article")]
#[command(override_usage = "viewer-history <TITLE_OR_HTML_FILE> [OPTIONS]")]
#[command(args_override_self = true)]
pub struct CliArgs {
    /// Always the first argument, taken verbatim before options are parsed.
    #[arg(skip)]
    pub title_or_file: String,

    /// Also write the series to this CSV file (overwritten)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub csv: Option<String>,

    #[arg(long, default_value = PIXIV_DIC_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    pub user_agent: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if let Some(csv) = &self.csv {
            validate_path("csv", csv)?;
        }
        self.fetch_config().validate()
    }
}

/// Parsed arguments plus whatever was dropped along the way.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub args: CliArgs,
    pub ignored: Vec<String>,
}

/// Parses `argv` (without the program name).
///
/// The first argument is the title or file, whatever it looks like; clap only
/// sees the options after it. Unknown options and stray positionals are
/// reported on stderr and dropped instead of aborting; everything else clap
/// rejects becomes an input error.
pub fn parse_cli_args<I, T>(argv: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rest = argv.into_iter().map(Into::into);
    let Some(first) = rest.next() else {
        return Err(ViewerError::input(
            "missing required <title-or-html-file> argument",
        ));
    };

    let title_or_file = first.to_string_lossy().into_owned();
    let mut argv: Vec<OsString> = vec![OsString::from("viewer-history")];
    if HELP_FLAGS.iter().any(|flag| *flag == title_or_file) {
        argv.push(first);
    }
    argv.extend(rest);
    let mut ignored = Vec::new();

    loop {
        let err = match CliArgs::try_parse_from(&argv) {
            Ok(mut args) => {
                args.title_or_file = title_or_file;
                args.validate()?;
                return Ok(ParsedArgs { args, ignored });
            }
            Err(err) => err,
        };

        match err.kind() {
            ErrorKind::UnknownArgument => {
                let Some((index, arg)) = locate_rejected(&argv, &err) else {
                    return Err(ViewerError::input(first_line(&err)));
                };
                argv.remove(index);
                eprintln!("warning: unknown argument ignored: {}", arg);
                ignored.push(arg);
            }
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                return Err(ViewerError::Cli(err));
            }
            _ => return Err(ViewerError::input(first_line(&err))),
        }
    }
}

fn locate_rejected(argv: &[OsString], err: &clap::Error) -> Option<(usize, String)> {
    let rejected = match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(s) => s.as_str(),
        _ => return None,
    };
    let with_value = format!("{}=", rejected);

    // index 0 is the program name
    argv.iter().enumerate().skip(1).find_map(|(index, arg)| {
        let arg = arg.to_string_lossy();
        (arg == rejected || arg.starts_with(&with_value)).then(|| (index, arg.into_owned()))
    })
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}
