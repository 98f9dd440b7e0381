use std::ffi::OsString;
use std::process::ExitCode;
use viewer_history::config::cli::{USAGE, USAGE_EXAMPLE};
use viewer_history::domain::ports::SeriesSink;
use viewer_history::utils::logger;
use viewer_history::{
    parse_cli_args, CliArgs, CsvFileSink, ExtractionEngine, JsonLinesSink, PageLoader, ViewerError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    if argv.is_empty() {
        eprintln!("{}", USAGE);
        eprintln!("{}", USAGE_EXAMPLE);
        return ExitCode::FAILURE;
    }

    let parsed = match parse_cli_args(argv) {
        Ok(parsed) => parsed,
        Err(ViewerError::Cli(err)) => err.exit(),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logger::init_cli_logger(parsed.args.verbose);
    tracing::debug!("CLI args: {:?}", parsed.args);
    if !parsed.ignored.is_empty() {
        tracing::debug!("Ignored arguments: {:?}", parsed.ignored);
    }

    match run(&parsed.args).await {
        Ok(count) => {
            tracing::info!("Emitted {} view records", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let category = e.downcast_ref::<ViewerError>().map(ViewerError::category);
            tracing::debug!("Extraction failed (category: {:?})", category);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs) -> anyhow::Result<usize> {
    let loader = PageLoader::new(args.fetch_config())?;
    let engine = ExtractionEngine::new(loader);

    let stdout = std::io::stdout();
    let mut json_lines = JsonLinesSink::new(stdout.lock());
    let mut csv_file = args.csv.as_ref().map(CsvFileSink::new);

    let mut sinks: Vec<&mut dyn SeriesSink> = Vec::new();
    sinks.push(&mut json_lines);
    if let Some(csv_file) = csv_file.as_mut() {
        sinks.push(csv_file);
    }

    let count = engine.run(&args.title_or_file, &mut sinks).await?;
    Ok(count)
}
