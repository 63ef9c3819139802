//! Scan a saved product page from the command line.
//!
//! Usage: canopi-scan [--url <page url>] [--extract-only | --report] [FILE]
//!
//! Reads HTML from FILE or stdin. `--extract-only` prints the extracted
//! sections as JSON without contacting the service; otherwise the page is
//! scanned and the result printed as JSON, or as the consumer view with
//! `--report`. Service settings come from the `CANOPI_*` environment.

use std::io::{self, Read};
use std::process::ExitCode;

use canopi_scan::{encoding, spawn_agent, AgentHandle, HttpClassifier, Options, Page, ScanSession, Scanner};

#[derive(Debug, Default)]
struct Args {
    url: Option<String>,
    file: Option<String>,
    extract_only: bool,
    report: bool,
}

fn usage() -> ExitCode {
    eprintln!("Usage: canopi-scan [--url <page url>] [--extract-only | --report] [FILE]");
    ExitCode::from(2)
}

fn parse_args() -> Option<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--url" => args.url = Some(iter.next()?),
            "--extract-only" => args.extract_only = true,
            "--report" => args.report = true,
            "-h" | "--help" => return None,
            _ if arg.starts_with("--") => return None,
            _ => args.file = Some(arg),
        }
    }
    Some(args)
}

fn read_input(file: Option<&str>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

async fn run(agent: AgentHandle, args: &Args) -> ExitCode {
    if args.extract_only {
        let sections = agent.extract_text().await;
        println!("{}", serde_json::to_string_pretty(&sections).unwrap_or_default());
        return ExitCode::SUCCESS;
    }

    let result = agent.scan().await;
    if !args.report {
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
        return if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let mut session = ScanSession::new();
    if let Err(failure) = session.record(result) {
        eprintln!("{}", failure.reason);
        return ExitCode::FAILURE;
    }
    if let Some(view) = session.consumer_view() {
        print!("{view}");
    }
    ExitCode::SUCCESS
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let Some(args) = parse_args() else {
        return usage();
    };

    let bytes = match read_input(args.file.as_deref()) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };
    let html = encoding::decode_page(&bytes, None);

    let opts = Options::from_env();
    let service = match HttpClassifier::new(&opts) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let agent = spawn_agent(Page::new(html, args.url.clone()), Scanner::new(service, opts));
    run(agent, &args).await
}
