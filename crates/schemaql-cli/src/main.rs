mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
mod sdl_files;


use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Picks the log level from `--log-level`, then `--verbose`, then the
/// `LOG_LEVEL` environment variable. Logs go to stderr so that stdout only
/// carries command output.
fn setup_logger(cli: &Cli) {
    let mut env_warning = None;
    let log_level = match (cli.log_level, cli.verbose) {
        (Some(level), _) => level,
        (None, true) => tracing::Level::DEBUG,
        (None, false) => match std::env::var("LOG_LEVEL") {
            Ok(value) => match value.trim() {
                "VERBOSE" | "verbose" => tracing::Level::DEBUG,
                other => other.parse::<tracing::Level>().unwrap_or_else(|_| {
                    env_warning = Some(format!(
                        "Ignoring invalid `LOG_LEVEL` environment variable value: `{other}`"
                    ));
                    DEFAULT_LOG_LEVEL
                }),
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}
