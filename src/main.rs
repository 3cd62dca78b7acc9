use clap::Parser;
use make_update::cli::Cli;
use make_update::command::ProcessRunner;
use make_update::output::{self, ConsoleCallbacks};
use make_update::platform::LibPlatform;
use make_update::{tools, update};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.into_config(std::env::current_dir()?);

    let result = tools::check_tools(&config).and_then(|()| {
        let runner = ProcessRunner::new(&config);
        let callbacks = ConsoleCallbacks::new(&config);
        update::run(&config, LibPlatform::current(), &runner, &callbacks)
    });

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            output::print_error(&err.to_string());
            if config.is_verbose() {
                output::print_error_chain(&err);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
