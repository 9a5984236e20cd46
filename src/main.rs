use clap::Parser;
use timeline_cli::cli::commands::execute_command;
use timeline_cli::cli::errors::print_error_with_json;
use timeline_cli::cli::tracing_init::init_tracing;
use timeline_cli::cli::Cli;
use timeline_cli::config::Config;
use timeline_cli::constants;
use timeline_cli::output::Output;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = match Config::load(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            print_error_with_json(&e, cli.json_errors);
            std::process::exit(1);
        }
    };
    let output = Output::new(cli.quiet, config.json_errors);

    match execute_command(&cli, &config).await {
        Ok(Some(rendered)) => output.data(rendered),
        Ok(None) => output.info(constants::EMPTY_RESPONSE),
        Err(e) => {
            print_error_with_json(&e, config.json_errors);
            std::process::exit(1);
        }
    }
}
