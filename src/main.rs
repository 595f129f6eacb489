//! convert_fastrak_to_hpts - FASTRAK `.pos` to MNE `.hpts` converter
//!
//! Parses the input path, output path and overwrite switch, then hands them
//! to the converter in a single call.

use clap::Parser;
use fastrak_hpts::cli::args::{generate_completions, Cli};
use fastrak_hpts::commands::{run_convert, ConvertRequest};
use fastrak_hpts::config::{Config, ConfigBuilder};
use fastrak_hpts::error::{AppError, ConvertError};
use fastrak_hpts::FastrakConverter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    let result = load_config(&cli).and_then(|config| {
        init_logging(config.general.verbose);
        run(&cli, &config)
    });

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    Ok(ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_quiet(cli.quiet.then_some(true))
        .build())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let converter = FastrakConverter::with_options(config.conversion.to_options()?);

    // clap requires both paths unless --completions was given
    let Some(request) = ConvertRequest::from_cli(cli) else {
        return Ok(());
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_convert(
        &converter,
        &request,
        cli.format,
        config.general.quiet,
        &mut handle,
    )?;

    Ok(())
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Convert(ConvertError::OutputExists(_)) => {
            eprintln!();
            eprintln!("Hint: Remove the existing file or choose another output path.");
        }
        AppError::Convert(ConvertError::ReadInput { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            eprintln!();
            eprintln!("Hint: Check that the .pos path is correct.");
        }
        _ => {}
    }
}
