#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use galleria::{
    infrastructure::{cli::Cli, config::Config},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (embedded defaults + optional user file)
    let config = galleria::trace_dbg!(Config::new()?);

    let stdout = std::io::stdout();
    let mut runner = AppRunner::new(config, stdout.lock());
    runner.run(args.command, args.pages.max(1)).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
