use clap::Parser;
use colored::Colorize;
use goemit::{execute, CliArgs};
use log::{debug, info};
use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if TermLogger::init(level, config.clone(), TerminalMode::Stderr).is_err() {
        let _ = SimpleLogger::init(level, config);
    }
}

#[tokio::main]
async fn main() {
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let args = CliArgs::parse();
    init_logging(args.log_level());
    debug!("goemit version: {}", env!("CARGO_PKG_VERSION"));

    match execute(&args).await {
        Ok(report) if report.is_success() => info!("{}", report),
        Ok(report) => {
            println!("{}", report);
            std::process::exit(1);
        }
        Err(err) => {
            let err = format!("{:?}", err);
            println!("{}", err.bold().red());
            std::process::exit(1);
        }
    }
}
