use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::{debug, error};
use rphoneinfo::{
    PhoneInfo,
    config::{Cli, Settings},
    errors::SessionError,
    session::Session,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    debug!("Settings: {:?}", settings);

    let info = PhoneInfo::new(settings.data_dir, settings.lang);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&info, stdin.lock(), stdout.lock())
        .with_default_region(settings.default_region);

    let result = if cli.json {
        session.run_json(cli.answers())
    } else {
        session.run(cli.answers())
    };

    let result =
        result.and_then(|()| session.into_output().flush().map_err(SessionError::from));
    if let Err(err) = result {
        error!("{}", err);
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
