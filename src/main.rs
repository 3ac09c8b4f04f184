use std::process::ExitCode;
use std::str::FromStr;

use devnet_config::{config, net};
use tracing_subscriber::EnvFilter;

/// What the caller asked us to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Endpoint,
    Json,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endpoint" => Ok(Command::Endpoint),
            "json" => Ok(Command::Json),
            _ => Err(()),
        }
    }
}

const USAGE: &str = "Usage: devnet-config <endpoint|json>\n\n\
    endpoint  print the local devnet endpoint URL\n\
    json      print the full environments configuration as JSON";

fn run(command: Command) -> anyhow::Result<String> {
    let ip = net::resolve_local_ip()?;
    Ok(match command {
        Command::Endpoint => config::build_endpoint(&ip),
        Command::Json => config::to_json_string(&config::build_config(&ip))?,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let command = match arg.as_deref() {
        Some(raw) => match raw.parse::<Command>() {
            Ok(command) => command,
            Err(()) => {
                eprintln!("unknown command '{raw}'\n\n{USAGE}");
                return ExitCode::from(2);
            }
        },
        None => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_parsing_is_exhaustive() {
        assert_eq!("endpoint".parse(), Ok(Command::Endpoint));
        assert_eq!("json".parse(), Ok(Command::Json));
        assert_eq!("xml".parse::<Command>(), Err(()));
        assert_eq!("".parse::<Command>(), Err(()));
        // case sensitive on purpose
        assert_eq!("JSON".parse::<Command>(), Err(()));
    }
}
