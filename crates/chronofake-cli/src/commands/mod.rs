mod duration;
mod instant;
mod local;

use std::env;
use std::path::PathBuf;

use chronofake_core::{parse_utc_offset, GeneratorConfig, TimeDataSet};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Samples;

const CONFIG_ENV: &str = "CHRONOFAKE_CONFIG";

pub fn run(cli: &Cli) -> Result<Samples, CliError> {
    let config = resolve_config(cli)?;
    let mut data = TimeDataSet::from_config(config)?;

    let values = match &cli.command {
        Command::Past(args) => local::past(&mut data, args, cli.count)?,
        Command::Future(args) => local::future(&mut data, args, cli.count)?,
        Command::Soon(args) => local::soon(&mut data, args, cli.count)?,
        Command::Recent(args) => local::recent(&mut data, args, cli.count)?,
        Command::Between(args) => local::between(&mut data, args, cli.count)?,
        Command::Duration(args) => duration::run(&mut data, args, cli.count),
        Command::Instant(args) => instant::run(&mut data, &args.command, cli.count)?,
    };

    Ok(Samples {
        command: cli.command.name(),
        values,
    })
}

/// Config file (flag, then environment) with command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, CliError> {
    let mut config = match config_path(cli) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            GeneratorConfig::from_path(&path)?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(offset) = &cli.offset {
        parse_utc_offset(offset)?;
        config.utc_offset = Some(offset.clone());
    }

    Ok(config)
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }

    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
}

pub(crate) fn parse_local(value: &str) -> Result<PrimitiveDateTime, CliError> {
    let format = format_description!(
        version = 2,
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    PrimitiveDateTime::parse(value.trim(), &format).map_err(|_| CliError::InvalidDateTime {
        value: value.to_owned(),
        expected: "local date-time (YYYY-MM-DDTHH:MM:SS)",
    })
}

pub(crate) fn parse_instant(value: &str) -> Result<OffsetDateTime, CliError> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).map_err(|_| CliError::InvalidDateTime {
        value: value.to_owned(),
        expected: "RFC3339 instant",
    })
}
