//! Labels command implementation for the Candy Rush CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use candy_data::{available_labels, load_reports};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_REPORTS, CliError, ENV_LABELS_REPORTS, require_existing, write_json};

/// CLI arguments for the `labels` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the sorted, de-duplicated candy names found in a \
                 report export, as reported. Use them as --desire and \
                 --avoid values for the plan command.",
    about = "List the candy names present in a report export"
)]
#[ortho_config(prefix = "CANDY")]
pub(crate) struct LabelsArgs {
    /// Path to the report export (JSON array of report rows).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reports: Option<Utf8PathBuf>,
}

impl LabelsArgs {
    fn into_config(self) -> Result<LabelsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LabelsConfig::try_from(merged)
    }
}

/// Resolved `labels` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LabelsConfig {
    /// Path to the report export.
    pub(crate) reports: Utf8PathBuf,
}

impl TryFrom<LabelsArgs> for LabelsConfig {
    type Error = CliError;

    fn try_from(args: LabelsArgs) -> Result<Self, Self::Error> {
        let reports = args.reports.ok_or(CliError::MissingArgument {
            field: ARG_REPORTS,
            env: ENV_LABELS_REPORTS,
        })?;
        Ok(Self { reports })
    }
}

pub(crate) fn run_labels(args: LabelsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_labels_with(args, &mut stdout)
}

pub(crate) fn run_labels_with(args: LabelsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reports, ARG_REPORTS)?;
    let rows = load_reports(&config.reports)?;
    write_json(writer, &available_labels(&rows))
}
