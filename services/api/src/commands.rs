use clap::{Args, Subcommand};
use rental_hub::error::AppError;
use rental_hub::tenants::{
    from_api_list, from_api_value, import_roster_path, to_api, to_api_value,
};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Subcommand, Debug)]
pub(crate) enum TenantCommand {
    /// Convert a form record (or a list of them) into API payloads
    ToApi(ConvertArgs),
    /// Hydrate API records (or a list of them) into form records
    FromApi(ConvertArgs),
    /// Import a CSV roster export as form records
    ImportRoster(ImportRosterArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// JSON file holding one record or an array of records
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ImportRosterArgs {
    /// CSV export with a header row (`First Name`, `Last Name`, ...)
    pub(crate) csv: PathBuf,
    /// Emit API payloads instead of form records
    #[arg(long)]
    pub(crate) wire: bool,
}

pub(crate) fn run_tenant_command(command: TenantCommand) -> Result<(), AppError> {
    let output = match command {
        TenantCommand::ToApi(args) => convert_to_api(&read_json(&args.input)?)?,
        TenantCommand::FromApi(args) => convert_from_api(&read_json(&args.input)?)?,
        TenantCommand::ImportRoster(args) => {
            let records = import_roster_path(&args.csv)?;
            if args.wire {
                let payloads: Vec<_> = records.iter().map(to_api).collect();
                render(&payloads)?
            } else {
                render(&records)?
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let raw = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = raw.len(), "read tenant json");
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn convert_to_api(input: &Value) -> Result<String, AppError> {
    match input {
        Value::Array(records) => {
            let payloads: Vec<_> = records.iter().map(to_api_value).collect();
            render(&payloads)
        }
        record => render(&to_api_value(record)),
    }
}

pub(crate) fn convert_from_api(input: &Value) -> Result<String, AppError> {
    if input.is_array() {
        render(&from_api_list(input))
    } else {
        render(&from_api_value(input))
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
