use std::fs;
use std::path::Path;

use serde_json::Value;
use treeval_engine::Validator;

use crate::cmd::CheckArgs;
use crate::exit::{CliError, CliResult, INVALID_DATA, INVALID_RULES, SUCCESS, USAGE};
use crate::output::{print_outcome, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let rules = read_json(&args.rules)?;
    let rules = rules.as_object().ok_or_else(|| {
        CliError::new(
            USAGE,
            format!("{}: rule tree must be a JSON object", args.rules.display()),
        )
    })?;
    let data = read_json(&args.data)?;

    let mut validator = Validator::new();
    let valid = validator
        .is_valid(rules, &data)
        .map_err(|err| CliError::new(INVALID_RULES, format!("invalid rules: {err}")))?;

    tracing::debug!(valid, violations = validator.errors().message_count(), "check finished");
    print_outcome(valid, validator.errors(), format);

    Ok(if valid { SUCCESS } else { INVALID_DATA })
}

fn read_json(path: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(path).map_err(|err| {
        crate::exit::io_error(&format!("failed reading {}", path.display()), err)
    })?;
    serde_json::from_str(&content)
        .map_err(|err| CliError::new(USAGE, format!("{} is not valid JSON: {err}", path.display())))
}
