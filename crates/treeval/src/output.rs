use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use treeval_engine::ErrorReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    valid: bool,
    errors: &'a ErrorReport,
}

pub fn print_outcome(valid: bool, report: &ErrorReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = CheckOutput {
                valid,
                errors: report,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            if valid {
                println!("valid");
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PATH", "PROBLEM"]);
            for (path, messages) in report.iter() {
                for message in messages {
                    table.add_row(vec![path.to_string(), message.clone()]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if valid {
                println!("valid");
                return;
            }
            for (path, messages) in report.iter() {
                for message in messages {
                    println!("{path}: {message}");
                }
            }
        }
    }
}
