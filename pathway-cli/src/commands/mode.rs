//! Show how a mode string and options resolve into an open intent.

use clap::Args;
use pathway::{OpenIntent, StreamKind};
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{parse_assignments, GlobalOptions, OutputFormat};

/// Resolve a mode string and options without opening anything.
#[derive(Args)]
pub struct ModeCommand {
    /// Mode string built from r, w, a, +, b, x and c
    pub mode: Option<String>,

    /// Option assignment such as `charset=utf-8` or `binary` (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ModeReport {
    intent: OpenIntent,
    effective: OpenIntent,
    stream: Option<String>,
    error: Option<String>,
}

fn describe(kind: StreamKind) -> String {
    match kind {
        StreamKind::Binary => "binary".to_string(),
        StreamKind::Text(charset) => format!("text ({charset})"),
    }
}

impl ModeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let options = parse_assignments(&self.options)?;
        let intent = OpenIntent::resolve(self.mode.as_deref(), options.as_ref())?;
        let effective = intent.clone().with_default_access();
        let (stream, error) = match effective.stream_kind() {
            Ok(kind) => (Some(describe(kind)), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let report = ModeReport {
            intent,
            effective,
            stream,
            error,
        };
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Human => {
                println!("intent:    {}", report.intent);
                println!("effective: {}", report.effective);
                match (&report.stream, &report.error) {
                    (Some(stream), _) => println!("stream:    {stream}"),
                    (None, Some(error)) => println!("stream:    {error}"),
                    (None, None) => {}
                }
            }
        }
        Ok(())
    }
}
