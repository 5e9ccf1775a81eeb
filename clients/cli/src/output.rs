use {
    crate::config::Config,
    serde::Serialize,
    solana_cli_output::{OutputFormat, QuietDisplay, VerboseDisplay},
    std::fmt::Display,
};

/// Values accepted by `--output`, paired with the format they select
pub const OUTPUT_FORMATS: [(&str, OutputFormat); 5] = [
    ("display", OutputFormat::Display),
    ("json", OutputFormat::Json),
    ("json-compact", OutputFormat::JsonCompact),
    ("quiet", OutputFormat::DisplayQuiet),
    ("verbose", OutputFormat::DisplayVerbose),
];

pub fn output_format_names() -> impl Iterator<Item = &'static str> {
    OUTPUT_FORMATS.iter().map(|(name, _)| *name)
}

// Only called with values already checked against `OUTPUT_FORMATS`
pub fn parse_output_format(output_format: &str) -> OutputFormat {
    OUTPUT_FORMATS
        .iter()
        .find(|(name, _)| *name == output_format)
        .map(|(_, format)| format.clone())
        .unwrap_or(OutputFormat::Display)
}

/// Progress messages go to stdout only for human-readable formats, so json
/// output stays parseable
pub fn println_display(config: &Config, message: String) {
    if matches!(
        config.output_format,
        OutputFormat::Display | OutputFormat::DisplayVerbose
    ) {
        println!("{}", message);
    }
}

pub fn format_output<T>(config: &Config, command_output: T) -> String
where
    T: Serialize + Display + QuietDisplay + VerboseDisplay,
{
    config.output_format.formatted_string(&command_output)
}
