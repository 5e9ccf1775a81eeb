use {
    crate::{
        common::{get_count, parse_pubkey},
        config::Config,
        output::format_output,
        CommandResult,
    },
    clap::Args,
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_pubkey::Pubkey,
    std::fmt::{Display, Formatter},
};

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// The address of the counter account
    #[clap(value_parser = parse_pubkey)]
    pub counter: Pubkey,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub counter_address: Pubkey,

    pub count: u32,
}

impl Display for ShowOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Counter address:", &self.counter_address.to_string())?;
        writeln_name_value(f, "Count:", &self.count.to_string())
    }
}

// Quiet output is just the number, for scripting
impl QuietDisplay for ShowOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "{}", self.count)
    }
}
impl VerboseDisplay for ShowOutput {}

pub async fn command_show(config: &Config, args: ShowArgs) -> CommandResult {
    let count = get_count(&config.rpc_client, &config.program_id, &args.counter).await?;

    Ok(format_output(
        config,
        ShowOutput {
            counter_address: args.counter,
            count,
        },
    ))
}
