use {
    crate::{
        common::{get_count, parse_pubkey, process_transaction},
        config::Config,
        output::{format_output, println_display},
        CommandResult,
    },
    clap::Args,
    counter_program::instruction::{decrement, increment, CounterInstruction},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    std::fmt::{Display, Formatter},
};

#[derive(Clone, Debug, Args)]
pub struct UpdateCounterArgs {
    /// The address of the counter account
    #[clap(value_parser = parse_pubkey)]
    pub counter: Pubkey,

    /// The step to apply to the counter
    #[clap(value_parser)]
    pub amount: u32,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCounterOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub counter_address: Pubkey,

    pub operation: String,

    pub amount: u32,

    pub previous_count: u32,

    /// Count read back after confirmation, absent on a dry run
    pub count: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for UpdateCounterOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Counter address:", &self.counter_address.to_string())?;
        writeln_name_value(f, "Operation:", &self.operation)?;
        writeln_name_value(f, "Amount:", &self.amount.to_string())?;
        writeln_name_value(f, "Previous count:", &self.previous_count.to_string())?;
        if let Some(count) = self.count {
            writeln_name_value(f, "Count:", &count.to_string())?;
        }
        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }
        Ok(())
    }
}

impl QuietDisplay for UpdateCounterOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for UpdateCounterOutput {}

fn operation_name(instruction: &CounterInstruction) -> &'static str {
    match instruction {
        CounterInstruction::Increment { .. } => "increment",
        CounterInstruction::Decrement { .. } => "decrement",
    }
}

pub async fn command_update_counter(
    config: &Config,
    counter: Pubkey,
    instruction: CounterInstruction,
) -> CommandResult {
    let payer = config.fee_payer()?;

    // Fails early on accounts the program would reject as corrupt
    let previous_count = get_count(&config.rpc_client, &config.program_id, &counter).await?;

    let (ix, amount) = match instruction {
        CounterInstruction::Increment { amount } => {
            (increment(&config.program_id, &counter, amount), amount)
        }
        CounterInstruction::Decrement { amount } => {
            (decrement(&config.program_id, &counter, amount), amount)
        }
    };

    println_display(
        config,
        format!(
            "Applying {} by {} to counter {} (currently {})",
            operation_name(&instruction),
            amount,
            counter,
            previous_count
        ),
    );

    let blockhash = config.rpc_client.get_latest_blockhash().await?;
    let transaction =
        Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], blockhash);

    let signature = process_transaction(config, transaction).await?;

    let count = if signature.is_some() {
        Some(get_count(&config.rpc_client, &config.program_id, &counter).await?)
    } else {
        None
    };

    Ok(format_output(
        config,
        UpdateCounterOutput {
            counter_address: counter,
            operation: operation_name(&instruction).to_string(),
            amount,
            previous_count,
            count,
            signature,
        },
    ))
}
