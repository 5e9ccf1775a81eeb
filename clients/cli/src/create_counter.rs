use {
    crate::{
        common::process_transaction,
        config::Config,
        output::{format_output, println_display},
        CommandResult,
    },
    clap::{ArgMatches, Args},
    counter_program::{instruction::create_counter_account, COUNTER_ACCOUNT_LEN},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_clap_v3_utils::{
        input_parsers::signer::{SignerSource, SignerSourceParserBuilder},
        keypair::signer_from_source,
    },
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    std::{
        fmt::{Display, Formatter},
        rc::Rc,
        sync::Arc,
    },
};

#[derive(Clone, Debug, Args)]
pub struct CreateCounterArgs {
    /// Signer source for the new counter account. A fresh keypair is
    /// generated if not provided.
    #[clap(
        long,
        value_parser = SignerSourceParserBuilder::default().allow_all().build()
    )]
    pub counter_keypair: Option<SignerSource>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCounterOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub counter_address: Pubkey,

    #[serde_as(as = "DisplayFromStr")]
    pub program_id: Pubkey,

    pub space: usize,

    pub lamports: u64,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for CreateCounterOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Counter address:", &self.counter_address.to_string())?;
        writeln_name_value(f, "Owner program:", &self.program_id.to_string())?;
        writeln_name_value(f, "Space:", &format!("{} bytes", self.space))?;
        writeln_name_value(f, "Lamports:", &self.lamports.to_string())?;
        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }
        Ok(())
    }
}

impl QuietDisplay for CreateCounterOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "{}", self.counter_address)
    }
}
impl VerboseDisplay for CreateCounterOutput {}

pub async fn command_create_counter(
    config: &Config,
    args: CreateCounterArgs,
    matches: &ArgMatches,
    wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
) -> CommandResult {
    let payer = config.fee_payer()?;

    let counter: Arc<dyn Signer> = match &args.counter_keypair {
        Some(source) => Arc::from(
            signer_from_source(matches, source, "counter_keypair", wallet_manager)
                .map_err(|e| e.to_string())?,
        ),
        None => Arc::new(Keypair::new()),
    };
    let counter_address = counter.pubkey();

    if config.rpc_client.get_account(&counter_address).await.is_ok() {
        return Err(format!("Account {} already exists", counter_address).into());
    }

    let lamports = config
        .rpc_client
        .get_minimum_balance_for_rent_exemption(COUNTER_ACCOUNT_LEN)
        .await?;

    println_display(
        config,
        format!(
            "Creating counter {} owned by program {}",
            counter_address, config.program_id
        ),
    );

    let instruction = create_counter_account(
        &payer.pubkey(),
        &counter_address,
        lamports,
        &config.program_id,
    );

    let blockhash = config.rpc_client.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer.clone(), counter],
        blockhash,
    );

    let signature = process_transaction(config, transaction).await?;

    Ok(format_output(
        config,
        CreateCounterOutput {
            counter_address,
            program_id: config.program_id,
            space: COUNTER_ACCOUNT_LEN,
            lamports,
            signature,
        },
    ))
}
