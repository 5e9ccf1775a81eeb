use {
    crate::{cli::Cli, Error},
    anyhow::anyhow,
    clap::ArgMatches,
    solana_clap_v3_utils::keypair::{signer_from_path, signer_from_source},
    solana_cli_output::OutputFormat,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_commitment_config::CommitmentConfig,
    solana_pubkey::Pubkey,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    solana_signer::Signer,
    std::{rc::Rc, sync::Arc},
};

/// Everything a command needs to talk to the cluster. Built once from the
/// command line and the Solana CLI config file, then handed to each command.
pub struct Config {
    pub rpc_client: Arc<RpcClient>,
    pub fee_payer: Option<Arc<dyn Signer>>,
    pub program_id: Pubkey,
    pub output_format: OutputFormat,
    pub dry_run: bool,
}

impl Config {
    pub fn new(
        cli: Cli,
        matches: ArgMatches,
        wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
    ) -> Result<Self, Error> {
        let solana_config = load_solana_config(cli.config_file.as_deref())?;

        let json_rpc_url = cli.json_rpc_url.unwrap_or(solana_config.json_rpc_url);
        let rpc_client = Arc::new(RpcClient::new_with_commitment(
            json_rpc_url,
            CommitmentConfig::confirmed(),
        ));

        // A missing default keypair is only an error for commands that sign
        let fee_payer = match &cli.fee_payer {
            Some(source) => signer_from_source(&matches, source, "fee_payer", wallet_manager),
            None => signer_from_path(
                &matches,
                &solana_config.keypair_path,
                "default",
                wallet_manager,
            ),
        }
        .ok()
        .map(Arc::from);

        Ok(Self {
            rpc_client,
            fee_payer,
            program_id: cli.program_id.unwrap_or_else(counter_program::id),
            output_format: resolve_output_format(cli.output_format, cli.verbose),
            dry_run: cli.dry_run,
        })
    }

    /// Returns `Ok(default signer)`, or Err if there is no default signer
    /// configured
    pub fn fee_payer(&self) -> Result<Arc<dyn Signer>, Error> {
        self.fee_payer.clone().ok_or_else(|| {
            "fee payer is required, pass one with --fee-payer, point --config at a Solana CLI \
             config naming a keypair, or create ~/.config/solana/cli/config.yml with the solana \
             config command"
                .into()
        })
    }

    pub fn verbose(&self) -> bool {
        self.output_format == OutputFormat::DisplayVerbose
    }
}

fn load_solana_config(config_file: Option<&str>) -> Result<solana_cli_config::Config, Error> {
    match config_file {
        Some(path) => solana_cli_config::Config::load(path)
            .map_err(|e| anyhow!("Could not load config file {}: {}", path, e).into()),
        None => Ok((*solana_cli_config::CONFIG_FILE)
            .as_ref()
            .and_then(|path| solana_cli_config::Config::load(path).ok())
            .unwrap_or_default()),
    }
}

fn resolve_output_format(output_format: Option<OutputFormat>, verbose: bool) -> OutputFormat {
    match (output_format, verbose) {
        (Some(format), _) => format,
        (None, true) => OutputFormat::DisplayVerbose,
        (None, false) => OutputFormat::Display,
    }
}
