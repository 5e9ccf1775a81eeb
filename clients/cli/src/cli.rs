use {
    crate::{
        common::parse_pubkey,
        config::Config,
        create_counter::{command_create_counter, CreateCounterArgs},
        output::{output_format_names, parse_output_format},
        show::{command_show, ShowArgs},
        update_counter::{command_update_counter, UpdateCounterArgs},
        CommandResult,
    },
    clap::{
        builder::{PossibleValuesParser, TypedValueParser},
        ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand,
    },
    counter_program::instruction::CounterInstruction,
    solana_clap_v3_utils::input_parsers::{
        parse_url_or_moniker,
        signer::{SignerSource, SignerSourceParserBuilder},
    },
    solana_cli_output::OutputFormat,
    solana_pubkey::Pubkey,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    std::{ffi::OsString, rc::Rc},
};

#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about = "A command line tool for interacting with the Counter program"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Configuration file to use
    #[clap(global(true), short = 'C', long = "config", id = "PATH")]
    pub config_file: Option<String>,

    /// Simulate transaction instead of executing
    #[clap(global(true), long, alias = "dryrun")]
    pub dry_run: bool,

    /// URL for Solana JSON `RPC` or moniker (or their first letter):
    /// [`mainnet-beta`, `testnet`, `devnet`, `localhost`].
    /// Default from the configuration file.
    #[clap(
        global(true),
        short = 'u',
        long = "url",
        id = "URL_OR_MONIKER",
        value_parser = parse_url_or_moniker,
    )]
    pub json_rpc_url: Option<String>,

    /// Specify the fee-payer account. This may be a keypair file, the ASK
    /// keyword or a hardware wallet URL. Defaults to the client keypair.
    #[clap(
        global(true),
        long,
        id = "PAYER_KEYPAIR",
        value_parser = SignerSourceParserBuilder::default().allow_all().build(),
    )]
    pub fee_payer: Option<SignerSource>,

    /// Address of the Counter program deployment to use.
    /// Defaults to the canonical deployment.
    #[clap(global(true), long, id = "PROGRAM_ID", value_parser = parse_pubkey)]
    pub program_id: Option<Pubkey>,

    /// Show additional information
    #[clap(global(true), short, long)]
    pub verbose: bool,

    /// Return information in specified output format
    #[clap(
        global(true),
        long = "output",
        id = "FORMAT",
        conflicts_with = "verbose",
        value_parser = PossibleValuesParser::new(output_format_names())
            .map(|o| parse_output_format(&o)),
    )]
    pub output_format: Option<OutputFormat>,
}

impl Cli {
    /// Parses `args` once, keeping the raw matches next to the typed options.
    /// Signer resolution reads keypair arguments from the matches.
    pub fn parse_with_matches<I, T>(args: I) -> Result<(Self, ArgMatches), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let cli = Self::from_arg_matches(&matches)?;
        Ok((cli, matches))
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a new counter account, starting at zero
    CreateCounter(CreateCounterArgs),
    /// Add to a counter, wrapping around at the maximum u32 value
    Increment(UpdateCounterArgs),
    /// Subtract from a counter, wrapping around below zero
    Decrement(UpdateCounterArgs),
    /// Display the current value of a counter
    Show(ShowArgs),
}

impl Command {
    pub async fn execute(
        self,
        config: &Config,
        matches: &ArgMatches,
        wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
    ) -> CommandResult {
        match self {
            Command::CreateCounter(args) => {
                command_create_counter(config, args, matches, wallet_manager).await
            }
            Command::Increment(args) => {
                let instruction = CounterInstruction::Increment {
                    amount: args.amount,
                };
                command_update_counter(config, args.counter, instruction).await
            }
            Command::Decrement(args) => {
                let instruction = CounterInstruction::Decrement {
                    amount: args.amount,
                };
                command_update_counter(config, args.counter, instruction).await
            }
            Command::Show(args) => command_show(config, args).await,
        }
    }
}
