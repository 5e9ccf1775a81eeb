use {
    crate::{config::Config, output::println_display, Error},
    clap::ArgMatches,
    counter_program::state::decode,
    solana_clap_v3_utils::keypair::pubkey_from_path,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_transaction::Transaction,
};

pub fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    let mut wallet_manager = None;
    pubkey_from_path(&ArgMatches::default(), value, "pubkey", &mut wallet_manager)
        .map_err(|_| format!("Failed to load pubkey at {}", value))
}

/// Fetches a counter account and decodes its count, checking that the account
/// belongs to `program_id`
pub async fn get_count(
    rpc_client: &RpcClient,
    program_id: &Pubkey,
    counter: &Pubkey,
) -> Result<u32, Error> {
    let account = rpc_client
        .get_account(counter)
        .await
        .map_err(|e| format!("Could not fetch counter account {}: {}", counter, e))?;
    if account.owner != *program_id {
        return Err(format!(
            "Account {} is owned by {}, not the counter program {}",
            counter, account.owner, program_id
        )
        .into());
    }
    decode(&account.data).map_err(|e| format!("Account {}: {}", counter, e).into())
}

pub async fn process_transaction(
    config: &Config,
    transaction: Transaction,
) -> Result<Option<Signature>, Error> {
    if config.dry_run {
        let simulation_data = config.rpc_client.simulate_transaction(&transaction).await?;

        if let Some(err) = simulation_data.value.err {
            return Err(format!("Simulation failed: {}", err).into());
        }

        if config.verbose() {
            if let Some(logs) = simulation_data.value.logs {
                for log in logs {
                    println!("    {}", log);
                }
            }

            if let Some(units) = simulation_data.value.units_consumed {
                println!("\nSimulation succeeded, consumed {} compute units", units);
            }
        } else {
            println_display(config, "Simulation succeeded".to_string());
        }

        Ok(None)
    } else {
        Ok(Some(
            config
                .rpc_client
                .send_and_confirm_transaction_with_spinner(&transaction)
                .await?,
        ))
    }
}
