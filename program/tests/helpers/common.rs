use {
    counter_program::{state::encode, COUNTER_ACCOUNT_LEN},
    mollusk_svm::Mollusk,
    solana_account::Account,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct KeyedAccount {
    pub key: Pubkey,
    pub account: Account,
}

impl KeyedAccount {
    pub fn pair(&self) -> (Pubkey, Account) {
        (self.key, self.account.clone())
    }
}

pub fn init_mollusk() -> Mollusk {
    Mollusk::new(&counter_program::id(), "counter_program")
}

/// A rent-exempt counter account owned by the program, as the system program
/// would leave it after `create_counter_account`, holding `count`
pub fn setup_counter(count: u32) -> KeyedAccount {
    setup_counter_with_data(encode(count).to_vec())
}

pub fn setup_counter_with_data(data: Vec<u8>) -> KeyedAccount {
    KeyedAccount {
        key: Pubkey::new_unique(),
        account: Account {
            lamports: Rent::default().minimum_balance(COUNTER_ACCOUNT_LEN),
            data,
            owner: counter_program::id(),
            ..Default::default()
        },
    }
}
