use {
    crate::helpers::common::{init_mollusk, setup_counter, KeyedAccount},
    counter_program::instruction::{decrement, increment},
    mollusk_svm::{result::Check, Mollusk},
    solana_instruction::Instruction,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Increment,
    Decrement,
}

pub struct UpdateCounterBuilder<'a> {
    mollusk: Mollusk,
    operation: Operation,
    amount: u32,
    counter: Option<KeyedAccount>,
    instruction_data: Option<Vec<u8>>,
    extra_accounts: Vec<KeyedAccount>,
    checks: Vec<Check<'a>>,
}

impl Default for UpdateCounterBuilder<'_> {
    fn default() -> Self {
        Self {
            mollusk: init_mollusk(),
            operation: Operation::Increment,
            amount: 1,
            counter: None,
            instruction_data: None,
            extra_accounts: vec![],
            checks: vec![],
        }
    }
}

pub struct UpdateCounterResult {
    pub counter: KeyedAccount,
}

impl<'a> UpdateCounterBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(mut self, amount: u32) -> Self {
        self.operation = Operation::Increment;
        self.amount = amount;
        self
    }

    pub fn decrement(mut self, amount: u32) -> Self {
        self.operation = Operation::Decrement;
        self.amount = amount;
        self
    }

    pub fn counter(mut self, counter: KeyedAccount) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Replaces the packed instruction, for malformed input cases
    pub fn instruction_data(mut self, data: &[u8]) -> Self {
        self.instruction_data = Some(data.to_vec());
        self
    }

    pub fn extra_account(mut self, account: KeyedAccount) -> Self {
        self.extra_accounts.push(account);
        self
    }

    pub fn check(mut self, check: Check<'a>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn execute(mut self) -> UpdateCounterResult {
        let counter = self.counter.unwrap_or_else(|| setup_counter(0));

        let mut instruction: Instruction = match self.operation {
            Operation::Increment => increment(&counter_program::id(), &counter.key, self.amount),
            Operation::Decrement => decrement(&counter_program::id(), &counter.key, self.amount),
        };
        if let Some(data) = self.instruction_data {
            instruction.data = data;
        }

        let mut accounts = vec![counter.pair()];
        for extra in &self.extra_accounts {
            instruction
                .accounts
                .push(solana_instruction::AccountMeta::new(extra.key, false));
            accounts.push(extra.pair());
        }

        if self.checks.is_empty() {
            self.checks.push(Check::success());
        }

        let result =
            self.mollusk
                .process_and_validate_instruction(&instruction, &accounts, &self.checks);

        UpdateCounterResult {
            counter: KeyedAccount {
                key: counter.key,
                account: result.get_account(&counter.key).unwrap().clone(),
            },
        }
    }
}
