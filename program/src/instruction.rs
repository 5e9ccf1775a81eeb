//! Program instructions

use {
    crate::{error::CounterError, COUNTER_ACCOUNT_LEN},
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
};

/// Length of packed instruction data: one tag byte and a little-endian `u32`
pub const INSTRUCTION_LEN: usize = 5;

/// Instructions supported by the Counter program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CounterInstruction {
    /// Add `amount` to the counter, wrapping around at `u32::MAX`
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account, owned by this program and exactly
    ///    `COUNTER_ACCOUNT_LEN` bytes long
    Increment {
        /// little-endian `u32` step
        amount: u32,
    },

    /// Subtract `amount` from the counter, wrapping around below zero
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account, owned by this program and exactly
    ///    `COUNTER_ACCOUNT_LEN` bytes long
    Decrement {
        /// little-endian `u32` step
        amount: u32,
    },
}

impl CounterInstruction {
    /// Packs a [`CounterInstruction`](enum.CounterInstruction.html) into a
    /// byte array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(INSTRUCTION_LEN);
        match self {
            CounterInstruction::Increment { amount } => {
                buf.push(0);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CounterInstruction::Decrement { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`CounterInstruction`](enum.CounterInstruction.html).
    ///
    /// The length is checked before the tag, so a buffer that is both too
    /// long and carries an unknown tag reports `MalformedInstruction`.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input: &[u8; INSTRUCTION_LEN] = input
            .try_into()
            .map_err(|_| CounterError::MalformedInstruction)?;
        let (tag, rest) = input.split_at(1);
        let mut operand = [0u8; 4];
        operand.copy_from_slice(rest);
        let amount = u32::from_le_bytes(operand);
        match tag[0] {
            0 => Ok(CounterInstruction::Increment { amount }),
            1 => Ok(CounterInstruction::Decrement { amount }),
            _ => Err(CounterError::UnknownOpcode.into()),
        }
    }

    /// Applies the transition to `count`. Arithmetic is modulo 2^32.
    pub fn apply(&self, count: u32) -> u32 {
        match self {
            CounterInstruction::Increment { amount } => count.wrapping_add(*amount),
            CounterInstruction::Decrement { amount } => count.wrapping_sub(*amount),
        }
    }
}

/// Creates `Increment` instruction.
pub fn increment(program_id: &Pubkey, counter_address: &Pubkey, amount: u32) -> Instruction {
    let data = CounterInstruction::Increment { amount }.pack();
    let accounts = vec![AccountMeta::new(*counter_address, false)];
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `Decrement` instruction.
pub fn decrement(program_id: &Pubkey, counter_address: &Pubkey, amount: u32) -> Instruction {
    let data = CounterInstruction::Decrement { amount }.pack();
    let accounts = vec![AccountMeta::new(*counter_address, false)];
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates a system program instruction allocating a zeroed counter account
/// owned by `program_id`. The caller funds it with `lamports`, normally the
/// rent-exempt minimum for `COUNTER_ACCOUNT_LEN` bytes, and both `payer` and
/// `counter_address` must sign.
pub fn create_counter_account(
    payer: &Pubkey,
    counter_address: &Pubkey,
    lamports: u64,
    program_id: &Pubkey,
) -> Instruction {
    solana_system_interface::instruction::create_account(
        payer,
        counter_address,
        lamports,
        COUNTER_ACCOUNT_LEN as u64,
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_wraps() {
        let max = u32::MAX;
        assert_eq!(CounterInstruction::Increment { amount: 1 }.apply(0), 1);
        assert_eq!(CounterInstruction::Increment { amount: 1 }.apply(max), 0);
        assert_eq!(CounterInstruction::Increment { amount: max }.apply(max), max - 1);
        assert_eq!(CounterInstruction::Decrement { amount: 1 }.apply(1), 0);
        assert_eq!(CounterInstruction::Decrement { amount: 1 }.apply(0), max);
        assert_eq!(CounterInstruction::Decrement { amount: 10 }.apply(3), max - 6);
        assert_eq!(CounterInstruction::Decrement { amount: 0 }.apply(42), 42);
    }

    #[test]
    fn test_builders() {
        let program_id = Pubkey::new_unique();
        let counter = Pubkey::new_unique();

        let ix = increment(&program_id, &counter, 258);
        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.data, vec![0, 2, 1, 0, 0]);
        assert_eq!(ix.accounts, vec![AccountMeta::new(counter, false)]);

        let ix = decrement(&program_id, &counter, 1);
        assert_eq!(ix.data, vec![1, 1, 0, 0, 0]);
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[0].is_signer);
    }

    #[test]
    fn test_create_counter_account() {
        let payer = Pubkey::new_unique();
        let counter = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let ix = create_counter_account(&payer, &counter, 1_000, &program_id);
        assert_eq!(ix.program_id, solana_sdk_ids::system_program::id());
        assert_eq!(
            ix.accounts,
            vec![AccountMeta::new(payer, true), AccountMeta::new(counter, true)]
        );
        assert_eq!(
            ix.data,
            bincode_create_account_data(1_000, COUNTER_ACCOUNT_LEN as u64, &program_id)
        );
    }

    // SystemInstruction::CreateAccount, bincode layout: u32 tag, lamports,
    // space, owner
    fn bincode_create_account_data(lamports: u64, space: u64, owner: &Pubkey) -> Vec<u8> {
        let mut data = 0u32.to_le_bytes().to_vec();
        data.extend_from_slice(&lamports.to_le_bytes());
        data.extend_from_slice(&space.to_le_bytes());
        data.extend_from_slice(owner.as_ref());
        data
    }
}
