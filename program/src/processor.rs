//! Program state processor

use {
    crate::{instruction::CounterInstruction, state::CounterState},
    solana_account_info::{next_account_info, AccountInfo},
    solana_msg::msg,
    solana_program_error::{ProgramError, ProgramResult},
    solana_pubkey::Pubkey,
};

/// Processes [`Increment`](enum.CounterInstruction.html) and
/// [`Decrement`](enum.CounterInstruction.html) instructions.
pub fn process_update(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction: CounterInstruction,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let counter_account = next_account_info(account_info_iter)?;

    if counter_account.owner != program_id {
        msg!("Counter account is not owned by this program");
        return Err(ProgramError::IncorrectProgramId);
    }

    if !counter_account.is_writable {
        msg!("Counter account must be writable");
        return Err(ProgramError::InvalidAccountData);
    }

    let mut counter_data = counter_account.try_borrow_mut_data()?;
    let counter = CounterState::unpack_mut(&mut counter_data)?;

    // Everything is validated, the assignment below is the only mutation
    let count = instruction.apply(counter.count());
    *counter = CounterState::new(count);

    msg!("Counter {} count: {}", counter_account.key, count);

    Ok(())
}

/// Instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = CounterInstruction::unpack(input)?;
    match instruction {
        CounterInstruction::Increment { amount } => {
            msg!("Instruction: Increment by {}", amount);
        }
        CounterInstruction::Decrement { amount } => {
            msg!("Instruction: Decrement by {}", amount);
        }
    }
    process_update(program_id, accounts, instruction)
}
