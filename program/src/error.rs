//! Error types

use {
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    solana_msg::msg,
    solana_program_error::ProgramError,
    thiserror::Error,
};

/// Errors that may be returned by the Counter program.
#[derive(Clone, Debug, Eq, Error, PartialEq, FromPrimitive)]
pub enum CounterError {
    // 0
    /// Instruction data is not exactly one tag byte and a `u32` operand
    #[error("Instruction data must be exactly 5 bytes")]
    MalformedInstruction,
    /// Instruction tag is neither increment nor decrement
    #[error("Unknown instruction opcode")]
    UnknownOpcode,
    /// Counter account data is not exactly 4 bytes
    #[error("Counter account data has an unexpected length")]
    CorruptAccountState,
}

impl From<CounterError> for ProgramError {
    fn from(e: CounterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/// Describes a failed instruction, naming the program's own errors
pub fn error_message(err: &ProgramError) -> String {
    match err {
        ProgramError::Custom(code) => match CounterError::from_u32(*code) {
            Some(e) => format!("Error: {}", e),
            None => format!("Error: custom program error {:#x}", code),
        },
        e => format!("Error: {}", e),
    }
}

/// Logs a failed instruction
pub fn log_error(err: &ProgramError) {
    msg!(&error_message(err));
}
