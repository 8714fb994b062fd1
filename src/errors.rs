use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrcpError {
    #[error("invalid motif length: expected {expected} got {got}")]
    InvalidMotifLength { expected: usize, got: usize },

    #[error("invalid bit string: {0}")]
    InvalidBitString(&'static str),

    #[error("token decode error: {0}")]
    TokenDecode(&'static str),

    #[error("token length mismatch: {a} vs {b} bytes")]
    TokenLengthMismatch { a: usize, b: usize },

    #[error("division by zero in tag derivation")]
    DivisionByZero,

    #[error("tag operand too large: {got} bits exceeds {max}")]
    OperandTooLarge { got: usize, max: usize },
}
