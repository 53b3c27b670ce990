pub mod errors;
pub mod reassembler;
