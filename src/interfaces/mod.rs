// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod word;

pub use word::Word;
