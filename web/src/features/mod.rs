pub mod participants;
pub mod tournaments;
