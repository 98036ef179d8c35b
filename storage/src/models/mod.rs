pub mod participant;
pub mod tournament;

pub use participant::Participant;
pub use tournament::Tournament;
