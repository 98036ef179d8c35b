pub mod participant;
pub mod tournament;
