pub mod derive;
pub mod segment;
