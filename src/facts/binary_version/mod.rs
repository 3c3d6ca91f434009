mod fact;

pub use fact::BinaryVersionFact;
