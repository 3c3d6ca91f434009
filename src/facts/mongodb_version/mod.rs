mod fact;

pub use fact::MongodbVersionFact;
