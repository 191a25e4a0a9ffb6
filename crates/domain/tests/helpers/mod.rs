mod builders;

pub use builders::QueryBytesBuilder;
