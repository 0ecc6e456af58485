pub mod field_store;

pub use field_store::FieldStore;
