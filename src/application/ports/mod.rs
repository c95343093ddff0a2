mod object_store;

pub use object_store::{ObjectStore, ObjectSummary, StoreError, StoredObject};

#[cfg(test)]
pub use object_store::MockObjectStore;
