mod local_object_store;

pub use local_object_store::LocalObjectStore;
