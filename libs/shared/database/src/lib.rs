pub mod datastore;

pub use datastore::DataStoreClient;
