mod error;
pub mod local_storage;

pub use error::MediaError;
pub use local_storage::LocalMediaStorage;
