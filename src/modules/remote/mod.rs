mod http_store;

pub use http_store::{HttpRemoteStore, RemoteStore};
