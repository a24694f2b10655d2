pub mod services;

pub use services::{PersistenceGateway, SaveReport};
