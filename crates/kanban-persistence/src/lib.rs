pub mod adapter;
pub mod serialization;
pub mod store;
pub mod traits;

pub use adapter::BoardPersistence;
pub use serialization::*;
pub use store::*;
pub use traits::*;
