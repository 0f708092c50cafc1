pub mod error;
pub mod naming;

pub use error::{GenError, Result};
pub use naming::to_wire_key;
