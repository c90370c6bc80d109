pub mod client;

pub use crate::domain::model::{DoiRecord, MdsRequest, MdsResponse, Operation};
pub use crate::domain::ports::{ConfigSource, HttpTransport, RegistrationLog};
pub use crate::utils::error::Result;
