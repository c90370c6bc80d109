use crate::domain::model::{MdsRequest, MdsResponse};
use crate::utils::error::TransportError;
use async_trait::async_trait;

/// Nested configuration lookup with dotted keys, e.g. `doi.registration.datacite.username`.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Executes a single authenticated HTTP request and hands back status and body text.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: MdsRequest) -> Result<MdsResponse, TransportError>;
}

/// Level-keyed sink for the client's diagnostic messages.
pub trait RegistrationLog: Send + Sync {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}
