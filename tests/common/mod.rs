#![allow(dead_code)]

use doi_mds::config::{PASSWORD_KEY, SERVICE_URL_KEY, USERNAME_KEY};
use doi_mds::domain::ports::RegistrationLog;
use doi_mds::MapConfig;
use std::sync::Mutex;

pub const USERNAME: &str = "doe";
pub const PASSWORD: &str = "secret";
/// base64("doe:secret")
pub const BASIC_AUTH: &str = "Basic ZG9lOnNlY3JldA==";

pub const SAMPLE_METADATA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resource xmlns="http://datacite.org/schema/kernel-4">
<identifier identifierType="DOI">10.5072/opustest-999</identifier>
<creators><creator><creatorName>Doe, John</creatorName></creator></creators>
<titles><title xml:lang="en">Document without meaningful title</title></titles>
<publisher>ACME corp</publisher>
<publicationYear>2018</publicationYear>
<resourceType resourceTypeGeneral="Text">Book</resourceType>
</resource>"#;

pub fn full_config(service_url: &str) -> MapConfig {
    MapConfig::new()
        .with(USERNAME_KEY, USERNAME)
        .with(PASSWORD_KEY, PASSWORD)
        .with(SERVICE_URL_KEY, service_url)
}

/// Collects log lines as `level: message`.
#[derive(Default)]
pub struct CapturingLog {
    lines: Mutex<Vec<String>>,
}

impl CapturingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.starts_with("err: "))
            .collect()
    }
}

impl RegistrationLog for CapturingLog {
    fn debug(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("debug: {}", message));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("err: {}", message));
    }
}
