use super::Headers;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 聚合状态的序列化形态，按聚合 ID 寻址，因此不携带键
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct SerializedAggregate {
    payload: Vec<u8>,
    #[builder(default)]
    headers: Headers,
}

impl SerializedAggregate {
    pub fn new(payload: Vec<u8>, headers: Headers) -> Self {
        Self { payload, headers }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn into_parts(self) -> (Vec<u8>, Headers) {
        (self.payload, self.headers)
    }
}
