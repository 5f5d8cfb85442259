//! 事件消息模型（SerializedMessage）
//!
use super::Headers;
use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct SerializedMessage {
    /// 路由/分区键，由事件的路由字段确定性地得到
    #[builder(into)]
    key: String,
    /// 事件的序列化字节
    payload: Vec<u8>,
    /// 附加元数据，默认为空
    #[builder(default)]
    headers: Headers,
}

impl SerializedMessage {
    pub fn new(key: impl Into<String>, payload: Vec<u8>, headers: Headers) -> Self {
        Self {
            key: key.into(),
            payload,
            headers,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// 拆解为 (key, payload, headers)，交由发布管线获取所有权
    pub fn into_parts(self) -> (String, Vec<u8>, Headers) {
        (self.key, self.payload, self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_empty_headers() {
        let msg = SerializedMessage::builder()
            .key("12345")
            .payload(b"{}".to_vec())
            .build();
        assert_eq!(msg.key(), "12345");
        assert_eq!(msg.payload(), b"{}");
        assert!(msg.headers().is_empty());
        assert_eq!(msg.header("content-type"), None);
    }

    #[test]
    fn into_parts_hands_over_ownership() {
        let headers = Headers::from([("source".to_string(), "bank".to_string())]);
        let msg = SerializedMessage::new("k", vec![1, 2, 3], headers.clone());
        assert_eq!(msg.header("source"), Some("bank"));

        let (key, payload, hs) = msg.into_parts();
        assert_eq!(key, "k");
        assert_eq!(payload, vec![1, 2, 3]);
        assert_eq!(hs, headers);
    }
}
