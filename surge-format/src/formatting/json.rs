use super::finite::ensure_finite;
use super::{
    AggregateReadFormatting, AggregateWriteFormatting, EventReadFormatting, EventWriteFormatting,
};
use crate::{
    error::{FormatError, FormatResult},
    message::{Headers, SerializedAggregate, SerializedMessage},
    routing_key::RoutingKey,
};
use bon::Builder;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// 基于 serde_json 的默认格式化器
///
/// 只持有不可变配置，可在线程间共享；同一输入总是得到字节一致的输出
/// （前提是事件本身的序列化顺序确定，例如不含 `HashMap` 字段，需要映射时使用 `BTreeMap`）。
/// 含 `NaN`/`±inf` 的值无法用 JSON 表示，编码时返回 `EncodingFailure`。
#[derive(Debug, Clone, Default, Builder)]
pub struct JsonFormatter {
    /// 附加到每条消息/快照上的静态头部，默认为空
    #[builder(default)]
    headers: Headers,
    /// 是否输出缩进格式的 JSON
    #[builder(default)]
    pretty: bool,
}

impl JsonFormatter {
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    fn encode<T>(&self, value: &T) -> FormatResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        ensure_finite(value).map_err(FormatError::encoding)?;

        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };

        bytes.map_err(FormatError::encoding)
    }

    fn decode<T>(&self, payload: &[u8]) -> FormatResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(payload).map_err(FormatError::decoding)
    }
}

impl<E> EventWriteFormatting<E> for JsonFormatter
where
    E: Serialize + RoutingKey + ?Sized,
{
    fn write_event(&self, event: &E) -> FormatResult<SerializedMessage> {
        let key = event.routing_key();
        let payload = self.encode(event).inspect_err(|err| {
            debug!(key = %key, error = %err, "event encoding failed");
        })?;

        debug!(key = %key, bytes = payload.len(), "event formatted");

        Ok(SerializedMessage::new(key, payload, self.headers.clone()))
    }
}

impl<E> EventReadFormatting<E> for JsonFormatter
where
    E: DeserializeOwned,
{
    fn read_event(&self, payload: &[u8]) -> FormatResult<E> {
        self.decode(payload)
    }
}

impl<S> AggregateWriteFormatting<S> for JsonFormatter
where
    S: Serialize + ?Sized,
{
    fn write_state(&self, state: &S) -> FormatResult<SerializedAggregate> {
        let payload = self.encode(state)?;
        debug!(bytes = payload.len(), "aggregate state formatted");

        Ok(SerializedAggregate::new(payload, self.headers.clone()))
    }
}

impl<S> AggregateReadFormatting<S> for JsonFormatter
where
    S: DeserializeOwned,
{
    fn read_state(&self, payload: &[u8]) -> FormatResult<S> {
        self.decode(payload)
    }
}
