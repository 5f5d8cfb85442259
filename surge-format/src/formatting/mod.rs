//! 格式化能力（formatting）
//!
//! 以事件/状态类型参数化的读写协议，每种领域类型各自实现：
//! - `EventWriteFormatting<E>`：事件 -> `SerializedMessage`
//! - `EventReadFormatting<E>`：负载字节 -> 事件
//! - `AggregateWriteFormatting<S>` / `AggregateReadFormatting<S>`：聚合状态的对应协议
//!
//! 默认实现见 `JsonFormatter`。所有实现都不得吞掉失败：错误必须以 `FormatError` 返回给调用方。
//!
mod finite;
mod json;

pub use json::JsonFormatter;

use crate::error::FormatResult;
use crate::message::{SerializedAggregate, SerializedMessage};

/// 事件写格式化：把一个事件转换为可发布的消息
pub trait EventWriteFormatting<E: ?Sized> {
    /// 编码失败时返回 `FormatError::EncodingFailure`，不产生部分消息
    ///
    /// 相等的事件应得到字节一致的负载；事件中的映射字段需使用有序容器（如 `BTreeMap`），
    /// `HashMap` 的迭代顺序不保证稳定。
    fn write_event(&self, event: &E) -> FormatResult<SerializedMessage>;
}

/// 事件读格式化：把消息负载还原为事件
pub trait EventReadFormatting<E> {
    fn read_event(&self, payload: &[u8]) -> FormatResult<E>;
}

/// 聚合状态写格式化
pub trait AggregateWriteFormatting<S: ?Sized> {
    fn write_state(&self, state: &S) -> FormatResult<SerializedAggregate>;
}

/// 聚合状态读格式化
pub trait AggregateReadFormatting<S> {
    fn read_state(&self, payload: &[u8]) -> FormatResult<S>;
}

// 允许直接以闭包充当写格式化器
impl<E, F> EventWriteFormatting<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> FormatResult<SerializedMessage>,
{
    fn write_event(&self, event: &E) -> FormatResult<SerializedMessage> {
        self(event)
    }
}

/// 按顺序批量格式化事件；任一事件失败即整体失败，不返回部分结果
pub fn write_events<E, W>(formatter: &W, events: &[E]) -> FormatResult<Vec<SerializedMessage>>
where
    W: EventWriteFormatting<E> + ?Sized,
{
    let messages = events
        .iter()
        .map(|event| formatter.write_event(event))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(messages)
}
