//! 线上消息载体（message）
//!
//! 格式化结果的标准形态：事件对应 `SerializedMessage`（键 + 负载 + 头部），
//! 聚合状态对应 `SerializedAggregate`（负载 + 头部）。两者构造后不可变，
//! 仅提供只读访问与 `into_parts` 交由发布管线消费。
//!
mod serialized_aggregate;
mod serialized_message;

pub use serialized_aggregate::SerializedAggregate;
pub use serialized_message::SerializedMessage;

/// 消息头部：字符串到字符串的映射，顺序无关
pub type Headers = std::collections::HashMap<String, String>;
