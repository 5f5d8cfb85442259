//! 事件格式化基础库（surge-format）
//!
//! 在事件发布到事件日志之前，把领域事件转换为线上消息（键 + 负载字节 + 头部）：
//! - 消息载体（`message`）：`SerializedMessage` 与聚合状态的 `SerializedAggregate`
//! - 格式化能力（`formatting`）：按事件/状态类型参数化的读写 trait 与默认 JSON 实现
//! - 路由键（`routing_key`）：从事件中提取分区/路由用的字符串
//!
//! 本 crate 不涉及事件引擎、传输与投递语义，仅定义消费方需要实现的格式化协议，
//! 由外部发布管线负责批量、重试与投递。
//!
//! 典型用法：
//! 1. 使用 `#[surge_event]`（见 `surge-macros`）标注事件并指定 `#[routing_key]` 字段；
//! 2. 构造 `JsonFormatter`（或自行实现 `EventWriteFormatting<E>`）；
//! 3. 调用 `write_event` 得到 `SerializedMessage` 并交给发布管线。
//!
pub mod error;
pub mod formatting;
pub mod message;
pub mod routing_key;

pub use error::{FormatError, FormatResult};
pub use formatting::{
    AggregateReadFormatting, AggregateWriteFormatting, EventReadFormatting, EventWriteFormatting,
    JsonFormatter, write_events,
};
pub use message::{Headers, SerializedAggregate, SerializedMessage};
pub use routing_key::RoutingKey;

// 允许在本 crate 内部通过 ::surge_format 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::surge_format 路径。
extern crate self as surge_format;
