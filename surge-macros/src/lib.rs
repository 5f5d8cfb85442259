use proc_macro::TokenStream;

mod derive_utils;
mod field_utils;
mod surge_event;

/// 事件宏
/// - 合并/追加默认派生：Debug, Clone, PartialEq, Serialize, Deserialize
/// - 以 `#[routing_key]` 标记路由字段（结构体一个；枚举每个变体各一个），标记在输出中会被移除
/// - 自动实现 `::surge_format::RoutingKey`，键为该字段的 `to_string()`
/// - 支持具名/元组结构体与具名/元组变体的枚举
#[proc_macro_attribute]
pub fn surge_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    surge_event::expand(attr, item)
}
