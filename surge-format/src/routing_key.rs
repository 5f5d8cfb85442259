use std::sync::Arc;

/// 提供路由/分区键的事件能力边界
///
/// 键由事件中某个字段的字符串表示确定性地得到；同一事件多次调用必须返回相同结果。
/// 通常由 `#[surge_event]` 根据 `#[routing_key]` 字段生成。
pub trait RoutingKey {
    fn routing_key(&self) -> String;
}

impl<T> RoutingKey for &T
where
    T: RoutingKey + ?Sized,
{
    fn routing_key(&self) -> String {
        (**self).routing_key()
    }
}

impl<T> RoutingKey for Box<T>
where
    T: RoutingKey + ?Sized,
{
    fn routing_key(&self) -> String {
        (**self).routing_key()
    }
}

impl<T> RoutingKey for Arc<T>
where
    T: RoutingKey + ?Sized,
{
    fn routing_key(&self) -> String {
        (**self).routing_key()
    }
}

#[cfg(test)]
mod tests {
    use super::RoutingKey;
    use std::sync::Arc;
    use surge_macros::surge_event;

    #[surge_event]
    struct Transfer {
        #[routing_key]
        account_number: u64,
        amount: i64,
    }

    #[test]
    fn routing_key_is_field_display() {
        let t = Transfer {
            account_number: 12345,
            amount: 10,
        };
        assert_eq!(t.routing_key(), "12345");
    }

    #[test]
    fn routing_key_through_smart_pointers() {
        let t = Arc::new(Transfer {
            account_number: 7,
            amount: 1,
        });
        assert_eq!(t.routing_key(), "7");
        assert_eq!((&t).routing_key(), "7");
        assert_eq!(Box::new(t.as_ref().clone()).routing_key(), "7");
    }
}
