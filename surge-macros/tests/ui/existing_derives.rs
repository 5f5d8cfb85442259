use serde::{Deserialize, Serialize};
use surge_format::RoutingKey;
use surge_macros::surge_event;

// 已有派生与默认派生去重合并，其他属性保留
#[surge_event]
#[derive(Debug, Clone, Serialize, Deserialize, Eq, Hash)]
#[serde(rename_all = "camelCase")]
struct Deposited {
    #[routing_key]
    account_number: String,
    amount_cents: i64,
}

#[surge_event]
struct Generic<K: std::fmt::Display> {
    #[routing_key]
    key: K,
}

fn main() {
    let evt = Deposited {
        account_number: "acc-1".into(),
        amount_cents: 5,
    };
    assert_eq!(evt.routing_key(), "acc-1");
    let _ = evt.amount_cents;

    let mut set = std::collections::HashSet::new();
    set.insert(evt.clone());
    assert!(set.contains(&evt));

    assert_eq!(Generic { key: 3u8 }.routing_key(), "3");
}
