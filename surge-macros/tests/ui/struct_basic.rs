use surge_format::RoutingKey;
use surge_macros::surge_event;

#[surge_event]
struct BankAccountCreated {
    #[routing_key]
    account_number: u64,
    owner: String,
    balance: f64,
}

#[surge_event]
struct Tagged(String, #[routing_key] u32);

fn main() {
    let evt = BankAccountCreated {
        account_number: 12345,
        owner: "alice".into(),
        balance: 100.0,
    };
    assert_eq!(evt.routing_key(), "12345");

    // 默认派生 Debug/Clone/PartialEq 可用
    let copy = evt.clone();
    assert_eq!(copy, evt);
    let _ = format!("{:?}", copy);
    let _ = (&copy.owner, copy.balance);

    assert_eq!(Tagged("x".into(), 7).routing_key(), "7");
}
