use surge_macros::surge_event;

#[surge_event]
enum AccountEvent {
    Opened(#[routing_key] u64),
    Frozen,
    Closed(#[routing_key] u64),
}

fn main() {
    for evt in [AccountEvent::Opened(1), AccountEvent::Frozen, AccountEvent::Closed(2)] {
        match evt {
            AccountEvent::Opened(n) | AccountEvent::Closed(n) => {
                let _ = n;
            }
            AccountEvent::Frozen => {}
        }
    }
}
