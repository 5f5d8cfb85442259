use surge_format::RoutingKey;
use surge_macros::surge_event;

#[surge_event(strict)]
struct Opened {
    #[routing_key]
    account_number: u64,
}

fn main() {
    let evt = Opened { account_number: 1 };
    let _ = evt.routing_key();
}
