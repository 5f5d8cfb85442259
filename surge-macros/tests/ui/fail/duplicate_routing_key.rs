use surge_macros::surge_event;

#[surge_event]
struct Transferred {
    #[routing_key]
    from: u64,
    #[routing_key]
    to: u64,
}

fn main() {
    let evt = Transferred { from: 1, to: 2 };
    let _ = (evt.from, evt.to);
}
