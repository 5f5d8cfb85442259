use surge_macros::surge_event;

#[surge_event]
struct Heartbeat;

fn main() {
    let _ = format!("{:?}", Heartbeat);
}
