use surge_macros::surge_event;

#[surge_event]
struct Deposited {
    amount: i64,
}

fn main() {
    let evt = Deposited { amount: 1 };
    let _ = evt.clone() == evt;
    let _ = evt.amount;
}
