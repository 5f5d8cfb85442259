use surge_macros::surge_event;

#[surge_event]
union Bits {
    raw: u32,
    float: f32,
}

fn main() {
    let bits = Bits { raw: 1 };
    let _ = unsafe { (bits.raw, bits.float) };
}
