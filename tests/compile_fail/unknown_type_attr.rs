//! Test unknown enum_reflect attribute.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
#[enum_reflect(bogus)]
enum Mode {
    On,
}

fn main() {
    let _ = Mode::On;
}
