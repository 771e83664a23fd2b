//! Test unknown enum_reflect attribute on a variant.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
enum Switch {
    #[enum_reflect(alias = "on")]
    On,
}

fn main() {
    let _ = Switch::On;
}
