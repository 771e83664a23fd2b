//! Test unsupported 128-bit unsigned representation.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
#[repr(u128)]
enum Huge {
    Big = 1,
}

fn main() {
    let _ = Huge::Big;
}
