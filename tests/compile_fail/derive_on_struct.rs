//! Test derive on a struct.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
struct Marker;

fn main() {
    let _ = Marker;
}
