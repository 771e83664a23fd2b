//! Test derive on an enum with type parameters.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
enum Holder<T> {
    Empty,
    Full(T),
}

fn main() {
    let _ = (Holder::<u8>::Empty, Holder::Full(1u8));
}
