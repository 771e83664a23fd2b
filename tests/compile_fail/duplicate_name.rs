//! Test two enumerators renamed to the same name.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
enum Level {
    Low,
    #[enum_reflect(rename = "Low")]
    Minimum,
}

fn main() {
    let _ = (Level::Low, Level::Minimum);
}
