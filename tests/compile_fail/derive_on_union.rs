//! Test derive on a union.

use enum_reflect::Enumeration;

#[derive(Enumeration)]
union Bits {
    word: u32,
    float: f32,
}

fn main() {
    let bits = Bits { word: 1 };
    let _ = unsafe { (bits.word, bits.float) };
}
