//! Test variants carrying data.

use enum_reflect::Enumeration;

#[derive(Clone, Copy, Enumeration)]
enum Shape {
    Circle(u32),
}

fn main() {
    let Shape::Circle(radius) = Shape::Circle(1);
    let _ = radius;
}
