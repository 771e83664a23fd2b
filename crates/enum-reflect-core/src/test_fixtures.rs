//! Hand-written `Enumeration` impls for unit tests.
//!
//! These mirror what `#[derive(Enumeration)]` emits, without depending on the
//! macro crate.

use crate::{EnumEntry, EnumTable, Enumeration, UNKNOWN_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LineType {
    None,
    Solid,
    Dashed,
    Dotted,
}

impl Enumeration for LineType {
    type Repr = u8;
    const TYPE_NAME: &'static str = "LineType";
    const QUALIFIED_NAME: &'static str = concat!(module_path!(), "::LineType");
    const UNKNOWN: &'static str = UNKNOWN_NAME;

    fn table() -> &'static EnumTable<Self> {
        static TABLE: EnumTable<LineType> = EnumTable::new(
            LineType::TYPE_NAME,
            LineType::QUALIFIED_NAME,
            LineType::UNKNOWN,
            &[
                EnumEntry::new("None", LineType::None),
                EnumEntry::new("Solid", LineType::Solid),
                EnumEntry::new("Dashed", LineType::Dashed),
                EnumEntry::new("Dotted", LineType::Dotted),
            ],
        );
        &TABLE
    }

    fn to_repr(self) -> u8 {
        self as u8
    }
}

/// Sparse, signed discriminants with a custom sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum Signal {
    Low = -1,
    High = 100,
}

impl Enumeration for Signal {
    type Repr = i16;
    const TYPE_NAME: &'static str = "Signal";
    const QUALIFIED_NAME: &'static str = concat!(module_path!(), "::Signal");
    const UNKNOWN: &'static str = "<off-scale>";

    fn table() -> &'static EnumTable<Self> {
        static TABLE: EnumTable<Signal> = EnumTable::new(
            Signal::TYPE_NAME,
            Signal::QUALIFIED_NAME,
            Signal::UNKNOWN,
            &[
                EnumEntry::new("Low", Signal::Low),
                EnumEntry::new("High", Signal::High),
            ],
        );
        &TABLE
    }

    fn to_repr(self) -> i16 {
        self as i16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empty {}

impl Enumeration for Empty {
    type Repr = isize;
    const TYPE_NAME: &'static str = "Empty";
    const QUALIFIED_NAME: &'static str = concat!(module_path!(), "::Empty");
    const UNKNOWN: &'static str = UNKNOWN_NAME;

    fn table() -> &'static EnumTable<Self> {
        static TABLE: EnumTable<Empty> = EnumTable::new(
            Empty::TYPE_NAME,
            Empty::QUALIFIED_NAME,
            Empty::UNKNOWN,
            &[],
        );
        &TABLE
    }

    fn to_repr(self) -> isize {
        match self {}
    }
}
