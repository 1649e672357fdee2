//! Label types accepted as classification targets.

use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;

/// What a single label value looks like to target validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Integer,
    Boolean,
    Text,
    /// A float with a fractional part, or a non-finite float.
    Continuous,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Integer => "integer",
            LabelKind::Boolean => "boolean",
            LabelKind::Text => "text",
            LabelKind::Continuous => "continuous",
        }
    }
}

/// A value usable as a class label.
///
/// `Ord` is required so `classes` has a stable sorted order. Floats are
/// accepted through `OrderedFloat`; they count as discrete only when they
/// hold an integral value.
pub trait ClassLabel: Clone + Eq + Hash + Ord + Debug {
    fn kind(&self) -> LabelKind;
}

macro_rules! integer_labels {
    ($($t:ty),*) => {
        $(
            impl ClassLabel for $t {
                fn kind(&self) -> LabelKind {
                    LabelKind::Integer
                }
            }
        )*
    };
}

integer_labels!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ClassLabel for bool {
    fn kind(&self) -> LabelKind {
        LabelKind::Boolean
    }
}

impl ClassLabel for char {
    fn kind(&self) -> LabelKind {
        LabelKind::Text
    }
}

impl ClassLabel for String {
    fn kind(&self) -> LabelKind {
        LabelKind::Text
    }
}

impl ClassLabel for &str {
    fn kind(&self) -> LabelKind {
        LabelKind::Text
    }
}

impl ClassLabel for OrderedFloat<f64> {
    fn kind(&self) -> LabelKind {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            LabelKind::Integer
        } else {
            LabelKind::Continuous
        }
    }
}

impl ClassLabel for OrderedFloat<f32> {
    fn kind(&self) -> LabelKind {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            LabelKind::Integer
        } else {
            LabelKind::Continuous
        }
    }
}

/// A label whose type is only known at runtime, as with labels coming from Python.
///
/// Variants order as `Int < Float < Str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MixedLabel {
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
}

impl ClassLabel for MixedLabel {
    fn kind(&self) -> LabelKind {
        match self {
            MixedLabel::Int(_) => LabelKind::Integer,
            MixedLabel::Float(v) => v.kind(),
            MixedLabel::Str(_) => LabelKind::Text,
        }
    }
}
