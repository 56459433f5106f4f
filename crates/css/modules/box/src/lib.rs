//! CSS Box Model Module Level 3: Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Also hosts the computed style subset and the box tree shape shared by the
//! layout modules, plus the fixed-point type flex factors are computed in.

pub mod fixed;
pub mod layout_box;
pub mod style;
pub mod units;

pub use fixed::Fixed;
pub use layout_box::{BoxKind, LayoutBox, MarginValue, SizeConstraints, UNKNOWN_MAX_WIDTH};
pub use style::{
    AlignItems, AlignSelf, BoxSizing, CalcSum, ComputedStyle, FlexBasis, FlexDirection, FlexWrap, Gap,
    JustifyContent, LengthPercentage, MaxSize, Overflow, Position, Side, Sides, Size,
};
pub use units::{UnitContext, UnitResolver};
