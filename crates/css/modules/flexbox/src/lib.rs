//! CSS Flexible Box Layout Module Level 1: Flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

// Chapter modules follow the section numbering of CSS Flexbox Level 1.
// §4: Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// §5: Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// §6: Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// §7: Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// §8: Flexibility and auto margins
/// Late auto-margin redistribution for column containers.
#[path = "8_auto_margins/mod.rs"]
mod chapter8;
// §9: Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub mod error;

pub use chapter4::{
    LayoutEnvironment, establishes_flex_formatting_context, layout_flex, layout_flex_item,
};
pub use chapter5::{FlexContext, FlexLine, gap_total};
pub use chapter6::{BasisKind, FlexItem, MinSize, Violation, count_flex_items, is_flex_item};
pub use chapter7::{Axes, order_key, resolve_axes, sort_items_by_order_stable};
pub use chapter8::redistribute_auto_margins_vertical;
pub use chapter9::{
    JustifyPlan, collect_items_into_lines, justify_plan, resolve_flexible_lengths,
};
pub use error::FlexLayoutError;
