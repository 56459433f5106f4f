//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use crate::chapter6::FlexItem;
use css_box::{FlexDirection, LayoutBox, Side};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal (row and row-reverse).
    pub horizontal: bool,
    /// True when main axis is reversed (row-reverse or column-reverse)
    pub main_reversed: bool,
}

/// Resolve main/cross axes and direction from `flex-direction`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    match direction {
        FlexDirection::Row => Axes {
            horizontal: true,
            main_reversed: false,
        },
        FlexDirection::RowReverse => Axes {
            horizontal: true,
            main_reversed: true,
        },
        FlexDirection::Column => Axes {
            horizontal: false,
            main_reversed: false,
        },
        FlexDirection::ColumnReverse => Axes {
            horizontal: false,
            main_reversed: true,
        },
    }
}

impl Axes {
    /// Logical main-start side, honouring reversal.
    pub const fn main_start(self) -> Side {
        match (self.horizontal, self.main_reversed) {
            (true, false) => Side::Left,
            (true, true) => Side::Right,
            (false, false) => Side::Top,
            (false, true) => Side::Bottom,
        }
    }

    /// Logical main-end side, honouring reversal.
    pub const fn main_end(self) -> Side {
        match (self.horizontal, self.main_reversed) {
            (true, false) => Side::Right,
            (true, true) => Side::Left,
            (false, false) => Side::Bottom,
            (false, true) => Side::Top,
        }
    }

    /// Physical side where main-axis coordinates start (left or top).
    pub const fn physical_main_start(self) -> Side {
        if self.horizontal { Side::Left } else { Side::Top }
    }

    /// Physical side where main-axis coordinates end (right or bottom).
    pub const fn physical_main_end(self) -> Side {
        if self.horizontal { Side::Right } else { Side::Bottom }
    }

    /// Cross-start side (top for rows, left for columns).
    pub const fn cross_start(self) -> Side {
        if self.horizontal { Side::Top } else { Side::Left }
    }

    /// Cross-end side (bottom for rows, right for columns).
    pub const fn cross_end(self) -> Side {
        if self.horizontal { Side::Bottom } else { Side::Right }
    }

    /// Content-box main size of `node`, zero while `auto`.
    pub fn main_size_of(self, node: &LayoutBox) -> i32 {
        let size = if self.horizontal { node.width } else { node.height };
        size.unwrap_or(0)
    }

    /// Content-box cross size of `node`, `None` while `auto`.
    pub const fn cross_size_of(self, node: &LayoutBox) -> Option<i32> {
        if self.horizontal { node.height } else { node.width }
    }

    /// Margins, borders and padding of `node` along the main axis.
    pub const fn delta_outer_main(self, node: &LayoutBox) -> i32 {
        if self.horizontal {
            node.delta_outer_width()
        } else {
            node.delta_outer_height()
        }
    }

    /// Margins, borders and padding of `node` along the cross axis.
    pub const fn delta_outer_cross(self, node: &LayoutBox) -> i32 {
        if self.horizontal {
            node.delta_outer_height()
        } else {
            node.delta_outer_width()
        }
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so sorting by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Sort items by `order`, keeping document order for ties.
///
/// The key carries the original index, so the result does not depend on the
/// stability of the underlying sort.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(items: &mut [FlexItem]) {
    items.sort_unstable_by_key(|item| order_key(item.order, item.index));
}
