//! Flex Items: identification and per-item layout state
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use css_box::{Fixed, LayoutBox};

/// How an item's flex basis was specified.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BasisKind {
    /// `flex-basis: auto`; uses the specified main size when there is one.
    #[default]
    Auto,
    /// `flex-basis: content`.
    Content,
    /// An explicit length, percentage or `calc()` sum.
    Length,
}

/// Specified minimum main size.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MinSize {
    /// `min-width`/`min-height: auto`, replaced by the automatic minimum.
    #[default]
    Automatic,
    /// An explicit content-box minimum, possibly zero.
    Explicit(i32),
}

/// Constraint an item's target main size was clamped to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Violation {
    #[default]
    None,
    /// Raised to `min_main`.
    Min,
    /// Lowered to `max_main`.
    Max,
}

/// Layout state for one flex item.
///
/// Main sizes (`base_size`, `target_main_size`, `main_size`, `min_main`,
/// `max_main`) are outer sizes: margins, borders and padding included.
/// Cross constraints are content-box sizes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlexItem {
    /// Index of the box in the container's `children`.
    pub child: usize,
    /// Position among the container's flex items in document order.
    pub index: usize,
    pub order: i32,
    pub basis: BasisKind,
    /// Basis resolved to pixels, `None` when it fell back to content sizing.
    pub basis_px: Option<i32>,
    pub grow: Fixed,
    pub shrink: Fixed,
    pub min_main_spec: MinSize,
    pub min_main: i32,
    pub max_main: Option<i32>,
    pub min_cross: i32,
    pub max_cross: Option<i32>,
    pub base_size: i32,
    pub target_main_size: i32,
    pub main_size: i32,
    pub line: usize,
    pub frozen: bool,
    /// Which constraint the last clamping pass hit.
    pub violation: Violation,
    pub out_of_flow: bool,
}

impl FlexItem {
    /// The relevant flex factor for the current resolution direction.
    pub const fn factor(&self, grow: bool) -> Fixed {
        if grow { self.grow } else { self.shrink }
    }

    /// Clamp an outer main size to this item's min/max constraints.
    pub fn clamp_main(&self, size: i32) -> i32 {
        let capped = self.max_main.map_or(size, |max| size.min(max));
        capped.max(self.min_main)
    }
}

/// Returns true when the child participates in flex layout as an item.
///
/// Generated boxes are skipped. Out-of-flow children are still items; they
/// are frozen at their hypothetical size and take no space on their line.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub const fn is_flex_item(child: &LayoutBox) -> bool {
    !child.generated
}

/// Count the children that will become flex items.
#[inline]
pub fn count_flex_items(children: &[LayoutBox]) -> usize {
    children.iter().filter(|child| is_flex_item(child)).count()
}
