//! Boxes as seen by layout: resolved edges, used sizes and position.

use crate::style::{BoxSizing, ComputedStyle, MaxSize, Side, Sides, Size};
use crate::units::UnitResolver;

/// Marker for a `max_content_width` the intrinsic sizing pass did not measure.
pub const UNKNOWN_MAX_WIDTH: i32 = i32::MAX;

/// Formatting context a box establishes for its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxKind {
    #[default]
    Block,
    Table,
    Flex,
    Grid,
}

/// A used margin; `auto` stays symbolic until free space is distributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginValue {
    Auto,
    Px(i32),
}

impl Default for MarginValue {
    fn default() -> Self {
        Self::Px(0)
    }
}

impl MarginValue {
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Pixel value, with `auto` counting as zero.
    pub const fn px_or_zero(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Px(px) => px,
        }
    }
}

/// Content-box min/max constraints. `None` min means `auto`, `None` max means `none`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeConstraints {
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
}

impl SizeConstraints {
    /// Clamp a content-box width; `max` is applied before `min`.
    pub fn clamp_width(&self, width: i32) -> i32 {
        clamp_min_max(width, self.min_width, self.max_width)
    }

    /// Clamp a content-box height; `max` is applied before `min`.
    pub fn clamp_height(&self, height: i32) -> i32 {
        clamp_min_max(height, self.min_height, self.max_height)
    }
}

fn clamp_min_max(value: i32, min: Option<i32>, max: Option<i32>) -> i32 {
    let capped = max.map_or(value, |limit| value.min(limit));
    min.map_or(capped, |floor| capped.max(floor))
}

/// A box in the layout tree.
///
/// `x`/`y` locate the padding edge relative to the parent's padding edge.
/// `width`/`height` are content-box sizes, `None` while still `auto`.
/// `min_content_width`/`max_content_width` are outer (margin-box) widths
/// filled in by the intrinsic sizing pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub kind: BoxKind,
    pub style: ComputedStyle,
    /// Anonymous boxes generated for `::before`/`::after` style content.
    pub generated: bool,
    pub x: i32,
    pub y: i32,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_content_width: i32,
    pub max_content_width: i32,
    pub margin: Sides<MarginValue>,
    pub padding: Sides<i32>,
    pub border: Sides<i32>,
    pub children: Vec<Self>,
}

impl LayoutBox {
    pub fn new(kind: BoxKind, style: ComputedStyle) -> Self {
        Self {
            kind,
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    pub const fn is_out_of_flow(&self) -> bool {
        self.style.is_out_of_flow()
    }

    /// Margin on `side`, zero when `auto`.
    pub const fn non_auto_margin(&self, side: Side) -> i32 {
        self.margin.get(side).px_or_zero()
    }

    /// Horizontal margins, borders and padding; `auto` margins count as zero.
    pub const fn delta_outer_width(&self) -> i32 {
        self.non_auto_margin(Side::Left)
            + self.non_auto_margin(Side::Right)
            + self.padding.left
            + self.padding.right
            + self.border.left
            + self.border.right
    }

    /// Vertical margins, borders and padding; `auto` margins count as zero.
    pub const fn delta_outer_height(&self) -> i32 {
        self.non_auto_margin(Side::Top)
            + self.non_auto_margin(Side::Bottom)
            + self.padding.top
            + self.padding.bottom
            + self.border.top
            + self.border.bottom
    }

    /// Margin-box height, treating an `auto` height as zero.
    pub fn outer_height(&self) -> i32 {
        self.height.unwrap_or(0) + self.delta_outer_height()
    }

    /// Margin-box width, treating an `auto` width as zero.
    pub fn outer_width(&self) -> i32 {
        self.width.unwrap_or(0) + self.delta_outer_width()
    }

    /// Height of the in-flow content, measured to the lowest child margin edge.
    pub fn content_extent_height(&self) -> i32 {
        self.children
            .iter()
            .filter(|child| !child.is_out_of_flow())
            .map(|child| {
                child.y
                    + child.padding.top
                    + child.height.unwrap_or(0)
                    + child.padding.bottom
                    + child.border.bottom
                    + child.non_auto_margin(Side::Bottom)
            })
            .max()
            .map_or(0, |bottom| (bottom - self.padding.top).max(0))
    }

    /// Resolve margins, padding, borders, `width`/`height` and min/max
    /// constraints from style.
    ///
    /// Horizontal percentages (and, per CSS, vertical margins and padding)
    /// resolve against `available_width`. Percentage heights have no definite
    /// containing block height here and resolve to `auto`. Sizes are
    /// converted to content-box sizes honouring `box-sizing`.
    pub fn resolve_dimensions<U: UnitResolver + ?Sized>(
        &mut self,
        units: &U,
        available_width: i32,
    ) -> SizeConstraints {
        self.resolve_edges(units, available_width);

        let horizontal_edges = self.padding.left + self.padding.right + self.border.left + self.border.right;
        let vertical_edges = self.padding.top + self.padding.bottom + self.border.top + self.border.bottom;
        let width_reference = Some(available_width);

        self.width = self.resolve_size(units, self.style.width, width_reference, horizontal_edges);
        self.height = self.resolve_size(units, self.style.height, None, vertical_edges);

        SizeConstraints {
            min_width: self.resolve_size(units, self.style.min_width, width_reference, horizontal_edges),
            max_width: self.resolve_max(units, self.style.max_width, width_reference, horizontal_edges),
            min_height: self.resolve_size(units, self.style.min_height, None, vertical_edges),
            max_height: self.resolve_max(units, self.style.max_height, None, vertical_edges),
        }
    }

    /// Resolve used margins, padding and borders from style.
    pub fn resolve_edges<U: UnitResolver + ?Sized>(&mut self, units: &U, available_width: i32) {
        let style = &self.style;
        let reference = Some(available_width);
        self.margin = style.margin.map(|margin| match margin {
            Size::Auto => MarginValue::Auto,
            Size::Length(length) => {
                MarginValue::Px(units.resolve_length(style, length, reference).unwrap_or(0))
            }
        });
        self.padding = style
            .padding
            .map(|padding| units.resolve_length(style, padding, reference).unwrap_or(0).max(0));
        self.border = style.border_width.map(|border| border.max(0.0).round() as i32);
    }

    fn resolve_size<U: UnitResolver + ?Sized>(
        &self,
        units: &U,
        size: Size,
        reference: Option<i32>,
        edges: i32,
    ) -> Option<i32> {
        match size {
            Size::Auto => None,
            Size::Length(length) => units
                .resolve_length(&self.style, length, reference)
                .map(|px| self.to_content_box(px, edges)),
        }
    }

    fn resolve_max<U: UnitResolver + ?Sized>(
        &self,
        units: &U,
        size: MaxSize,
        reference: Option<i32>,
        edges: i32,
    ) -> Option<i32> {
        match size {
            MaxSize::None => None,
            MaxSize::Length(length) => units
                .resolve_length(&self.style, length, reference)
                .map(|px| self.to_content_box(px, edges)),
        }
    }

    /// Convert a specified size to a content-box size.
    pub fn to_content_box(&self, specified: i32, edges: i32) -> i32 {
        match self.style.box_sizing {
            BoxSizing::ContentBox => specified.max(0),
            BoxSizing::BorderBox => (specified - edges).max(0),
        }
    }
}
