//! Flex Containers: per-container layout context
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//! Spec: <https://www.w3.org/TR/css-align-3/#gaps>

use core::ops::Range;
use log::{debug, error};
use std::collections::TryReserveError;

use crate::chapter6::{FlexItem, count_flex_items};
use crate::chapter7::{Axes, resolve_axes};
use crate::error::FlexLayoutError;
use css_box::{FlexWrap, Gap, LayoutBox, SizeConstraints, UnitResolver};

/// One flex line: a contiguous run of items in the context's item array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlexLine {
    pub first: usize,
    pub count: usize,
    /// Items that take up space on the line (not out-of-flow).
    pub in_flow_count: usize,
    /// Sum of the hypothetical outer main sizes plus inter-item gaps.
    pub main_size: i32,
    pub cross_size: i32,
    /// Sum of resolved outer main sizes plus inter-item gaps.
    pub used_main_size: i32,
    pub main_auto_margin_count: usize,
    /// Offset of the line from the container's cross-start content edge.
    pub pos: i32,
    pub frozen: usize,
}

impl FlexLine {
    pub const fn range(&self) -> Range<usize> {
        self.first..self.first + self.count
    }
}

/// Total gap space between `count` in-flow items.
#[inline]
pub fn gap_total(count: usize, gap: i32) -> i32 {
    if count > 1 { (count as i32 - 1) * gap } else { 0 }
}

/// State for laying out one flex container.
///
/// Borrows the container exclusively for the duration of the layout call;
/// items refer to children by index.
pub struct FlexContext<'tree> {
    pub container: &'tree mut LayoutBox,
    pub axes: Axes,
    pub wrap: FlexWrap,
    /// Gap between items along the main axis (px).
    pub main_gap: i32,
    /// Gap between lines along the cross axis (px).
    pub cross_gap: i32,
    /// Largest line main size.
    pub main_size: i32,
    /// Sum of line cross sizes and the gaps between lines.
    pub cross_size: i32,
    /// Width available to items: the container's content width.
    pub available_width: i32,
    pub available_main: Option<i32>,
    pub available_cross: Option<i32>,
    /// The container's own min/max constraints.
    pub constraints: SizeConstraints,
    pub items: Vec<FlexItem>,
    pub lines: Vec<FlexLine>,
}

impl<'tree> FlexContext<'tree> {
    /// Resolve the container's own dimensions and set up an empty context.
    ///
    /// A width or height already present on entry was imposed by the parent
    /// (for example by stretching) and is kept. An `auto` width fills
    /// `available_width` less the container's own margins, borders and padding.
    ///
    /// # Errors
    /// Returns [`FlexLayoutError::OutOfMemory`] when the item or line arrays
    /// cannot be allocated.
    pub fn new<U: UnitResolver + ?Sized>(
        container: &'tree mut LayoutBox,
        available_width: i32,
        units: &U,
    ) -> Result<Self, FlexLayoutError> {
        let entry_width = container.width;
        let entry_height = container.height;
        let constraints = container.resolve_dimensions(units, available_width);

        let fill = available_width - container.delta_outer_width();
        let content_width = entry_width
            .unwrap_or_else(|| constraints.clamp_width(container.width.unwrap_or(fill)).max(0));
        container.width = Some(content_width);
        container.height =
            entry_height.or_else(|| container.height.map(|height| constraints.clamp_height(height)));
        if let Some(height) = entry_height {
            debug!(
                target: "css::flexbox",
                "[FLEX] preserved definite height {height} from parent"
            );
        }

        let axes = resolve_axes(container.style.flex_direction);
        let (main_gap, cross_gap) = resolve_gaps(container, axes, units);
        let resolved_height = container
            .height
            .or_else(|| constraints.min_height.filter(|min| *min > 0));
        let (available_main, available_cross) = if axes.horizontal {
            (Some(content_width), resolved_height)
        } else {
            (resolved_height, Some(content_width))
        };

        let mut items = Vec::new();
        items
            .try_reserve_exact(count_flex_items(&container.children))
            .map_err(|source| out_of_memory("items", source))?;
        let mut lines = Vec::new();
        lines
            .try_reserve(1)
            .map_err(|source| out_of_memory("lines", source))?;

        debug!(
            target: "css::flexbox",
            "[FLEX] context: horizontal={} reversed={} wrap={:?} available_main={:?} available_cross={:?} gaps=({}, {})",
            axes.horizontal,
            axes.main_reversed,
            container.style.flex_wrap,
            available_main,
            available_cross,
            main_gap,
            cross_gap
        );

        Ok(Self {
            wrap: container.style.flex_wrap,
            container,
            axes,
            main_gap,
            cross_gap,
            main_size: 0,
            cross_size: 0,
            available_width: content_width,
            available_main,
            available_cross,
            constraints,
            items,
            lines,
        })
    }

    /// Append a line, growing the line array fallibly.
    ///
    /// # Errors
    /// Returns [`FlexLayoutError::OutOfMemory`] when the array cannot grow.
    pub fn push_line(&mut self, line: FlexLine) -> Result<usize, FlexLayoutError> {
        self.lines
            .try_reserve(1)
            .map_err(|source| out_of_memory("lines", source))?;
        self.lines.push(line);
        Ok(self.lines.len() - 1)
    }

    /// Give an `auto` container height its content size and apply min/max-height.
    pub fn finish(&mut self) {
        let content = if self.axes.horizontal {
            self.cross_size
        } else {
            self.main_size
        };
        let height = self.container.height.unwrap_or(content);
        self.container.height = Some(self.constraints.clamp_height(height).max(0));
        debug!(
            target: "css::flexbox",
            "[FLEX] container resolved: w={:?} h={:?} lines={}",
            self.container.width,
            self.container.height,
            self.lines.len()
        );
    }
}

fn out_of_memory(what: &'static str, source: TryReserveError) -> FlexLayoutError {
    error!(target: "css::flexbox", "[FLEX] allocation failed for {what}: {source}");
    FlexLayoutError::OutOfMemory { what, source }
}

/// Resolve `column-gap`/`row-gap` and map them onto the main and cross axes.
///
/// Row containers use `column-gap` between items and `row-gap` between lines;
/// column containers swap them. Percentages resolve against the content width
/// (`column-gap`) or a definite height (`row-gap`); `normal` is zero.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#item-margins>
pub fn resolve_gaps<U: UnitResolver + ?Sized>(container: &LayoutBox, axes: Axes, units: &U) -> (i32, i32) {
    let column_gap = resolve_gap(container, container.style.column_gap, container.width, units);
    let row_gap = resolve_gap(container, container.style.row_gap, container.height, units);
    if axes.horizontal {
        (column_gap, row_gap)
    } else {
        (row_gap, column_gap)
    }
}

/// Resolve one gap value to whole pixels; indefinite percentages are zero.
pub fn resolve_gap<U: UnitResolver + ?Sized>(
    container: &LayoutBox,
    gap: Gap,
    reference: Option<i32>,
    units: &U,
) -> i32 {
    match gap {
        Gap::Normal => 0,
        Gap::Length(length) => units
            .resolve_length(&container.style, length, reference)
            .unwrap_or(0)
            .max(0),
    }
}
