//! Cross-axis placement: line positions, stretching and `align-self`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use log::debug;

use crate::chapter4::{LayoutEnvironment, layout_flex_item};
use crate::chapter5::{FlexContext, FlexLine};
use crate::chapter6::FlexItem;
use crate::chapter7::{Axes, resolve_axes};
use crate::chapter8::redistribute_auto_margins_vertical;
use crate::error::FlexLayoutError;
use css_box::{AlignItems, BoxKind, FlexWrap, LayoutBox, Size};

/// Container-wide inputs for aligning items within their lines.
#[derive(Copy, Clone, Debug)]
struct CrossInputs {
    axes: Axes,
    align_items: AlignItems,
    wrap_reverse: bool,
    /// Padding on the container's cross-start side.
    origin: i32,
}

/// Position every line along the cross axis, then stretch and align the
/// items within their line.
///
/// Definite extra cross space is shared between the lines before items are
/// aligned, so a single-line container with a definite cross size has one
/// line as large as its content box.
///
/// # Errors
/// Returns [`FlexLayoutError`] when re-laying out a stretched item fails.
pub fn place_lines(
    ctx: &mut FlexContext<'_>,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let FlexContext {
        container,
        items,
        lines,
        axes,
        wrap,
        cross_gap,
        cross_size,
        available_cross,
        ..
    } = ctx;
    let axes = *axes;
    let wrap_reverse = *wrap == FlexWrap::WrapReverse;

    distribute_line_space(lines, *available_cross, *cross_size, *cross_gap, wrap_reverse);

    let inputs = CrossInputs {
        axes,
        align_items: container.style.align_items,
        wrap_reverse,
        origin: container.padding.get(axes.cross_start()),
    };
    for line in lines.iter() {
        let Some(line_items) = items.get(line.range()) else {
            continue;
        };
        for item in line_items {
            let Some(child) = container.children.get_mut(item.child) else {
                continue;
            };
            align_item(child, item, line, inputs, env)?;
        }
    }
    Ok(())
}

/// Share definite extra cross space between lines and assign line offsets.
///
/// Leftover pixels go one each to the earliest lines. `wrap-reverse` stacks
/// lines from the cross-end edge.
fn distribute_line_space(
    lines: &mut [FlexLine],
    available_cross: Option<i32>,
    cross_size: i32,
    cross_gap: i32,
    wrap_reverse: bool,
) {
    let free = available_cross.map_or(0, |available| (available - cross_size).max(0));
    let line_count = i32::try_from(lines.len()).unwrap_or(i32::MAX).max(1);
    let share = free / line_count;
    let mut remainder = free % line_count;

    let mut pos = if wrap_reverse {
        available_cross.unwrap_or(cross_size)
    } else {
        0
    };
    for (index, line) in lines.iter_mut().enumerate() {
        let extra = share + i32::from(remainder > 0);
        remainder -= i32::from(remainder > 0);
        line.cross_size += extra;
        if wrap_reverse {
            pos -= line.cross_size;
            line.pos = pos;
            pos -= cross_gap;
        } else {
            line.pos = pos;
            pos += line.cross_size + cross_gap;
        }
        debug!(
            target: "css::flexbox::cross_axis",
            "[FLEX-CROSS] line {index}: pos={} cross={} extra={extra}",
            line.pos,
            line.cross_size
        );
    }
}

/// `align-self` resolved against the container, with start and end swapped
/// under `wrap-reverse`.
fn resolve_alignment(child: &LayoutBox, inputs: CrossInputs) -> AlignItems {
    let align = child.style.align_self.resolve(inputs.align_items);
    match (align, inputs.wrap_reverse) {
        (AlignItems::FlexStart, true) => AlignItems::FlexEnd,
        (AlignItems::FlexEnd, true) => AlignItems::FlexStart,
        (other, _) => other,
    }
}

fn align_item(
    child: &mut LayoutBox,
    item: &FlexItem,
    line: &FlexLine,
    inputs: CrossInputs,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let axes = inputs.axes;
    let start_side = axes.cross_start();
    let end_side = axes.cross_end();
    let start_auto = child.margin.get(start_side).is_auto();
    let end_auto = child.margin.get(end_side).is_auto();
    let align = resolve_alignment(child, inputs);

    let specified_cross = if axes.horizontal {
        child.style.height
    } else {
        child.style.width
    };
    if align == AlignItems::Stretch
        && specified_cross == Size::Auto
        && !item.out_of_flow
        && !start_auto
        && !end_auto
    {
        stretch_item(child, item, line.cross_size, axes, env)?;
    }

    let outer = axes.cross_size_of(child).unwrap_or(0) + axes.delta_outer_cross(child);
    let free = line.cross_size - outer;
    let offset = match (start_auto, end_auto) {
        (true, true) => free.max(0) / 2,
        (true, false) => free.max(0),
        (false, true) => 0,
        (false, false) => match align {
            AlignItems::FlexEnd => free,
            AlignItems::Center | AlignItems::Baseline => free / 2,
            // An item that could not stretch sits at the cross-start edge.
            AlignItems::Stretch if inputs.wrap_reverse => free,
            AlignItems::Stretch | AlignItems::FlexStart => 0,
        },
    };

    let pos = inputs.origin
        + line.pos
        + offset
        + child.non_auto_margin(start_side)
        + child.border.get(start_side);
    if axes.horizontal {
        child.y = pos;
    } else {
        child.x = pos;
    }

    debug!(
        target: "css::flexbox::cross_axis",
        "[FLEX-CROSS] child {}: align={align:?} offset={offset} pos={pos} size={:?}",
        item.child,
        axes.cross_size_of(child)
    );
    Ok(())
}

/// Stretch an item to fill its line and lay it out again at the new size.
///
/// A stretched column flex container gets its auto margins redistributed
/// against the new height right away.
fn stretch_item(
    child: &mut LayoutBox,
    item: &FlexItem,
    line_cross: i32,
    axes: Axes,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let target = line_cross - axes.delta_outer_cross(child);
    let target = item
        .max_cross
        .map_or(target, |max| target.min(max))
        .max(item.min_cross)
        .max(0);
    if axes.cross_size_of(child) == Some(target) {
        return Ok(());
    }

    if axes.horizontal {
        child.height = Some(target);
    } else {
        child.width = Some(target);
    }
    let width = child.width.unwrap_or(0);
    layout_flex_item(child, width, env)?;

    if child.kind == BoxKind::Flex && !resolve_axes(child.style.flex_direction).horizontal {
        redistribute_auto_margins_vertical(child, &*env);
    }
    Ok(())
}
