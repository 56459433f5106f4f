//! Flex layout algorithm: item sizing, line collection, flexible length
//! resolution and main/cross axis placement.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

pub mod cross_axis;
pub mod flex_algorithm;
pub mod item_sizing;
pub mod line_breaking;
pub mod main_axis;

pub use cross_axis::place_lines;
pub use flex_algorithm::{CumulativeShare, resolve_flexible_lengths};
pub use item_sizing::populate_items;
pub use line_breaking::build_line;
pub use main_axis::{JustifyPlan, justify_plan, place_line_items_main};

use log::debug;

use crate::chapter4::LayoutEnvironment;
use crate::chapter5::{FlexContext, gap_total};
use crate::error::FlexLayoutError;

/// Break items into lines, resolve each line's flexible lengths and place
/// its items along the main axis.
///
/// Afterwards the context's `cross_size` holds the sum of line cross sizes
/// plus the gaps between lines, and `main_size` the largest line main size.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>
///
/// # Errors
/// Returns [`FlexLayoutError`] when the line array cannot grow or an item's
/// layout fails.
pub fn collect_items_into_lines(
    ctx: &mut FlexContext<'_>,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let mut position = 0;
    while position < ctx.items.len() {
        let line_index = build_line(ctx, position)?;
        resolve_line(ctx, line_index);
        place_line_items_main(ctx, line_index, env)?;

        let Some(line) = ctx.lines.get(line_index) else {
            break;
        };
        ctx.cross_size += line.cross_size;
        ctx.main_size = ctx.main_size.max(line.main_size);
        debug!(
            target: "css::flexbox::lines",
            "[FLEX-LINES] line {line_index}: items {}..{} main={} used={} cross={}",
            line.first,
            line.first + line.count,
            line.main_size,
            line.used_main_size,
            line.cross_size
        );
        position += line.count.max(1);
    }

    ctx.cross_size += gap_total(ctx.lines.len(), ctx.cross_gap);

    #[cfg(feature = "layout_diagnostics")]
    trace_items(ctx);

    Ok(())
}

/// Resolve flexible lengths for one line of the context.
pub fn resolve_line(ctx: &mut FlexContext<'_>, line_index: usize) {
    let FlexContext {
        items,
        lines,
        available_main,
        main_gap,
        ..
    } = ctx;
    let Some(line) = lines.get_mut(line_index) else {
        return;
    };
    let Some(line_items) = items.get_mut(line.range()) else {
        return;
    };
    resolve_flexible_lengths(line, line_items, *available_main, *main_gap);
}

/// Per-item trace records for debugging layout differences.
#[cfg(feature = "layout_diagnostics")]
fn trace_items(ctx: &FlexContext<'_>) {
    use log::trace;

    for item in &ctx.items {
        trace!(
            target: "css::flexbox::items",
            "[FLEX-DIAG] child={} order={} basis={:?}/{:?} base={} min={} max={:?} target={} line={} grow={} shrink={}",
            item.child,
            item.order,
            item.basis,
            item.basis_px,
            item.base_size,
            item.min_main,
            item.max_main,
            item.target_main_size,
            item.line,
            item.grow,
            item.shrink
        );
    }
}

#[cfg(test)]
mod tests;
