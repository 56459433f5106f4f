//! Collect flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use crate::chapter5::{FlexContext, FlexLine};
use crate::error::FlexLayoutError;
use css_box::FlexWrap;

/// Start a line at `first` and add items until the next one does not fit.
///
/// An item moves to a new line only when wrapping is enabled, the main size
/// is definite, the line is non-empty and the item (plus one gap) would
/// overflow. Zero-sized and out-of-flow items never wrap; out-of-flow items
/// join the line without taking space.
///
/// # Errors
/// Returns [`FlexLayoutError::OutOfMemory`] when the line array cannot grow.
pub fn build_line(ctx: &mut FlexContext<'_>, first: usize) -> Result<usize, FlexLayoutError> {
    let line_index = ctx.lines.len();
    let wraps = ctx.wrap != FlexWrap::NoWrap;
    let start_side = ctx.axes.main_start();
    let end_side = ctx.axes.main_end();
    let mut line = FlexLine {
        first,
        ..FlexLine::default()
    };

    for item in ctx.items.iter_mut().skip(first) {
        let size = item.main_size;
        let gap = if line.in_flow_count > 0 { ctx.main_gap } else { 0 };
        let overflows = ctx
            .available_main
            .is_some_and(|available| line.main_size + gap + size > available);
        if wraps && line.count > 0 && !item.out_of_flow && size != 0 && overflows {
            break;
        }

        if !item.out_of_flow {
            line.main_size += gap + size;
            line.in_flow_count += 1;
            if let Some(child) = ctx.container.children.get(item.child) {
                line.main_auto_margin_count += usize::from(child.margin.get(start_side).is_auto())
                    + usize::from(child.margin.get(end_side).is_auto());
            }
        }
        item.line = line_index;
        line.count += 1;
    }

    ctx.push_line(line)
}
