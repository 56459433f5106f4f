//! Main-axis placement: auto margins, `justify-content` and gaps.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-alignment>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>

use log::debug;

use crate::chapter4::{LayoutEnvironment, layout_flex_item};
use crate::chapter5::FlexContext;
use crate::chapter6::FlexItem;
use crate::chapter7::Axes;
use crate::error::FlexLayoutError;
use css_box::{JustifyContent, LayoutBox};

/// Integer spacing produced by `justify-content` for one line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JustifyPlan {
    /// Offset before the first item.
    pub leading: i32,
    /// Extra space added between adjacent items.
    pub between: i32,
    /// The first `between_remainder` inter-item spaces get one more pixel.
    pub between_remainder: i32,
}

/// Split `free` pixels of positive free space among `count` in-flow items.
///
/// Pixels that do not divide evenly go to the leading offset or to the
/// earliest inter-item spaces, so the plan always accounts for all of `free`.
pub fn justify_plan(justify: JustifyContent, free: i32, count: usize) -> JustifyPlan {
    let items = count as i32;
    match justify {
        JustifyContent::FlexStart => JustifyPlan {
            leading: 0,
            between: 0,
            between_remainder: 0,
        },
        JustifyContent::FlexEnd => JustifyPlan {
            leading: free,
            between: 0,
            between_remainder: 0,
        },
        JustifyContent::Center => JustifyPlan {
            leading: free - free / 2,
            between: 0,
            between_remainder: 0,
        },
        JustifyContent::SpaceBetween => {
            if items > 1 {
                JustifyPlan {
                    leading: 0,
                    between: free / (items - 1),
                    between_remainder: free % (items - 1),
                }
            } else {
                JustifyPlan {
                    leading: 0,
                    between: 0,
                    between_remainder: 0,
                }
            }
        }
        JustifyContent::SpaceAround => {
            if items > 0 {
                let share = free / items;
                JustifyPlan {
                    leading: share - share / 2,
                    between: share,
                    between_remainder: free % items,
                }
            } else {
                JustifyPlan {
                    leading: 0,
                    between: 0,
                    between_remainder: 0,
                }
            }
        }
        JustifyContent::SpaceEvenly => {
            let slots = items + 1;
            let share = free / slots;
            let remainder = free % slots;
            let leading_extra = i32::from(remainder > 0);
            JustifyPlan {
                leading: share + leading_extra,
                between: share,
                between_remainder: remainder - leading_extra,
            }
        }
    }
}

/// Position the items of one line along the main axis.
///
/// Row items receive their final width and are laid out here; an item whose
/// height is still `auto` afterwards gets its content height. Column items
/// receive their final height and are laid out again if it changed. The
/// line's cross size grows to the largest outer cross size of its items.
///
/// # Errors
/// Returns [`FlexLayoutError`] when an item's layout fails.
pub fn place_line_items_main(
    ctx: &mut FlexContext<'_>,
    line_index: usize,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let FlexContext {
        container,
        items,
        lines,
        axes,
        available_main,
        main_gap,
        ..
    } = ctx;
    let axes = *axes;
    let main_gap = *main_gap;
    let Some(line) = lines.get_mut(line_index) else {
        return Ok(());
    };
    let Some(line_items) = items.get(line.range()) else {
        return Ok(());
    };

    let content_main = available_main.unwrap_or(line.used_main_size);
    let free = (content_main - line.used_main_size).max(0);
    let auto_margins = i32::try_from(line.main_auto_margin_count).unwrap_or(i32::MAX);
    let (auto_share, mut auto_remainder, plan) = if free > 0 && auto_margins > 0 {
        (free / auto_margins, free % auto_margins, JustifyPlan::default())
    } else if free > 0 {
        let plan = justify_plan(container.style.justify_content, free, line.in_flow_count);
        (0, 0, plan)
    } else {
        (0, 0, JustifyPlan::default())
    };

    let start_side = axes.physical_main_start();
    let end_side = axes.physical_main_end();
    let padding_start = container.padding.get(start_side);
    let reversed = axes.main_reversed;
    let direction = if reversed { -1 } else { 1 };
    let mut main_pos = if reversed {
        padding_start + content_main - plan.leading
    } else {
        padding_start + plan.leading
    };

    debug!(
        target: "css::flexbox::main_axis",
        "[FLEX-MAIN] line {line_index}: free={free} auto_margins={auto_margins} plan={plan:?} reversed={reversed}"
    );

    let mut placed = 0;
    for item in line_items {
        let Some(child) = container.children.get_mut(item.child) else {
            continue;
        };
        apply_main_size(child, item, axes, env)?;

        let margin_start = child.non_auto_margin(start_side);
        let border_start = child.border.get(start_side);
        if item.out_of_flow {
            let pos = main_pos + margin_start + border_start;
            set_main_position(child, axes.horizontal, pos);
            continue;
        }

        let mut take_auto = |is_auto: bool| {
            if !is_auto {
                return 0;
            }
            let bonus = i32::from(auto_remainder > 0);
            auto_remainder -= bonus;
            auto_share + bonus
        };
        let pre = take_auto(child.margin.get(start_side).is_auto());
        let post = take_auto(child.margin.get(end_side).is_auto());
        let outer = pre + post + axes.main_size_of(child) + axes.delta_outer_main(child);

        if reversed {
            main_pos -= outer;
        }
        set_main_position(child, axes.horizontal, main_pos + margin_start + pre + border_start);
        if !reversed {
            main_pos += outer;
        }

        placed += 1;
        if placed < line.in_flow_count {
            let bonus = i32::from((placed as i32) <= plan.between_remainder);
            main_pos += direction * (plan.between + bonus + main_gap);
        }

        let cross = axes.cross_size_of(child).unwrap_or(0) + axes.delta_outer_cross(child);
        line.cross_size = line.cross_size.max(cross);
    }

    Ok(())
}

/// Give an item its resolved main size and lay it out at that size.
///
/// Row items are laid out at their final width; an `auto` height then
/// becomes the content height. Column items are only laid out again when
/// their height changed.
fn apply_main_size(
    child: &mut LayoutBox,
    item: &FlexItem,
    axes: Axes,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    if axes.horizontal {
        let width = (item.target_main_size - child.delta_outer_width()).max(0);
        child.width = Some(width);
        layout_flex_item(child, width, env)?;
        if child.height.is_none() {
            child.height = Some(child.content_extent_height());
        }
    } else {
        let height = (item.target_main_size - child.delta_outer_height()).max(0);
        if child.height != Some(height) {
            child.height = Some(height);
            let width = child.width.unwrap_or(0);
            layout_flex_item(child, width, env)?;
        }
    }
    Ok(())
}

#[inline]
fn set_main_position(child: &mut LayoutBox, horizontal: bool, pos: i32) {
    if horizontal {
        child.x = pos;
    } else {
        child.y = pos;
    }
}
