//! Vertical auto margins for column flex containers whose height became
//! definite after their own layout (for example when a parent stretched them).
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use log::{debug, warn};

use crate::chapter5::{gap_total, resolve_gaps};
use crate::chapter6::is_flex_item;
use crate::chapter7::{Axes, resolve_axes};
use crate::chapter9::CumulativeShare;
use css_box::{BoxKind, Fixed, LayoutBox, MaxSize, Side, UnitResolver};

/// `(order, child index)` of the children that take part in stacking.
type StackOrder = Vec<(i32, usize)>;

/// Hand a column container's slack to growable children and `auto` margins.
///
/// With a definite height, `extra = height - Σ outer child heights - gaps`.
/// Positive extra first grows children with a non-zero `flex-grow`, then is
/// split evenly over the `auto` top/bottom margins (leftover pixels to the
/// earliest margins) and the children are stacked again. Nested column flex
/// children are visited afterwards. Anything other than a column flex
/// container is left untouched.
pub fn redistribute_auto_margins_vertical<U: UnitResolver + ?Sized>(container: &mut LayoutBox, units: &U) {
    if container.kind != BoxKind::Flex {
        return;
    }
    let axes = resolve_axes(container.style.flex_direction);
    if axes.horizontal {
        return;
    }
    if let Some(height) = container.height {
        redistribute(container, height, axes, units);
    }
    for child in &mut container.children {
        redistribute_auto_margins_vertical(child, units);
    }
}

fn redistribute<U: UnitResolver + ?Sized>(container: &mut LayoutBox, height: i32, axes: Axes, units: &U) {
    let Some(order) = stacking_order(&container.children) else {
        return;
    };
    let (gap, _) = resolve_gaps(container, axes, units);

    let mut content = 0;
    let mut auto_margins = 0;
    for child in order.iter().filter_map(|(_, index)| container.children.get(*index)) {
        content += child.outer_height();
        auto_margins += usize::from(child.margin.top.is_auto()) + usize::from(child.margin.bottom.is_auto());
    }
    let gaps = gap_total(order.len(), gap);
    let mut extra = height - content - gaps;
    debug!(
        target: "css::flexbox::auto_margins",
        "[FLEX-AUTO-MARGIN] height={height} content={content} gaps={gaps} extra={extra} auto_margins={auto_margins}"
    );
    if extra <= 0 {
        return;
    }

    let grown = grow_children(&mut container.children, &order, extra, units);
    extra -= grown;
    if auto_margins == 0 && grown == 0 {
        return;
    }

    let count = i32::try_from(auto_margins).unwrap_or(i32::MAX);
    let (share, mut remainder) = if count > 0 {
        (extra / count, extra % count)
    } else {
        (0, 0)
    };
    let mut take_auto = |is_auto: bool| {
        if !is_auto {
            return 0;
        }
        let bonus = i32::from(remainder > 0);
        remainder -= bonus;
        share + bonus
    };

    let padding_top = container.padding.top;
    let mut pos = if axes.main_reversed {
        padding_top + height
    } else {
        padding_top
    };
    for (_, index) in &order {
        let Some(child) = container.children.get_mut(*index) else {
            continue;
        };
        let top = take_auto(child.margin.top.is_auto());
        let bottom = take_auto(child.margin.bottom.is_auto());
        let outer = top + bottom + child.outer_height();
        if axes.main_reversed {
            pos -= outer;
            child.y = pos + top + child.non_auto_margin(Side::Top) + child.border.top;
            pos -= gap;
        } else {
            child.y = pos + top + child.non_auto_margin(Side::Top) + child.border.top;
            pos += outer + gap;
        }
        debug!(
            target: "css::flexbox::auto_margins",
            "[FLEX-AUTO-MARGIN] child {index}: y={} height={:?} auto=({top}, {bottom})",
            child.y,
            child.height
        );
    }
}

/// In-flow flex item children sorted by `order`, then document order.
fn stacking_order(children: &[LayoutBox]) -> Option<StackOrder> {
    let mut order = StackOrder::new();
    if let Err(err) = order.try_reserve_exact(children.len()) {
        warn!(target: "css::flexbox::auto_margins", "[FLEX-AUTO-MARGIN] skipped: {err}");
        return None;
    }
    order.extend(
        children
            .iter()
            .enumerate()
            .filter(|(_, child)| is_flex_item(child) && !child.is_out_of_flow())
            .map(|(index, child)| (child.style.order, index)),
    );
    order.sort_unstable();
    Some(order)
}

/// Grow children by `flex-grow` share of `extra`; returns the pixels used.
fn grow_children<U: UnitResolver + ?Sized>(
    children: &mut [LayoutBox],
    order: &[(i32, usize)],
    extra: i32,
    units: &U,
) -> i32 {
    let grow_sum: i128 = order
        .iter()
        .filter_map(|(_, index)| children.get(*index))
        .map(|child| i128::from(grow_factor(child).raw()))
        .sum();
    if grow_sum == 0 {
        return 0;
    }
    let one = i128::from(Fixed::ONE.raw());
    let available = if grow_sum < one {
        i32::try_from(i128::from(extra) * grow_sum / one).unwrap_or(extra)
    } else {
        extra
    };

    let mut shares = CumulativeShare::new(available, grow_sum);
    let mut grown = 0;
    for (_, index) in order {
        let Some(child) = children.get_mut(*index) else {
            continue;
        };
        let factor = grow_factor(child);
        if factor.is_zero() {
            continue;
        }
        let current = child.height.unwrap_or(0);
        let wanted = current.saturating_add(shares.take(i128::from(factor.raw())));
        let height = max_height(child, units).map_or(wanted, |max| wanted.min(max)).max(current);
        grown += height - current;
        child.height = Some(height);
    }
    grown
}

fn grow_factor(child: &LayoutBox) -> Fixed {
    Fixed::from_f32(child.style.flex_grow.max(0.0))
}

/// Content-box `max-height`, if any.
fn max_height<U: UnitResolver + ?Sized>(child: &LayoutBox, units: &U) -> Option<i32> {
    match child.style.max_height {
        MaxSize::None => None,
        MaxSize::Length(length) => {
            let edges = child.padding.top + child.padding.bottom + child.border.top + child.border.bottom;
            units
                .resolve_length(&child.style, length, None)
                .map(|px| child.to_content_box(px, edges))
        }
    }
}
