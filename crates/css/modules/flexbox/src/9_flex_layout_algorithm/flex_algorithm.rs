//! Resolving flexible lengths.
//!
//! Distributes a line's free space among its items by grow or scaled shrink
//! factor, freezing items as they hit their min/max constraints. Factors are
//! 22.10 fixed point; shares come from cumulative quotients, so the fraction
//! of a pixel one item loses is carried to the next and the distributed sizes
//! always sum to the free space.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::debug;

use crate::chapter5::{FlexLine, gap_total};
use crate::chapter6::{FlexItem, Violation};
use css_box::Fixed;

/// Resolve `target_main_size` for every item of `line`.
///
/// `available_main` of `None` resolves against the line's own main size, so
/// nothing flexes. On return every item is frozen and
/// `line.used_main_size` holds the resolved sizes plus inter-item gaps.
pub fn resolve_flexible_lengths(
    line: &mut FlexLine,
    items: &mut [FlexItem],
    available_main: Option<i32>,
    main_gap: i32,
) {
    let gaps = gap_total(line.in_flow_count, main_gap);
    let available = available_main.unwrap_or(line.main_size).saturating_sub(gaps);
    let grow = line.main_size.saturating_sub(gaps) < available;
    line.used_main_size = 0;
    line.frozen = 0;

    // Size inflexible items and compute the initial free space.
    let mut initial_free_main = available;
    for item in items.iter_mut() {
        item.frozen = false;
        item.violation = Violation::None;
        item.target_main_size = item.base_size;
        if item.out_of_flow {
            item.target_main_size = item.main_size;
            freeze(line, item);
            continue;
        }
        let inflexible = if grow {
            item.grow.is_zero() || item.base_size > item.main_size
        } else {
            item.shrink.is_zero() || item.base_size < item.main_size
        };
        if inflexible {
            item.target_main_size = item.main_size;
            freeze(line, item);
        }
        initial_free_main = initial_free_main.saturating_sub(if item.frozen {
            item.target_main_size
        } else {
            item.base_size
        });
    }

    debug!(
        target: "css::flexbox::resolve",
        "[FLEX-RESOLVE] line items={} available={} grow={} initial_free={}",
        items.len(),
        available,
        grow,
        initial_free_main
    );

    for _ in 0..=items.len() {
        if line.frozen >= items.len() {
            break;
        }
        let (remaining_free_main, factor_sum) =
            remaining_free_main(items, initial_free_main, available, grow);
        if remaining_free_main != 0 {
            distribute_free_main(line, items, factor_sum, remaining_free_main, grow);
        }
        let total_violation = clamp_violations(items);
        for item in items.iter_mut().filter(|item| !item.frozen) {
            if total_violation == 0
                || (total_violation > 0 && item.violation == Violation::Min)
                || (total_violation < 0 && item.violation == Violation::Max)
            {
                freeze(line, item);
            }
        }
    }

    for item in items.iter_mut().filter(|item| !item.frozen) {
        freeze(line, item);
    }
    line.used_main_size = line.used_main_size.saturating_add(gaps);
}

/// Mark `item` final and add its size to the line's used main size.
#[inline]
fn freeze(line: &mut FlexLine, item: &mut FlexItem) {
    item.frozen = true;
    line.frozen += 1;
    if !item.out_of_flow {
        line.used_main_size = line.used_main_size.saturating_add(item.target_main_size);
    }
}

/// Free space left after frozen targets and unfrozen bases, plus the sum of
/// unfrozen flex factors in raw fixed-point units. A factor sum below one
/// limits the free space to that fraction of the initial free space.
///
/// The sum is exact: factors are added as wide integers, never saturated.
pub fn remaining_free_main(
    items: &[FlexItem],
    initial_free_main: i32,
    available: i32,
    grow: bool,
) -> (i32, i128) {
    let mut remaining = available;
    let mut factor_sum: i128 = 0;
    for item in items.iter().filter(|item| !item.out_of_flow) {
        if item.frozen {
            remaining = remaining.saturating_sub(item.target_main_size);
        } else {
            remaining = remaining.saturating_sub(item.base_size);
            factor_sum += i128::from(item.factor(grow).raw());
        }
    }

    let one = i128::from(Fixed::ONE.raw());
    if factor_sum < one {
        let limited = i128::from(initial_free_main) * factor_sum / one;
        let limited = i32::try_from(limited).unwrap_or(initial_free_main);
        if limited.unsigned_abs() < remaining.unsigned_abs() {
            remaining = limited;
        }
    }
    (remaining, factor_sum)
}

/// Hand `remaining` out to unfrozen items by grow factor, or take it away by
/// scaled shrink factor (`shrink × base size`).
pub fn distribute_free_main(
    line: &mut FlexLine,
    items: &mut [FlexItem],
    factor_sum: i128,
    remaining: i32,
    grow: bool,
) {
    if grow {
        let mut shares = CumulativeShare::new(remaining, factor_sum);
        for item in items.iter_mut().filter(|item| !item.frozen) {
            let share = shares.take(i128::from(item.grow.raw()));
            item.target_main_size = item.base_size.saturating_add(share);
        }
        return;
    }

    let scaled_sum: i128 = items
        .iter()
        .filter(|item| !item.frozen)
        .map(scaled_shrink_factor)
        .sum();
    if scaled_sum <= 0 {
        for item in items.iter_mut().filter(|item| !item.frozen) {
            item.target_main_size = item.main_size;
            freeze(line, item);
        }
        return;
    }
    let mut shares = CumulativeShare::new(remaining.saturating_abs(), scaled_sum);
    for item in items.iter_mut().filter(|item| !item.frozen) {
        let share = shares.take(scaled_shrink_factor(item));
        item.target_main_size = item.base_size.saturating_sub(share);
    }
}

#[inline]
fn scaled_shrink_factor(item: &FlexItem) -> i128 {
    i128::from(item.shrink.raw()) * i128::from(item.base_size.max(0))
}

/// Splits whole pixels in proportion to weights.
///
/// Each share is the difference between consecutive cumulative quotients,
/// so the fraction an item loses to rounding goes to the next one and the
/// shares always add up to `free` once every weight has been taken. Weights
/// taken beyond `total` count as `total`, so the shares never exceed `free`.
#[derive(Copy, Clone, Debug)]
pub struct CumulativeShare {
    free: i128,
    total: i128,
    taken_weight: i128,
    handed_out: i128,
}

impl CumulativeShare {
    pub fn new(free: i32, total: i128) -> Self {
        Self {
            free: i128::from(free),
            total,
            taken_weight: 0,
            handed_out: 0,
        }
    }

    /// The share for the next item with `weight`.
    pub fn take(&mut self, weight: i128) -> i32 {
        if self.total <= 0 {
            return 0;
        }
        self.taken_weight = self.taken_weight.saturating_add(weight.max(0)).min(self.total);
        let reached = self.free * self.taken_weight / self.total;
        let share = reached - self.handed_out;
        self.handed_out = reached;
        i32::try_from(share).unwrap_or(0)
    }
}

/// Clamp unfrozen targets to their min/max, flagging violations.
/// Returns the total adjustment in pixels.
pub fn clamp_violations(items: &mut [FlexItem]) -> i32 {
    let mut total_violation: i32 = 0;
    for item in items.iter_mut().filter(|item| !item.frozen) {
        item.violation = Violation::None;
        let mut target = item.target_main_size;
        if let Some(max) = item.max_main.filter(|max| target > *max) {
            target = max;
            item.violation = Violation::Max;
        }
        if target < item.min_main {
            target = item.min_main;
            item.violation = Violation::Min;
        }
        if target != item.target_main_size {
            debug!(
                target: "css::flexbox::resolve",
                "[FLEX-RESOLVE] child {} violation: {} -> {}",
                item.child,
                item.target_main_size,
                target
            );
        }
        total_violation = total_violation.saturating_add(target.saturating_sub(item.target_main_size));
        item.target_main_size = target;
    }
    total_violation
}
