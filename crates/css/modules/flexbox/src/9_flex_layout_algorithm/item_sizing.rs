//! Flex base size, hypothetical main size and automatic minimum size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>

use log::debug;

use crate::chapter4::{LayoutEnvironment, layout_flex_item};
use crate::chapter5::FlexContext;
use crate::chapter6::{BasisKind, FlexItem, MinSize, is_flex_item};
use crate::chapter7::Axes;
use crate::error::FlexLayoutError;
use css_box::{FlexBasis, Fixed, LayoutBox, Overflow, Side};

/// Inputs shared by every item of one container.
#[derive(Copy, Clone, Debug)]
pub struct ItemSizingInputs {
    pub axes: Axes,
    /// Content width of the container.
    pub available_width: i32,
    /// Reference size for percentage bases: the container's content width,
    /// or `None` while the main size is indefinite.
    pub basis_reference: Option<i32>,
}

/// Build one [`FlexItem`] per flex item child, in document order.
///
/// # Errors
/// Returns [`FlexLayoutError`] when laying out a column item to measure its
/// content height fails.
pub fn populate_items(
    ctx: &mut FlexContext<'_>,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let inputs = ItemSizingInputs {
        axes: ctx.axes,
        available_width: ctx.available_width,
        basis_reference: ctx.available_main.map(|_| ctx.available_width),
    };
    let FlexContext {
        container, items, ..
    } = ctx;
    for (child_index, child) in container
        .children
        .iter_mut()
        .enumerate()
        .filter(|(_, child)| is_flex_item(child))
    {
        let index = items.len();
        let item = resolve_item(inputs, child, child_index, index, env)?;
        items.push(item);
    }
    Ok(())
}

/// Resolve basis, constraints and flex factors for one item.
///
/// Column items are laid out here so their content height is known; row
/// items are laid out once their final width is known.
///
/// # Errors
/// Returns [`FlexLayoutError`] when laying out a column item fails.
pub fn resolve_item(
    inputs: ItemSizingInputs,
    child: &mut LayoutBox,
    child_index: usize,
    index: usize,
    env: &mut dyn LayoutEnvironment,
) -> Result<FlexItem, FlexLayoutError> {
    let ItemSizingInputs {
        axes,
        available_width,
        basis_reference,
    } = inputs;
    let constraints = child.resolve_dimensions(&*env, available_width);
    let delta_main = axes.delta_outer_main(child);
    let main_edges = padding_border(child, axes.horizontal);
    let (min_main, max_main, min_cross, max_cross) = if axes.horizontal {
        (
            constraints.min_width,
            constraints.max_width,
            constraints.min_height,
            constraints.max_height,
        )
    } else {
        (
            constraints.min_height,
            constraints.max_height,
            constraints.min_width,
            constraints.max_width,
        )
    };

    let mut item = FlexItem {
        child: child_index,
        index,
        order: child.style.order,
        grow: Fixed::from_f32(child.style.flex_grow.max(0.0)),
        shrink: Fixed::from_f32(child.style.flex_shrink.max(0.0)),
        min_main_spec: min_main.map_or(MinSize::Automatic, MinSize::Explicit),
        max_main: max_main.map(|max| max + delta_main),
        min_cross: min_cross.unwrap_or(0),
        max_cross,
        out_of_flow: child.is_out_of_flow(),
        ..FlexItem::default()
    };

    let specified_main = if axes.horizontal {
        child.width
    } else {
        child.height
    };
    let (basis, basis_px) = match child.style.flex_basis {
        FlexBasis::Length(length) => {
            let resolved = env
                .resolve_length(&child.style, length, basis_reference)
                .map(|px| child.to_content_box(px, main_edges));
            // `flex: 1` in a column still sizes from content.
            let resolved = resolved.filter(|px| axes.horizontal || *px != 0);
            (BasisKind::Length, resolved)
        }
        FlexBasis::Auto => (BasisKind::Auto, specified_main),
        FlexBasis::Content => (BasisKind::Content, None),
    };
    item.basis = basis;
    item.basis_px = basis_px;

    if !axes.horizontal {
        if child.width.is_none() {
            let stretch = available_width
                .max(child.min_content_width)
                .min(child.max_content_width)
                .saturating_sub(child.delta_outer_width());
            child.width = Some(stretch.max(0));
        }
        let width = child.width.unwrap_or(0);
        layout_flex_item(child, width, env)?;
    }

    let content_main = if axes.horizontal {
        child.max_content_width.saturating_sub(delta_main)
    } else {
        child.height.unwrap_or(0)
    };
    let mut base_size = basis_px.unwrap_or(content_main).saturating_add(delta_main);

    item.min_main = match item.min_main_spec {
        MinSize::Explicit(min) => min + delta_main,
        MinSize::Automatic => automatic_minimum(child, axes, specified_main, item.max_main),
    }
    .max(delta_main);

    if axes.horizontal {
        base_size = base_size.min(available_width).max(item.min_main);
    }

    item.base_size = base_size;
    item.target_main_size = base_size;
    item.main_size = item.clamp_main(base_size);

    debug!(
        target: "css::flexbox::items",
        "[FLEX-ITEMS] child {child_index}: basis={:?}/{:?} base={} main={} min={} max={:?} grow={} shrink={}",
        item.basis,
        item.basis_px,
        item.base_size,
        item.main_size,
        item.min_main,
        item.max_main,
        item.grow,
        item.shrink
    );

    Ok(item)
}

/// Outer automatic minimum main size.
///
/// The content size suggestion (min-content width for rows, laid-out height
/// for columns) capped by the specified size and the max size. Zero when the
/// item is a scroll container in the main axis.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>
pub fn automatic_minimum(
    child: &LayoutBox,
    axes: Axes,
    specified_main: Option<i32>,
    max_main: Option<i32>,
) -> i32 {
    let overflow = if axes.horizontal {
        child.style.overflow_x
    } else {
        child.style.overflow_y
    };
    if overflow != Overflow::Visible {
        return 0;
    }
    let delta_main = axes.delta_outer_main(child);
    let content = if axes.horizontal {
        child.min_content_width
    } else {
        child.height.unwrap_or(0).saturating_add(delta_main)
    };
    let specified = specified_main.map_or(content, |size| content.min(size + delta_main));
    max_main.map_or(specified, |max| specified.min(max))
}

/// Padding and border along the main axis.
fn padding_border(child: &LayoutBox, horizontal: bool) -> i32 {
    let (start, end) = if horizontal {
        (Side::Left, Side::Right)
    } else {
        (Side::Top, Side::Bottom)
    };
    child.padding.get(start) + child.padding.get(end) + child.border.get(start) + child.border.get(end)
}
