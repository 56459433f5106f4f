//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use log::{debug, error};

use crate::chapter5::FlexContext;
use crate::chapter7::sort_items_by_order_stable;
use crate::chapter9::{collect_items_into_lines, place_lines, populate_items};
use crate::error::FlexLayoutError;
use css_box::{BoxKind, LayoutBox, UnitResolver};

/// Layout routines for the non-flex formatting contexts a flex item may establish.
///
/// Implementations keep a `width`/`height` that is already `Some` on entry
/// (the flex container imposed it) and compute the size only when it is `None`.
pub trait LayoutEnvironment: UnitResolver {
    /// Lay out a block container, filling in its height from content.
    ///
    /// # Errors
    /// Returns an error when the block's content cannot be laid out.
    fn layout_block(&mut self, node: &mut LayoutBox) -> anyhow::Result<()>;

    /// Lay out a table within `available_width`.
    ///
    /// # Errors
    /// Returns an error when the table cannot be laid out.
    fn layout_table(&mut self, node: &mut LayoutBox, available_width: i32) -> anyhow::Result<()>;

    /// Lay out a grid container within `available_width`.
    ///
    /// # Errors
    /// Returns an error when the grid cannot be laid out.
    fn layout_grid(&mut self, node: &mut LayoutBox, available_width: i32) -> anyhow::Result<()>;
}

/// Returns true when a box of this kind establishes a Flex Formatting Context (FFC).
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
#[inline]
pub const fn establishes_flex_formatting_context(kind: BoxKind) -> bool {
    matches!(kind, BoxKind::Flex)
}

/// Lay out a flex container and all of its items.
///
/// On success every in-flow child has its final `x`, `y`, `width` and
/// `height`, and the container has its own `width` and `height`.
///
/// A `width` or `height` already set on the container is kept as imposed by
/// the parent. Before laying out a container again after its children
/// changed, reset `height` to `None` unless the height is meant to be imposed.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
///
/// # Errors
/// Returns [`FlexLayoutError`] when the working arrays cannot be allocated or
/// a child's layout fails; the subtree's geometry is then unspecified.
pub fn layout_flex(
    container: &mut LayoutBox,
    available_width: i32,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    debug!(
        target: "css::flexbox",
        "[FLEX] layout: children={} available_width={} width={:?} height={:?}",
        container.children.len(),
        available_width,
        container.width,
        container.height
    );

    let mut ctx = FlexContext::new(container, available_width, &*env)?;
    populate_items(&mut ctx, env)?;
    sort_items_by_order_stable(&mut ctx.items);
    collect_items_into_lines(&mut ctx, env)?;
    place_lines(&mut ctx, env)?;
    ctx.finish();
    Ok(())
}

/// Lay out one flex item through the routine for the context it establishes.
///
/// # Errors
/// Returns [`FlexLayoutError::ChildLayout`] when a block, table or grid
/// collaborator fails, or the nested error when a flex item fails.
pub fn layout_flex_item(
    node: &mut LayoutBox,
    available_width: i32,
    env: &mut dyn LayoutEnvironment,
) -> Result<(), FlexLayoutError> {
    let kind = node.kind;
    let outcome = match kind {
        BoxKind::Block => env.layout_block(node),
        BoxKind::Table => env.layout_table(node, available_width),
        BoxKind::Grid => env.layout_grid(node, available_width),
        BoxKind::Flex => return layout_flex(node, available_width, env),
    };
    outcome.map_err(|source| {
        error!(target: "css::flexbox", "[FLEX] {kind:?} item layout failed: {source:#}");
        FlexLayoutError::ChildLayout { kind, source }
    })
}
