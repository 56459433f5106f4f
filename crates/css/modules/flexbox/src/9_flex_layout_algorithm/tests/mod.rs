//! Tests for the flex layout algorithm.

use super::*;
use crate::chapter4::{LayoutEnvironment, layout_flex};
use crate::chapter5::{FlexLine, gap_total};
use crate::chapter6::FlexItem;
use css_box::{
    AlignItems, AlignSelf, BoxKind, BoxSizing, CalcSum, ComputedStyle, Fixed, FlexBasis,
    FlexDirection, FlexWrap, Gap, JustifyContent, LayoutBox, LengthPercentage, MarginValue,
    MaxSize, Overflow, Position, Sides, Size, UnitContext, UnitResolver,
};

mod justify_tests;
mod multi_line_tests;

/// Collaborators for leaf boxes: an `auto` height becomes zero, an `auto`
/// table or grid width takes the available width.
#[derive(Default)]
pub struct LeafEnv {
    units: UnitContext,
}

impl UnitResolver for LeafEnv {
    fn resolve_length(
        &self,
        style: &ComputedStyle,
        length: LengthPercentage,
        reference: Option<i32>,
    ) -> Option<i32> {
        self.units.resolve_length(style, length, reference)
    }
}

impl LayoutEnvironment for LeafEnv {
    fn layout_block(&mut self, node: &mut LayoutBox) -> anyhow::Result<()> {
        node.height = Some(node.height.unwrap_or(0));
        Ok(())
    }

    fn layout_table(&mut self, node: &mut LayoutBox, available_width: i32) -> anyhow::Result<()> {
        node.width = Some(node.width.unwrap_or(available_width));
        self.layout_block(node)
    }

    fn layout_grid(&mut self, node: &mut LayoutBox, available_width: i32) -> anyhow::Result<()> {
        self.layout_table(node, available_width)
    }
}

#[inline]
pub fn px(value: f32) -> Size {
    Size::Length(LengthPercentage::Px(value))
}

/// A block child with a fixed width and height.
pub fn sized(width: f32, height: f32) -> LayoutBox {
    LayoutBox::new(
        BoxKind::Block,
        ComputedStyle {
            width: px(width),
            height: px(height),
            ..ComputedStyle::default()
        },
    )
}

pub fn flex_container(style: ComputedStyle, children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(BoxKind::Flex, style).with_children(children)
}

/// Row container style with a fixed width.
pub fn row_style(width: f32) -> ComputedStyle {
    ComputedStyle {
        width: px(width),
        ..ComputedStyle::default()
    }
}

/// Run `layout_flex` with [`LeafEnv`]; `None` on failure.
pub fn run_layout(container: &mut LayoutBox, available_width: i32) -> Option<()> {
    layout_flex(container, available_width, &mut LeafEnv::default()).ok()
}

/// `(x, y)` of every child.
pub fn positions(container: &LayoutBox) -> Vec<(i32, i32)> {
    container.children.iter().map(|child| (child.x, child.y)).collect()
}

/// `(width, height)` of every child.
pub fn sizes(container: &LayoutBox) -> Vec<(Option<i32>, Option<i32>)> {
    container
        .children
        .iter()
        .map(|child| (child.width, child.height))
        .collect()
}

/// An in-flow item whose base and hypothetical sizes are `base`.
pub fn item(base: i32, grow: f32, shrink: f32) -> FlexItem {
    FlexItem {
        base_size: base,
        target_main_size: base,
        main_size: base,
        grow: Fixed::from_f32(grow),
        shrink: Fixed::from_f32(shrink),
        ..FlexItem::default()
    }
}

/// One line holding all of `items`, as the line builder would produce it.
pub fn line_of(items: &[FlexItem], gap: i32) -> FlexLine {
    let in_flow = items.iter().filter(|entry| !entry.out_of_flow);
    let in_flow_count = in_flow.clone().count();
    FlexLine {
        count: items.len(),
        in_flow_count,
        main_size: in_flow.map(|entry| entry.main_size).sum::<i32>() + gap_total(in_flow_count, gap),
        ..FlexLine::default()
    }
}

pub fn targets(items: &[FlexItem]) -> Vec<i32> {
    items.iter().map(|entry| entry.target_main_size).collect()
}

/// Break items with the given outer main sizes into lines of `container`.
/// Returns `(count, main_size)` per line.
pub fn break_lines(
    container: &mut LayoutBox,
    available_width: i32,
    mains: &[i32],
) -> Option<Vec<(usize, i32)>> {
    FlexContext::new(container, available_width, &UnitContext::default())
        .and_then(|mut ctx| {
            ctx.items = mains
                .iter()
                .enumerate()
                .map(|(index, main)| FlexItem {
                    child: index,
                    index,
                    main_size: *main,
                    ..FlexItem::default()
                })
                .collect();
            let mut position = 0;
            while position < ctx.items.len() {
                let line_index = build_line(&mut ctx, position)?;
                position += ctx.lines.get(line_index).map_or(1, |line| line.count.max(1));
            }
            Ok(ctx.lines.iter().map(|line| (line.count, line.main_size)).collect())
        })
        .ok()
}
