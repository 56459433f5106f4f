//! Collaborators and tree builders shared by the flex layout tests.

use anyhow::{Result, bail};
use css_box::{
    BoxKind, ComputedStyle, LayoutBox, LengthPercentage, Side, Size, UnitContext, UnitResolver,
};
use css_flexbox::{LayoutEnvironment, layout_flex_item};

/// Block layout that stacks children top to bottom.
///
/// `auto` block widths fill the parent's content box and an `auto` height
/// becomes the sum of the children's outer heights. Layout of `failing`
/// boxes is refused.
#[derive(Default)]
pub struct StackingEnv {
    pub units: UnitContext,
    pub failing: Option<BoxKind>,
}

impl StackingEnv {
    pub fn failing(kind: BoxKind) -> Self {
        Self {
            failing: Some(kind),
            ..Self::default()
        }
    }

    fn stack(&mut self, node: &mut LayoutBox) -> Result<()> {
        if self.failing == Some(node.kind) {
            bail!("{:?} layout refused for {} children", node.kind, node.children.len());
        }
        let width = node.width.unwrap_or(0);
        let mut cursor = node.padding.top;
        for child in &mut node.children {
            child.resolve_dimensions(&*self, width);
            if child.kind == BoxKind::Block && child.width.is_none() {
                child.width = Some((width - child.delta_outer_width()).max(0));
            }
            layout_flex_item(child, width, self)?;
            child.x = node.padding.left + child.non_auto_margin(Side::Left) + child.border.left;
            child.y = cursor + child.non_auto_margin(Side::Top) + child.border.top;
            cursor += child.outer_height();
        }
        if node.height.is_none() {
            node.height = Some(cursor - node.padding.top);
        }
        Ok(())
    }
}

impl UnitResolver for StackingEnv {
    fn resolve_length(
        &self,
        style: &ComputedStyle,
        length: LengthPercentage,
        reference: Option<i32>,
    ) -> Option<i32> {
        self.units.resolve_length(style, length, reference)
    }
}

impl LayoutEnvironment for StackingEnv {
    fn layout_block(&mut self, node: &mut LayoutBox) -> Result<()> {
        self.stack(node)
    }

    fn layout_table(&mut self, node: &mut LayoutBox, available_width: i32) -> Result<()> {
        node.width = Some(node.width.unwrap_or(available_width));
        self.stack(node)
    }

    fn layout_grid(&mut self, node: &mut LayoutBox, available_width: i32) -> Result<()> {
        self.layout_table(node, available_width)
    }
}

#[inline]
pub fn px(value: f32) -> Size {
    Size::Length(LengthPercentage::Px(value))
}

/// A line of text: auto width, fixed height.
pub fn text(height: f32) -> LayoutBox {
    LayoutBox::new(
        BoxKind::Block,
        ComputedStyle {
            height: px(height),
            ..ComputedStyle::default()
        },
    )
}

/// A block of the given width whose height comes from one line of text.
pub fn paragraph(width: f32, line_height: f32) -> LayoutBox {
    LayoutBox::new(
        BoxKind::Block,
        ComputedStyle {
            width: px(width),
            ..ComputedStyle::default()
        },
    )
    .with_children(vec![text(line_height)])
}

pub fn flex(style: ComputedStyle, children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(BoxKind::Flex, style).with_children(children)
}

pub fn row(width: f32) -> ComputedStyle {
    ComputedStyle {
        width: px(width),
        ..ComputedStyle::default()
    }
}

/// `(x, y, width, height)` of every child.
pub fn geometry(node: &LayoutBox) -> Vec<(i32, i32, Option<i32>, Option<i32>)> {
    node.children
        .iter()
        .map(|child| (child.x, child.y, child.width, child.height))
        .collect()
}
