use anyhow::Result;
use criterion::{Criterion, criterion_group, criterion_main};
use css_box::{
    BoxKind, ComputedStyle, FlexWrap, Gap, LayoutBox, LengthPercentage, Size, UnitContext,
    UnitResolver,
};
use css_flexbox::{LayoutEnvironment, layout_flex};
use std::hint::black_box;

/// Leaves keep their specified height, `auto` heights collapse to zero.
#[derive(Default)]
struct LeafEnv {
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
    fn layout_block(&mut self, node: &mut LayoutBox) -> Result<()> {
        node.height = Some(node.height.unwrap_or(0));
        Ok(())
    }

    fn layout_table(&mut self, node: &mut LayoutBox, available_width: i32) -> Result<()> {
        node.width = Some(node.width.unwrap_or(available_width));
        self.layout_block(node)
    }

    fn layout_grid(&mut self, node: &mut LayoutBox, available_width: i32) -> Result<()> {
        self.layout_table(node, available_width)
    }
}

/// A wrapping row of `count` items with mixed widths and grow factors.
fn build_wrapped_row(count: usize) -> LayoutBox {
    let children = (0..count)
        .map(|index| {
            let style = ComputedStyle {
                width: Size::Length(LengthPercentage::Px(40.0 + (index % 7) as f32 * 15.0)),
                height: Size::Length(LengthPercentage::Px(10.0 + (index % 3) as f32 * 5.0)),
                flex_grow: (index % 2) as f32,
                order: (index % 5) as i32,
                ..ComputedStyle::default()
            };
            LayoutBox::new(BoxKind::Block, style)
        })
        .collect();
    let style = ComputedStyle {
        width: Size::Length(LengthPercentage::Px(1024.0)),
        flex_wrap: FlexWrap::Wrap,
        column_gap: Gap::Length(LengthPercentage::Px(8.0)),
        row_gap: Gap::Length(LengthPercentage::Px(4.0)),
        ..ComputedStyle::default()
    };
    LayoutBox::new(BoxKind::Flex, style).with_children(children)
}

fn bench_wrapped_row(criterion: &mut Criterion) {
    for count in [16, 256] {
        criterion.bench_function(&format!("layout_flex_wrapped_row_{count}"), |bencher| {
            bencher.iter(|| {
                let mut container = build_wrapped_row(count);
                let mut env = LeafEnv::default();
                let outcome = layout_flex(&mut container, 1024, &mut env);
                black_box((outcome.is_ok(), container.height));
            });
        });
    }
}

criterion_group!(flex_benches, bench_wrapped_row);
criterion_main!(flex_benches);
