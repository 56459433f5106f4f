//! Tests for `justify-content` and reversed main axes.

use super::*;

const fn plan(leading: i32, between: i32, between_remainder: i32) -> JustifyPlan {
    JustifyPlan {
        leading,
        between,
        between_remainder,
    }
}

#[test]
/// # Panics
/// Panics if start, end and center offsets are wrong.
fn plan_edges_and_center() {
    assert_eq!(justify_plan(JustifyContent::FlexStart, 30, 3), plan(0, 0, 0));
    assert_eq!(justify_plan(JustifyContent::FlexEnd, 30, 3), plan(30, 0, 0));
    assert_eq!(justify_plan(JustifyContent::Center, 31, 2), plan(16, 0, 0));
}

#[test]
/// # Panics
/// Panics if space-between spacing or remainders are wrong.
fn plan_space_between() {
    assert_eq!(justify_plan(JustifyContent::SpaceBetween, 10, 3), plan(0, 5, 0));
    assert_eq!(justify_plan(JustifyContent::SpaceBetween, 11, 4), plan(0, 3, 2));
    // A single item stays at the start.
    assert_eq!(justify_plan(JustifyContent::SpaceBetween, 50, 1), plan(0, 0, 0));
}

#[test]
/// # Panics
/// Panics if space-around or space-evenly do not account for all free space.
fn plan_space_around_and_evenly() {
    assert_eq!(justify_plan(JustifyContent::SpaceAround, 10, 3), plan(2, 3, 1));
    assert_eq!(justify_plan(JustifyContent::SpaceEvenly, 10, 3), plan(3, 2, 1));
    assert_eq!(justify_plan(JustifyContent::SpaceAround, 10, 0), plan(0, 0, 0));
}

fn justified_row(justify: JustifyContent, direction: FlexDirection) -> LayoutBox {
    let style = ComputedStyle {
        justify_content: justify,
        flex_direction: direction,
        ..row_style(100.0)
    };
    flex_container(style, vec![sized(20.0, 10.0), sized(20.0, 10.0), sized(20.0, 10.0)])
}

fn xs(container: &LayoutBox) -> Vec<i32> {
    positions(container).into_iter().map(|(x, _)| x).collect()
}

#[test]
/// # Panics
/// Panics if items are not justified along a row.
fn row_justification() {
    let mut between = justified_row(JustifyContent::SpaceBetween, FlexDirection::Row);
    assert_eq!(run_layout(&mut between, 800), Some(()));
    assert_eq!(xs(&between), vec![0, 40, 80]);

    let mut center = justified_row(JustifyContent::Center, FlexDirection::Row);
    assert_eq!(run_layout(&mut center, 800), Some(()));
    assert_eq!(xs(&center), vec![20, 40, 60]);

    let mut evenly = justified_row(JustifyContent::SpaceEvenly, FlexDirection::Row);
    assert_eq!(run_layout(&mut evenly, 800), Some(()));
    assert_eq!(xs(&evenly), vec![10, 40, 70]);
}

#[test]
/// # Panics
/// Panics if row-reverse does not start from the right edge.
fn row_reverse_starts_at_main_end() {
    let mut start = justified_row(JustifyContent::FlexStart, FlexDirection::RowReverse);
    assert_eq!(run_layout(&mut start, 800), Some(()));
    assert_eq!(xs(&start), vec![80, 60, 40]);

    let mut end = justified_row(JustifyContent::FlexEnd, FlexDirection::RowReverse);
    assert_eq!(run_layout(&mut end, 800), Some(()));
    assert_eq!(xs(&end), vec![40, 20, 0]);
}

#[test]
/// # Panics
/// Panics if column-reverse does not start from the bottom edge.
fn column_reverse_starts_at_bottom() {
    let style = ComputedStyle {
        flex_direction: FlexDirection::ColumnReverse,
        height: px(100.0),
        ..ComputedStyle::default()
    };
    let mut container = flex_container(style, vec![sized(10.0, 20.0), sized(10.0, 20.0)]);
    assert_eq!(run_layout(&mut container, 100), Some(()));
    assert_eq!(positions(&container), vec![(0, 80), (0, 60)]);
}

#[test]
/// # Panics
/// Panics if padding and borders are not applied to item positions.
fn padding_and_borders_offset_items() {
    let style = ComputedStyle {
        padding: Sides::all(LengthPercentage::Px(5.0)),
        ..row_style(100.0)
    };
    let mut child = sized(20.0, 10.0);
    child.style.border_width = Sides::all(2.0);
    child.style.margin.left = px(3.0);
    let mut container = flex_container(style, vec![child]);
    assert_eq!(run_layout(&mut container, 800), Some(()));
    // Padding 5, margin 3 and border 2 put the child's padding edge at 10.
    assert_eq!(positions(&container), vec![(10, 7)]);
}
