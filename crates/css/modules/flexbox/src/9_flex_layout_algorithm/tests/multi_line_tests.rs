//! Tests for line breaking and multi-line placement.

use super::*;

fn wrapping_row(width: f32, wrap: FlexWrap) -> ComputedStyle {
    ComputedStyle {
        flex_wrap: wrap,
        ..row_style(width)
    }
}

#[test]
/// # Panics
/// Panics if items that do not fit together are not put on separate lines.
fn wrap_boundary_one_item_per_line() {
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::Wrap), Vec::new());
    assert_eq!(
        break_lines(&mut container, 100, &[60, 60, 60]),
        Some(vec![(1, 60), (1, 60), (1, 60)])
    );

    let children = vec![sized(60.0, 10.0), sized(60.0, 10.0), sized(60.0, 10.0)];
    let mut laid_out = flex_container(wrapping_row(100.0, FlexWrap::Wrap), children);
    assert_eq!(run_layout(&mut laid_out, 800), Some(()));
    assert_eq!(positions(&laid_out), vec![(0, 0), (0, 10), (0, 20)]);
    assert_eq!(laid_out.height, Some(30));
}

#[test]
/// # Panics
/// Panics if a nowrap container breaks lines.
fn nowrap_keeps_single_line() {
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::NoWrap), Vec::new());
    assert_eq!(break_lines(&mut container, 100, &[60, 60, 60]), Some(vec![(3, 180)]));
}

#[test]
/// # Panics
/// Panics if an item that exactly fits is moved to the next line.
fn exact_fit_stays_on_line() {
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::Wrap), Vec::new());
    assert_eq!(
        break_lines(&mut container, 100, &[40, 60, 30]),
        Some(vec![(2, 100), (1, 30)])
    );
}

#[test]
/// # Panics
/// Panics if an item wider than the container is not kept on its own line.
fn oversized_item_gets_own_line() {
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::Wrap), Vec::new());
    assert_eq!(
        break_lines(&mut container, 100, &[150, 20]),
        Some(vec![(1, 150), (1, 20)])
    );
}

#[test]
/// # Panics
/// Panics if wrap-reverse does not stack lines from the cross end.
fn wrap_reverse_stacks_lines_from_bottom() {
    let children = vec![sized(60.0, 10.0), sized(60.0, 10.0), sized(60.0, 10.0)];
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::WrapReverse), children);
    assert_eq!(run_layout(&mut container, 800), Some(()));
    assert_eq!(positions(&container), vec![(0, 20), (0, 10), (0, 0)]);
}

#[test]
/// # Panics
/// Panics if absolutely positioned children take space or force a wrap.
fn out_of_flow_child_takes_no_space() {
    let mut absolute = sized(60.0, 10.0);
    absolute.style.position = Position::Absolute;
    let children = vec![sized(60.0, 10.0), absolute, sized(30.0, 10.0)];
    let mut container = flex_container(wrapping_row(100.0, FlexWrap::Wrap), children);
    assert_eq!(run_layout(&mut container, 800), Some(()));
    assert_eq!(positions(&container), vec![(0, 0), (60, 0), (60, 0)]);
    assert_eq!(container.height, Some(10));
}

#[test]
/// # Panics
/// Panics if a column with indefinite height wraps.
fn indefinite_column_never_wraps() {
    let style = ComputedStyle {
        flex_direction: FlexDirection::Column,
        flex_wrap: FlexWrap::Wrap,
        ..ComputedStyle::default()
    };
    let children = vec![sized(10.0, 50.0), sized(10.0, 50.0), sized(10.0, 50.0)];
    let mut container = flex_container(style, children);
    assert_eq!(run_layout(&mut container, 100), Some(()));
    assert_eq!(positions(&container), vec![(0, 0), (0, 50), (0, 100)]);
    assert_eq!(container.height, Some(150));
}

#[test]
/// # Panics
/// Panics if a column with definite height does not wrap into columns.
fn definite_column_wraps_into_columns() {
    let style = ComputedStyle {
        flex_direction: FlexDirection::Column,
        flex_wrap: FlexWrap::Wrap,
        height: px(100.0),
        align_items: AlignItems::FlexStart,
        ..ComputedStyle::default()
    };
    let children = vec![sized(10.0, 60.0), sized(20.0, 60.0)];
    let mut container = flex_container(style, children);
    assert_eq!(run_layout(&mut container, 100), Some(()));
    // Line cross sizes 10 and 20 share the remaining 70px: 45 and 55.
    assert_eq!(positions(&container), vec![(0, 0), (45, 0)]);
}

#[test]
/// # Panics
/// Panics if `order` does not change visual placement.
fn order_changes_placement() {
    let mut last = sized(20.0, 10.0);
    last.style.order = -1;
    let children = vec![sized(30.0, 10.0), sized(40.0, 10.0), last];
    let mut container = flex_container(row_style(200.0), children);
    assert_eq!(run_layout(&mut container, 800), Some(()));
    assert_eq!(positions(&container), vec![(20, 0), (50, 0), (0, 0)]);
}
