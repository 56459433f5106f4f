//! Computed style values consumed by box sizing and flex layout.
//!
//! Values arrive already cascaded; lengths stay unresolved until layout knows
//! the reference size they are relative to.

/// The four physical sides of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// One value per physical side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    /// The same value on every side.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn get(&self, side: Side) -> T {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, value: T) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// Apply `func` to every side.
    #[must_use]
    pub fn map<R>(self, mut func: impl FnMut(T) -> R) -> Sides<R> {
        Sides {
            top: func(self.top),
            right: func(self.right),
            bottom: func(self.bottom),
            left: func(self.left),
        }
    }
}

/// `calc()` reduced to `px + percent%`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalcSum {
    pub px: f32,
    pub percent: f32,
}

/// A length or percentage before resolution against a reference size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthPercentage {
    Px(f32),
    Em(f32),
    Rem(f32),
    Vw(f32),
    Vh(f32),
    /// Percentage in the 0..=100 range.
    Percent(f32),
    Calc(CalcSum),
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

/// `width`, `height`, `min-*`, and margin values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Size {
    #[default]
    Auto,
    Length(LengthPercentage),
}

/// `max-width` / `max-height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaxSize {
    #[default]
    None,
    Length(LengthPercentage),
}

/// `flex-basis`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FlexBasis {
    #[default]
    Auto,
    Content,
    Length(LengthPercentage),
}

/// `row-gap` / `column-gap`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gap {
    #[default]
    Normal,
    Length(LengthPercentage),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

impl AlignSelf {
    /// Resolve `auto` against the container's `align-items`.
    pub const fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// The subset of computed style that box sizing and flex layout read.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub font_size: f32,
    pub position: Position,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub box_sizing: BoxSizing,
    pub margin: Sides<Size>,
    pub padding: Sides<LengthPercentage>,
    /// Used border widths in px.
    pub border_width: Sides<f32>,
    // Dimensions
    pub width: Size,
    pub height: Size,
    pub min_width: Size,
    pub min_height: Size,
    pub max_width: MaxSize,
    pub max_height: MaxSize,
    // Flexbox
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_basis: FlexBasis,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub order: i32,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub row_gap: Gap,
    pub column_gap: Gap,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            position: Position::Static,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            box_sizing: BoxSizing::ContentBox,
            margin: Sides::all(Size::Length(LengthPercentage::Px(0.0))),
            padding: Sides::default(),
            border_width: Sides::default(),
            width: Size::Auto,
            height: Size::Auto,
            min_width: Size::Auto,
            min_height: Size::Auto,
            max_width: MaxSize::None,
            max_height: MaxSize::None,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            flex_basis: FlexBasis::Auto,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            order: 0,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            row_gap: Gap::Normal,
            column_gap: Gap::Normal,
        }
    }
}

impl ComputedStyle {
    /// Absolutely and fixed positioned boxes are taken out of flow.
    pub const fn is_out_of_flow(&self) -> bool {
        matches!(self.position, Position::Absolute | Position::Fixed)
    }
}
