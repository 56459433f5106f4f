//! Resolution of relative lengths to device pixels.
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>

use crate::style::{ComputedStyle, LengthPercentage};

/// Resolves lengths to whole device pixels.
///
/// Percentages (and `calc()` sums with a percentage part) need a reference
/// size; when `reference` is `None` the value cannot be resolved and `None`
/// is returned so callers can treat it as `auto`.
pub trait UnitResolver {
    fn resolve_length(
        &self,
        style: &ComputedStyle,
        length: LengthPercentage,
        reference: Option<i32>,
    ) -> Option<i32>;
}

/// Default resolver parameterised by root font size and viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitContext {
    pub root_font_size: f32,
    pub viewport_width: i32,
    pub viewport_height: i32,
}

impl Default for UnitContext {
    fn default() -> Self {
        Self {
            root_font_size: 16.0,
            viewport_width: 800,
            viewport_height: 600,
        }
    }
}

#[inline]
fn round_px(value: f32) -> i32 {
    value.round() as i32
}

impl UnitResolver for UnitContext {
    fn resolve_length(
        &self,
        style: &ComputedStyle,
        length: LengthPercentage,
        reference: Option<i32>,
    ) -> Option<i32> {
        match length {
            LengthPercentage::Px(px) => Some(round_px(px)),
            LengthPercentage::Em(em) => Some(round_px(em * style.font_size)),
            LengthPercentage::Rem(rem) => Some(round_px(rem * self.root_font_size)),
            LengthPercentage::Vw(vw) => Some(round_px(vw * self.viewport_width as f32 / 100.0)),
            LengthPercentage::Vh(vh) => Some(round_px(vh * self.viewport_height as f32 / 100.0)),
            LengthPercentage::Percent(percent) => {
                reference.map(|base| round_px(base as f32 * percent / 100.0))
            }
            LengthPercentage::Calc(sum) => {
                if sum.percent == 0.0 {
                    return Some(round_px(sum.px));
                }
                reference.map(|base| round_px(sum.px + base as f32 * sum.percent / 100.0))
            }
        }
    }
}
