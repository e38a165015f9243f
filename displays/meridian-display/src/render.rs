//! Face renderer
//!
//! Draws a face onto any `embedded-graphics` draw target: background
//! fill, then the hour hand, then the minute hand on top.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use meridian_core::face::{FaceModel, HandColor, HandModel};

use crate::palette::FromHandColor;
use crate::polar::hand_endpoint;

/// Default background color
pub const COLOR_BACKGROUND: HandColor = HandColor::BLACK;

/// Draws faces onto a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRenderer {
    /// Fill color behind the hands
    background: HandColor,
    /// Hand pivot, `None` for the center of the target
    center: Option<Point>,
}

impl Default for FaceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceRenderer {
    /// Renderer with a black background, hands pivoting at the center
    pub const fn new() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            center: None,
        }
    }

    /// Use a different background color
    pub const fn with_background(mut self, background: HandColor) -> Self {
        self.background = background;
        self
    }

    /// Pivot the hands around a fixed point instead of the target center
    pub const fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Background color
    pub fn background(&self) -> HandColor {
        self.background
    }

    /// Hand pivot on a given target
    pub fn center_on<D: Dimensions>(&self, target: &D) -> Point {
        self.center
            .unwrap_or_else(|| target.bounding_box().center())
    }

    /// Draw the whole face
    pub fn draw<D>(&self, face: &FaceModel, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: FromHandColor,
    {
        target.clear(D::Color::from_hand_color(self.background))?;

        let center = self.center_on(target);
        for hand in face.hands() {
            Self::draw_hand(hand, center, target)?;
        }

        Ok(())
    }

    /// Draw a single hand as a line from `center`
    ///
    /// Hands with zero length, zero width or a clear color draw nothing.
    pub fn draw_hand<D>(hand: &HandModel, center: Point, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: FromHandColor,
    {
        if !hand.is_visible() {
            return Ok(());
        }

        let style = PrimitiveStyle::with_stroke(
            D::Color::from_hand_color(hand.color),
            hand.width as u32,
        );
        Line::new(center, hand_endpoint(center, hand))
            .into_styled(style)
            .draw(target)
    }
}
