use std::str::FromStr;

use crate::error::{Error, Result};

/// Where a cut-out is placed inside a target image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Horizontally centered, top edge
    TopCenter,
    /// Horizontally centered, flush with the bottom edge
    #[default]
    BottomCenter,
    /// Left edge, vertically centered
    CenterLeft,
    /// Right edge, vertically centered
    CenterRight,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Centered on both axes
    Center,
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let anchor = match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "top" | "top-center" => Self::TopCenter,
            "bottom" | "bottom-center" => Self::BottomCenter,
            "left" | "center-left" => Self::CenterLeft,
            "right" | "center-right" => Self::CenterRight,
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            "bottom-left" => Self::BottomLeft,
            "bottom-right" => Self::BottomRight,
            "center" => Self::Center,
            other => {
                return Err(Error::InvalidParameter(format!(
                    "unknown anchor '{other}'"
                )))
            }
        };
        Ok(anchor)
    }
}

/// Sub-region of a target image covered by a cut-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AnchorRect {
    /// Computes the rectangle for a cut-out of `cutout` size inside a target
    /// of `target` size.
    ///
    /// Centering uses floor division, so an odd leftover puts the extra
    /// pixel on the right/bottom side.
    ///
    /// # Errors
    ///
    /// * `Error::AnchorOutOfBounds` - When the cut-out is wider or taller
    ///   than the target
    pub fn compute(target: (u32, u32), cutout: (u32, u32), anchor: Anchor) -> Result<Self> {
        let (target_width, target_height) = target;
        let (width, height) = cutout;

        if width > target_width || height > target_height {
            return Err(Error::AnchorOutOfBounds { cutout, target });
        }

        let free_x = target_width - width;
        let free_y = target_height - height;

        let (x, y) = match anchor {
            Anchor::TopCenter => (free_x / 2, 0),
            Anchor::BottomCenter => (free_x / 2, free_y),
            Anchor::CenterLeft => (0, free_y / 2),
            Anchor::CenterRight => (free_x, free_y / 2),
            Anchor::TopLeft => (0, 0),
            Anchor::TopRight => (free_x, 0),
            Anchor::BottomLeft => (0, free_y),
            Anchor::BottomRight => (free_x, free_y),
            Anchor::Center => (free_x / 2, free_y / 2),
        };

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Returns `true` when `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x..self.x + self.width).contains(&x) && (self.y..self.y + self.height).contains(&y)
    }
}
