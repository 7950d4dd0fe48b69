//! Named colors
//!
//! Values are base channel intents (`0..=100`), kept low so that the
//! brightness offset added at encode time still has room to work.

use super::Color;

pub const WHITE: Color = Color::new(20, 20, 20);
pub const BLACK: Color = Color::new(0, 0, 0);
pub const RED: Color = Color::new(20, 0, 0);
pub const GREEN: Color = Color::new(0, 20, 0);
pub const BLUE: Color = Color::new(0, 0, 20);
pub const YELLOW: Color = Color::new(20, 10, 0);
pub const ORANGE: Color = Color::new(50, 1, 0);
pub const BRIGHT_PINK: Color = Color::new(30, 0, 5);
pub const PALE_PINK: Color = Color::new(70, 1, 1);
pub const VIOLET: Color = Color::new(20, 0, 25);
pub const ELECTRIC_BLUE: Color = Color::new(0, 30, 25);

/// Warm-to-cool set used by the twinkle demo
pub const RAINBOW: [Color; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, BRIGHT_PINK, VIOLET];
