use serde::{Deserialize, Serialize};

/// A display color token, components in `0.0..=1.0`.
///
/// The core never renders anything; these only travel alongside domain
/// values so a frontend can pick matching colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub const ORANGE: Rgb = Rgb::new(1.0, 0.58, 0.0);
    pub const PURPLE: Rgb = Rgb::new(0.69, 0.32, 0.87);
    pub const RED: Rgb = Rgb::new(1.0, 0.23, 0.19);
    pub const PINK: Rgb = Rgb::new(1.0, 0.18, 0.33);
    pub const GRAY: Rgb = Rgb::new(0.56, 0.56, 0.58);

    /// Brand blues used across wallet and category badges.
    pub const ROYAL_BLUE: Rgb = Rgb::new(0.3, 0.43, 0.96);
    pub const NAVY: Rgb = Rgb::new(0.21, 0.31, 0.78);
    pub const PERIWINKLE: Rgb = Rgb::new(0.4, 0.5, 0.9);
    pub const INDIGO: Rgb = Rgb::new(0.11, 0.09, 0.47);

    /// `#RRGGBB` form, handy for web frontends.
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}
