use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Linearly blends towards `to` by `amount` (0 keeps `self`, 1 yields `to`).
    fn mix(self, to: Rgba, amount: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn mix(self, to: Rgba, amount: f32) -> Self {
        let amount = amount.clamp(0., 1.);
        let lerp = |from: f32, to: f32| from + (to - from) * amount;

        Rgba {
            r: lerp(self.r, to.r),
            g: lerp(self.g, to.g),
            b: lerp(self.b, to.b),
            a: lerp(self.a, to.a),
        }
    }
}
