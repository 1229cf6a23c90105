use egui::ecolor::HsvaGamma;
use egui::Color32;

/// Same colour with opacity `alpha` in [0, 1]
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// CSS `hsla()`: hue in degrees, saturation, lightness and alpha in [0, 1]
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color32 {
    // HSL -> HSV, then ecolor handles the channels
    let value = lightness + saturation * lightness.min(1.0 - lightness);
    let hsv_saturation = if value > 0.0 {
        2.0 * (1.0 - lightness / value)
    } else {
        0.0
    };
    let opaque = Color32::from(HsvaGamma {
        h: hue.rem_euclid(360.0) / 360.0,
        s: hsv_saturation,
        v: value,
        a: 1.0,
    });
    with_alpha(opaque, alpha)
}

pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    hsla(hue, saturation, lightness, 1.0)
}
