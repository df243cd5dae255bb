//! Page theming from the dominant color of the profile photo.
use leptos::logging::log;
#[cfg(target_arch = "wasm32")]
use leptos::logging::warn;
use thiserror::Error;

/// Side of the canvas the image is scaled into before sampling.
pub const SAMPLE_SIZE: u32 = 64;
// RGBA bytes between sampled pixels: every 8th pixel.
const SAMPLE_STRIDE: usize = 4 * 8;
const MIN_ALPHA: u8 = 200;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThemeError {
    #[error("no opaque pixels to sample")]
    NoPixels,
    #[error("canvas unavailable: {0}")]
    Canvas(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h * 60.0, s, l }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0 * self.l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        Rgb {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }

    pub fn rotate_hue(self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Scales saturation (capped at 1) and shifts lightness (clamped to [0, 1]).
    pub fn adjust(self, saturation_factor: f64, lightness_delta: f64) -> Hsl {
        Hsl {
            h: self.h,
            s: (self.s * saturation_factor).min(1.0),
            l: clamp01(self.l + lightness_delta),
        }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Average color of every 8th sufficiently opaque pixel in RGBA data.
pub fn average_opaque_color(rgba: &[u8]) -> Option<Rgb> {
    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for px in rgba.chunks_exact(4).step_by(SAMPLE_STRIDE / 4) {
        if px[3] < MIN_ALPHA {
            continue;
        }
        r += u64::from(px[0]);
        g += u64::from(px[1]);
        b += u64::from(px[2]);
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let avg = |sum: u64| ((sum as f64) / (count as f64)).round() as u8;
    Some(Rgb {
        r: avg(r),
        g: avg(g),
        b: avg(b),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub primary: Rgb,
    pub primary_hover: Rgb,
    pub accent: Rgb,
    pub hero_start: Rgb,
    pub hero_end: Rgb,
}

impl ThemePalette {
    pub fn from_primary(primary: Rgb) -> Self {
        let hsl = primary.to_hsl();
        ThemePalette {
            primary,
            primary_hover: hsl.adjust(1.0, -0.12).to_rgb(),
            accent: hsl.rotate_hue(40.0).adjust(1.1, 0.05).to_rgb(),
            hero_start: hsl.adjust(1.05, 0.10).to_rgb(),
            hero_end: hsl.adjust(1.10, -0.10).to_rgb(),
        }
    }

    /// CSS custom properties to set on the document root.
    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        [
            ("--color-primary", self.primary.to_css()),
            ("--color-primary-hover", self.primary_hover.to_css()),
            ("--color-accent", self.accent.to_css()),
            ("--color-hero-start", self.hero_start.to_css()),
            ("--color-hero-end", self.hero_end.to_css()),
        ]
    }
}

#[cfg(target_arch = "wasm32")]
fn sample_image(img: &web_sys::HtmlImageElement) -> Result<Vec<u8>, ThemeError> {
    use wasm_bindgen::JsCast;

    let canvas_err = |e: wasm_bindgen::JsValue| ThemeError::Canvas(format!("{:?}", e));
    let canvas: web_sys::HtmlCanvasElement = leptos::document()
        .create_element("canvas")
        .map_err(canvas_err)?
        .dyn_into()
        .map_err(|_| ThemeError::Canvas("not a canvas".into()))?;
    canvas.set_width(SAMPLE_SIZE);
    canvas.set_height(SAMPLE_SIZE);
    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(canvas_err)?
        .ok_or_else(|| ThemeError::Canvas("no 2d context".into()))?
        .dyn_into()
        .map_err(|_| ThemeError::Canvas("unexpected context type".into()))?;
    let side = f64::from(SAMPLE_SIZE);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, side, side)
        .map_err(canvas_err)?;
    // Throws for cross-origin images without CORS.
    let data = ctx.get_image_data(0.0, 0.0, side, side).map_err(canvas_err)?;
    Ok(data.data().0)
}

#[cfg(target_arch = "wasm32")]
fn apply_palette(palette: &ThemePalette) -> Result<(), ThemeError> {
    use wasm_bindgen::JsCast;

    let root: web_sys::HtmlElement = leptos::document()
        .document_element()
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| ThemeError::Canvas("no document element".into()))?;
    let style = root.style();
    for (name, value) in palette.css_properties() {
        style
            .set_property(name, &value)
            .map_err(|e| ThemeError::Canvas(format!("{:?}", e)))?;
    }
    Ok(())
}

/// Recolors the page from a loaded image. Failures keep the default theme.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_from_image(img: &web_sys::HtmlImageElement) {
    let result = sample_image(img)
        .and_then(|rgba| average_opaque_color(&rgba).ok_or(ThemeError::NoPixels))
        .map(ThemePalette::from_primary)
        .and_then(|palette| apply_palette(&palette).map(|_| palette));
    match result {
        Ok(palette) => log!("[THEME] Applied primary {}", palette.primary.to_css()),
        Err(err) => warn!("[THEME] Keeping default theme: {}", err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_from_image(_img: &web_sys::HtmlImageElement) {
    log!("[THEME] Theming only runs in the browser");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[(u8, u8, u8, u8)]) -> Vec<u8> {
        pixels.iter().flat_map(|&(r, g, b, a)| [r, g, b, a]).collect()
    }

    #[test]
    fn test_hsl_round_trip_of_primaries() {
        for rgb in [
            Rgb { r: 255, g: 0, b: 0 },
            Rgb { r: 0, g: 128, b: 0 },
            Rgb { r: 6, g: 182, b: 212 },
            Rgb { r: 120, g: 120, b: 120 },
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        }
    }

    #[test]
    fn test_known_hsl_values() {
        let red = Rgb { r: 255, g: 0, b: 0 }.to_hsl();
        assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

        let magenta_ish = Rgb { r: 255, g: 0, b: 128 }.to_hsl();
        assert!(magenta_ish.h > 329.0 && magenta_ish.h < 331.0);

        let grey = Rgb { r: 51, g: 51, b: 51 }.to_hsl();
        assert_eq!(grey.s, 0.0);
        assert_eq!(grey.h, 0.0);
    }

    #[test]
    fn test_rotate_and_adjust_stay_in_range() {
        let hsl = Hsl { h: 340.0, s: 0.95, l: 0.97 };
        assert_eq!(hsl.rotate_hue(40.0).h, 20.0);
        assert_eq!(hsl.rotate_hue(-360.0).h, 340.0);
        let adjusted = hsl.adjust(1.1, 0.10);
        assert_eq!(adjusted.s, 1.0);
        assert_eq!(adjusted.l, 1.0);
        assert_eq!(hsl.adjust(1.0, -2.0).l, 0.0);
    }

    #[test]
    fn test_average_skips_translucent_and_unsampled_pixels() {
        // 16 pixels: only indices 0 and 8 are sampled.
        let mut pixels = vec![(255, 255, 255, 255); 16];
        pixels[0] = (10, 20, 30, 255);
        pixels[8] = (20, 41, 60, 200);
        assert_eq!(
            average_opaque_color(&rgba(&pixels)),
            Some(Rgb { r: 15, g: 31, b: 45 })
        );

        pixels[8].3 = 199;
        assert_eq!(
            average_opaque_color(&rgba(&pixels)),
            Some(Rgb { r: 10, g: 20, b: 30 })
        );
    }

    #[test]
    fn test_average_of_transparent_image_is_none() {
        let pixels = vec![(255, 0, 0, 0); 64];
        assert_eq!(average_opaque_color(&rgba(&pixels)), None);
        assert_eq!(average_opaque_color(&[]), None);
    }

    #[test]
    fn test_palette_properties() {
        let palette = ThemePalette::from_primary(Rgb { r: 6, g: 182, b: 212 });
        let props = palette.css_properties();
        assert_eq!(props[0], ("--color-primary", "rgb(6, 182, 212)".to_string()));
        assert_eq!(props.len(), 5);
        // Hover is darker, hero start lighter than hero end.
        assert!(palette.primary_hover.to_hsl().l < palette.primary.to_hsl().l);
        assert!(palette.hero_start.to_hsl().l > palette.hero_end.to_hsl().l);
    }
}
