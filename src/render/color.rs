//! Rgba: Color values parsed from the palette's color strings.
//!
//! The composition stores colors as CSS-style hex strings because that is
//! what surrounding UI code (color pickers, export) traffics in. Everything
//! below the [`DrawSurface`](crate::render::DrawSurface) boundary works in
//! parsed [`Rgba`] values.

/// True-color RGBA value.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a fully opaque color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::with_alpha(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex value (e.g. `0xFF5500`), fully opaque.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a hex color string: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    /// (leading `#` optional). Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let nibble = |i: usize| -> Option<u8> {
            hex.as_bytes()
                .get(i)
                .and_then(|b| (*b as char).to_digit(16))
                .map(|d| d as u8)
        };
        let wide = |i: usize| -> Option<u8> { Some(nibble(i)? << 4 | nibble(i + 1)?) };

        match hex.len() {
            3 | 4 => {
                let short = |i: usize| -> Option<u8> { nibble(i).map(|d| d << 4 | d) };
                let a = if hex.len() == 4 { short(3)? } else { 255 };
                Some(Self::with_alpha(short(0)?, short(1)?, short(2)?, a))
            }
            6 | 8 => {
                let a = if hex.len() == 8 { wide(6)? } else { 255 };
                Some(Self::with_alpha(wide(0)?, wide(2)?, wide(4)?, a))
            }
            _ => None,
        }
    }

    /// Parse a color string, falling back to transparent for anything
    /// unparsable. Unknown colors therefore draw nothing rather than panic.
    #[inline]
    pub fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::TRANSPARENT)
    }

    /// Whether this color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Source-over composite `self` onto `dst`.
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = u32::from(self.a);
        let inv = 255 - sa;
        let channel = |s: u8, d: u8, da: u32| (u32::from(s) * sa + u32::from(d) * da * inv / 255);
        let da = u32::from(dst.a);
        let out_a = sa + da * inv / 255;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }
        Self {
            r: (channel(self.r, dst.r, da) / out_a) as u8,
            g: (channel(self.g, dst.g, da) / out_a) as u8,
            b: (channel(self.b, dst.b, da) / out_a) as u8,
            a: out_a as u8,
        }
    }
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<u32> for Rgba {
    /// Convert from a 24-bit hex value (e.g. `0xFF5500`), fully opaque.
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgba::parse("#ff8000"), Some(Rgba::new(255, 128, 0)));
        assert_eq!(Rgba::parse("ff8000"), Some(Rgba::new(255, 128, 0)));
        assert_eq!(
            Rgba::parse("#ff800080"),
            Some(Rgba::with_alpha(255, 128, 0, 128))
        );
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Rgba::parse("#f80"), Some(Rgba::new(255, 136, 0)));
        assert_eq!(Rgba::parse("#f808"), Some(Rgba::with_alpha(255, 136, 0, 136)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgba::parse("red"), None);
        assert_eq!(Rgba::parse("#ff80"), None);
        assert_eq!(Rgba::parse(""), None);
        assert_eq!(Rgba::parse_lossy("not-a-color"), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_from_u32() {
        let c: Rgba = 0xFF8000.into();
        assert_eq!(c, Rgba::new(255, 128, 0));
    }

    #[test]
    fn test_over_opaque_replaces() {
        let red = Rgba::new(255, 0, 0);
        assert_eq!(red.over(Rgba::WHITE), red);
    }

    #[test]
    fn test_over_transparent_keeps_dst() {
        assert_eq!(Rgba::TRANSPARENT.over(Rgba::WHITE), Rgba::WHITE);
    }

    #[test]
    fn test_over_half_alpha_blends() {
        let half_red = Rgba::with_alpha(255, 0, 0, 128);
        let out = half_red.over(Rgba::BLACK);
        assert!(out.r > 120 && out.r < 136);
        assert_eq!(out.g, 0);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_debug_hex() {
        assert_eq!(format!("{:?}", Rgba::new(255, 128, 0)), "#ff8000");
        assert_eq!(
            format!("{:?}", Rgba::with_alpha(255, 128, 0, 64)),
            "#ff800040"
        );
    }
}
