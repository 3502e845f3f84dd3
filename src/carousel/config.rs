// SPDX-License-Identifier: MPL-2.0
//! Carousel configuration and its theme attribute mapping.
//!
//! Every attribute is optional in the theme; whatever is absent (or carries a
//! string nobody recognizes) keeps the built-in default, so a sparse theme
//! still produces a working carousel.

use crate::geometry::Vec2;
use crate::render::Rgba;
use crate::theme::ThemeElement;

/// Carousel orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselType {
    #[default]
    Horizontal,
    Vertical,
    HorizontalWheel,
    VerticalWheel,
}

impl CarouselType {
    /// Parses a type name; unknown names read as
    /// [`CarouselType::Horizontal`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "vertical" => CarouselType::Vertical,
            "vertical_wheel" => CarouselType::VerticalWheel,
            "horizontal_wheel" => CarouselType::HorizontalWheel,
            _ => CarouselType::Horizontal,
        }
    }

    /// Whether the scroll axis is Y.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, CarouselType::Vertical | CarouselType::VerticalWheel)
    }

    /// Whether logos rotate with their slot distance.
    #[must_use]
    pub fn is_wheel(self) -> bool {
        matches!(
            self,
            CarouselType::VerticalWheel | CarouselType::HorizontalWheel
        )
    }
}

/// Cross-axis placement of the logos inside the carousel band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoAlignment {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Center,
}

impl LogoAlignment {
    /// Parses an alignment name; unknown names read as
    /// [`LogoAlignment::Center`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => LogoAlignment::Left,
            "right" => LogoAlignment::Right,
            "top" => LogoAlignment::Top,
            "bottom" => LogoAlignment::Bottom,
            _ => LogoAlignment::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub kind: CarouselType,
    pub pos: Vec2,
    pub size: Vec2,
    /// Normalized origin the carousel band is anchored by.
    pub origin: Vec2,
    pub color: Rgba,
    pub color_end: Rgba,
    pub gradient_horizontal: bool,
    pub logo_size: Vec2,
    pub logo_scale: f32,
    pub logo_alignment: LogoAlignment,
    pub max_logo_count: usize,
    pub z_index: f32,
    /// Degrees of rotation per slot of distance, wheel variants only.
    pub logo_rotation: f32,
    /// Rotation origin normalized against the logo box.
    pub logo_rotation_origin: Vec2,
}

impl CarouselConfig {
    /// Built-in defaults for a given screen size: a horizontal band across
    /// the vertical center of the screen.
    #[must_use]
    pub fn defaults(screen: Vec2) -> Self {
        let size = Vec2::new(screen.x, 0.2325 * screen.y);
        Self {
            kind: CarouselType::Horizontal,
            pos: Vec2::new(0.0, 0.5 * (screen.y - size.y)),
            size,
            origin: Vec2::ZERO,
            color: Rgba::from_hex("FFFFFFD8").unwrap_or(Rgba::WHITE),
            color_end: Rgba::from_hex("FFFFFFD8").unwrap_or(Rgba::WHITE),
            gradient_horizontal: true,
            logo_size: Vec2::new(0.25 * screen.x, 0.155 * screen.y),
            logo_scale: 1.2,
            logo_alignment: LogoAlignment::Center,
            max_logo_count: 3,
            z_index: 40.0,
            logo_rotation: 7.5,
            logo_rotation_origin: Vec2::new(-5.0, 0.5),
        }
    }

    /// Overrides whichever attributes the theme element carries. Normalized
    /// position/size attributes are denormalized against `screen`.
    pub fn apply_theme(&mut self, element: &ThemeElement, screen: Vec2) {
        if let Some(name) = element.string("type") {
            self.kind = CarouselType::from_name(name);
        }
        if let Some(size) = element.vec2("size") {
            self.size = size * screen;
        }
        if let Some(pos) = element.vec2("pos") {
            self.pos = pos * screen;
        }
        if let Some(origin) = element.vec2("origin") {
            self.origin = origin;
        }
        if let Some(color) = element.color("color") {
            self.color = color;
            self.color_end = color;
        }
        if let Some(color_end) = element.color("color_end") {
            self.color_end = color_end;
        }
        if let Some(gradient) = element.string("gradient") {
            self.gradient_horizontal = gradient == "horizontal";
        }
        if let Some(scale) = element.float("logo_scale") {
            self.logo_scale = scale;
        }
        if let Some(logo_size) = element.vec2("logo_size") {
            self.logo_size = logo_size * screen;
        }
        if let Some(count) = element.float("max_logo_count") {
            self.max_logo_count = count.round().max(1.0) as usize;
        }
        if let Some(z_index) = element.float("z_index") {
            self.z_index = z_index;
        }
        if let Some(rotation) = element.float("logo_rotation") {
            self.logo_rotation = rotation;
        }
        if let Some(origin) = element.vec2("logo_rotation_origin") {
            self.logo_rotation_origin = origin;
        }
        if let Some(alignment) = element.string("logo_alignment") {
            self.logo_alignment = LogoAlignment::from_name(alignment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::path::Path;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn element_from(toml: &str) -> Theme {
        Theme::from_toml_str(toml, Path::new("/theme")).expect("theme should parse")
    }

    #[test]
    fn defaults_center_the_band() {
        let config = CarouselConfig::defaults(SCREEN);
        assert_eq!(config.kind, CarouselType::Horizontal);
        assert_eq!(config.size.x, 1280.0);
        assert_eq!(config.max_logo_count, 3);
        assert_eq!(config.z_index, 40.0);
        // Band is vertically centered.
        assert!((config.pos.y - 0.5 * (720.0 - config.size.y)).abs() < 1e-3);
    }

    #[test]
    fn theme_overrides_only_present_attributes() {
        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            type = "vertical_wheel"
            logo_scale = 1.0
            max_logo_count = 5
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        let mut config = CarouselConfig::defaults(SCREEN);
        config.apply_theme(element, SCREEN);

        assert_eq!(config.kind, CarouselType::VerticalWheel);
        assert_eq!(config.logo_scale, 1.0);
        assert_eq!(config.max_logo_count, 5);
        // Untouched attributes keep defaults.
        assert_eq!(config.z_index, 40.0);
        assert_eq!(config.logo_alignment, LogoAlignment::Center);
    }

    #[test]
    fn unknown_enum_strings_fall_back_to_defaults() {
        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            type = "diagonal"
            logo_alignment = "sideways"
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        let mut config = CarouselConfig::defaults(SCREEN);
        config.kind = CarouselType::Vertical;
        config.apply_theme(element, SCREEN);

        assert_eq!(config.kind, CarouselType::Horizontal);
        assert_eq!(config.logo_alignment, LogoAlignment::Center);
    }

    #[test]
    fn color_sets_both_gradient_stops_until_overridden() {
        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            color = "112233FF"
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        let mut config = CarouselConfig::defaults(SCREEN);
        config.apply_theme(element, SCREEN);
        assert_eq!(config.color, config.color_end);

        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            color = "112233FF"
            color_end = "445566FF"
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        config.apply_theme(element, SCREEN);
        assert_ne!(config.color, config.color_end);
    }

    #[test]
    fn normalized_sizes_denormalize_against_screen() {
        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            size = [0.5, 0.25]
            logo_size = [0.1, 0.1]
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        let mut config = CarouselConfig::defaults(SCREEN);
        config.apply_theme(element, SCREEN);
        assert_eq!(config.size, Vec2::new(640.0, 180.0));
        assert_eq!(config.logo_size, Vec2::new(128.0, 72.0));
    }

    #[test]
    fn max_logo_count_rounds_and_clamps_to_one() {
        let theme = element_from(
            r#"
            [system.systemcarousel]
            kind = "carousel"
            max_logo_count = 0.2
            "#,
        );
        let element = theme.element("system", "systemcarousel", "carousel").unwrap();
        let mut config = CarouselConfig::defaults(SCREEN);
        config.apply_theme(element, SCREEN);
        assert_eq!(config.max_logo_count, 1);
    }

    #[test]
    fn wheel_and_axis_predicates() {
        assert!(CarouselType::VerticalWheel.is_wheel());
        assert!(CarouselType::VerticalWheel.is_vertical());
        assert!(CarouselType::HorizontalWheel.is_wheel());
        assert!(!CarouselType::HorizontalWheel.is_vertical());
        assert!(!CarouselType::Horizontal.is_wheel());
    }
}
