/// Scroll offset (px) past which a transparent bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

const LIGHT_TONE: &str =
    "text-primary-foreground/90 hover:text-primary-foreground hover:bg-primary-foreground/10";
const DEFAULT_TONE: &str = "text-muted-foreground hover:text-accent-foreground hover:bg-accent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    /// Never transparent: sticky with a blurred backdrop.
    Solid,
    /// Transparent bar once the page has scrolled.
    Scrolled,
    /// Over the hero with light text.
    TransparentLight,
    /// Over the hero with regular text.
    Transparent,
}

impl NavStyle {
    pub fn select(is_transparent: bool, scrolled: bool, light_text: bool) -> Self {
        match (is_transparent, scrolled, light_text) {
            (false, _, _) => NavStyle::Solid,
            (true, true, _) => NavStyle::Scrolled,
            (true, false, true) => NavStyle::TransparentLight,
            (true, false, false) => NavStyle::Transparent,
        }
    }

    pub fn uses_light_text(self) -> bool {
        self == NavStyle::TransparentLight
    }

    pub fn container_class(self) -> &'static str {
        match self {
            NavStyle::Solid => {
                "sticky top-0 w-full z-50 border-b bg-background/80 backdrop-blur-md transition-all duration-300"
            }
            NavStyle::Scrolled => {
                "sticky top-0 w-full z-50 bg-background/80 backdrop-blur-md border-b transition-all duration-300"
            }
            NavStyle::TransparentLight | NavStyle::Transparent => {
                "absolute top-0 left-0 w-full z-50 bg-transparent border-transparent transition-all duration-300"
            }
        }
    }

    pub fn logo_class(self) -> &'static str {
        if self.uses_light_text() {
            "font-bold text-xl transition-colors text-primary-foreground"
        } else {
            "font-bold text-xl transition-colors text-foreground"
        }
    }

    /// Colour classes for nav links; layout classes are added by the caller.
    pub fn link_tone(self) -> &'static str {
        if self.uses_light_text() { LIGHT_TONE } else { DEFAULT_TONE }
    }

    pub fn ghost_button_class(self) -> &'static str {
        if self.uses_light_text() {
            "text-primary-foreground hover:text-primary-foreground hover:bg-primary-foreground/10"
        } else {
            ""
        }
    }

    pub fn divider_class(self) -> &'static str {
        if self.uses_light_text() {
            "border-primary-foreground/20"
        } else {
            "border-border"
        }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn transparent_bar_follows_scroll_without_hysteresis() {
        let at = |y: f64| NavStyle::select(true, is_scrolled(y), true);
        assert_eq!(at(0.0), NavStyle::TransparentLight);
        assert_eq!(at(120.0), NavStyle::Scrolled);
        assert_eq!(at(49.0), NavStyle::TransparentLight);
    }

    #[test]
    fn selection_table_is_exhaustive() {
        for scrolled in [false, true] {
            for light in [false, true] {
                assert_eq!(NavStyle::select(false, scrolled, light), NavStyle::Solid);
            }
        }
        assert_eq!(NavStyle::select(true, true, false), NavStyle::Scrolled);
        assert_eq!(NavStyle::select(true, false, false), NavStyle::Transparent);
    }

    #[test]
    fn only_transparent_light_uses_light_classes() {
        assert_eq!(NavStyle::TransparentLight.link_tone(), LIGHT_TONE);
        assert_eq!(NavStyle::Transparent.link_tone(), DEFAULT_TONE);
        assert_eq!(NavStyle::Scrolled.ghost_button_class(), "");
        assert_eq!(NavStyle::Solid.divider_class(), "border-border");
        assert!(NavStyle::TransparentLight.logo_class().ends_with("text-primary-foreground"));
    }

    #[test]
    fn transparent_variants_are_absolutely_positioned() {
        assert!(NavStyle::Transparent.container_class().starts_with("absolute"));
        assert!(NavStyle::Scrolled.container_class().starts_with("sticky"));
        assert!(NavStyle::Solid.container_class().contains("backdrop-blur-md"));
    }

    #[test]
    fn menu_toggle_round_trips() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), menu);
        let open = menu.toggled();
        assert_eq!(open.toggled().toggled(), open);
    }

    #[test]
    fn closing_is_idempotent() {
        let open = MenuState::default().toggled();
        assert!(!open.closed().is_open());
        assert_eq!(open.closed().closed(), MenuState::default());
    }
}
