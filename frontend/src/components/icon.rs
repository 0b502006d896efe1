use yew::prelude::*;

use crate::content::Icon;

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::CircleDollarSign => "$",
            Icon::Building => "🏢",
            Icon::Truck => "🚚",
            Icon::Layers => "≡",
            Icon::Shield => "🛡",
            Icon::Rocket => "🚀",
            Icon::ChevronRight => "›",
            Icon::ArrowRight => "→",
            Icon::Star => "★",
            Icon::Check => "✓",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            Icon::CircleDollarSign => "icon-circle-dollar-sign",
            Icon::Building => "icon-building",
            Icon::Truck => "icon-truck",
            Icon::Layers => "icon-layers",
            Icon::Shield => "icon-shield",
            Icon::Rocket => "icon-rocket",
            Icon::ChevronRight => "icon-chevron-right",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::Star => "icon-star",
            Icon::Check => "icon-check",
            Icon::Mail => "icon-mail",
            Icon::MapPin => "icon-map-pin",
            Icon::Calendar => "icon-calendar",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-close",
        }
    }
}

pub fn icon(icon: Icon) -> Html {
    html! {
        <i class={classes!("icon", icon.class_name())} aria-hidden="true">{icon.glyph()}</i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Icon; 15] = [
        Icon::CircleDollarSign,
        Icon::Building,
        Icon::Truck,
        Icon::Layers,
        Icon::Shield,
        Icon::Rocket,
        Icon::ChevronRight,
        Icon::ArrowRight,
        Icon::Star,
        Icon::Check,
        Icon::Mail,
        Icon::MapPin,
        Icon::Calendar,
        Icon::Menu,
        Icon::Close,
    ];

    #[test]
    fn glyphs_avoid_sparsely_covered_symbol_blocks() {
        for icon in ALL {
            for c in icon.glyph().chars() {
                let code = c as u32;
                // Miscellaneous Technical and the tail of Miscellaneous Symbols
                assert!(!(0x2300..=0x23FF).contains(&code), "{:?} uses U+{:04X}", icon, code);
                assert!(!(0x26C0..=0x26FF).contains(&code), "{:?} uses U+{:04X}", icon, code);
            }
        }
    }

    #[test]
    fn every_icon_has_its_own_class() {
        let classes: HashSet<_> = ALL.iter().map(|icon| icon.class_name()).collect();
        assert_eq!(classes.len(), ALL.len());
        assert!(ALL.iter().all(|icon| !icon.glyph().is_empty()));
    }
}
