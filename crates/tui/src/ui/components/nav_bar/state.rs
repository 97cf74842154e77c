use folio_types::{SectionId, SectionRegistry};
use ratatui::layout::Rect;

use crate::ui::utils::display_width;

/// Rows covered by the navigation bar overlay.
pub const NAV_BAR_HEIGHT: u16 = 3;
pub const HIRE_ME_LABEL: &str = " Hire Me ";
pub const MENU_BUTTON_LABEL: &str = " ☰ Menu ";
const EDGE_PADDING: u16 = 2;
const ITEM_GAP: u16 = 3;

/// Something clickable in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Brand,
    Section(SectionId),
    HireMe,
    MenuButton,
}

/// Where each navigation target was laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLayout {
    pub targets: Vec<NavTarget>,
    pub areas: Vec<Rect>,
    /// Whether the section links collapsed into the menu button.
    pub collapsed: bool,
}

impl NavLayout {
    #[cfg(test)]
    pub fn area_of(&self, target: &NavTarget) -> Option<Rect> {
        self.targets.iter().zip(&self.areas).find(|(candidate, _)| *candidate == target).map(|(_, area)| *area)
    }

    fn push(&mut self, target: NavTarget, area: Rect) {
        self.targets.push(target);
        self.areas.push(area);
    }
}

/// Hit-test state recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct NavBarState {
    pub last_area: Rect,
    pub layout: NavLayout,
}

impl NavBarState {
    pub fn target_at(&self, x: u16, y: u16) -> Option<&NavTarget> {
        crate::ui::utils::find_target_index_by_mouse_position(&self.last_area, &self.layout.areas, x, y)
            .and_then(|index| self.layout.targets.get(index))
    }

    pub fn clear(&mut self) {
        self.last_area = Rect::default();
        self.layout = NavLayout::default();
    }
}

/// Lays out the brand on the left and "Hire Me" on the right, with section
/// links packed to the left of "Hire Me". Narrow terminals, or ones where the
/// links do not fit, get a menu button instead of the links.
pub fn layout_targets(area: Rect, brand: &str, registry: &SectionRegistry, narrow: bool) -> NavLayout {
    let mut layout = NavLayout::default();
    if area.height == 0 || area.width <= EDGE_PADDING * 2 {
        return layout;
    }
    let row = area.y + area.height.min(NAV_BAR_HEIGHT) / 2;
    let left = area.x + EDGE_PADDING;
    let right = area.right().saturating_sub(EDGE_PADDING);

    let brand_width = display_width(brand).min(right.saturating_sub(left));
    layout.push(NavTarget::Brand, Rect::new(left, row, brand_width, 1));
    let brand_end = left + brand_width;

    let hire_width = display_width(HIRE_ME_LABEL);
    let hire_x = right.saturating_sub(hire_width);
    let has_hire = hire_x >= brand_end + ITEM_GAP;
    let trailing_edge = if has_hire { hire_x } else { right };

    let links = if narrow {
        None
    } else {
        section_links(registry, brand_end + ITEM_GAP, trailing_edge.saturating_sub(ITEM_GAP), row)
    };
    match links {
        Some(links) => {
            for (id, rect) in links {
                layout.push(NavTarget::Section(id), rect);
            }
        }
        None => {
            layout.collapsed = true;
            let menu_width = display_width(MENU_BUTTON_LABEL);
            let menu_x = trailing_edge.saturating_sub(menu_width + if has_hire { ITEM_GAP } else { 0 });
            if menu_x >= brand_end + 1 {
                layout.push(NavTarget::MenuButton, Rect::new(menu_x, row, menu_width, 1));
            }
        }
    }
    if has_hire {
        layout.push(NavTarget::HireMe, Rect::new(hire_x, row, hire_width, 1));
    }
    layout
}

/// Packs section labels right-aligned against `end`; `None` when they do not
/// fit after `start`.
fn section_links(registry: &SectionRegistry, start: u16, end: u16, row: u16) -> Option<Vec<(SectionId, Rect)>> {
    let widths: Vec<u16> = registry.iter().map(|section| display_width(&section.label)).collect();
    let total = widths.iter().sum::<u16>() + ITEM_GAP * (widths.len().saturating_sub(1) as u16);
    if end < start || end - start < total {
        return None;
    }
    let mut x = end - total;
    let mut links = Vec::with_capacity(widths.len());
    for (section, width) in registry.iter().zip(widths) {
        links.push((section.id.clone(), Rect::new(x, row, width, 1)));
        x += width + ITEM_GAP;
    }
    Some(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16) -> Rect {
        Rect::new(0, 0, width, NAV_BAR_HEIGHT)
    }

    #[test]
    fn wide_bars_show_every_section() {
        let registry = SectionRegistry::portfolio();
        let layout = layout_targets(area(160), "Prakhar", &registry, false);

        assert!(!layout.collapsed);
        assert_eq!(layout.targets.first(), Some(&NavTarget::Brand));
        assert_eq!(layout.targets.last(), Some(&NavTarget::HireMe));
        let sections: Vec<_> = layout
            .targets
            .iter()
            .filter_map(|target| match target {
                NavTarget::Section(id) => Some(id.as_str().to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(sections.len(), registry.len());
        assert_eq!(sections[0], "home");

        let hire = layout.area_of(&NavTarget::HireMe).expect("hire me");
        assert_eq!(hire.right(), 158);
        assert!(layout.areas.iter().all(|rect| rect.y == 1));
        for pair in layout.areas.windows(2) {
            assert!(pair[0].right() <= pair[1].x, "targets overlap: {pair:?}");
        }
    }

    #[test]
    fn narrow_bars_collapse_into_the_menu_button() {
        let registry = SectionRegistry::portfolio();
        let layout = layout_targets(area(160), "Prakhar", &registry, true);
        assert!(layout.collapsed);
        assert!(layout.area_of(&NavTarget::MenuButton).is_some());
        assert!(!layout.targets.iter().any(|target| matches!(target, NavTarget::Section(_))));
    }

    #[test]
    fn links_that_do_not_fit_collapse_too() {
        let registry = SectionRegistry::portfolio();
        let layout = layout_targets(area(70), "Prakhar", &registry, false);
        assert!(layout.collapsed);
        let menu = layout.area_of(&NavTarget::MenuButton).expect("menu button");
        let hire = layout.area_of(&NavTarget::HireMe).expect("hire me");
        assert!(menu.right() < hire.x);
    }

    #[test]
    fn hit_testing_uses_the_recorded_layout() {
        let registry = SectionRegistry::portfolio();
        let state = NavBarState {
            last_area: area(160),
            layout: layout_targets(area(160), "Prakhar", &registry, false),
        };
        let hire = state.layout.area_of(&NavTarget::HireMe).expect("hire me");
        assert_eq!(state.target_at(hire.x, 1), Some(&NavTarget::HireMe));
        assert_eq!(state.target_at(2, 1), Some(&NavTarget::Brand));
        assert_eq!(state.target_at(hire.x, 0), None);
        assert_eq!(state.target_at(hire.x, 5), None);
    }

    #[test]
    fn targets_without_a_recorded_area_have_no_area() {
        let layout = NavLayout {
            targets: vec![NavTarget::Brand, NavTarget::HireMe],
            areas: vec![Rect::new(2, 1, 7, 1)],
            collapsed: false,
        };
        assert_eq!(layout.area_of(&NavTarget::Brand), Some(Rect::new(2, 1, 7, 1)));
        assert_eq!(layout.area_of(&NavTarget::HireMe), None);
    }
}
