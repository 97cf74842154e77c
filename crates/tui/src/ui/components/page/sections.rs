//! Lays the portfolio out as a column of styled rows.
//!
//! Every registry section becomes one region of the resulting
//! [`PageDocument`]; the footer follows the last region and belongs to none.

use folio_engine::{ProjectFilter, RegionBounds};
use folio_types::{Portfolio, Section, SectionId, SectionRegistry, Skill, SocialLinks};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::page::{MIN_CONTENT_WIDTH, PageAction, PageDocument, PageLink};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::display_width;

/// Blank rows above each section's heading. Tall enough that the navigation
/// bar never covers a heading after `go_to`.
pub const SECTION_PADDING_TOP: usize = 4;
pub const SECTION_PADDING_BOTTOM: usize = 1;
const PROSE_WIDTH: u16 = 72;
const GAUGE_MAX_WIDTH: u16 = 30;

/// Inputs that shape the page besides the content itself.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub width: u16,
    pub viewport_height: u16,
    pub filter: ProjectFilter,
    pub year: i32,
}

pub fn build_document(portfolio: &Portfolio, registry: &SectionRegistry, theme: &dyn Theme, context: PageContext) -> PageDocument {
    let mut writer = PageWriter::new(theme, context.width.max(MIN_CONTENT_WIDTH));
    let mut regions = Vec::with_capacity(registry.len());
    for section in registry.iter() {
        let top = writer.row();
        writer.blank(SECTION_PADDING_TOP);
        match section.id.as_str() {
            "home" => {
                hero(&mut writer, portfolio);
                writer.pad_to(top, usize::from(context.viewport_height));
            }
            "about" => about(&mut writer, section, portfolio),
            "projects" => projects(&mut writer, section, portfolio, context.filter),
            "cinematography" => cinematography(&mut writer, section, portfolio),
            "skills" => skills(&mut writer, section, portfolio),
            "startups" => startups(&mut writer, section, portfolio),
            "contact" => contact(&mut writer, section, portfolio),
            _ => writer.heading(&section.label, ""),
        }
        writer.blank(SECTION_PADDING_BOTTOM);
        regions.push((section.id.clone(), RegionBounds::new(top as f64, writer.row() as f64)));
    }
    footer(&mut writer, portfolio, context.year);

    let (lines, links) = writer.finish();
    PageDocument { lines, regions, links }
}

fn hero(writer: &mut PageWriter, portfolio: &Portfolio) {
    let hero = &portfolio.hero;
    let theme = writer.theme;
    let name = if hero.name.is_empty() { &portfolio.name } else { &hero.name };
    writer.centered(vec![Span::styled(name.clone(), theme.heading_style())]);
    writer.blank(1);
    if !hero.tagline.is_empty() {
        writer.centered(vec![Span::styled(hero.tagline.clone(), theme.accent_emphasis_style())]);
    }
    if !hero.subtitle.is_empty() {
        writer.centered(vec![Span::styled(hero.subtitle.clone(), theme.text_secondary_style())]);
    }
    writer.blank(1);
    writer.wrapped_centered(&hero.description, theme.text_primary_style());
    writer.blank(1);
    writer.buttons(
        vec![
            (" View My Work ".to_string(), th::button_primary_style(theme), PageAction::GoTo(SectionId::new("projects"))),
            (" Get In Touch ".to_string(), th::button_secondary_style(theme, false), PageAction::GoTo(SectionId::new("contact"))),
        ],
        true,
    );
    if let Some(resume) = hero.resume_url.as_deref() {
        writer.blank(1);
        writer.centered(vec![
            Span::styled("Resume ", theme.text_muted_style()),
            Span::styled(resume.to_string(), theme.status_info()),
        ]);
    }
    if !hero.social_links.is_empty() {
        writer.blank(1);
        writer.socials(&hero.social_links, true);
    }
}

fn about(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio) {
    let about = &portfolio.about;
    let theme = writer.theme;
    writer.heading(&section.label, "");
    for paragraph in about.bio.split("\n\n") {
        writer.wrapped(paragraph.trim(), theme.text_primary_style(), 0);
        writer.blank(1);
    }

    let education = &about.education;
    if !education.degree.is_empty() {
        writer.subheading("Education");
        writer.line(vec![Span::styled(education.degree.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD))]);
        writer.line(vec![
            Span::styled(education.institution.clone(), theme.text_primary_style()),
            Span::styled(format!("  {}", education.year), theme.text_muted_style()),
        ]);
        writer.blank(1);
    }

    if !about.timeline.is_empty() {
        writer.subheading("Journey");
        let year_width = about.timeline.iter().map(|milestone| milestone.year.width()).max().unwrap_or(0);
        let gutter = year_width + 3;
        for milestone in &about.timeline {
            writer.line(vec![
                Span::styled(pad_right(&milestone.year, year_width), theme.accent_primary_style()),
                Span::styled(" │ ", theme.border_style()),
                Span::styled(milestone.title.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD)),
            ]);
            let rail = format!("{} │ ", " ".repeat(year_width));
            for line in wrap(&milestone.description, usize::from(writer.width).saturating_sub(gutter)) {
                writer.line(vec![
                    Span::styled(rail.clone(), theme.border_style()),
                    Span::styled(line, theme.text_primary_style()),
                ]);
            }
        }
        writer.blank(1);
    }

    if !about.interests.is_empty() {
        writer.subheading("Interests");
        writer.tags(&about.interests, 0);
    }
}

fn projects(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio, filter: ProjectFilter) {
    let theme = writer.theme;
    writer.heading(&section.label, "Things I've designed, built and shipped");
    writer.buttons(
        ProjectFilter::ALL
            .iter()
            .map(|candidate| {
                let style = th::button_secondary_style(theme, *candidate == filter);
                (format!(" {} ", candidate.label()), style, PageAction::Filter(*candidate))
            })
            .collect(),
        true,
    );
    writer.blank(1);

    let visible = filter.apply(&portfolio.projects);
    if visible.is_empty() {
        writer.centered(vec![Span::styled(
            format!("No projects match the \"{}\" filter.", filter.label()),
            theme.text_muted_style(),
        )]);
        return;
    }

    for project in visible {
        let mut title = vec![
            Span::styled("▌ ", theme.accent_primary_style()),
            Span::styled(project.title.clone(), theme.heading_style()),
        ];
        if project.featured {
            title.push(Span::raw("  "));
            title.push(Span::styled(" ★ Featured ", th::badge_style(theme)));
        }
        writer.line(title);
        writer.wrapped(&project.description, theme.text_primary_style(), 2);
        if !project.technologies.is_empty() {
            writer.tags(&project.technologies, 2);
        }
        for (label, url) in [("Code", project.github_url.as_deref()), ("Live", project.live_url.as_deref())] {
            if let Some(url) = url {
                writer.field(label, url, theme.status_info(), 2);
            }
        }
        writer.blank(1);
    }
}

fn cinematography(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio) {
    let cinematography = &portfolio.cinematography;
    let theme = writer.theme;
    writer.heading(non_empty_or(&cinematography.title, &section.label), &cinematography.subtitle);
    if !cinematography.description.is_empty() {
        writer.wrapped_centered(&cinematography.description, theme.text_primary_style());
        writer.blank(1);
    }
    for reel in &cinematography.reels {
        writer.line(vec![
            Span::styled("▶ ", theme.accent_primary_style()),
            Span::styled(reel.title.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD)),
        ]);
        writer.wrapped(&reel.description, theme.text_primary_style(), 2);
        if !reel.video.is_empty() {
            writer.line(vec![Span::raw("  "), Span::styled(reel.video.clone(), theme.text_muted_style())]);
        }
        writer.blank(1);
    }
}

fn skills(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio) {
    writer.heading(&section.label, "Languages, tools and frameworks I work with");
    for (title, skills) in portfolio.skills.categories() {
        if skills.is_empty() {
            continue;
        }
        writer.subheading(title);
        let name_width = skills.iter().map(|skill| skill.name.width()).max().unwrap_or(0) + 2;
        for skill in skills {
            writer.gauge(skill, name_width);
        }
        writer.blank(1);
    }
}

fn startups(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio) {
    let startups = &portfolio.startups;
    let theme = writer.theme;
    writer.heading(non_empty_or(&startups.title, &section.label), &startups.subtitle);

    for venture in &startups.ventures {
        let status_style = if venture.status.eq_ignore_ascii_case("active") {
            theme.status_success()
        } else {
            theme.text_muted_style()
        };
        writer.line(vec![
            Span::styled("▌ ", theme.accent_primary_style()),
            Span::styled(venture.name.clone(), theme.heading_style()),
            Span::raw("  "),
            Span::styled(format!("● {}", venture.status), status_style),
        ]);
        writer.line(vec![
            Span::raw("  "),
            Span::styled(venture.role.clone(), theme.accent_secondary_style()),
            Span::styled(format!(" · {}", venture.year), theme.text_muted_style()),
        ]);
        writer.wrapped(&venture.description, theme.text_primary_style(), 2);
        for achievement in &venture.achievements {
            writer.bullet("✓ ", theme.status_success(), achievement, 2);
        }
        if !venture.technologies.is_empty() {
            writer.tags(&venture.technologies, 2);
        }
        if let Some(website) = venture.website.as_deref() {
            writer.field("Web", website, theme.status_info(), 2);
        }
        writer.blank(1);
    }

    if !startups.awards.is_empty() {
        writer.subheading("Awards & Recognition");
        for award in &startups.awards {
            writer.line(vec![
                Span::styled("★ ", theme.status_warning()),
                Span::styled(award.title.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD)),
            ]);
            writer.line(vec![
                Span::raw("  "),
                Span::styled(format!("{} · {}", award.organization, award.year), theme.text_muted_style()),
            ]);
            writer.wrapped(&award.description, theme.text_primary_style(), 2);
        }
        writer.blank(1);
    }

    if !startups.stats.is_empty() {
        let value_width = startups.stats.iter().map(|stat| format!("{}+", stat.value).len()).max().unwrap_or(0);
        for stat in &startups.stats {
            writer.line(vec![
                Span::styled(format!("{:>value_width$}", format!("{}+", stat.value)), theme.accent_emphasis_style()),
                Span::raw("  "),
                Span::styled(stat.label.clone(), theme.text_primary_style()),
            ]);
        }
    }
}

fn contact(writer: &mut PageWriter, section: &Section, portfolio: &Portfolio) {
    let contact = &portfolio.contact;
    let theme = writer.theme;
    writer.heading(non_empty_or(&contact.title, &section.label), &contact.subtitle);
    if !contact.description.is_empty() {
        writer.wrapped_centered(&contact.description, theme.text_primary_style());
        writer.blank(1);
    }

    if !contact.email.is_empty() {
        writer.field("Email", &contact.email, theme.status_info(), 0);
    }
    if let Some(phone) = contact.phone.as_deref() {
        writer.field("Phone", phone, theme.text_secondary_style(), 0);
    }
    if let Some(location) = contact.location.as_deref() {
        writer.field("Location", location, theme.text_secondary_style(), 0);
    }
    if !contact.social_links.is_empty() {
        writer.blank(1);
        writer.socials(&contact.social_links, false);
    }
    if contact.availability.is_some() || contact.response_time.is_some() {
        writer.blank(1);
    }
    if let Some(availability) = contact.availability.as_deref() {
        writer.line(vec![
            Span::styled("● ", theme.status_success()),
            Span::styled(availability.to_string(), theme.text_secondary_style()),
        ]);
    }
    if let Some(response_time) = contact.response_time.as_deref() {
        writer.line(vec![Span::styled(format!("  Typical response: {response_time}"), theme.text_muted_style())]);
    }
    writer.blank(1);
    writer.buttons(
        vec![(" ↑ Back to top ".to_string(), th::button_secondary_style(theme, false), PageAction::GoTo(SectionId::new("home")))],
        true,
    );
}

fn footer(writer: &mut PageWriter, portfolio: &Portfolio, year: i32) {
    let theme = writer.theme;
    writer.line(vec![Span::styled("─".repeat(usize::from(writer.width)), theme.border_style())]);
    writer.centered(vec![Span::styled(
        format!("© {year} {}. All rights reserved.", portfolio.name),
        theme.text_muted_style(),
    )]);
    writer.blank(1);
}

/// Accumulates rows and clickable spans for one document.
struct PageWriter<'a> {
    theme: &'a dyn Theme,
    width: u16,
    lines: Vec<Line<'static>>,
    links: Vec<PageLink>,
}

impl<'a> PageWriter<'a> {
    fn new(theme: &'a dyn Theme, width: u16) -> Self {
        Self {
            theme,
            width,
            lines: Vec::new(),
            links: Vec::new(),
        }
    }

    fn row(&self) -> usize {
        self.lines.len()
    }

    fn finish(self) -> (Vec<Line<'static>>, Vec<PageLink>) {
        (self.lines, self.links)
    }

    fn blank(&mut self, rows: usize) {
        self.lines.extend((0..rows).map(|_| Line::default()));
    }

    /// Appends blank rows until the region started at `top` spans `height`.
    fn pad_to(&mut self, top: usize, height: usize) {
        let used = self.row() - top;
        self.blank(height.saturating_sub(used));
    }

    fn line(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    /// Pushes `spans` centered by left padding. Returns the padding width.
    fn centered(&mut self, mut spans: Vec<Span<'static>>) -> u16 {
        let content_width: u16 = spans.iter().map(|span| display_width(&span.content)).sum();
        let padding = self.width.saturating_sub(content_width) / 2;
        if padding > 0 {
            spans.insert(0, Span::raw(" ".repeat(usize::from(padding))));
        }
        self.line(spans);
        padding
    }

    fn heading(&mut self, title: &str, subtitle: &str) {
        let theme = self.theme;
        self.centered(vec![Span::styled(title.to_string(), theme.heading_style())]);
        let rule_width = display_width(title).clamp(4, 12);
        self.centered(vec![Span::styled("━".repeat(usize::from(rule_width)), theme.accent_primary_style())]);
        if !subtitle.is_empty() {
            self.wrapped_centered(subtitle, theme.text_muted_style());
        }
        self.blank(1);
    }

    fn subheading(&mut self, title: &str) {
        let style = self.theme.accent_emphasis_style();
        self.line(vec![Span::styled(title.to_string(), style)]);
    }

    fn wrapped(&mut self, text: &str, style: Style, indent: u16) {
        let prefix = " ".repeat(usize::from(indent));
        for line in wrap(text, usize::from(self.width.saturating_sub(indent))) {
            self.line(vec![Span::raw(prefix.clone()), Span::styled(line, style)]);
        }
    }

    fn wrapped_centered(&mut self, text: &str, style: Style) {
        for line in wrap(text, usize::from(self.width.min(PROSE_WIDTH))) {
            self.centered(vec![Span::styled(line, style)]);
        }
    }

    /// A marker followed by text wrapped with a hanging indent.
    fn bullet(&mut self, marker: &'static str, marker_style: Style, text: &str, indent: u16) {
        let hang = indent + display_width(marker);
        let style = self.theme.text_primary_style();
        for (index, line) in wrap(text, usize::from(self.width.saturating_sub(hang))).into_iter().enumerate() {
            let lead = if index == 0 {
                vec![Span::raw(" ".repeat(usize::from(indent))), Span::styled(marker, marker_style)]
            } else {
                vec![Span::raw(" ".repeat(usize::from(hang)))]
            };
            let mut spans = lead;
            spans.push(Span::styled(line, style));
            self.line(spans);
        }
    }

    /// Flows badge-styled tags across as many rows as needed.
    fn tags(&mut self, tags: &[String], indent: u16) {
        let style = th::badge_style(self.theme);
        let mut spans = vec![Span::raw(" ".repeat(usize::from(indent)))];
        let mut used = indent;
        for tag in tags {
            let badge = format!(" {tag} ");
            let badge_width = display_width(&badge);
            if used > indent && used + 1 + badge_width > self.width {
                self.line(std::mem::replace(&mut spans, vec![Span::raw(" ".repeat(usize::from(indent)))]));
                used = indent;
            }
            if used > indent {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(badge, style));
            used += badge_width;
        }
        if used > indent {
            self.line(spans);
        }
    }

    /// One row of clickable buttons separated by two spaces.
    fn buttons(&mut self, buttons: Vec<(String, Style, PageAction)>, centered: bool) {
        let row = self.row();
        let mut spans = Vec::with_capacity(buttons.len() * 2);
        let mut ranges = Vec::with_capacity(buttons.len());
        let mut column = 0u16;
        for (index, (label, style, action)) in buttons.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
                column += 2;
            }
            let width = display_width(&label);
            ranges.push((action, column..column + width));
            spans.push(Span::styled(label, style));
            column += width;
        }
        let offset = if centered {
            self.centered(spans)
        } else {
            self.line(spans);
            0
        };
        self.links.extend(ranges.into_iter().map(|(action, columns)| PageLink {
            action,
            row,
            columns: columns.start + offset..columns.end + offset,
        }));
    }

    /// `Label     value` with labels aligned to a fixed column.
    fn field(&mut self, label: &str, value: &str, value_style: Style, indent: u16) {
        let theme = self.theme;
        self.line(vec![
            Span::raw(" ".repeat(usize::from(indent))),
            Span::styled(pad_right(label, 10), theme.text_muted_style()),
            Span::styled(value.to_string(), value_style),
        ]);
    }

    fn socials(&mut self, links: &SocialLinks, centered: bool) {
        let theme = self.theme;
        if centered {
            let mut spans = Vec::new();
            for (index, name) in links.keys().enumerate() {
                if index > 0 {
                    spans.push(Span::styled("  •  ", theme.text_muted_style()));
                }
                spans.push(Span::styled(capitalize(name), theme.accent_secondary_style()));
            }
            self.centered(spans);
        } else {
            for (name, url) in links {
                self.field(&capitalize(name), url, theme.status_info(), 0);
            }
        }
    }

    fn gauge(&mut self, skill: &Skill, name_width: usize) {
        let theme = self.theme;
        let level = skill.level.min(100);
        let available = usize::from(self.width).saturating_sub(name_width + 6);
        let bar_width = available.min(usize::from(GAUGE_MAX_WIDTH)).max(4);
        let filled = (usize::from(level) * bar_width + 50) / 100;
        self.line(vec![
            Span::styled(pad_right(&skill.name, name_width), theme.text_secondary_style()),
            Span::styled("█".repeat(filled), theme.accent_primary_style()),
            Span::styled("░".repeat(bar_width - filled), theme.border_style()),
            Span::styled(format!(" {level:>3}%"), theme.text_muted_style()),
        ]);
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    textwrap::wrap(text, width.max(1)).into_iter().map(|line| line.into_owned()).collect()
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use folio_types::Project;

    use super::*;
    use crate::ui::theme::MidnightTheme;

    fn context(filter: ProjectFilter) -> PageContext {
        PageContext {
            width: 80,
            viewport_height: 30,
            filter,
            year: 2026,
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn build(portfolio: &Portfolio, filter: ProjectFilter) -> PageDocument {
        build_document(portfolio, &SectionRegistry::portfolio(), &MidnightTheme::new(), context(filter))
    }

    #[test]
    fn regions_are_contiguous_and_in_registry_order() {
        let portfolio = Portfolio::embedded().expect("embedded");
        let document = build(&portfolio, ProjectFilter::All);

        let ids: Vec<&str> = document.regions.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["home", "about", "projects", "cinematography", "skills", "startups", "contact"]);
        assert_eq!(document.regions[0].1.top, 0.0);
        for pair in document.regions.windows(2) {
            assert_eq!(pair[0].1.bottom, pair[1].1.top);
        }
        let last_bottom = document.regions[6].1.bottom as usize;
        assert!(document.height() > last_bottom, "footer follows the last region");
    }

    #[test]
    fn hero_fills_the_viewport() {
        let portfolio = Portfolio::embedded().expect("embedded");
        let document = build(&portfolio, ProjectFilter::All);
        assert!(document.region("home").expect("home").height() >= 30.0);
    }

    #[test]
    fn no_line_is_wider_than_the_page() {
        let portfolio = Portfolio::embedded().expect("embedded");
        let document = build(&portfolio, ProjectFilter::All);
        for line in &document.lines {
            assert!(line.width() <= 80, "too wide: {:?}", text_of(line));
        }
    }

    #[test]
    fn filter_tabs_are_clickable_and_hero_links_navigate() {
        let portfolio = Portfolio::embedded().expect("embedded");
        let document = build(&portfolio, ProjectFilter::Featured);

        let filters: Vec<&PageAction> = document
            .links
            .iter()
            .filter(|link| matches!(link.action, PageAction::Filter(_)))
            .map(|link| &link.action)
            .collect();
        assert_eq!(filters.len(), ProjectFilter::ALL.len());

        let tab = document
            .links
            .iter()
            .find(|link| link.action == PageAction::Filter(ProjectFilter::Web))
            .expect("web tab");
        let line = text_of(&document.lines[tab.row]);
        let label: String = line.chars().skip(usize::from(tab.columns.start)).take(tab.columns.len()).collect();
        assert_eq!(label, " Web ");

        let projects_top = document.region("projects").expect("projects").top as usize;
        assert!(tab.row > projects_top);
        assert!(document.links.iter().any(|link| link.action == PageAction::GoTo(SectionId::new("contact"))));
    }

    #[test]
    fn empty_filter_shows_a_notice() {
        let portfolio = Portfolio {
            projects: vec![Project {
                id: 1,
                title: "Notes".into(),
                technologies: vec!["Rust".into()],
                ..Project::default()
            }],
            ..Portfolio::default()
        };
        let document = build(&portfolio, ProjectFilter::Mobile);
        assert!(document.lines.iter().any(|line| text_of(line).contains("No projects match the \"Mobile\" filter.")));
    }

    #[test]
    fn footer_carries_year_and_name() {
        let portfolio = Portfolio {
            name: "Ada Lovelace".into(),
            ..Portfolio::default()
        };
        let document = build(&portfolio, ProjectFilter::All);
        let footer = document.lines.iter().rev().map(text_of).find(|text| !text.trim().is_empty()).expect("footer");
        assert_eq!(footer.trim(), "© 2026 Ada Lovelace. All rights reserved.");
    }

    #[test]
    fn tags_wrap_at_the_page_width() {
        let theme = MidnightTheme::new();
        let mut writer = PageWriter::new(&theme, 20);
        let tags: Vec<String> = ["Rust", "Tokio", "Ratatui", "Serde"].iter().map(|tag| tag.to_string()).collect();
        writer.tags(&tags, 2);
        let (lines, _) = writer.finish();
        let rendered: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(rendered, ["   Rust   Tokio ", "   Ratatui   Serde "]);
    }

    #[test]
    fn gauge_fills_proportionally() {
        let theme = MidnightTheme::new();
        let mut writer = PageWriter::new(&theme, 40);
        let skill = Skill {
            name: "Rust".into(),
            level: 50,
            icon: String::new(),
        };
        writer.gauge(&skill, 6);
        let (lines, _) = writer.finish();
        let text = text_of(&lines[0]);
        assert_eq!(text.matches('█').count(), 14);
        assert_eq!(text.matches('░').count(), 14);
        assert!(text.ends_with("  50%"));
    }
}
