use crate::ui::app::{App, HitMap, Section, StripHits, TIMELINE_COLLAPSED};
use crate::ui::carousel::Carousel;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    app.hits = HitMap::default();

    // Background fill
    let background = Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg));
    frame.render_widget(background, frame.area());

    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header: title + navbar
            Constraint::Min(0),    // Body: active section
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_body(frame, app, main_chunks[1]);
    render_footer(frame, app, main_chunks[2]);

    if app.modal.is_some() {
        render_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    // First line: name + tagline on the left, language/theme toggles on the
    // right.
    let title = format!(
        "◆ {} — {}",
        app.content.profile.name,
        app.content.profile.tagline.get(app.lang)
    );

    let theme_label = format!(" {} ", theme.name);
    let theme_w = theme_label.chars().count() as u16;
    let lang_w = 7; // flag (2 cells) + space + code + padding
    let lang_label = format!(" {} {} ", app.lang.flag(), app.lang.code().to_uppercase());

    let title_w = inner.width.saturating_sub(theme_w + lang_w + 2);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))),
        Rect::new(inner.x, inner.y, title_w, 1),
    );

    if inner.width > theme_w + lang_w + 10 {
        let theme_x = inner.right().saturating_sub(theme_w);
        let lang_x = theme_x.saturating_sub(lang_w + 1);
        let lang_rect = Rect::new(lang_x, inner.y, lang_w, 1);
        let theme_rect = Rect::new(theme_x, inner.y, theme_w, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                lang_label,
                Style::default().fg(theme.secondary),
            ))),
            lang_rect,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                theme_label,
                Style::default().fg(theme.secondary),
            ))),
            theme_rect,
        );
        app.hits.lang_toggle = Some(lang_rect);
        app.hits.theme_toggle = Some(theme_rect);
    }

    // Second line: navbar with the active section highlighted.
    let strings = app.content.strings(app.lang);
    let nav_y = inner.y + 1;
    let mut spans: Vec<Span> = Vec::new();
    let mut x = inner.x;
    let mut nav_items = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let label = format!(" {} ", section.title(strings));
        let width = label.chars().count() as u16;
        let style = if i == app.section {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        if x + width <= inner.right() {
            nav_items.push((Rect::new(x, nav_y, width, 1), i));
        }
        x += width + 1;
    }
    app.hits.nav_items = nav_items;
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, nav_y, inner.width, 1),
    );
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let App {
        content,
        lang,
        theme,
        section,
        timeline_expanded,
        collaborations,
        presentations,
        hits,
        ..
    } = app;
    let lang = *lang;
    let theme: &'static Theme = *theme;
    let strings = content.strings(lang);

    match Section::ALL[*section] {
        Section::Home => {
            let profile = &content.profile;
            let mut lines = vec![
                Line::from(Span::styled(
                    profile.name.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    profile.tagline.get(lang).clone(),
                    Style::default().fg(theme.secondary),
                )),
                Line::from(""),
            ];
            for stat in &profile.stats {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:>3}  ", stat.value),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(stat.label.get(lang).clone(), Style::default().fg(theme.fg)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                profile.email.clone(),
                Style::default().fg(theme.fg_dim),
            )));
            render_section_paragraph(
                frame,
                theme,
                area,
                &strings.section_titles.home.clone(),
                lines,
            );
        }
        Section::About => {
            let mut lines = Vec::new();
            for paragraph in &strings.about {
                lines.push(Line::from(paragraph.clone()));
                lines.push(Line::from(""));
            }
            render_section_paragraph(
                frame,
                theme,
                area,
                &strings.section_titles.about.clone(),
                lines,
            );
        }
        Section::Timeline => {
            let title = strings.section_titles.timeline.clone();
            let toggle_label = if *timeline_expanded {
                format!("▲ {}", strings.show_less)
            } else {
                format!("▼ {}", strings.show_more)
            };
            let visible = if *timeline_expanded {
                content.timeline.len()
            } else {
                content.timeline.len().min(TIMELINE_COLLAPSED)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(Style::default().fg(theme.fg_dim))
                .title_style(Style::default().fg(theme.secondary));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if inner.height < 2 {
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(inner);

            let mut lines = Vec::new();
            for entry in content.timeline.iter().take(visible) {
                let t = entry.get(lang);
                lines.push(Line::from(Span::styled(
                    t.date.clone(),
                    Style::default().fg(theme.fg_dim),
                )));
                lines.push(Line::from(vec![
                    Span::styled(
                        t.title.clone(),
                        Style::default()
                            .fg(theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(t.location.clone(), Style::default().fg(theme.accent)),
                ]));
                lines.push(Line::from(t.description.clone()));
                lines.push(Line::from(Span::styled(
                    t.tags.join(" · "),
                    Style::default().fg(theme.tag),
                )));
                lines.push(Line::from(""));
            }
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }),
                chunks[0],
            );

            let toggle_w = (toggle_label.chars().count() as u16).min(chunks[1].width);
            let toggle_rect = Rect::new(chunks[1].x, chunks[1].y, toggle_w, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    toggle_label,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))),
                toggle_rect,
            );
            hits.timeline_toggle = Some(toggle_rect);
        }
        Section::Collaborations => {
            let cards: Vec<Vec<Line>> = collaborations
                .slots()
                .iter()
                .map(|slot| {
                    let text = content.collaborations[slot.original].text.get(lang);
                    vec![
                        Line::from(Span::styled(
                            text.name.clone(),
                            Style::default()
                                .fg(theme.secondary)
                                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                        )),
                        Line::from(Span::styled(
                            text.location.clone(),
                            Style::default().fg(theme.fg_dim),
                        )),
                        Line::from(text.role.clone()),
                        Line::from(Span::styled(
                            text.tags.join(" · "),
                            Style::default().fg(theme.tag),
                        )),
                    ]
                })
                .collect();
            render_carousel(
                frame,
                theme,
                area,
                &strings.section_titles.collaborations.clone(),
                &strings.collaborations_subtitle.clone(),
                collaborations,
                &mut hits.collaborations,
                cards,
            );
        }
        Section::Presentations => {
            let cards: Vec<Vec<Line>> = presentations
                .slots()
                .iter()
                .map(|slot| {
                    let text = content.presentations[slot.original].text.get(lang);
                    vec![
                        Line::from(Span::styled(
                            text.title.clone(),
                            Style::default()
                                .fg(theme.secondary)
                                .add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            text.venue.clone(),
                            Style::default().fg(theme.fg_dim),
                        )),
                    ]
                })
                .collect();
            let subtitle = format!(
                "{} · {}",
                strings.presentations_subtitle, strings.open_hint
            );
            render_carousel(
                frame,
                theme,
                area,
                &strings.section_titles.presentations.clone(),
                &subtitle,
                presentations,
                &mut hits.presentations,
                cards,
            );
        }
        Section::Contact => {
            let profile = &content.profile;
            let lines = vec![
                Line::from(strings.contact.clone()),
                Line::from(""),
                Line::from(Span::styled(
                    profile.email.clone(),
                    Style::default().fg(theme.accent),
                )),
                Line::from(Span::styled(
                    profile.github.clone(),
                    Style::default().fg(theme.accent),
                )),
                Line::from(Span::styled(
                    profile.linkedin.clone(),
                    Style::default().fg(theme.accent),
                )),
            ];
            render_section_paragraph(
                frame,
                theme,
                area,
                &strings.section_titles.contact.clone(),
                lines,
            );
        }
    }
}

fn render_section_paragraph(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    lines: Vec<Line>,
) {
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(Style::default().fg(theme.fg_dim))
                .title_style(Style::default().fg(theme.secondary)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[allow(clippy::too_many_arguments)]
fn render_carousel(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    subtitle: &str,
    carousel: &Carousel,
    hits: &mut StripHits,
    cards: Vec<Vec<Line>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(theme.fg_dim))
        .title_style(Style::default().fg(theme.secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !carousel.is_enabled() || inner.height < 4 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Min(4),    // Strip
            Constraint::Length(1), // Dots
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(theme.fg_dim),
        ))),
        chunks[0],
    );

    // The strip viewport: one cell of horizontal margin inside the section
    // block, matching `App::strip_viewport`.
    let strip = Rect::new(
        chunks[1].x + 1,
        chunks[1].y,
        chunks[1].width.saturating_sub(2),
        chunks[1].height,
    );
    if strip.width < 10 {
        return;
    }
    hits.strip = Some(strip);

    let card_height = strip.height.min(7);
    let offset = carousel.offset();
    let geometry = carousel.geometry();

    for (i, lines) in cards.into_iter().enumerate() {
        let x0 = strip.x as f32 + offset + geometry.item_left(i);
        let x1 = x0 + geometry.card_width as f32;
        if x1 <= strip.x as f32 || x0 >= strip.right() as f32 {
            continue;
        }
        let clamped_x0 = x0.max(strip.x as f32) as u16;
        let clamped_x1 = x1.min(strip.right() as f32) as u16;
        if clamped_x1 <= clamped_x0 {
            continue;
        }
        let rect = Rect::new(clamped_x0, strip.y, clamped_x1 - clamped_x0, card_height);

        let active = carousel.is_active(i);
        let border_style = if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        let card_style = if active {
            Style::default().bg(theme.card_bg).fg(theme.fg)
        } else {
            Style::default().fg(theme.fg)
        };
        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .style(card_style),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(card, rect);
    }

    // Prev/next controls overlay the strip edges.
    let controls_y = strip.y + card_height / 2;
    let prev_rect = Rect::new(strip.x, controls_y, 3, 1);
    let next_rect = Rect::new(strip.right().saturating_sub(3), controls_y, 3, 1);
    let control_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" ‹ ", control_style))),
        prev_rect,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" › ", control_style))),
        next_rect,
    );
    hits.prev = Some(prev_rect);
    hits.next = Some(next_rect);

    // Dot indicators, one per original card.
    let n = carousel.total();
    let dots_width = (n * 2 - 1) as u16;
    let dots_x = inner.x + inner.width.saturating_sub(dots_width) / 2;
    let dots_area = Rect::new(dots_x, chunks[2].y, dots_width, 1).intersection(chunks[2]);
    let active_dot = carousel.active_dot();
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..n {
        let style = if active_dot == Some(i) {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        spans.push(Span::styled(if active_dot == Some(i) { "●" } else { "○" }, style));
        if i + 1 < n {
            spans.push(Span::raw(" "));
        }
        let dot_rect = Rect::new(dots_x + i as u16 * 2, chunks[2].y, 1, 1);
        if dot_rect.right() <= dots_area.right() {
            hits.dots.push((dot_rect, i));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), dots_area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.active_section() {
        Section::Presentations => {
            "[Tab] Sections  [←→] Slide  [Enter] Open  [G] Language  [T] Theme  [Q] Quit"
        }
        Section::Timeline => {
            "[Tab] Sections  [←→] Slide  [M] More/Less  [G] Language  [T] Theme  [Q] Quit"
        }
        _ => "[Tab] Sections  [←→] Slide  [G] Language  [T] Theme  [Q] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);

    // Copyright notice, right-aligned when it fits.
    let notice = format!(
        "© {} · {}",
        app.content.profile.name,
        app.strings().rights
    );
    let notice_w = notice.chars().count() as u16;
    if area.width > notice_w + help_text.chars().count() as u16 + 2 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notice,
                Style::default().fg(app.theme.fg_dim),
            ))),
            Rect::new(area.right().saturating_sub(notice_w + 1), area.y, notice_w, 1),
        );
    }
}

fn render_modal(frame: &mut Frame, app: &mut App) {
    let Some(pres) = app.modal_presentation() else {
        return;
    };
    let text = pres.text.get(app.lang);
    let title = text.title.clone();
    let venue = text.venue.clone();
    let embed = pres.embed.clone();
    let link = pres.link.clone();
    let close_hint = app.content.strings(app.lang).close_hint.clone();
    let theme = app.theme;

    let area = frame.area();
    let width = (area.width * 3 / 5).clamp(30.min(area.width), area.width);
    let height = 9.min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, rect);

    let mut lines = vec![
        Line::from(Span::styled(venue, Style::default().fg(theme.secondary))),
        Line::from(""),
    ];
    if let Some(embed) = embed {
        lines.push(Line::from(Span::styled(
            embed,
            Style::default().fg(theme.fg),
        )));
    }
    if let Some(link) = link {
        lines.push(Line::from(Span::styled(
            link,
            Style::default().fg(theme.accent),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        close_hint,
        Style::default().fg(theme.fg_dim),
    )));

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(Style::default().fg(theme.accent))
                .title_style(
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(theme.bg).fg(theme.fg)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(modal, rect);

    // Close button on the top border.
    let close_rect = Rect::new(rect.right().saturating_sub(4), rect.y, 3, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ✕ ",
            Style::default().fg(theme.danger),
        ))),
        close_rect,
    );
    app.hits.modal = Some(rect);
    app.hits.modal_close = Some(close_rect);
}
