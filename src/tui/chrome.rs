// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, pane content, footer, and help helpers used by TUI rendering.
fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    List,
    Detail,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::List => Self::Detail,
            Self::Detail => Self::List,
        }
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn tab_titles() -> Vec<Line<'static>> {
    Category::ALL
        .iter()
        .map(|category| Line::from(format!("{} {}", category.index() + 1, category.tab_label())))
        .collect()
}

/// `Page N of M`, only when there is more than one page.
fn page_indicator(browser: &CategoryBrowser) -> Option<String> {
    browser
        .shows_pagination()
        .then(|| format!("Page {} of {}", browser.page_number(), browser.total_pages()))
}

fn list_items(browser: &CategoryBrowser, theme: &TuiTheme) -> Vec<ListItem<'static>> {
    let selected = browser.selected_index();
    browser
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let marker = if selected == Some(idx) { "◼" } else { "◻" };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.heading_style()),
                Span::raw(" "),
                Span::raw(browser.layout().list_label(record)),
            ]))
        })
        .collect()
}

fn detail_title(browser: &CategoryBrowser) -> String {
    let Some(record) = browser.selection() else {
        return view_title("Detail", None);
    };
    let mut tail = record
        .url()
        .and_then(|url| url.id().map(|id| format!("#{id}")))
        .unwrap_or_default();
    if browser.selection_is_off_page() {
        tail.push_str(" (off page)");
    }
    view_title(&browser.layout().list_label(record), Some(&tail))
}

/// Detail pane text plus the line index of the related-item cursor, if any.
fn detail_lines(
    browser: &CategoryBrowser,
    theme: &TuiTheme,
    related_cursor: Option<usize>,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::<Line<'static>>::new();
    let Some(record) = browser.selection() else {
        let placeholder = match browser.off_page() {
            OffPageState::Resolving { .. } => Line::from(Span::styled("Loading...", theme.dim_style())),
            OffPageState::Idle | OffPageState::Failed { .. } | OffPageState::Resolved { .. } => {
                Line::from(Span::styled("No selection", theme.dim_style()))
            }
        };
        lines.push(placeholder);
        return (lines, None);
    };

    let layout = browser.layout();
    lines.push(Line::from(Span::styled(layout.list_label(record), theme.heading_style())));
    lines.push(Line::from(""));
    for (label, value) in layout.field_rows(record) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), theme.label_style()),
            Span::raw(value),
        ]));
    }

    if let Some(prose) = layout.prose {
        if let Some(text) = record.text(prose.key) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!("{}:", prose.label), theme.label_style())));
            for row in text.lines() {
                lines.push(Line::from(row.trim_end().to_owned()));
            }
        }
    }

    let mut cursor_line = None;
    match browser.related() {
        RelatedState::Idle => {}
        RelatedState::Resolving { requests, .. } => {
            for request in requests.iter().filter(|request| !request.refs.is_empty()) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("{} ({})", request.label, request.refs.len()),
                    theme.heading_style(),
                )));
                lines.push(Line::from(Span::styled("  Loading...", theme.dim_style())));
            }
        }
        RelatedState::Ready(groups) => {
            let mut flat = 0usize;
            for group in groups.iter().filter(|group| group.requested > 0) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(group.heading(), theme.heading_style())));
                for item in &group.items {
                    let mut style = Style::default();
                    if related_cursor == Some(flat) {
                        style = theme.selection_style();
                        cursor_line = Some(lines.len());
                    }
                    lines.push(Line::from(Span::styled(format!("  {}", item.display_name), style)));
                    flat += 1;
                }
            }
        }
    }

    (lines, cursor_line)
}

/// Keeps `cursor_line` inside a viewport of `height` rows.
fn detail_scroll(cursor_line: Option<usize>, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    match cursor_line {
        Some(line) if line >= height => {
            u16::try_from(line + 1 - height).unwrap_or(u16::MAX)
        }
        _ => 0,
    }
}

fn footer_help_line(focus: Focus, toast: Option<&str>, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    if compact {
        push_footer_entry(&mut spans, "PAGE", "h/l");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    } else {
        push_footer_entry(&mut spans, "TAB", "1-6");
        push_footer_entry(&mut spans, "PAGE", "h/l");
        match focus {
            Focus::List => push_footer_entry(&mut spans, "SELECT", "Enter"),
            Focus::Detail => push_footer_entry(&mut spans, "OPEN", "Enter"),
        }
        push_footer_entry(&mut spans, "FOCUS", "Tab");
        push_footer_entry(&mut spans, "RELOAD", "r");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    }

    if let Some(message) = toast.map(str::trim).filter(|message| !message.is_empty()) {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled("Toast:".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(message.to_owned()));
    }

    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    const ENTRIES: &[(&str, &str)] = &[
        ("?", "Help (toggle)"),
        ("q", "Quit"),
        ("1-6", "Switch category tab"),
        ("[/]", "Previous/next tab"),
        ("Tab/Shift-Tab", "Focus list/detail"),
        ("h/l, ←/→, PgUp/PgDn", "Previous/next page"),
        ("r", "Reload current page"),
    ];
    const LIST: &[(&str, &str)] = &[("j/k, ↑/↓", "Move cursor"), ("Enter", "Show details")];
    const DETAIL: &[(&str, &str)] =
        &[("j/k, ↑/↓", "Move between related items"), ("Enter", "Open related item in its tab")];

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_width = ENTRIES
        .iter()
        .chain(LIST)
        .chain(DETAIL)
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (header, entries) in [("--- Global ---", ENTRIES), ("--- List ---", LIST), ("--- Detail ---", DETAIL)] {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(header, header_style)));
        lines.extend(entries.iter().map(|(key, desc)| help_kv(key, desc, key_width, key_style)));
    }
    lines.push(Line::from(""));
    lines.push(help_kv("Esc/?", "Close help", key_width, key_style));
    lines
}

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 70, main_area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    let paragraph = Paragraph::new(help_lines()).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
