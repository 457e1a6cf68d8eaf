use crate::application::{App, AppMode, FormField, NoticeKind, Tab};
use crate::domain::{Category, DomainError};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.tab {
        Tab::Log => render_log_tab(f, app, chunks[1]),
        Tab::Summary => render_summary_tab(f, app, chunks[1]),
        Tab::Progress => render_progress_tab(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    match app.mode {
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Notice => render_notice_popup(f, app),
        _ => {}
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL).title("acefit - Workout Tracker"))
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().bg(Color::LightBlue).fg(Color::Black));
    f.render_widget(tabs, area);
}

fn render_log_tab(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let editing = matches!(app.mode, AppMode::Editing);
    let field_value = |field: FormField| -> String {
        let committed = match field {
            FormField::Category => return format!("< {} >", app.category),
            FormField::Exercise => &app.exercise_input,
            FormField::Duration => &app.duration_input,
        };
        if editing && app.focus == field {
            app.input.clone()
        } else {
            committed.clone()
        }
    };

    let rows = [
        (FormField::Category, "Category:       "),
        (FormField::Exercise, "Exercise:       "),
        (FormField::Duration, "Duration (min): "),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|&(field, label)| {
            let style = if app.focus == field {
                if editing {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().bg(Color::Blue).fg(Color::White)
                }
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(label, Style::default().fg(Color::Yellow)),
                Span::styled(field_value(field), style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("New Workout"));
    f.render_widget(form, chunks[0]);

    if editing {
        let row = match app.focus {
            FormField::Category => 0,
            FormField::Exercise => 1,
            FormField::Duration => 2,
        };
        let form_area = chunks[0];
        let label_width = rows[row].1.chars().count() as u16;
        // Keep the cursor inside the form border however long the buffer gets
        let max_offset = form_area
            .width
            .saturating_sub(2)
            .saturating_sub(label_width)
            .saturating_sub(1);
        let offset = saturating_u16(app.cursor_position).min(max_offset);
        f.set_cursor_position((
            form_area.x.saturating_add(1).saturating_add(label_width).saturating_add(offset),
            form_area.y.saturating_add(1).saturating_add(row as u16),
        ));
    }

    let mut entries: Vec<_> = app.store.iter().collect();
    entries.sort_by_key(|(_, record)| record.timestamp());
    let recent: Vec<Line> = entries
        .into_iter()
        .map(|(category, record)| {
            Line::from(format!(
                "{} {:<10} {} - {} min",
                record.timestamp().format("%H:%M:%S"),
                category.label(),
                record.exercise(),
                record.duration()
            ))
        })
        .collect();
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let skip = recent.len().saturating_sub(visible);

    let log = Paragraph::new(recent.into_iter().skip(skip).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL).title(format!("Logged ({})", app.store.len())));
    f.render_widget(log, chunks[1]);
}

fn render_summary_tab(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Summary");
    let widget = match app.report() {
        Ok(report) => Paragraph::new(report).scroll((saturating_u16(app.summary_scroll), 0)),
        Err(error) => empty_placeholder(&error).wrap(Wrap { trim: true }),
    };
    // Report lines are not wrapped so the scroll limit in `App` matches the rows drawn
    f.render_widget(widget.block(block), area);
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn render_progress_tab(f: &mut Frame, app: &App, area: Rect) {
    let summary = match app.summary() {
        Ok(summary) => summary,
        Err(error) => {
            let block = Block::default().borders(Borders::ALL).title("Progress");
            f.render_widget(empty_placeholder(&error).block(block), area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let data = summary.chart_data();
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Minutes per Category"))
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(Color::Yellow));
    f.render_widget(chart, chunks[0]);

    let share_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Time Distribution ({} min)", summary.total_minutes));
    let inner = share_block.inner(chunks[1]);
    f.render_widget(share_block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    for (index, category) in Category::ALL.iter().enumerate() {
        let share = summary.share(*category);
        let gauge = Gauge::default()
            .block(Block::default().title(category.label()))
            .gauge_style(Style::default().fg(category_color(*category)))
            .ratio(share)
            .label(format!("{:.0}%", share * 100.0));
        f.render_widget(gauge, rows[index]);
    }

    let motivation = Paragraph::new(summary.motivation().message())
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true });
    f.render_widget(motivation, rows[3]);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::WarmUp => Color::Yellow,
        Category::Workout => Color::Cyan,
        Category::CoolDown => Color::Magenta,
    }
}

fn empty_placeholder(error: &DomainError) -> Paragraph<'static> {
    Paragraph::new(format!("{} Press 1 to log one.", error)).style(Style::default().fg(Color::DarkGray))
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                match app.tab {
                    Tab::Log => "↑↓: field | ←→: category | Enter: edit | a: add | v: view summary | Tab: next tab | ?: help | q: quit".to_string(),
                    Tab::Summary => "↑↓: scroll | y: copy text | Y: copy JSON | Tab: next tab | ?: help | q: quit".to_string(),
                    Tab::Progress => "Tab: next tab | 1: log workout | ?: help | q: quit".to_string(),
                }
            }
        }
        AppMode::Editing => "Enter: save field | Esc: cancel".to_string(),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::Notice => "Enter/Esc: dismiss".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::Notice => Style::default().fg(Color::Yellow),
        });
    f.render_widget(input, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_notice_popup(f: &mut Frame, app: &App) {
    let Some(notice) = app.notice.as_ref() else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let popup_area = centered_rect(f.area(), 60, 7);

    f.render_widget(Clear, popup_area);
    let text = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ];
    let widget = Paragraph::new(text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(notice.title.as_str())
            .style(Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("acefit Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"ACEFIT WORKOUT TRACKER

=== LOGGING A WORKOUT ===
• Pick a category: Warm-up, Workout or Cool-down
• Enter the exercise name and its duration in whole minutes
• Durations must be positive numbers (e.g. 15, 30, 45)
• Workouts are kept in memory only and are gone when you quit

=== LOG TAB ===
↑↓ or j/k       Move between Category, Exercise and Duration
←→ or h/l       Change category (when Category is focused)
Enter/F2        Edit the focused field
Enter (editing) Save the field; on Duration this also adds the workout
Esc (editing)   Discard changes to the field
a               Add the workout with the current form values

=== SUMMARY TAB ===
↑↓ or j/k       Scroll the report
PgUp/PgDn       Scroll five lines
y               Copy the report as text
Y               Copy the summary and records as JSON

=== PROGRESS TAB ===
Bar chart       Total minutes logged per category
Gauges          Share of total time spent in each category

=== GENERAL ===
Tab/Shift+Tab   Next/previous tab
1 2 3           Jump to Log, Summary or Progress
v               View summary (tells you if nothing is logged yet)
F1 or ?         Show this help
Enter/Esc       Dismiss a pop-up message
q               Quit application

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
}
