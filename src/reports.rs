use crate::app::App;
use crate::content;
use crate::models::{BadgeLevel, EarnedBadge};
use crate::ui::level_color;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Column the earned date starts at, so dates line up under each other.
const TITLE_COLUMN_WIDTH: usize = 34;

pub fn render_badges_report(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Totals
            Constraint::Min(0),    // Badge list
        ])
        .split(area);

    render_totals(app, frame, layout[0]);
    render_badge_list(app, frame, layout[1]);
}

fn render_totals(app: &App, frame: &mut Frame, area: Rect) {
    let earned = app.badges.earned();
    let block = Block::default()
        .title("Your Badges")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::raw(format!(" Earned: {}   ", earned.len())),
            Span::styled(
                format!("Gold: {}   ", level_count(earned, BadgeLevel::Gold)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("Silver: {}   ", level_count(earned, BadgeLevel::Silver)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("Bronze: {}", level_count(earned, BadgeLevel::Bronze)),
                Style::default().fg(Color::LightRed),
            ),
        ]),
        Line::from(format!(
            " Modules: {} of {} completed | {} interactions recorded",
            app.completed_modules(),
            content::MODULES.len(),
            total_interactions(app)
        )),
        Line::from(match app.badges.latest_badge() {
            Some(badge) => format!(" Latest: {} {}", badge.icon, badge.title),
            None => " Latest: none yet".to_string(),
        }),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_badge_list(app: &App, frame: &mut Frame, area: Rect) {
    let earned = app.badges.earned();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled("Earned Badges", Style::new().bold())));
    if earned.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing earned yet. Complete a module to get started.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for badge in earned {
        lines.push(earned_badge_line(badge));
        lines.push(Line::from(Span::styled(
            format!("   {}", badge.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Available Badges",
        Style::new().bold(),
    )));
    for badge in content::BADGES
        .iter()
        .filter(|b| !app.badges.has_badge(b.id))
    {
        lines.push(Line::from(Span::styled(
            format!("🔒 {}", badge.title),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", badge.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).scroll((app.badges_scroll, 0)),
        inner,
    );
}

fn earned_badge_line(badge: &EarnedBadge) -> Line<'_> {
    let heading = format!("{} {}", badge.icon, badge.title);
    let padding = TITLE_COLUMN_WIDTH.saturating_sub(heading.width());
    Line::from(vec![
        Span::styled(heading, Style::default().fg(level_color(badge.level))),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            badge.date_earned.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn level_count(earned: &[EarnedBadge], level: BadgeLevel) -> usize {
    earned.iter().filter(|b| b.level == level).count()
}

fn total_interactions(app: &App) -> u32 {
    app.progress.progress().values().map(|p| p.time_spent).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Badge;
    use chrono::Local;

    fn earned(level: BadgeLevel) -> EarnedBadge {
        let badge = Badge {
            id: "x",
            title: "X",
            description: "d",
            icon: "⭐",
            level,
        };
        EarnedBadge::from_catalog(&badge, Local::now())
    }

    #[test]
    fn test_level_count() {
        let list = vec![
            earned(BadgeLevel::Gold),
            earned(BadgeLevel::Bronze),
            earned(BadgeLevel::Gold),
        ];
        assert_eq!(level_count(&list, BadgeLevel::Gold), 2);
        assert_eq!(level_count(&list, BadgeLevel::Silver), 0);
        assert_eq!(level_count(&list, BadgeLevel::Bronze), 1);
    }

    #[test]
    fn test_earned_badge_line_pads_date_column() {
        let badge = earned(BadgeLevel::Bronze);
        let line = earned_badge_line(&badge);
        let width: usize = line
            .spans
            .iter()
            .take(2)
            .map(|s| s.content.width())
            .sum();
        assert_eq!(width, TITLE_COLUMN_WIDTH);
    }
}
