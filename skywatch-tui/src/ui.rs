use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{
        self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skywatch_core::{
    CurrentObservation, LocationMetadata, day_night_icon, select_weather_icon,
};

use crate::app::App;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal(term: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut out = io::stdout();
    execute!(out, cursor::Show, EnableLineWrap, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    term.show_cursor()?;
    Ok(())
}

pub fn draw(term: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> Result<()> {
    term.draw(|f| {
        let area = f.area();
        let outer = Block::default().borders(Borders::ALL).title(Line::from(Span::styled(
            " skywatch ",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        render_input(f, rows[0], app);
        render_weather(f, rows[1], app);
        render_footer(f, rows[2]);
    })?;
    Ok(())
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.input.is_empty() {
        Line::from(vec![
            Span::raw("⌖ "),
            Span::styled("Enter location...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("⌖ "), Span::raw(app.input.as_str())])
    };

    let input = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("Location"));
    f.render_widget(input, area);
}

fn render_weather(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let current = app.weather.current.as_ref();

    let icon = select_weather_icon(current);
    let primary = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            icon.glyph(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(icon.label()).alignment(Alignment::Center),
    ]);
    f.render_widget(primary, cols[0]);

    let day_night = day_night_icon(current.is_some_and(|c| c.is_day));
    let details = Paragraph::new(vec![
        Line::default(),
        Line::from(day_night.glyph()),
        Line::from(temperature_line(current)),
        Line::from(location_line(app.weather.location.as_ref())),
    ]);
    f.render_widget(details, cols[1]);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit · type to search"),
    ]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}

fn temperature_line(current: Option<&CurrentObservation>) -> String {
    let (temp_c, temp_f) = current.map_or((0.0, 0.0), |c| (c.temp_c, c.temp_f));
    format!("{temp_c}°C / {temp_f}°F")
}

fn location_line(location: Option<&LocationMetadata>) -> String {
    let (name, country) =
        location.map_or(("City", "Country"), |l| (l.name.as_str(), l.country.as_str()));
    format!("{name} / {country}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_core::WeatherCondition;

    fn observation(temp_c: f64, temp_f: f64) -> CurrentObservation {
        CurrentObservation {
            temp_c,
            temp_f,
            is_day: true,
            condition: WeatherCondition { text: "Sunny".to_string(), icon: None },
            air_quality: None,
            observed_at: None,
        }
    }

    #[test]
    fn temperatures_read_zero_before_the_first_lookup() {
        assert_eq!(temperature_line(None), "0°C / 0°F");
    }

    #[test]
    fn temperatures_format_both_units() {
        let obs = observation(20.0, 68.0);
        assert_eq!(temperature_line(Some(&obs)), "20°C / 68°F");
    }

    #[test]
    fn fractional_temperatures_keep_their_fraction() {
        let obs = observation(20.5, 68.9);
        assert_eq!(temperature_line(Some(&obs)), "20.5°C / 68.9°F");
    }

    #[test]
    fn location_reads_placeholders_before_the_first_lookup() {
        assert_eq!(location_line(None), "City / Country");
    }

    #[test]
    fn location_formats_name_and_country() {
        let loc = LocationMetadata { name: "Paris".to_string(), country: "France".to_string() };
        assert_eq!(location_line(Some(&loc)), "Paris / France");
    }
}
