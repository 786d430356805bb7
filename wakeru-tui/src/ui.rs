use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use wakeru_core::service::{Coverage, Located};

use crate::app::{App, Field};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let home = app
        .home_zone_name()
        .map_or_else(String::new, |name| format!(" · saved zone: {name}"));
    let header = Paragraph::new(format!(
        "wakeru – which zone am I in? · language: {}{home}",
        app.language
    ))
    .block(Block::default().borders(Borders::ALL).title("Wakeru"));
    frame.render_widget(header, *header_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(*content_area);
    let [left_area, right_area] = columns.as_ref() else {
        return;
    };

    draw_query(frame, app, *left_area);
    draw_distances(frame, app, *right_area);

    let nav_hint = "Type coordinates · Tab switch field · Enter resolve · l language · q/Esc quit";
    let status_text = match &app.error_message {
        Some(msg) => format!("{msg} · {nav_hint}"),
        None => nav_hint.to_owned(),
    };
    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_query(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // latitude
            Constraint::Length(3), // longitude
            Constraint::Min(0),    // result
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [latitude_area, longitude_area, result_area] = chunks else {
        return;
    };

    let input_style = |field: Field| {
        if app.field == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let latitude = Paragraph::new(app.latitude_input.as_str())
        .style(input_style(Field::Latitude))
        .block(Block::default().borders(Borders::ALL).title("Latitude"));
    frame.render_widget(latitude, *latitude_area);

    let longitude = Paragraph::new(app.longitude_input.as_str())
        .style(input_style(Field::Longitude))
        .block(Block::default().borders(Borders::ALL).title("Longitude"));
    frame.render_widget(longitude, *longitude_area);

    let text = app.located.as_ref().map_or_else(
        || "Enter a latitude and longitude, then press Enter.".to_owned(),
        |located| describe(app, located),
    );
    let result = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: true });
    frame.render_widget(result, *result_area);
}

fn describe(app: &App, located: &Located) -> String {
    let area_line = if located.in_service_area {
        "Inside the service area."
    } else {
        "Outside the service area."
    };

    match &located.coverage {
        Coverage::Zone(id) => {
            let zone = app.service.zone(id);
            let name = zone.map_or(id.as_str(), |zone| zone.name(app.language));
            let schedule = zone
                .and_then(|zone| zone.schedule_url.as_deref())
                .map_or_else(
                    || "No collection schedule link for this zone.".to_owned(),
                    |url| format!("Collection schedule: {url}"),
                );
            format!("{}\nZone: {name} ({id})\n{schedule}\n{area_line}", located.point)
        }
        Coverage::ServiceArea => format!(
            "{}\nNo specific zone here. Showing general guidance.\n{area_line}",
            located.point
        ),
        Coverage::Outside => format!(
            "{}\nLocation-tailored guidance is not available here.\n{area_line}",
            located.point
        ),
    }
}

fn draw_distances(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Zones (registry order)";

    if app.distances.is_empty() {
        let paragraph = Paragraph::new("Distances appear after resolving a point.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let matched = app.located.as_ref().and_then(Located::zone_id);

    let rows = app.distances.iter().map(|row| {
        let inside = row.distance_meters <= row.radius_meters;
        let mut style = if inside {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if matched == Some(&row.id) {
            style = style.add_modifier(Modifier::BOLD);
        }

        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(format_meters(row.radius_meters)),
            Cell::from(format_meters(row.distance_meters)),
            Cell::from(if inside { "yes" } else { "" }),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Zone", "Radius", "Distance", "Inside"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn format_meters(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.1} km", meters / 1_000.0)
    } else {
        format!("{meters:.0} m")
    }
}
