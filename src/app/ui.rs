use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset, GraphType,
        List, ListItem, Paragraph, Row, Table, TableState, Wrap,
    },
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    app::{
        InputMode, Portfolio,
        utils::{
            centered_rect, format_change, format_money, format_percent, format_pnl_percent,
            gain_color, pnl_percent_color,
        },
    },
    models::{DraftField, PortfolioSnapshot},
};

const PALETTE: [Color; 5] = [
    Color::Rgb(0x88, 0x84, 0xd8),
    Color::Rgb(0x82, 0xca, 0x9d),
    Color::Rgb(0xff, 0xc6, 0x58),
    Color::Rgb(0xff, 0x7c, 0x7c),
    Color::Rgb(0x8d, 0xd1, 0xe1),
];

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    mode: InputMode,
    focus: DraftField,
    show_help: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(14),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Crypto Portfolio Tracker")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_cards(frame, chunks[1], &portfolio.snapshot());

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_history(frame, charts[0], portfolio);
    render_distribution(frame, charts[1], portfolio);

    render_form(frame, chunks[3], portfolio, mode, focus);
    render_holdings(frame, chunks[4], portfolio, table_state);

    let hints = match mode {
        InputMode::Browse => {
            "[a] add  [↑/↓] select  [d] delete  [r] new history  [?] help  [q] quit"
        }
        InputMode::Editing => {
            "[Tab] next field  [←/→] pick symbol  [Enter] add holding  [Esc] done"
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Gray)),
        chunks[5],
    );

    if show_help {
        render_help(frame);
    }
}

fn render_cards(frame: &mut Frame, area: Rect, snapshot: &PortfolioSnapshot) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let total_pnl = *snapshot.total_pnl();
    let total_pnl_percent = *snapshot.total_pnl_percent();

    let card_data = [
        (
            "Total Value",
            format_money(*snapshot.total_value()),
            "◆",
            Color::White,
            Color::Blue,
        ),
        (
            "Total Invested",
            format_money(*snapshot.total_invested()),
            "$",
            Color::White,
            Color::Green,
        ),
        (
            "Total P&L",
            format_money(total_pnl),
            trend_glyph(total_pnl),
            gain_color(total_pnl),
            gain_color(total_pnl),
        ),
        (
            "Total P&L %",
            format_percent(total_pnl_percent),
            trend_glyph(total_pnl_percent),
            gain_color(total_pnl_percent),
            gain_color(total_pnl_percent),
        ),
    ];

    for (i, (label, value, glyph, value_color, glyph_color)) in card_data.into_iter().enumerate()
    {
        let lines = vec![
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled(
                    value,
                    Style::default().fg(value_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(glyph, Style::default().fg(glyph_color)),
            ]),
        ];
        let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, cards[i]);
    }
}

fn trend_glyph(value: Decimal) -> &'static str {
    if value >= Decimal::ZERO { "▲" } else { "▼" }
}

fn render_history(frame: &mut Frame, area: Rect, portfolio: &Portfolio) {
    let block = Block::default()
        .title(format!("Portfolio Value ({} Days)", portfolio.history_days()))
        .borders(Borders::ALL);

    let history = portfolio.history();
    if history.is_empty() {
        let empty = Paragraph::new("No history available")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, *point.portfolio_value()))
        .collect();

    let (min, max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), (_, y)| {
            (min.min(*y), max.max(*y))
        });
    let padding = ((max - min) * 0.05).max(1.0);
    let (y_low, y_high) = (min - padding, max + padding);
    let x_high = (points.len() - 1).max(1) as f64;

    let date_label = |i: usize| history[i].date().format("%m/%d").to_string();
    let x_labels = vec![
        date_label(0),
        date_label(history.len() / 2),
        date_label(history.len() - 1),
    ];
    let y_labels = vec![
        format!("{:.0}", y_low),
        format!("{:.0}", (y_low + y_high) / 2.0),
        format!("{:.0}", y_high),
    ];

    let dataset = Dataset::default()
        .name("portfolio value")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Rgb(0x8b, 0x5c, 0xf6)))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_high])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_low, y_high])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_distribution(frame: &mut Frame, area: Rect, portfolio: &Portfolio) {
    let block = Block::default()
        .title("Portfolio Distribution")
        .borders(Borders::ALL);

    if portfolio.holdings().is_empty() {
        let empty = Paragraph::new("Add some holdings to see distribution")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let distribution = portfolio.distribution();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let bars: Vec<Bar> = distribution
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = PALETTE[i % PALETTE.len()];
            Bar::default()
                .value(entry.percentage().round().to_u64().unwrap_or(0))
                .text_value(format!("{:.1}", entry.percentage()))
                .label(Line::from(entry.symbol().to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let barchart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .max(100);
    frame.render_widget(barchart, chunks[0]);

    let items: Vec<ListItem> = distribution
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(PALETTE[i % PALETTE.len()])),
                Span::styled(
                    format!("{:<6}", entry.symbol()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:>6.1}% ", entry.percentage()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format_money(*entry.value())),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    portfolio: &Portfolio,
    mode: InputMode,
    focus: DraftField,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let draft = portfolio.draft();
    let fields = [
        DraftField::Symbol,
        DraftField::Amount,
        DraftField::PurchasePrice,
    ];

    for (i, field) in fields.into_iter().enumerate() {
        let is_focused = mode == InputMode::Editing && focus == field;
        let border_style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = draft.field(field);
        let content = if text.is_empty() {
            let placeholder = match field {
                DraftField::Symbol => "Select Crypto",
                _ => "0",
            };
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else if field == DraftField::Symbol {
            let symbol = text.trim().to_uppercase();
            match portfolio.prices().get(&symbol) {
                Some(entry) => Span::raw(format!("{} - {}", symbol, entry.name())),
                None => Span::raw(text.to_string()),
            }
        } else {
            Span::raw(text.to_string())
        };

        let mut line = vec![content];
        if is_focused {
            line.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        let input = Paragraph::new(Line::from(line)).block(
            Block::default()
                .title(field.to_string())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, chunks[i]);
    }

    let button = Paragraph::new("+ Add Holding")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue))
        .block(Block::default().title("Add New Holding").borders(Borders::ALL));
    frame.render_widget(button, chunks[3]);
}

fn render_holdings(
    frame: &mut Frame,
    area: Rect,
    portfolio: &Portfolio,
    table_state: &mut TableState,
) {
    if portfolio.holdings().is_empty() {
        let empty_message =
            Paragraph::new("No holdings yet. Add your first crypto holding above!")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Your Holdings").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Asset",
        "Amount",
        "Purchase Price",
        "Current Price",
        "Current Value",
        "P&L",
        "P&L %",
        "24h Change",
        "Added",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = portfolio.holding_rows().into_iter().map(|row| {
        let holding = row.holding();
        let price = row.price();
        let metrics = row.metrics();

        let pnl = *metrics.pnl();
        let pnl_percent = *metrics.pnl_percent();
        let change_24h = *price.change_24h();

        let cells = [
            Cell::from(format!("{} {} ({})", price.icon(), holding.symbol(), price.name())),
            Cell::from(format!("{:.6}", holding.amount())),
            Cell::from(format_money(*holding.purchase_price())),
            Cell::from(format_money(*price.price())),
            Cell::from(format_money(*metrics.current_value())),
            Cell::from(format_money(pnl)).style(Style::default().fg(gain_color(pnl))),
            Cell::from(format_pnl_percent(pnl_percent, pnl))
                .style(Style::default().fg(pnl_percent_color(pnl_percent, pnl))),
            Cell::from(format_change(change_24h))
                .style(Style::default().fg(gain_color(change_24h))),
            Cell::from(holding.date_added().format("%Y-%m-%d").to_string()),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(24),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Your Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from("Holdings table"),
        Line::from("  ↑/↓        select a holding"),
        Line::from("  d / Del    delete the selected holding"),
        Line::from("  a / Tab    edit the add holding form"),
        Line::from("  r          generate a new value history"),
        Line::from("  q          quit"),
        Line::from(""),
        Line::from("Add holding form"),
        Line::from("  Tab        next field"),
        Line::from("  ←/→        pick a known symbol"),
        Line::from("  Enter      add the holding"),
        Line::from("  Esc        back to the table"),
    ];

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(help, area);
}
