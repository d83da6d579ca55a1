//! The celebration card drawn over the background.

use petalfall_background::hsl_color;
use petalfall_core::{Hsl, Intensity};
use petalfall_fonts::{GLYPH_HEIGHT, banner_width, build_banner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

/// Headline shown in block letters.
const HEADLINE: &str = "YAYYYYY";

/// Shown when the screenshot key is pressed.
pub const SCREENSHOT_HINT: &str = "Take a screenshot of this moment! 📸💕";

/// Width of the card box, including borders.
const CARD_WIDTH: u16 = 48;

/// Everything the card needs to know to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub petals_enabled: bool,
    pub intensity: Intensity,
    pub status: Option<&'a str>,
    pub elapsed_ms: u64,
}

fn rose() -> Color {
    hsl_color(Hsl::from_percent(346.0, 85.0, 50.0))
}

/// Draw the card, switch line and help line.
pub fn render(frame: &mut Frame, view: &CardView) {
    let area = frame.area();
    let color = rose();

    let banner_fits = banner_width(HEADLINE).is_some_and(|w| w <= area.width as usize);
    let headline_height = if banner_fits { GLYPH_HEIGHT as u16 } else { 1 };

    let chunks = Layout::vertical([
        Constraint::Fill(1),                 // Top padding
        Constraint::Length(headline_height), // Headline
        Constraint::Length(1),               // Spacing
        Constraint::Length(1),               // Hearts
        Constraint::Length(1),               // Spacing
        Constraint::Length(7),               // Card
        Constraint::Length(1),               // Spacing
        Constraint::Length(1),               // Status
        Constraint::Length(1),               // Petals switch
        Constraint::Length(1),               // Tagline
        Constraint::Fill(1),                 // Bottom padding
        Constraint::Length(1),               // Help text
    ])
    .split(area);

    render_headline(frame, chunks[1], banner_fits, color);

    // Hearts pulse in turn
    let beat = (view.elapsed_ms / 400 % 3) as usize;
    let hearts: Vec<_> = ["💖", "💕", "💝"]
        .into_iter()
        .enumerate()
        .map(|(i, heart)| if i == beat { heart.bold() } else { heart.into() })
        .flat_map(|span| [span, " ".into()])
        .collect();
    frame.render_widget(Line::from(hearts).centered(), chunks[3]);

    render_card(frame, chunks[5], color);

    if let Some(status) = view.status {
        frame.render_widget(Line::from(status.italic().fg(color)).centered(), chunks[7]);
    }

    let switch = if view.petals_enabled {
        "[●  on]".bold().fg(color)
    } else {
        "[off  ○]".dark_gray()
    };
    frame.render_widget(
        Line::from(vec!["Petals ".dark_gray(), switch]).centered(),
        chunks[8],
    );

    frame.render_widget(
        Line::from("Best decision you made today 😌".italic().dark_gray()).centered(),
        chunks[9],
    );

    let help = Line::from(vec![
        "q".bold().fg(color),
        " quit  ".dark_gray(),
        "p".bold().fg(color),
        " toggle petals  ".dark_gray(),
        "i".bold().fg(color),
        Span::raw(format!(" intensity ({})  ", view.intensity)).dark_gray(),
        "s".bold().fg(color),
        " screenshot".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, chunks[11]);
}

fn render_headline(frame: &mut Frame, area: Rect, banner_fits: bool, color: Color) {
    let lines: Vec<Line> = match build_banner(HEADLINE) {
        Some(banner) if banner_fits => banner
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect(),
        _ => vec![Line::from(HEADLINE.bold().fg(color))],
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_card(frame: &mut Frame, area: Rect, color: Color) {
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(CARD_WIDTH.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let text = vec![
        Line::from("You are officially, legally, emotionally"),
        Line::from("MY VALENTINE 💖".bold().fg(color)),
        Line::from(""),
        Line::from("No refunds.".dark_gray()),
        Line::from("No returns.".dark_gray()),
    ];
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(color))
        .title_bottom(Line::from(" Valentine status is permanent. ".bold()).centered());

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center),
        card,
    );
}
