use vocards_lib::auth::UserRecord;
use vocards_lib::flashcards::Card;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Wrap `text` in a color code when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// One numbered card per line, numbers right-aligned
pub fn render_cards(cards: &[Card], use_color: bool) -> String {
    let width = cards.len().to_string().len();

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            format!(
                "{:>width$}. {} {} {}",
                i + 1,
                paint(&card.front, Color::BOLD, use_color),
                paint("\u{2014}", Color::DIM, use_color),
                card.back,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_user(user: &UserRecord, use_color: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Signed in as {} <{}>",
        paint(user.display_name(), Color::BOLD, use_color),
        user.email
    )];

    if let Some(company) = user.company_name.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("  Company: {}", company));
    }
    lines.push(format!("  Account: {}", user.user_type));
    lines.push(format!("  Balance: {:.2}", user.balance));
    if !user.is_active {
        lines.push(paint("  Account is deactivated", Color::YELLOW, use_color));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cards_plain() {
        let cards = vec![Card::new("кошка", "cat"), Card::new("собака", "dog")];
        assert_eq!(render_cards(&cards, false), "1. кошка \u{2014} cat\n2. собака \u{2014} dog");
    }

    #[test]
    fn test_render_cards_aligns_numbers() {
        let cards: Vec<Card> = (0..10).map(|i| Card::new(format!("w{}", i), "x")).collect();
        let output = render_cards(&cards, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " 1. w0 \u{2014} x");
        assert_eq!(lines[9], "10. w9 \u{2014} x");
    }

    #[test]
    fn test_paint_respects_color_flag() {
        assert_eq!(paint("ok", Color::GREEN, false), "ok");
        assert_eq!(paint("ok", Color::GREEN, true), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_render_user() {
        let mut user = UserRecord::new(1, "anna@example.com");
        user.company_name = Some("Acme".to_string());
        let lines = render_user(&user, false);
        assert_eq!(lines[0], "Signed in as anna@example.com <anna@example.com>");
        assert!(lines.contains(&"  Company: Acme".to_string()));
    }
}
