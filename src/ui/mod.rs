/// View construction for the two screens
///
/// These modules only build widget trees; every decision about what is
/// visible comes from the pure functions in `state::filter`.

pub mod detail;
pub mod filters;
pub mod gallery;

use iced::widget::{button, container, text};
use iced::Element;

use crate::state::catalog::GoatStatus;
use crate::Message;

/// Colored status badge, shared by the card grid and the detail screen
pub(crate) fn status_badge(status: GoatStatus, label: &'static str) -> Element<'static, Message> {
    let style = match status {
        GoatStatus::Available => text::success,
        GoatStatus::Sold => text::danger,
    };

    container(text(label).size(13).style(style))
        .padding([2.0, 8.0])
        .style(container::rounded_box)
        .into()
}

/// Heart toggle. Each screen passes its own message constructor so the two
/// ledger copies stay independent.
pub(crate) fn favorite_button(
    id: &str,
    is_favorite: bool,
    on_toggle: fn(String) -> Message,
) -> Element<'static, Message> {
    let heart = if is_favorite { "♥" } else { "♡" };
    let style = if is_favorite {
        button::danger
    } else {
        button::secondary
    };

    button(text(heart).size(16))
        .style(style)
        .padding([4.0, 10.0])
        .on_press(on_toggle(id.to_string()))
        .into()
}

/// Rupee amount with thousands separators, e.g. "₹25,000"
pub(crate) fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(900.0), "₹900");
        assert_eq!(format_price(22000.0), "₹22,000");
        assert_eq!(format_price(1250000.0), "₹1,250,000");
    }
}
