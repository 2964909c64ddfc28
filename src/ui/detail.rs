use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::state::catalog::{Catalog, GoatStatus};
use crate::state::favorites::FavoritesLedger;
use crate::ui;
use crate::Message;

/// The detail screen for a single listing.
///
/// Looks the id up against the catalog snapshot on every render; an unknown
/// id is a terminal "not found" state for this screen only. The favorite
/// toggle works against this screen's own ledger copy.
pub fn view<'a>(
    catalog: &'a Catalog,
    id: &'a str,
    favorites: &'a FavoritesLedger,
) -> Element<'a, Message> {
    let Some(goat) = catalog.find(id) else {
        return not_found(id);
    };

    let header = row![
        button(text("← Back to Gallery").size(14))
            .style(button::text)
            .on_press(Message::BackToGallery),
        horizontal_space(),
        ui::favorite_button(&goat.id, favorites.is_favorite(&goat.id), Message::ToggleDetailFavorite),
        share_actions(&goat.id),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let title = row![
        text(format!("Goat ID: {}", goat.id)).size(28),
        horizontal_space(),
        ui::status_badge(goat.status, status_label(goat.status)),
    ]
    .align_y(Alignment::Center);

    let mut info = column![title].spacing(14);

    if let Some(price) = goat.price {
        info = info.push(
            row![
                text("Price").size(14),
                text(ui::format_price(price)).size(26),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    info = info.push(horizontal_rule(1));

    if let Some(desc) = &goat.description {
        info = info.push(column![text("Description").size(17), text(desc).size(14)].spacing(6));
    }

    if let Some(date) = goat.date_listed {
        info = info.push(
            column![
                text("Date Listed").size(13),
                text(date.format("%A, %B %-d, %Y").to_string()).size(15),
            ]
            .spacing(2),
        );
    }

    if let Some(weight) = goat.weight {
        info = info.push(
            column![
                text("Approx. Weight").size(13),
                text(format!("{weight} kg")).size(15),
                text(
                    "Note: This is an approximate weight based on visual assessment. \
                     Actual weight may vary by ±3-4 kg. Final weight should be \
                     confirmed at purchase."
                )
                .size(12),
            ]
            .spacing(2),
        );
    }

    let actions = row![
        button(text("Contact via WhatsApp").size(15))
            .style(button::success)
            .padding([10.0, 16.0])
            .on_press(Message::ContactSeller(goat.id.clone())),
        button(text("Call Now").size(15))
            .style(button::secondary)
            .padding([10.0, 16.0])
            .on_press(Message::CallSeller),
        button(text("▶ Watch Video").size(15))
            .style(button::primary)
            .padding([10.0, 16.0])
            .on_press(Message::WatchVideo(goat.video_url.clone())),
    ]
    .spacing(12);

    info = info.push(actions);

    let body = container(info)
        .padding(24)
        .max_width(900)
        .style(container::bordered_box);

    container(column![header, body].spacing(20).padding(24))
        .center_x(Length::Fill)
        .into()
}

/// Share affordances: copy the canonical link or open a share deep link
fn share_actions(id: &str) -> Element<'static, Message> {
    let share = |label: &'static str, message: Message| {
        button(text(label).size(13))
            .style(button::secondary)
            .padding([4.0, 10.0])
            .on_press(message)
    };

    row![
        share("Copy Link", Message::CopyLink(id.to_string())),
        share("WhatsApp", Message::ShareWhatsApp(id.to_string())),
        share("Twitter", Message::ShareTwitter(id.to_string())),
        share("Facebook", Message::ShareFacebook(id.to_string())),
    ]
    .spacing(8)
    .into()
}

/// Detail badge carries the longer sales wording
fn status_label(status: GoatStatus) -> &'static str {
    match status {
        GoatStatus::Available => "Available for Sale",
        GoatStatus::Sold => "Sold",
    }
}

/// Terminal state for an unknown listing id
fn not_found(id: &str) -> Element<'_, Message> {
    let content = column![
        text("Goat not found").size(24),
        text(format!("No listing with ID {id}.")).size(14),
        button(text("← Back to Gallery").size(14))
            .style(button::primary)
            .padding([8.0, 14.0])
            .on_press(Message::BackToGallery),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
