use std::path::Path;

use iced::widget::{button, column, container, horizontal_space, image, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::{Catalog, Goat};
use crate::state::favorites::FavoritesLedger;
use crate::state::filter::{self, FilterCriteria};
use crate::ui;
use crate::Message;

/// Card width in the grid; the Wrap reflows to the window
const CARD_WIDTH: f32 = 320.0;

/// Longest description shown on a card before clamping
const CARD_DESCRIPTION_CHARS: usize = 110;

/// The gallery screen: header, search/filter controls and the card grid.
///
/// The visible subset is recomputed from the catalog snapshot and the
/// current criteria on every render; nothing here caches filter results.
pub fn view<'a>(
    catalog: &'a Catalog,
    criteria: &'a FilterCriteria,
    show_filters: bool,
    favorites: &'a FavoritesLedger,
    status: &'a str,
) -> Element<'a, Message> {
    let visible = filter::apply(catalog.goats(), criteria);

    let header = row![
        column![
            text("A.B Livestocks").size(26),
            text("Al Baraqah Livestocks - Premium Quality Goats").size(14),
        ]
        .spacing(2),
        horizontal_space(),
        text(status).size(14),
    ]
    .align_y(Alignment::Center);

    let results_line = text(format!(
        "Showing {} of {} goats",
        visible.len(),
        catalog.len()
    ))
    .size(14);

    let grid: Element<Message> = if visible.is_empty() {
        container(text("No goats match the current filters.").size(16))
            .center_x(Length::Fill)
            .padding(40)
            .into()
    } else {
        let cards: Vec<Element<Message>> = visible
            .iter()
            .map(|goat| card(goat, favorites.is_favorite(&goat.id)))
            .collect();

        Wrap::with_elements(cards)
            .spacing(16.0)
            .line_spacing(16.0)
            .into()
    };

    let content = column![
        header,
        ui::filters::view(criteria, show_filters),
        results_line,
        grid,
    ]
    .spacing(16)
    .padding(24);

    scrollable(content).height(Length::Fill).into()
}

/// One goat card: preview, status badge, favorite toggle, listing facts
/// and the contact / navigation actions.
fn card(goat: &Goat, is_favorite: bool) -> Element<'static, Message> {
    let top_row = row![
        ui::status_badge(goat.status, goat.status.label()),
        horizontal_space(),
        ui::favorite_button(&goat.id, is_favorite, Message::ToggleFavorite),
    ]
    .align_y(Alignment::Center);

    let mut title_row = row![text(format!("ID: {}", goat.id)).size(17)]
        .spacing(8)
        .align_y(Alignment::Center);
    title_row = title_row.push(horizontal_space());
    if let Some(price) = goat.price {
        title_row = title_row.push(text(ui::format_price(price)).size(16));
    }

    let mut body = column![preview(goat), top_row, title_row].spacing(8);

    if let Some(desc) = &goat.description {
        body = body.push(text(clamp(desc, CARD_DESCRIPTION_CHARS)).size(13));
    }

    if let Some(date) = goat.date_listed {
        body = body.push(text(format!("Listed on {}", date.format("%b %-d, %Y"))).size(12));
    }

    let actions = row![
        button(text("View Details").size(14))
            .style(button::primary)
            .padding([6.0, 12.0])
            .on_press(Message::OpenGoat(goat.id.clone())),
        button(text("▶ Play").size(14))
            .style(button::secondary)
            .padding([6.0, 12.0])
            .on_press(Message::WatchVideo(goat.video_url.clone())),
        button(text("💬").size(14))
            .style(button::success)
            .padding([6.0, 12.0])
            .on_press(Message::ContactSeller(goat.id.clone())),
    ]
    .spacing(8);

    body = body.push(actions);

    container(body)
        .width(CARD_WIDTH)
        .padding(12)
        .style(container::bordered_box)
        .into()
}

/// Thumbnail when one exists on disk, otherwise a labeled placeholder.
/// Video playback itself always happens externally.
fn preview(goat: &Goat) -> Element<'static, Message> {
    let local_thumb = goat
        .thumbnail
        .as_deref()
        .filter(|path| Path::new(path).exists());

    match local_thumb {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(170)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text(goat.id.clone()).size(24))
            .style(container::rounded_box)
            .center_x(Length::Fill)
            .center_y(170)
            .into(),
    }
}

/// Two-line clamp stand-in: cut at a character budget, on a char boundary
fn clamp(desc: &str, max_chars: usize) -> String {
    if desc.chars().count() <= max_chars {
        return desc.to_string();
    }

    let cut: String = desc.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
