use iced::widget::{button, column, container, radio, row, text, text_input, Row};
use iced::{Alignment, Element, Length};

use crate::state::filter::{
    self, FilterCriteria, PriceRange, SortBy, StatusFilter, WeightRange,
};
use crate::Message;

/// Search bar, filter panel toggle, the panel itself and the active-chip
/// row. The chips are derived from the criteria on every render, never
/// stored.
pub fn view(criteria: &FilterCriteria, show_filters: bool) -> Element<'static, Message> {
    let chips = filter::active_chips(criteria);

    let search = text_input("Search by Goat ID, description...", &criteria.search_term)
        .on_input(Message::SearchChanged)
        .padding(10)
        .size(16);

    let toggle_label = if chips.is_empty() {
        String::from("Filters")
    } else {
        format!("Filters ({})", chips.len())
    };
    let toggle = button(text(toggle_label))
        .style(button::secondary)
        .padding(10)
        .on_press(Message::ToggleFilterPanel);

    let mut content = column![row![search, toggle].spacing(12)].spacing(12);

    if show_filters {
        content = content.push(filter_panel(criteria));
    }

    if !chips.is_empty() {
        let mut chip_row: Row<Message> = row![text("Active filters:").size(14)]
            .spacing(8)
            .align_y(Alignment::Center);

        for chip in chips {
            chip_row = chip_row.push(
                button(text(format!("{} ✕", chip.label)).size(13))
                    .style(button::secondary)
                    .padding([4.0, 8.0])
                    .on_press(Message::RemoveChip(chip.field)),
            );
        }

        chip_row = chip_row.push(
            button(text("Clear All Filters").size(13))
                .style(button::text)
                .padding([4.0, 8.0])
                .on_press(Message::ClearAllFilters),
        );

        content = content.push(chip_row);
    }

    content.into()
}

/// The expanded panel with one radio group per criteria field
fn filter_panel(criteria: &FilterCriteria) -> Element<'static, Message> {
    let groups = row![
        radio_group(
            "Status",
            &StatusFilter::OPTIONS,
            criteria.status,
            StatusFilter::label,
            Message::StatusSelected,
        ),
        radio_group(
            "Price Range",
            &PriceRange::OPTIONS,
            criteria.price,
            PriceRange::label,
            Message::PriceSelected,
        ),
        radio_group(
            "Weight Range",
            &WeightRange::OPTIONS,
            criteria.weight,
            WeightRange::label,
            Message::WeightSelected,
        ),
        radio_group(
            "Sort By",
            &SortBy::OPTIONS,
            criteria.sort,
            SortBy::label,
            Message::SortSelected,
        ),
    ]
    .spacing(32);

    container(groups)
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn radio_group<V>(
    title: &'static str,
    options: &[V],
    selected: V,
    label: fn(&V) -> &'static str,
    on_select: fn(V) -> Message,
) -> Element<'static, Message>
where
    V: Copy + Eq + 'static,
{
    let mut group = column![text(title).size(15)].spacing(6);

    for option in options {
        group = group.push(
            radio(label(option), *option, Some(selected), on_select)
                .size(16)
                .text_size(14),
        );
    }

    group.into()
}
