//! View rendering for the TuneGrab window.
//!
//! Everything here is presentational: views only read [`AppState`] and emit
//! [`Message`]s. All decisions live in the update handlers.

pub mod toast;

pub use toast::ToastQueue;

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::ui::messages::Message;
use crate::ui::state::AppState;
use crate::ui::theme::{self, color, spacing, typography};

/// Where to get the desktop companion package. Exposed as a link only; the
/// app never fetches or validates it.
pub const COMPANION_DOWNLOAD_URL: &str =
    "https://github.com/tunegrab/tunegrab/releases/latest/download/tunegrab-desktop.AppImage";

/// Render the whole window.
pub fn main_view(state: &AppState) -> Element<'_, Message> {
    let mut content = column![header(), lookup_row(state)]
        .spacing(spacing::LG)
        .max_width(640.0);

    if let Some(ref suggestion) = state.suggestion {
        content = content.push(suggestion_banner(suggestion));
    }

    if state.is_resolving {
        content = content.push(
            text("Resolving…")
                .size(typography::SIZE_BODY)
                .color(color::TEXT_MUTED),
        );
    }

    if let Some(ref current) = state.current {
        content = content.push(result_card(current));
    }

    content = content.push(history_section(state));
    content = content.push(companion_footer());

    let page = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .padding(spacing::XL)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(color::BASE)),
            text_color: Some(color::TEXT_PRIMARY),
            ..Default::default()
        });

    match toast::toast_overlay(&state.toasts) {
        Some(overlay) => iced::widget::stack![page, overlay].into(),
        None => page.into(),
    }
}

fn header() -> Element<'static, Message> {
    column![
        text("TuneGrab").size(typography::SIZE_TITLE),
        text("Paste a track link, get a download link")
            .size(typography::SIZE_BODY)
            .color(color::TEXT_MUTED),
    ]
    .spacing(spacing::XS)
    .into()
}

fn lookup_row(state: &AppState) -> Element<'_, Message> {
    let input = text_input("https://open.spotify.com/track/…", &state.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::SubmitPressed)
        .padding(spacing::SM)
        .size(typography::SIZE_BODY);

    // Disabled while a lookup is in flight - the update handler guards too,
    // this just reflects it
    let submit = button(text("Get link").size(typography::SIZE_BODY))
        .padding([spacing::SM, spacing::MD])
        .style(theme::button_primary)
        .on_press_maybe((!state.is_resolving).then_some(Message::SubmitPressed));

    row![input, submit].spacing(spacing::SM).into()
}

fn suggestion_banner(suggestion: &str) -> Element<'_, Message> {
    let content = row![
        column![
            text("Track link found in your clipboard")
                .size(typography::SIZE_BODY)
                .color(color::TEXT_PRIMARY),
            text(suggestion)
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_MUTED),
        ]
        .spacing(spacing::XS),
        Space::with_width(Length::Fill),
        button(text("Use it").size(typography::SIZE_BODY))
            .padding([spacing::XS, spacing::SM])
            .style(theme::button_primary)
            .on_press(Message::SuggestionAccepted),
        button(text("✕").size(typography::SIZE_BODY).color(color::TEXT_MUTED))
            .padding([spacing::XS, spacing::SM])
            .style(theme::button_ghost)
            .on_press(Message::SuggestionDismissed),
    ]
    .align_y(iced::Alignment::Center)
    .spacing(spacing::SM);

    surface_card(content.into())
}

fn result_card(current: &crate::ui::state::ResolvedTrack) -> Element<'_, Message> {
    let artist = current.result.artist.as_deref().unwrap_or("Unknown artist");

    let content = row![
        column![
            text(&current.result.title)
                .size(typography::SIZE_SUBTITLE)
                .color(color::TEXT_PRIMARY),
            text(artist)
                .size(typography::SIZE_BODY)
                .color(color::TEXT_MUTED),
        ]
        .spacing(spacing::XS),
        Space::with_width(Length::Fill),
        button(text("Download").size(typography::SIZE_BODY))
            .padding([spacing::SM, spacing::MD])
            .style(theme::button_primary)
            .on_press(Message::OpenDownloadLink),
    ]
    .align_y(iced::Alignment::Center)
    .spacing(spacing::SM);

    surface_card(content.into())
}

fn history_section(state: &AppState) -> Element<'_, Message> {
    let entries = state.history.entries();

    if entries.is_empty() {
        return Space::with_height(Length::Shrink).into();
    }

    let mut section = column![
        row![
            text("Recent lookups")
                .size(typography::SIZE_SUBTITLE)
                .color(color::TEXT_PRIMARY),
            Space::with_width(Length::Fill),
            button(text("Clear").size(typography::SIZE_SMALL).color(color::TEXT_MUTED))
                .padding([spacing::XS, spacing::SM])
                .style(theme::button_ghost)
                .on_press(Message::ClearHistoryPressed),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(spacing::SM);

    for (index, entry) in entries.iter().enumerate() {
        let artist = entry.artist.as_deref().unwrap_or("Unknown artist");
        let label = column![
            text(format!("{} - {}", artist, entry.title)).size(typography::SIZE_BODY),
            text(&entry.source_url)
                .size(typography::SIZE_SMALL)
                .color(color::TEXT_MUTED),
        ]
        .spacing(spacing::XS);

        // Clicking a row re-fills the input with the original link
        section = section.push(
            button(label)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(theme::button_ghost)
                .on_press(Message::HistorySelected(index)),
        );
    }

    section.into()
}

fn companion_footer() -> Element<'static, Message> {
    button(
        text("Get the desktop companion app")
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_MUTED),
    )
    .padding([spacing::XS, spacing::SM])
    .style(theme::button_ghost)
    .on_press(Message::OpenCompanionDownload)
    .into()
}

fn surface_card(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(color::SURFACE)),
            border: iced::Border {
                color: color::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
