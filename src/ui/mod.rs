//! UI module for TuneGrab.

mod messages;
mod state;
pub mod theme;
mod update;
mod views;

use iced::{Element, Subscription, Task, time};
use std::time::Duration;

pub use messages::Message;

use crate::history::{FileStorage, HistoryStore, MemoryStorage, Storage};
use state::AppState;

pub struct TuneGrab {
    state: AppState,
}

impl TuneGrab {
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::load();

        let storage: Box<dyn Storage> = match FileStorage::default_slot() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!("History will not persist this session: {}", e);
                Box::new(MemoryStorage::new())
            }
        };
        let history = HistoryStore::load(storage);
        tracing::info!("Loaded {} history entries", history.entries().len());

        // The window usually opens focused, so run the startup clipboard
        // check immediately instead of waiting for a focus event
        (
            Self {
                state: AppState::new(config, history),
            },
            iced::clipboard::read().map(Message::ClipboardRead),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::event::listen_with(|event, _status, _window| {
            match event {
                iced::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
                _ => None,
            }
        })];

        // Only tick while there is something to expire
        if self.state.toasts.has_visible() {
            subscriptions
                .push(time::every(Duration::from_millis(500)).map(|_| Message::ToastExpireTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::main_view(&self.state)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        tracing::trace!(target: "ui::update", message = ?message, "Update received");

        let s = &mut self.state;
        match &message {
            // Lookup messages
            Message::InputChanged(_)
            | Message::SubmitPressed
            | Message::LookupFinished(_, _)
            | Message::OpenDownloadLink
            | Message::OpenCompanionDownload => update::handle_lookup(s, message),

            // History messages
            Message::HistorySelected(_) | Message::ClearHistoryPressed => {
                update::handle_history(s, message)
            }

            // Clipboard suggestion messages
            Message::WindowFocused
            | Message::ClipboardRead(_)
            | Message::SuggestionAccepted
            | Message::SuggestionDismissed => update::handle_clipboard(s, message),

            // Toast notification messages
            Message::ToastDismiss(id) => {
                s.toasts.remove(*id);
                Task::none()
            }
            Message::ToastExpireTick => {
                s.toasts.remove_expired();
                Task::none()
            }
        }
    }
}
