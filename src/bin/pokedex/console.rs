#![deny(clippy::all, clippy::pedantic)]

use pokedex::application::notify::{Notification, NotificationLevel, Notifier};

/// Prints store notifications to stderr so stdout carries only results.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_notification(&notification));
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Success => '✓',
        NotificationLevel::Error => '✗',
    };
    format!("{marker} {}", notification.message)
}
