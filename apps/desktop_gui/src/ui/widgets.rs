//! Small presentation helpers shared by the page sections.

use crate::ui::theme;

const START_DELAY_TICKS: u8 = 4;
const TYPE_TICKS: u8 = 2;
const DELETE_TICKS: u8 = 1;
const HOLD_TICKS: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypewriterPhase {
    Typing,
    Holding,
    Deleting,
}

/// Tick-driven rotating headline: type forward, hold, delete, advance to the
/// next phrase, loop. One `advance` call per UI frame.
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    visible: usize,
    phase: TypewriterPhase,
    wait: u8,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            visible: 0,
            phase: TypewriterPhase::Typing,
            wait: START_DELAY_TICKS,
        }
    }

    pub fn advance(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        if self.wait > 0 {
            self.wait -= 1;
            return;
        }

        let phrase_len = self.current_phrase_len();
        match self.phase {
            TypewriterPhase::Typing => {
                if self.visible < phrase_len {
                    self.visible += 1;
                }
                if self.visible == phrase_len {
                    self.phase = TypewriterPhase::Holding;
                    self.wait = HOLD_TICKS;
                } else {
                    self.wait = TYPE_TICKS;
                }
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
                self.wait = DELETE_TICKS;
            }
            TypewriterPhase::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                }
                if self.visible == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = TypewriterPhase::Typing;
                    self.wait = START_DELAY_TICKS;
                } else {
                    self.wait = DELETE_TICKS;
                }
            }
        }
    }

    pub fn line(&self) -> String {
        if self.phrases.is_empty() {
            return String::new();
        }
        self.phrases[self.phrase]
            .chars()
            .take(self.visible)
            .collect()
    }

    fn current_phrase_len(&self) -> usize {
        self.phrases[self.phrase].chars().count()
    }
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(theme::BADGE_BACKGROUND)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(12.0)
                    .color(theme::TEXT_PRIMARY),
            );
        });
}

pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .strong()
                .size(26.0)
                .color(theme::TEXT_PRIMARY),
        );
    });
    ui.add_space(18.0);
}

/// Up to two initials for the footer avatar, e.g. "Shrey Bhardwaj" -> "SB".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
