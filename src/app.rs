//! Review window UI and input dispatch.
//! Renders the session state and turns clicks and arrow keys into session actions.

use crate::export::json::{export_json_to_path, import_json};
use crate::models::{Action, Direction, ReviewSession, parse_count};
use crate::store::AttemptForwarder;
use chrono::{DateTime, Local};
use eframe::egui;

const ACTION_KEYS: [egui::Key; 4] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
];

/// Arrow key bindings: up shows, down skips, left is incorrect, right is correct.
pub fn action_for_key(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::ArrowUp => Some(Action::Show),
        egui::Key::ArrowDown => Some(Action::Skip),
        egui::Key::ArrowLeft => Some(Action::Incorrect),
        egui::Key::ArrowRight => Some(Action::Correct),
        _ => None,
    }
}

/// Actions for the keys pressed this frame.
/// Nothing fires while a text field holds keyboard focus.
pub fn pressed_actions(wants_keyboard: bool, pressed: &[egui::Key]) -> Vec<Action> {
    if wants_keyboard {
        return Vec::new();
    }
    pressed.iter().filter_map(|&key| action_for_key(key)).collect()
}

/// Main application state
pub struct ReviewApp {
    session: ReviewSession,
    forwarder: AttemptForwarder,

    sample_size_input: String,
    threshold_input: String,

    started_at: DateTime<Local>,

    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            ACTION_KEYS
                .iter()
                .copied()
                .filter(|&key| i.key_pressed(key))
                .collect()
        });
        for action in pressed_actions(ctx.wants_keyboard_input(), &pressed) {
            self.dispatch(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            self.render_settings(ui);
            ui.separator();
            self.render_card(ui);
        });

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl ReviewApp {
    pub fn new(session: ReviewSession, forwarder: AttemptForwarder) -> Self {
        let settings = session.settings();
        Self {
            sample_size_input: settings.sample_size.to_string(),
            threshold_input: settings.threshold.to_string(),
            session,
            forwarder,
            started_at: Local::now(),
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    /// Applies an action and hands any resulting attempt to the forwarder.
    fn dispatch(&mut self, action: Action) {
        if let Some(attempt) = self.session.apply(action) {
            let _ = self.forwarder.forward(attempt);
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Session started {}",
                self.started_at.format("%Y-%m-%d %H:%M")
            ));
            if ui.button("Export Deck").clicked() {
                self.handle_export();
            }
            if ui.button("Import Deck").clicked() {
                self.handle_import();
            }
        });

        ui.heading(format!(
            "Cards: {}, Incomplete: {}, to Review: {}",
            self.session.total_count(),
            self.session.incomplete_count(),
            self.session.review_count()
        ));
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("session_settings")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("How many cards to review?");
                if ui
                    .text_edit_singleline(&mut self.sample_size_input)
                    .changed()
                {
                    self.session
                        .set_sample_size(parse_count(&self.sample_size_input));
                }
                ui.end_row();

                ui.label("How many times to review each card?");
                if ui.text_edit_singleline(&mut self.threshold_input).changed() {
                    self.session
                        .set_threshold(parse_count(&self.threshold_input));
                }
                ui.end_row();
            });

        let mut persist = self.forwarder.is_enabled();
        if ui.checkbox(&mut persist, "Update answers in db").changed() {
            self.forwarder.set_enabled(persist);
            log::info!("Recording answers {}", if persist { "on" } else { "off" });
        }
    }

    /// Renders the current card, or the end-of-round message
    fn render_card(&mut self, ui: &mut egui::Ui) {
        let Some(card) = self.session.current_card() else {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.heading("Nothing to review");
                if self.session.incomplete_count() > 0 {
                    ui.label(format!(
                        "{} cards still below the threshold.",
                        self.session.incomplete_count()
                    ));
                    if ui.button("Draw again").clicked() {
                        self.session.resample();
                    }
                } else {
                    ui.label("Every card has reached the threshold.");
                }
            });
            return;
        };

        let direction = self.session.current_direction().unwrap_or(Direction::Forward);
        let text = self.session.current_text().unwrap_or_default().to_owned();
        let correct = card.correct(direction);
        let incorrect = card.incorrect(direction);
        let group = card.group.clone();
        let two_way = card.two_way;

        ui.add_space(20.0);
        ui.group(|ui| {
            ui.set_min_height(200.0);
            ui.vertical_centered(|ui| {
                if !group.is_empty() {
                    ui.small(&group);
                }
                if two_way {
                    ui.small(format!("({})", direction.label()));
                }
                ui.add_space(60.0);
                ui.heading(&text);
            });
        });

        ui.label(format!("Correct: {} - Incorrect: {}", correct, incorrect));
        ui.add_space(20.0);

        // Collect the click first, dispatch after the card borrow ends
        let mut clicked: Option<Action> = None;
        ui.horizontal(|ui| {
            if ui.button("Incorrect (left)").clicked() {
                clicked = Some(Action::Incorrect);
            }
            if ui.button("Show (up)").clicked() {
                clicked = Some(Action::Show);
            }
            if ui.button("Skip (down)").clicked() {
                clicked = Some(Action::Skip);
            }
            if ui.button("Correct (right)").clicked() {
                clicked = Some(Action::Correct);
            }
        });
        if let Some(action) = clicked {
            self.dispatch(action);
        }
    }

    /// Handles deck export to JSON file
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("flashcards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.result_message = match export_json_to_path(self.session.deck(), &path) {
                Ok(()) => format!("Exported {} cards.", self.session.total_count()),
                Err(e) => format!("Export failed: {}", e),
            };
            self.show_result_dialog = true;
        }
    }

    /// Handles deck import from JSON file, replacing the session deck
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            self.result_message = match import_json(&path) {
                Ok(deck) => {
                    let count = deck.len();
                    self.session.replace_deck(deck);
                    self.sample_size_input = self.session.settings().sample_size.to_string();
                    format!("Imported {} cards.", count)
                }
                Err(e) => format!(
                    "Import failed: {}\n\nPlease check if the file has correct structure:\n{{\n  \"data\": [...]\n}}",
                    e
                ),
            };
            self.show_result_dialog = true;
        }
    }
}
