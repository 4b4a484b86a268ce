use std::time::Instant;

use common::config::FileContentConfigProvider;
use common::log;

use crate::config::DisplayConfig;
use crate::offline::SnakeRunner;
use super::game::SnakeGameUi;
use super::input::{map_key, map_text, AppAction};

pub struct SnakeApp {
    runner: SnakeRunner<FileContentConfigProvider>,
    game_ui: SnakeGameUi,
    display: DisplayConfig,
    last_frame: Option<Instant>,
}

impl SnakeApp {
    pub fn new(runner: SnakeRunner<FileContentConfigProvider>, display: DisplayConfig) -> Self {
        Self {
            runner,
            game_ui: SnakeGameUi::new(),
            display,
            last_frame: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let status = self.runner.state().status();
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => match map_key(key, status) {
                    Some(AppAction::Game(input)) => {
                        self.runner.handle_input(input);
                    }
                    Some(AppAction::Quit) => {
                        log!("Quit requested");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    None => {}
                },
                egui::Event::Text(text) => {
                    for input in map_text(&text, status) {
                        self.runner.handle_input(input);
                    }
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        if let Some(last_frame) = self.last_frame {
            self.runner.update(now.duration_since(last_frame));
        }
        self.last_frame = Some(now);

        let snapshot = self.runner.snapshot();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.game_ui.render(ui, &snapshot, &self.display);
            });

        ctx.request_repaint();
    }
}
