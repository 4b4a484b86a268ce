use common::games::snake::{Direction, Food, FoodKind, GameSnapshot, GameStatus, Point};
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::config::DisplayConfig;
use crate::ui::colors::{
    background_row, food_color, food_glow, scale, tier_color, with_alpha, DEFAULT_SNAKE, OBSTACLE,
    TONGUE,
};

const TRAIL_LIFETIME: usize = 20;
const TONGUE_FLIP_FRAMES: u32 = 30;
const BACKGROUND_BAND: f32 = 4.0;

pub struct SnakeGameUi {
    trail: AllocRingBuffer<Point>,
    last_head: Option<Point>,
    background_phase: f32,
    glow_phase: f32,
    tongue_timer: u32,
    tongue_out: bool,
}

impl SnakeGameUi {
    pub fn new() -> Self {
        Self {
            trail: AllocRingBuffer::new(TRAIL_LIFETIME),
            last_head: None,
            background_phase: 0.0,
            glow_phase: 0.0,
            tongue_timer: 0,
            tongue_out: false,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot, display: &DisplayConfig) {
        self.advance_animation(snapshot);

        let cell = display.cell_size as f32;
        let size = egui::vec2(
            snapshot.grid_width as f32 * cell,
            snapshot.grid_height as f32 * cell,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        let snake_color = if display.score_tier_colors {
            tier_color(snapshot.score, &display.score_tiers, &display.tier_colors)
        } else {
            DEFAULT_SNAKE
        };

        self.draw_background(&painter, rect, display.animated_background);
        if display.snake_trail {
            self.draw_trail(&painter, rect.min, cell, snake_color);
        }

        for obstacle in &snapshot.obstacles {
            painter.rect_filled(cell_rect(rect.min, cell, *obstacle), 0.0, OBSTACLE);
        }

        for segment in snapshot.snake.iter().skip(1) {
            painter.rect_filled(cell_rect(rect.min, cell, *segment), 0.0, snake_color);
        }
        if let Some(head) = snapshot.head() {
            self.draw_head(&painter, rect.min, cell, head, snapshot.direction, snake_color);
        }

        for food in snapshot.foods() {
            self.draw_food(&painter, rect.min, cell, food, display.glow_effects);
        }

        draw_hud(&painter, rect, snapshot);
        match snapshot.status {
            GameStatus::Running => {}
            GameStatus::Paused => draw_pause_overlay(&painter, rect),
            GameStatus::GameOver | GameStatus::AwaitingInitials => {
                draw_game_over_overlay(&painter, rect, snapshot)
            }
        }
    }

    fn advance_animation(&mut self, snapshot: &GameSnapshot) {
        self.background_phase += 0.01;
        self.glow_phase += 0.2;
        self.tongue_timer += 1;
        if self.tongue_timer > TONGUE_FLIP_FRAMES {
            self.tongue_out = !self.tongue_out;
            self.tongue_timer = 0;
        }

        if snapshot.tick == 0 {
            self.trail.clear();
        }
        let head = snapshot.head();
        if head != self.last_head {
            if let Some(head) = head
                && snapshot.snake.len() >= 2
            {
                self.trail.enqueue(head);
            }
            self.last_head = head;
        }
    }

    fn draw_background(&self, painter: &egui::Painter, rect: egui::Rect, animated: bool) {
        if !animated {
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 30));
            return;
        }
        let mut y = 0.0;
        while y < rect.height() {
            let band = egui::Rect::from_min_size(
                rect.min + egui::vec2(0.0, y),
                egui::vec2(rect.width(), BACKGROUND_BAND.min(rect.height() - y)),
            );
            painter.rect_filled(band, 0.0, background_row(self.background_phase, y));
            y += BACKGROUND_BAND;
        }
    }

    fn draw_trail(&self, painter: &egui::Painter, origin: egui::Pos2, cell: f32, color: egui::Color32) {
        let count = self.trail.len();
        for (index, mark) in self.trail.iter().enumerate() {
            let age = count - 1 - index;
            let alpha = (50.0 * (1.0 - age as f32 / TRAIL_LIFETIME as f32)) as u8;
            let rect = cell_rect(origin, cell, *mark);
            for inset in 0..5 {
                let layer_alpha = (alpha as f32 * (1.0 - inset as f32 / 5.0)) as u8;
                painter.rect_filled(rect.shrink(inset as f32), 0.0, with_alpha(color, layer_alpha));
            }
        }
    }

    fn draw_head(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        cell: f32,
        head: Point,
        direction: Direction,
        color: egui::Color32,
    ) {
        let rect = cell_rect(origin, cell, head);
        painter.rect_filled(rect, cell * 0.25, color);

        let center = rect.center();
        let offset = cell / 4.0;
        let (eye1, eye2) = match direction {
            Direction::Right => (egui::vec2(offset, -offset), egui::vec2(offset, offset)),
            Direction::Left => (egui::vec2(-offset, -offset), egui::vec2(-offset, offset)),
            Direction::Up => (egui::vec2(-offset, -offset), egui::vec2(offset, -offset)),
            Direction::Down => (egui::vec2(-offset, offset), egui::vec2(offset, offset)),
        };
        for eye in [eye1, eye2] {
            painter.circle_filled(center + eye, 3.0, egui::Color32::WHITE);
            painter.circle_filled(center + eye, 2.0, egui::Color32::BLACK);
        }

        if self.tongue_out {
            let (dx, dy) = direction.delta();
            let forward = egui::vec2(dx as f32, dy as f32);
            let side = egui::vec2(-forward.y, forward.x);
            let start = center + forward * (cell / 2.0 - 2.0);
            let end = start + forward * (cell / 3.0);
            let stroke = egui::Stroke::new(2.0, TONGUE);
            painter.line_segment([start, end], stroke);
            painter.line_segment([end, end + (forward + side) * 3.0], stroke);
            painter.line_segment([end, end + (forward - side) * 3.0], stroke);
        }
    }

    fn draw_food(&self, painter: &egui::Painter, origin: egui::Pos2, cell: f32, food: &Food, glow: bool) {
        let rect = cell_rect(origin, cell, food.position);
        let color = food_color(food.kind);
        if glow {
            let (intensity, size) = food_glow(food.kind, self.glow_phase);
            let glow_color = scale(color, intensity);
            let radius = cell * size;
            for layer in 0..3 {
                let alpha = (50.0 * (1.0 - layer as f32 / 3.0)) as u8;
                painter.circle_filled(rect.center(), radius, with_alpha(glow_color, alpha));
            }
        }
        painter.rect_filled(rect.shrink(2.0), 0.0, color);
        if food.moving {
            painter.circle_stroke(
                rect.center(),
                cell * 0.45,
                egui::Stroke::new(1.0, egui::Color32::WHITE),
            );
        }
    }
}

fn cell_rect(origin: egui::Pos2, cell: f32, point: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(point.x as f32 * cell, point.y as f32 * cell),
        egui::vec2(cell, cell),
    )
}

fn draw_hud(painter: &egui::Painter, rect: egui::Rect, snapshot: &GameSnapshot) {
    let white = egui::Color32::WHITE;
    let at = |dy: f32| rect.min + egui::vec2(10.0, 10.0 + dy);
    painter.text(
        at(0.0),
        egui::Align2::LEFT_TOP,
        format!("Score: {}", snapshot.score),
        egui::FontId::proportional(28.0),
        white,
    );
    painter.text(
        at(40.0),
        egui::Align2::LEFT_TOP,
        format!("Speed: {:.1}", snapshot.speed),
        egui::FontId::proportional(18.0),
        white,
    );

    let count = |kind: FoodKind| snapshot.bonus_foods.iter().filter(|f| f.kind == kind).count();
    let mut dy = 70.0;
    for (label, kind) in [("Normal Foods", FoodKind::Normal), ("Golden Foods", FoodKind::Golden)] {
        let n = count(kind);
        if n > 0 {
            painter.text(
                at(dy),
                egui::Align2::LEFT_TOP,
                format!("{}: {}", label, n),
                egui::FontId::proportional(18.0),
                white,
            );
            dy += 20.0;
        }
    }
}

fn centered_text(painter: &egui::Painter, rect: egui::Rect, dy: f32, text: String, size: f32) {
    painter.text(
        rect.center() + egui::vec2(0.0, dy),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(size),
        egui::Color32::WHITE,
    );
}

fn draw_pause_overlay(painter: &egui::Painter, rect: egui::Rect) {
    centered_text(painter, rect, 0.0, "PAUSED".to_string(), 36.0);
    centered_text(painter, rect, 40.0, "Press P or SPACE to unpause".to_string(), 18.0);
}

fn draw_game_over_overlay(painter: &egui::Painter, rect: egui::Rect, snapshot: &GameSnapshot) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(128));
    centered_text(painter, rect, -80.0, "GAME OVER".to_string(), 36.0);
    centered_text(painter, rect, -40.0, format!("Final Score: {}", snapshot.score), 36.0);

    if snapshot.status == GameStatus::AwaitingInitials {
        centered_text(painter, rect, 10.0, "Enter your initials (3 letters):".to_string(), 18.0);
        let shown = format!("{:_<3}", snapshot.initials);
        centered_text(painter, rect, 50.0, shown, 48.0);
        centered_text(painter, rect, 90.0, "Press ENTER to save".to_string(), 18.0);
    } else {
        centered_text(painter, rect, 20.0, "Press R to restart, ESC to quit".to_string(), 18.0);
        centered_text(
            painter,
            rect,
            50.0,
            "Press L during gameplay to reset leaderboard".to_string(),
            18.0,
        );
    }

    if snapshot.leaderboard.is_empty() {
        return;
    }
    centered_text(painter, rect, 120.0, "LEADERBOARD".to_string(), 18.0);
    for (rank, entry) in snapshot.leaderboard.iter().enumerate() {
        centered_text(
            painter,
            rect,
            150.0 + rank as f32 * 25.0,
            format!("{}. {} - {}", rank + 1, entry.initials, entry.score),
            18.0,
        );
    }
}
