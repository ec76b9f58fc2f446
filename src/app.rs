//! egui 悬浮窗：无边框置顶小窗，每行一个计时器（名字、时间、开始/暂停、加时、归零）

use std::time::Duration;

use chrono::Utc;
use eframe::egui;
use tracing::{info, warn};

use work_timer::{TickClock, TimerCollection, TimerConfig, TimerError, format_hms, parse_initial, parse_relative};

/// Nord 主题色
mod nord {
    pub const BG: (u8, u8, u8) = (0x2E, 0x34, 0x40);
    pub const FG: (u8, u8, u8) = (0xD8, 0xDE, 0xE9);
    pub const ACCENT: (u8, u8, u8) = (0x88, 0xC0, 0xD0);
    pub const SUCCESS: (u8, u8, u8) = (0xA3, 0xBE, 0x8C);
    pub const WARNING: (u8, u8, u8) = (0xEB, 0xCB, 0x8B);
    pub const DANGER: (u8, u8, u8) = (0xBF, 0x61, 0x6A);
    pub const HIGHLIGHT: (u8, u8, u8) = (0x4C, 0x56, 0x6A);
}

/// 窗口不透明度
const WINDOW_OPACITY: f32 = 0.92;

pub const WINDOW_WIDTH: f32 = 320.0;
/// 还没有计时器时的高度
pub const INITIAL_HEIGHT: f32 = 150.0;
/// 顶栏 + 边距
const BASE_HEIGHT: f32 = 70.0;
const ROW_HEIGHT: f32 = 45.0;

const ROW_BUTTON: egui::Vec2 = egui::vec2(28.0, 28.0);
const HEADER_BUTTON: egui::Vec2 = egui::vec2(24.0, 24.0);

const PROMPT_SIZE: [f32; 2] = [300.0, 120.0];

/// 放下 n 个计时器所需的窗口高度
pub fn window_height(count: usize) -> f32 {
    BASE_HEIGHT + count as f32 * ROW_HEIGHT
}

fn rgb(c: (u8, u8, u8)) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

/// 模态对话：输入框或消息框。打开期间主窗口按钮不可用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    TimerName { text: String },
    InitialTime { name: String, text: String },
    AddTime { name: String, text: String },
    Message { title: &'static str, body: String },
}

impl Prompt {
    fn title(&self) -> &str {
        match self {
            Prompt::TimerName { .. } => "New Timer",
            Prompt::InitialTime { .. } => "Initial Time",
            Prompt::AddTime { .. } => "Add Time",
            Prompt::Message { title, .. } => *title,
        }
    }

    /// 输入框的提示文字和编辑缓冲；消息框返回 None
    fn input_mut(&mut self) -> Option<(&'static str, &mut String)> {
        match self {
            Prompt::TimerName { text } => Some(("Name:", text)),
            Prompt::InitialTime { text, .. } => Some(("HH:MM:SS or MM:SS (Empty = 0):", text)),
            Prompt::AddTime { text, .. } => Some(("Time to add (e.g. 5, 10m, 1h, 30s):", text)),
            Prompt::Message { .. } => None,
        }
    }

    fn error(body: impl Into<String>) -> Self {
        Prompt::Message {
            title: "Error",
            body: body.into(),
        }
    }

    fn limit_reached(max: usize) -> Self {
        Prompt::Message {
            title: "Limit Reached",
            body: format!("Limit of {max} timers reached."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PromptAction {
    Submit,
    Cancel,
}

pub struct WorkTimerApp {
    timers: TimerCollection,
    clock: TickClock,
    prompt: Option<Prompt>,
    /// 计时器数变化后需要按新高度调整窗口
    size_applied: bool,
}

impl Default for WorkTimerApp {
    fn default() -> Self {
        Self::with_config(TimerConfig::default())
    }
}

impl WorkTimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::default()
    }

    pub fn with_config(config: TimerConfig) -> Self {
        Self {
            timers: TimerCollection::new(config),
            clock: TickClock::new(),
            prompt: None,
            size_applied: true,
        }
    }

    /// 「+」：满了直接提示，否则询问名字
    fn request_new_timer(&mut self) {
        if self.timers.is_full() {
            warn!(max = self.timers.config().max_timers, "timer limit reached");
            self.prompt = Some(Prompt::limit_reached(self.timers.config().max_timers));
        } else {
            self.prompt = Some(Prompt::TimerName {
                text: String::new(),
            });
        }
    }

    fn request_add_time(&mut self, name: &str) {
        self.prompt = Some(Prompt::AddTime {
            name: name.to_owned(),
            text: String::new(),
        });
    }

    fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// 对话框「OK」/ 回车：按当前对话决定下一步
    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else { return };
        self.prompt = match prompt {
            Prompt::TimerName { text } => {
                let name = text.trim();
                if name.is_empty() {
                    None
                } else {
                    Some(Prompt::InitialTime {
                        name: name.to_owned(),
                        text: String::new(),
                    })
                }
            }
            Prompt::InitialTime { name, text } => self.create_timer(&name, &text),
            Prompt::AddTime { name, text } => {
                if text.trim().is_empty() {
                    None
                } else {
                    self.apply_added_time(&name, &text)
                }
            }
            Prompt::Message { .. } => None,
        };
    }

    /// 新建计时器；失败时返回要展示的消息
    fn create_timer(&mut self, name: &str, initial: &str) -> Option<Prompt> {
        if self.timers.contains(name) {
            warn!(name, "duplicate timer name");
            return Some(Prompt::error("A timer with this name already exists."));
        }
        let initial_secs = match parse_initial(initial) {
            Ok(secs) => secs,
            Err(e) => {
                warn!(input = initial, error = %e, "invalid initial time");
                return Some(Prompt::error("Invalid format. Use HH:MM:SS"));
            }
        };
        match self.timers.add(name, initial_secs) {
            Ok(()) => {
                info!(name, initial_secs, "timer created");
                self.size_applied = false;
                None
            }
            Err(TimerError::Capacity { max }) => Some(Prompt::limit_reached(max)),
            Err(TimerError::Duplicate(_)) => {
                Some(Prompt::error("A timer with this name already exists."))
            }
            Err(e) => Some(Prompt::error(e.to_string())),
        }
    }

    fn apply_added_time(&mut self, name: &str, input: &str) -> Option<Prompt> {
        let delta = match parse_relative(input) {
            Ok(delta) => delta,
            Err(e) => {
                warn!(input, error = %e, "invalid duration");
                return Some(Prompt::error(
                    "Invalid format. Use numbers (minutes), '1h', '30s'.",
                ));
            }
        };
        match self.timers.add_time(name, delta) {
            Ok(_) => None,
            Err(e) => Some(Prompt::error(e.to_string())),
        }
    }

    fn toggle(&mut self, name: &str) {
        if let Err(e) = self.timers.toggle(name) {
            warn!(error = %e, "toggle failed");
        }
    }

    fn reset(&mut self, name: &str) {
        if let Err(e) = self.timers.reset(name) {
            warn!(error = %e, "reset failed");
        }
    }

    fn current_height(&self) -> f32 {
        if self.timers.is_empty() {
            INITIAL_HEIGHT
        } else {
            window_height(self.timers.len())
        }
    }
}

/// 每行右侧的小方块按钮
fn row_button(
    ui: &mut egui::Ui,
    glyph: &str,
    color: (u8, u8, u8),
    fill: (u8, u8, u8),
    border: (u8, u8, u8),
) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(glyph).color(rgb(color)))
            .fill(rgb(fill))
            .stroke(egui::Stroke::new(1.0, rgb(border)))
            .min_size(ROW_BUTTON),
    )
}

/// 对话框内容；返回用户本帧的操作
fn prompt_body(ui: &mut egui::Ui, prompt: &mut Prompt) -> Option<PromptAction> {
    let mut action = None;
    if let Prompt::Message { body, .. } = prompt {
        ui.label(body.as_str());
        ui.add_space(6.0);
        if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(PromptAction::Submit);
        }
    } else if let Some((label, text)) = prompt.input_mut() {
        ui.label(label);
        let resp = ui.text_edit_singleline(text);
        if ui.memory(|m| m.focused().is_none()) {
            resp.request_focus();
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(PromptAction::Submit);
        }
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                action = Some(PromptAction::Submit);
            }
            if ui.button("Cancel").clicked() {
                action = Some(PromptAction::Cancel);
            }
        });
    }
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(PromptAction::Cancel);
    }
    action
}

impl eframe::App for WorkTimerApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for _ in 0..self.clock.advance(Utc::now()) {
            self.timers.tick();
        }
        ctx.request_repaint_after(Duration::from_millis(250));

        if !self.size_applied {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                WINDOW_WIDTH,
                self.current_height(),
            )));
            self.size_applied = true;
        }

        self.ui_main(ctx);

        if self.prompt.is_some() {
            self.ui_prompt(ctx);
        }
    }
}

impl WorkTimerApp {
    fn ui_main(&mut self, ctx: &egui::Context) {
        let alpha = (WINDOW_OPACITY * 255.0) as u8;
        let bg = egui::Color32::from_rgba_unmultiplied(nord::BG.0, nord::BG.1, nord::BG.2, alpha);
        let modal_open = self.prompt.is_some();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(bg)
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::same(15)),
            )
            .show(ctx, |ui| {
                // 无边框窗口：按住空白处拖动
                let drag = ui.interact(
                    ui.max_rect(),
                    egui::Id::new("work_timer_drag"),
                    egui::Sense::click_and_drag(),
                );
                if drag.drag_started_by(egui::PointerButton::Primary) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }

                ui.spacing_mut().item_spacing.y = 10.0;

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Work Timer")
                            .strong()
                            .size(14.0)
                            .color(rgb(nord::ACCENT)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new("✕").strong().color(rgb(nord::DANGER)),
                                )
                                .frame(false)
                                .min_size(HEADER_BUTTON),
                            )
                            .on_hover_text("Close")
                            .clicked()
                        {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        let add = ui
                            .add_enabled(
                                !modal_open,
                                egui::Button::new(
                                    egui::RichText::new("+")
                                        .strong()
                                        .size(18.0)
                                        .color(rgb(nord::SUCCESS)),
                                )
                                .frame(false)
                                .min_size(HEADER_BUTTON),
                            )
                            .on_hover_text("Add new timer");
                        if add.clicked() {
                            self.request_new_timer();
                        }
                    });
                });

                let rows: Vec<(String, String, bool)> = self
                    .timers
                    .iter()
                    .map(|(t, running)| (t.name.clone(), format_hms(t.elapsed_secs), running))
                    .collect();

                ui.add_enabled_ui(!modal_open, |ui| {
                    for (name, shown, running) in rows {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 5.0;
                            ui.add_sized(
                                [70.0, ROW_BUTTON.y],
                                egui::Label::new(
                                    egui::RichText::new(&name).strong().color(rgb(nord::ACCENT)),
                                )
                                .truncate(),
                            );
                            ui.add_sized(
                                [90.0, ROW_BUTTON.y],
                                egui::Label::new(
                                    egui::RichText::new(shown)
                                        .monospace()
                                        .strong()
                                        .size(16.0)
                                        .color(rgb(nord::FG)),
                                ),
                            );

                            let play = if running {
                                row_button(ui, "⏸", nord::WARNING, nord::HIGHLIGHT, nord::FG)
                            } else {
                                row_button(ui, "▶", nord::SUCCESS, nord::BG, nord::HIGHLIGHT)
                            };
                            if play.clicked() {
                                self.toggle(&name);
                            }
                            if row_button(ui, "+T", nord::FG, nord::BG, nord::HIGHLIGHT)
                                .on_hover_text("Add time (+5m, 1h...)")
                                .clicked()
                            {
                                self.request_add_time(&name);
                            }
                            if row_button(ui, "↺", nord::WARNING, nord::BG, nord::HIGHLIGHT)
                                .on_hover_text("Reset to 0")
                                .clicked()
                            {
                                self.reset(&name);
                            }
                        });
                    }
                });
            });
    }

    /// 对话框。支持多视口时开独立小窗，否则退化为主窗口内的 egui::Window。
    fn ui_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt.as_mut() else { return };
        let title = prompt.title().to_owned();
        let mut action = None;

        if ctx.embed_viewports() {
            egui::Window::new(title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    action = prompt_body(ui, prompt);
                });
        } else {
            ctx.show_viewport_immediate(
                egui::ViewportId::from_hash_of("work_timer_prompt"),
                egui::ViewportBuilder::default()
                    .with_title(title.as_str())
                    .with_inner_size(PROMPT_SIZE)
                    .with_resizable(false)
                    .with_always_on_top(),
                |ctx, _class| {
                    egui::CentralPanel::default().show(ctx, |ui| {
                        action = prompt_body(ui, prompt);
                    });
                    if ctx.input(|i| i.viewport().close_requested()) {
                        action = Some(PromptAction::Cancel);
                    }
                },
            );
        }

        match action {
            Some(PromptAction::Submit) => self.submit_prompt(),
            Some(PromptAction::Cancel) => self.cancel_prompt(),
            None => {}
        }
    }
}
