//! Work Timer — 置顶悬浮的多计时器小窗（Rust + egui）

mod app;

fn main() -> eframe::Result<()> {
    work_timer::logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::WINDOW_WIDTH, app::INITIAL_HEIGHT])
            .with_title("Work Timer")
            .with_decorations(false) // 无系统标题栏，拖动窗口空白处移动
            .with_always_on_top()
            .with_taskbar(false)
            .with_resizable(false)
            .with_transparent(true)
            .with_icon(egui::IconData::default()),
        ..Default::default()
    };
    eframe::run_native(
        "Work Timer",
        options,
        Box::new(|cc| Ok(Box::new(app::WorkTimerApp::new(cc)))),
    )
}
