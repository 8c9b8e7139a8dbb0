//! Spirographs!
//!
//! Zeichnet Hypotrochoiden mit egui: eine statische Kurve über `--sparams`
//! oder mehrere zufällige, endlos neu startende Kurven.

use std::time::Instant;

use clap::{error::ErrorKind, CommandFactory, Parser};
use eframe::egui;
use spirograph::{render, ui, AppController, AppIntent, AppState, Cli, SpiroOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("generating spirograph... (v{})", env!("CARGO_PKG_VERSION"));

        let cli = Cli::parse();
        let options = SpiroOptions::load_from_file(&cli.options_path());

        let launch = match cli.launch_mode(&options) {
            Ok(launch) => launch,
            Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        };
        log::info!("Startmodus: {:?}", launch);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(options.fallback_window_size)
                .with_title("Spirographs!"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        let state = AppState::new(launch, options);
        eframe::run_native(
            "Spirographs!",
            native_options,
            Box::new(|_cc| Ok(Box::new(SpiroApp::new(state)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SpiroApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Zielgröße nach Anpassung an den Bildschirm (einmalig beim ersten Frame)
    window_target: Option<[f32; 2]>,
}

impl SpiroApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            window_target: None,
        }
    }
}

impl eframe::App for SpiroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let first_frame_size = self.fit_window_to_monitor(ctx);

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                let canvas_size = first_frame_size.unwrap_or([rect.width(), rect.height()]);
                let animation_active = self.state.is_animating();
                let events = self.input.collect_viewport_events(
                    ui,
                    canvas_size,
                    &mut self.state.timer,
                    animation_active,
                );
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect, &scene);
            });

        self.schedule_repaint(ctx);
    }
}

impl SpiroApp {
    /// Setzt beim ersten Frame die Fenstergröße relativ zum Bildschirm und
    /// liefert diese Größe als Canvas-Größe für den Start.
    fn fit_window_to_monitor(&mut self, ctx: &egui::Context) -> Option<[f32; 2]> {
        if self.window_target.is_some() {
            return None;
        }

        let monitor = ctx
            .input(|i| i.viewport().monitor_size)
            .map(|size| [size.x, size.y]);
        let target = self.state.options.window_size_for_monitor(monitor);
        log::info!("Fenstergröße: {}x{} (Bildschirm: {:?})", target[0], target[1], monitor);

        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            target[0], target[1],
        )));
        self.window_target = Some(target);
        Some(target)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Weckt die Event-Loop zum nächsten fälligen Tick.
    fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(remaining) = self.state.timer.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
