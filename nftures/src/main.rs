//! NFTures desktop client entry point.

use std::process::ExitCode;

use nftures::ui::theme::Theme;
use nftures::ui::widgets::icons::initialize_material_icons;
use nftures::ui::widgets::notifications::NotificationManager;
use nftures::{App, AppConfig};

const APP_TITLE: &str = "NFTures";

struct NfturesApp {
    app: App,
    notifications: NotificationManager,
}

impl NfturesApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        initialize_material_icons(&cc.egui_ctx);
        Theme::install(&cc.egui_ctx);

        Self {
            app: App::new(config),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for NfturesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        nftures::ui::render(ctx, &mut self.app, &mut self.notifications);
    }
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    nftures::debug::init(&config);
    tracing::info!(api_url = %config.api_url, "Starting NFTures");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("nftures-worker")
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };
    // Spawned requests need a runtime context on the UI thread
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(NfturesApp::new(cc, &config)))),
    );

    match result {
        Ok(()) => {
            tracing::info!("NFTures closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Window failed");
            ExitCode::FAILURE
        }
    }
}
