use eframe::egui;
use std::sync::{Arc, Mutex};
use truck::app::main::App;
use truck::app::window::AppWindow;
use truck::config::Config;
use truck::device_display::impl_console::DeviceDisplayConsole;
use truck::device_display::impl_gui::DeviceDisplayGui;
use truck::device_display::impl_multi::DeviceDisplayMulti;
use truck::device_display::interface::DeviceDisplay;
use truck::device_picker::impl_file_dialog::DevicePickerFileDialog;
use truck::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use truck::image_classifier::inference_flow::InferenceFlow;
use truck::image_classifier::model_handle::ModelHandle;
use truck::library::logger::impl_console::LoggerConsole;
use truck::library::logger::interface::Logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let model = ModelHandle::load(&logger, || {
        ImageClassifierTractOnnx::new(config.model.clone(), logger.clone())
    });

    let inference_flow = Arc::new(InferenceFlow::new(model, logger.clone()));

    let device_picker = Arc::new(DevicePickerFileDialog::new(
        config.picker_extensions.clone(),
        logger.clone(),
    ));

    let device_display_gui = DeviceDisplayGui::new();
    let view = device_display_gui.view();
    let displays: Vec<Box<dyn DeviceDisplay + Send + Sync>> = vec![
        Box::new(device_display_gui),
        Box::new(DeviceDisplayConsole::new()),
    ];
    let device_display = Arc::new(Mutex::new(DeviceDisplayMulti::new(displays)));

    let mut app = App::new(logger.clone(), device_picker, device_display, inference_flow);

    app.start().map_err(|e| e.to_string())?;

    let window = AppWindow::new(app, view, &config, logger);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Box::new(window)),
    )?;

    Ok(())
}
