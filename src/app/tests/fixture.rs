use crate::app::main::App;
use crate::config::Config;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_picker::impl_fake::DevicePickerFake;
use crate::device_picker::interface::Photo;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::inference_flow::InferenceFlow;
use crate::image_classifier::model_handle::ModelHandle;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub struct Fixture {
    pub device_picker: Arc<DevicePickerFake>,
    pub device_display: Arc<Mutex<DeviceDisplayFake>>,
    pub image_classifier: Option<Arc<ImageClassifierFake>>,
    pub app: App,
}

impl Fixture {
    pub fn new(build: impl FnOnce(Arc<dyn Logger + Send + Sync>) -> ImageClassifierFake) -> Self {
        let logger = logger();
        let image_classifier = Arc::new(build(logger.clone()));
        Self::with_model(
            logger,
            ModelHandle::Loaded(image_classifier.clone()),
            Some(image_classifier),
        )
    }

    pub fn without_model() -> Self {
        Self::with_model(
            logger(),
            ModelHandle::Unavailable {
                reason: "model file missing".to_string(),
            },
            None,
        )
    }

    fn with_model(
        logger: Arc<dyn Logger + Send + Sync>,
        model: ModelHandle,
        image_classifier: Option<Arc<ImageClassifierFake>>,
    ) -> Self {
        let device_picker = Arc::new(DevicePickerFake::new(logger.clone()));
        let device_display = Arc::new(Mutex::new(DeviceDisplayFake::new()));
        let inference_flow = Arc::new(InferenceFlow::new(model, logger.clone()));
        let mut app = App::new(
            logger,
            device_picker.clone(),
            device_display.clone(),
            inference_flow,
        );
        app.start().unwrap();

        Self {
            device_picker,
            device_display,
            image_classifier,
            app,
        }
    }

    /// Applies events until nothing is in flight.
    pub fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.app.is_busy() {
            assert!(Instant::now() < deadline, "app did not settle");
            self.app.process_next(Duration::from_millis(50)).unwrap();
        }
    }

    pub fn displayed_text(&self) -> String {
        self.device_display.lock().unwrap().text.clone()
    }

    pub fn displayed_photo(&self) -> Option<Photo> {
        self.device_display.lock().unwrap().photo.clone()
    }

    pub fn performed(&self) -> usize {
        self.image_classifier
            .as_ref()
            .map_or(0, |classifier| classifier.performed())
    }
}

pub fn logger() -> Arc<dyn Logger + Send + Sync> {
    Arc::new(LoggerConsole::new(Config::default().logger_timezone))
}

pub fn photo(width: u32, height: u32) -> Photo {
    Photo::new(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([180, 40, 30]),
    )))
}
