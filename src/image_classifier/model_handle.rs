use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Process-lifetime handle to the pretrained classifier. Loaded once at
/// startup; a failed load is kept as `Unavailable` and never retried.
#[derive(Clone)]
pub enum ModelHandle {
    Loaded(Arc<dyn ImageClassifier + Send + Sync>),
    Unavailable { reason: String },
}

impl ModelHandle {
    pub fn load<C, F>(logger: &Arc<dyn Logger + Send + Sync>, loader: F) -> Self
    where
        C: ImageClassifier + Send + Sync + 'static,
        F: FnOnce() -> Result<C, Box<dyn std::error::Error + Send + Sync>>,
    {
        let logger = logger.with_namespace("model");
        match loader() {
            Ok(classifier) => {
                let _ = logger.info("Model loaded");
                ModelHandle::Loaded(Arc::new(classifier))
            }
            Err(e) => {
                let reason = e.to_string();
                let _ = logger.error(&format!("Failed to load model: {}", reason));
                ModelHandle::Unavailable { reason }
            }
        }
    }

    pub fn classifier(&self) -> Option<&Arc<dyn ImageClassifier + Send + Sync>> {
        match self {
            ModelHandle::Loaded(classifier) => Some(classifier),
            ModelHandle::Unavailable { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier().is_some()
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelHandle::Loaded(_) => write!(f, "ModelHandle::Loaded"),
            ModelHandle::Unavailable { reason } => {
                write!(f, "ModelHandle::Unavailable({})", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::library::logger::impl_console::LoggerConsole;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(crate::config::Config::default().logger_timezone))
    }

    #[test]
    fn test_load_success() {
        let logger = logger();
        let handle = ModelHandle::load(&logger, || Ok(ImageClassifierFake::new(logger.clone())));
        assert!(handle.is_loaded());
    }

    #[test]
    fn test_load_failure_is_kept() {
        let logger = logger();
        let mut attempts = 0;
        let handle = ModelHandle::load(&logger, || {
            attempts += 1;
            Err::<ImageClassifierFake, _>("missing model file".into())
        });

        assert_eq!(attempts, 1);
        assert!(!handle.is_loaded());
        assert!(matches!(
            handle,
            ModelHandle::Unavailable { ref reason } if reason == "missing model file"
        ));
    }
}
