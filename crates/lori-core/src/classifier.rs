//! Classifier Trait: the contract every text classifier fulfils
use std::sync::Mutex;

use crate::data_model::ClassificationResult;
use crate::error::ClassifierError;

/// A text classifier that can be shared across concurrent requests.
///
/// Implementations take `&self` and must tolerate concurrent calls. Models
/// that need exclusive access implement [`ClassifierMut`] instead and are
/// wrapped in [`Serialized`].
pub trait Classifier: Send + Sync {
    /// Stable identifier (ex: "lexicon.v1")
    fn id(&self) -> &str;

    /// Predict a label and its confidence for `text`
    fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError>;

    /// Every top-level label this classifier can emit
    fn labels(&self) -> Vec<String>;
}

/// A classifier whose model must not be invoked concurrently.
pub trait ClassifierMut: Send {
    fn id(&self) -> &str;

    fn classify(&mut self, text: &str) -> Result<ClassificationResult, ClassifierError>;

    fn labels(&self) -> Vec<String>;
}

/// Serializes access to a [`ClassifierMut`] behind a mutex.
pub struct Serialized<C> {
    id: String,
    inner: Mutex<C>,
}

impl<C: ClassifierMut> Serialized<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            id: classifier.id().to_string(),
            inner: Mutex::new(classifier),
        }
    }
}

impl<C: ClassifierMut> Classifier for Serialized<C> {
    fn id(&self) -> &str {
        &self.id
    }

    fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClassifierError::Unavailable(format!("{} lock poisoned", self.id)))?;
        ClassifierMut::classify(&mut *guard, text)
    }

    fn labels(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(guard) => ClassifierMut::labels(&*guard),
            Err(poisoned) => ClassifierMut::labels(&*poisoned.into_inner()),
        }
    }
}
