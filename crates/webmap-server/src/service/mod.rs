//! Application state and dependency injection.

use webmap_inference::InferenceService;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    pub inference: InferenceService,
}

impl ServiceState {
    /// Creates application state around an already configured inference service.
    pub fn new(inference: InferenceService) -> Self {
        Self { inference }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(inference: InferenceService);
