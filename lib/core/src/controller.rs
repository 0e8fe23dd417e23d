//! Form controller owning the view state.
//!
//! The controller holds exactly one value, the last load result, and
//! notifies its host whenever that value changes. Errors never touch the
//! state; they go to the error callback instead.

use crate::error::LoadError;
use crate::item::LoadedItem;
use crate::loader::{ItemLoader, LoadRequest};
use crate::view::{Rendered, ViewState};

type RenderCallback = Box<dyn FnMut(&Rendered)>;
type ErrorCallback = Box<dyn FnMut(&LoadError)>;

/// Drives the load/clear lifecycle of a data form.
#[derive(Default)]
pub struct DataFormController {
    state: ViewState,
    on_render: Option<RenderCallback>,
    on_error: Option<ErrorCallback>,
}

impl DataFormController {
    /// Creates a controller with unset state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new output after every state change.
    #[must_use]
    pub fn on_render(mut self, callback: impl FnMut(&Rendered) + 'static) -> Self {
        self.on_render = Some(Box::new(callback));
        self
    }

    /// Called when a load fails.
    #[must_use]
    pub fn on_error(mut self, callback: impl FnMut(&LoadError) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current display output.
    #[must_use]
    pub fn rendered(&self) -> Rendered {
        self.state.render()
    }

    /// Loads items and applies the result.
    pub async fn load<L>(&mut self, loader: &L, request: &LoadRequest)
    where
        L: ItemLoader + ?Sized,
    {
        let result = loader.load(request).await;
        self.finish_load(result);
    }

    /// Applies the outcome of a load performed elsewhere.
    ///
    /// Completions are applied in the order they arrive; a slower earlier
    /// request overwrites a faster later one.
    pub fn finish_load(&mut self, result: Result<Vec<LoadedItem>, LoadError>) {
        match result {
            Ok(items) => self.set_state(ViewState::Loaded(items)),
            Err(err) => {
                if let Some(on_error) = self.on_error.as_mut() {
                    on_error(&err);
                }
            }
        }
    }

    /// Resets to unset, whatever the current state.
    pub fn clear(&mut self) {
        self.set_state(ViewState::Unset);
    }

    fn set_state(&mut self, state: ViewState) {
        self.state = state;
        if let Some(on_render) = self.on_render.as_mut() {
            on_render(&self.state.render());
        }
    }
}
