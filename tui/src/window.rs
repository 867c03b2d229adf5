use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use ratatui::layout::Size;

#[derive(Debug, Default)]
struct WindowState {
    size: Size,
    /// Listener id to the size it has not picked up yet.
    listeners: HashMap<u64, Option<Size>>,
    next_id: u64,
}

/// Terminal size plus the resize listeners registered against it.
#[derive(Clone, Debug, Default)]
pub struct Window {
    state: Arc<RwLock<WindowState>>,
}

impl Window {
    pub fn new(size: Size) -> Self {
        Self {
            state: Arc::new(RwLock::new(WindowState {
                size,
                ..Default::default()
            })),
        }
    }

    pub fn size(&self) -> crate::Result<Size> {
        Ok(self
            .state
            .read()
            .map_err(|_| crate::Error::Poisoned("window size".to_string()))?
            .size)
    }

    /// Records the new size and marks every listener as pending.
    pub fn resize(&self, size: Size) -> crate::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| crate::Error::Poisoned("window resize".to_string()))?;
        state.size = size;
        for pending in state.listeners.values_mut() {
            *pending = Some(size);
        }
        tracing::debug!(
            width = size.width,
            height = size.height,
            listeners = state.listeners.len(),
            "window resized"
        );
        Ok(())
    }

    pub fn add_resize_listener(&self) -> crate::Result<ResizeSubscription> {
        let mut state = self
            .state
            .write()
            .map_err(|_| crate::Error::Poisoned("add resize listener".to_string()))?;
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.insert(id, None);
        Ok(ResizeSubscription {
            id,
            state: Arc::clone(&self.state),
        })
    }

    pub fn resize_listener_count(&self) -> crate::Result<usize> {
        Ok(self
            .state
            .read()
            .map_err(|_| crate::Error::Poisoned("resize listener count".to_string()))?
            .listeners
            .len())
    }
}

/// A registered resize listener, unregistered on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    state: Arc<RwLock<WindowState>>,
}

impl ResizeSubscription {
    /// The latest size since the last call, if the window was resized.
    pub fn take_resize(&self) -> crate::Result<Option<Size>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| crate::Error::Poisoned("take resize".to_string()))?;
        Ok(state.listeners.get_mut(&self.id).and_then(Option::take))
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.write() {
            state.listeners.remove(&self.id);
        }
    }
}
