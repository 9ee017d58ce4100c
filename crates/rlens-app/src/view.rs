//! # View Controller
//!
//! Owns which panel is visible and the shared display mode. Exactly one
//! [`PanelMachine`] is mounted at a time; selecting a panel always mounts a
//! fresh instance with a new [`InstanceId`], so completions addressed to an
//! earlier instance are recognised as stale.

use rlens_core::prelude::*;
use rlens_core::{DisplayMode, PanelId};
use rlens_gateway::{GatewayError, RawPayload};

use crate::panel::{Completion, InstanceId, PanelMachine, RequestToken};

/// Which surface is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Landing,
    Panel(PanelId),
}

impl ActiveView {
    pub fn panel(self) -> Option<PanelId> {
        match self {
            ActiveView::Landing => None,
            ActiveView::Panel(id) => Some(id),
        }
    }
}

/// Read-only snapshot handed to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active: ActiveView,
    pub display_mode: DisplayMode,
}

#[derive(Debug)]
pub struct ViewController {
    display_mode: DisplayMode,
    mounted: Option<PanelMachine>,
    next_instance: u64,
}

impl ViewController {
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            mounted: None,
            next_instance: 1,
        }
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            active: self.active(),
            display_mode: self.display_mode,
        }
    }

    pub fn active(&self) -> ActiveView {
        match &self.mounted {
            Some(machine) => ActiveView::Panel(machine.id()),
            None => ActiveView::Landing,
        }
    }

    pub fn active_panel(&self) -> Option<PanelId> {
        self.mounted.as_ref().map(PanelMachine::id)
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn mounted(&self) -> Option<&PanelMachine> {
        self.mounted.as_ref()
    }

    pub fn mounted_mut(&mut self) -> Option<&mut PanelMachine> {
        self.mounted.as_mut()
    }

    /// Unmount whatever is visible and mount a fresh, idle `id` panel.
    ///
    /// An in-flight request of the previous instance is not cancelled; its
    /// completion will be discarded by [`ViewController::complete`].
    pub fn select_panel(&mut self, id: PanelId) -> &mut PanelMachine {
        let instance = InstanceId(self.next_instance);
        self.next_instance += 1;

        if let Some(previous) = &self.mounted {
            if previous.is_submitting() {
                debug!(
                    "Leaving {} {} with a request in flight",
                    previous.id(),
                    previous.instance()
                );
            }
        }
        debug!("Mounting {} {}", id, instance);
        self.mounted.insert(PanelMachine::new(id.descriptor(), instance))
    }

    /// Unmount the current panel and show the landing view.
    pub fn show_landing(&mut self) {
        self.mounted = None;
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Route a completion to the mounted panel; stale if it was unmounted.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<RawPayload, GatewayError>,
    ) -> Completion {
        match self.mounted.as_mut() {
            Some(machine) if machine.instance() == token.instance => {
                machine.complete(token, outcome)
            }
            _ => {
                debug!("Discarding completion for unmounted instance {}", token.instance);
                Completion::Stale
            }
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}
