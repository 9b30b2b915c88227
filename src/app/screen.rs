//! Screen state machine gating which diary operations are reachable.

/// A named top-level view; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    RegisterRide,
    RideRecords,
    Driver,
}

/// Holds the active screen plus the overlay flags layered on top of it.
///
/// Overlays never change the screen. Each one is tied to a screen: the filter
/// panel to `RideRecords`, the driver editor to `Driver`, the QR viewer to
/// `RegisterRide` and `Driver`. Leaving a screen closes its overlays, so the
/// filter panel and the driver editor can never be visible together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    screen: Screen,
    filter_panel_open: bool,
    driver_editor_open: bool,
    qr_viewer_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    pub fn driver_editor_open(&self) -> bool {
        self.driver_editor_open
    }

    pub fn qr_viewer_open(&self) -> bool {
        self.qr_viewer_open
    }

    /// Moves from `Home` to the requested screen. Only `Home` fans out;
    /// anything else must go back first.
    pub fn go_to(&mut self, screen: Screen) -> bool {
        if self.screen != Screen::Home || screen == Screen::Home {
            tracing::debug!(from = ?self.screen, to = ?screen, "transition rejected");
            return false;
        }
        self.screen = screen;
        true
    }

    /// Returns to `Home` and drops any overlay tied to the screen left.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.filter_panel_open = false;
        self.driver_editor_open = false;
        self.qr_viewer_open = false;
    }

    pub fn open_filter_panel(&mut self) -> bool {
        if self.screen != Screen::RideRecords {
            return false;
        }
        self.filter_panel_open = true;
        true
    }

    pub fn close_filter_panel(&mut self) {
        self.filter_panel_open = false;
    }

    pub fn open_driver_editor(&mut self) -> bool {
        if self.screen != Screen::Driver {
            return false;
        }
        self.driver_editor_open = true;
        true
    }

    pub fn close_driver_editor(&mut self) {
        self.driver_editor_open = false;
    }

    pub fn open_qr_viewer(&mut self) -> bool {
        if !matches!(self.screen, Screen::RegisterRide | Screen::Driver) {
            return false;
        }
        self.qr_viewer_open = true;
        true
    }

    pub fn close_qr_viewer(&mut self) {
        self.qr_viewer_open = false;
    }
}
