use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Toroidal board, toggled with a key.
    Wrap,
    /// Portal walls, toggled with the secret input sequence.
    Portal,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Wrap => "wrap",
            Mode::Portal => "portal",
        }
    }

    /// Whether this mode turns walls into passages for the collision engine.
    pub fn wraps_walls(self) -> bool {
        match self {
            Mode::Wrap | Mode::Portal => true,
        }
    }

    /// Whether the renderer should paint the portal frame.
    pub fn draws_portal_frame(self) -> bool {
        matches!(self, Mode::Portal)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    Lethal,
    Wrap,
}

/// Session-only easter egg flags. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub wrap: bool,
    pub portal: bool,
}

impl ModeFlags {
    pub fn is_enabled(&self, mode: Mode) -> bool {
        match mode {
            Mode::Wrap => self.wrap,
            Mode::Portal => self.portal,
        }
    }

    pub fn set(&mut self, mode: Mode, enabled: bool) {
        match mode {
            Mode::Wrap => self.wrap = enabled,
            Mode::Portal => self.portal = enabled,
        }
    }

    /// Flips `mode` and returns its new state.
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let enabled = !self.is_enabled(mode);
        self.set(mode, enabled);
        enabled
    }

    pub fn enabled_modes(&self) -> impl Iterator<Item = Mode> + '_ {
        [Mode::Wrap, Mode::Portal]
            .into_iter()
            .filter(|mode| self.is_enabled(*mode))
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        if self.enabled_modes().any(Mode::wraps_walls) {
            BoundaryPolicy::Wrap
        } else {
            BoundaryPolicy::Lethal
        }
    }

    pub fn draws_portal_frame(&self) -> bool {
        self.enabled_modes().any(Mode::draws_portal_frame)
    }
}
