use macroquad::prelude::*;

/// Discrete view transitions triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Decrease the scale by one step and recomposite
    ZoomOut,
    /// Increase the scale by one step and recomposite
    ZoomIn,
    /// Move the map left by one pan step
    PanLeft,
    /// Move the map right by one pan step
    PanRight,
    /// Move the map up by one pan step
    PanUp,
    /// Move the map down by one pan step
    PanDown,
    /// End the main loop
    Quit,
}

/// What the main loop has to do after applying a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing beyond the normal redraw
    Idle,
    /// Recomposite at the candidate scale, then commit it with
    /// [`ViewState::commit_scale`]
    Rescale(f32),
    /// Leave the main loop
    Quit,
}

/// Pan offset in screen pixels plus the scale factor of the live composite.
/// Mutated only through [`ViewState::apply`] and [`ViewState::commit_scale`].
pub struct ViewState {
    /// Horizontal pan offset in pixels
    pub pan_x: i32,
    /// Vertical pan offset in pixels
    pub pan_y: i32,
    scale: f32,
    pan_step: i32,
    scale_step: f32,
    min_scale: f32,
}

impl ViewState {
    /// A view at pan offset `(0, 0)` with the given starting scale and
    /// per-command increments. `min_scale` keeps zoom-out from reaching a
    /// scale the compositor would reject.
    pub fn new(scale: f32, pan_step: i32, scale_step: f32, min_scale: f32) -> Self {
        ViewState {
            pan_x: 0,
            pan_y: 0,
            scale,
            pan_step,
            scale_step,
            min_scale,
        }
    }

    /// Scale factor of the composite currently on screen.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Apply one command. Pans take effect immediately and never ask for a
    /// recomposition. Zooms do not change the scale here: they hand back a
    /// candidate, and the caller commits it only once recomposition at that
    /// scale has succeeded, so a failed rescale leaves the view untouched.
    pub fn apply(&mut self, cmd: ViewCommand) -> Step {
        match cmd {
            ViewCommand::ZoomOut => {
                Step::Rescale((self.scale - self.scale_step).max(self.min_scale))
            }
            ViewCommand::ZoomIn => Step::Rescale(self.scale + self.scale_step),
            ViewCommand::PanLeft => {
                self.pan_x -= self.pan_step;
                Step::Idle
            }
            ViewCommand::PanRight => {
                self.pan_x += self.pan_step;
                Step::Idle
            }
            ViewCommand::PanUp => {
                self.pan_y -= self.pan_step;
                Step::Idle
            }
            ViewCommand::PanDown => {
                self.pan_y += self.pan_step;
                Step::Idle
            }
            ViewCommand::Quit => Step::Quit,
        }
    }

    /// Record a scale whose composite was successfully rebuilt.
    pub fn commit_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// Key bindings: Escape quits, Z zooms out, X zooms in, arrow keys pan.
/// One command per key-down, matching the discrete transitions above.
pub fn poll_commands() -> Vec<ViewCommand> {
    let mut cmds = Vec::new();
    if is_key_pressed(KeyCode::Escape) {
        cmds.push(ViewCommand::Quit);
    }
    if is_key_pressed(KeyCode::Z) {
        cmds.push(ViewCommand::ZoomOut);
    }
    if is_key_pressed(KeyCode::X) {
        cmds.push(ViewCommand::ZoomIn);
    }
    if is_key_pressed(KeyCode::Left) {
        cmds.push(ViewCommand::PanLeft);
    }
    if is_key_pressed(KeyCode::Right) {
        cmds.push(ViewCommand::PanRight);
    }
    if is_key_pressed(KeyCode::Up) {
        cmds.push(ViewCommand::PanUp);
    }
    if is_key_pressed(KeyCode::Down) {
        cmds.push(ViewCommand::PanDown);
    }
    cmds
}
