//! The calculator's user actions, independent of any UI toolkit.

pub mod calculator;
pub mod notice;

pub use calculator::Calculator;
pub use notice::{Notice, NoticeLevel};

/// The four things a user can ask the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Calculate,
    Reset,
}

/// Capability set a front end implements to handle [`Action`]s.
pub trait Actions {
    fn on_add(&mut self);
    fn on_delete(&mut self);
    fn on_calculate(&mut self);
    fn on_reset(&mut self);
}

/// Route an action to the matching handler
pub fn dispatch<A: Actions + ?Sized>(target: &mut A, action: Action) {
    match action {
        Action::Add => target.on_add(),
        Action::Delete => target.on_delete(),
        Action::Calculate => target.on_calculate(),
        Action::Reset => target.on_reset(),
    }
}
