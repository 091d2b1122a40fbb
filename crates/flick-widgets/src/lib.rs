//! Widget implementations for the Flick widget toolkit.

pub mod style;
pub mod switch;

pub use style::{SwitchAttrs, SwitchStyle, DEFAULT_OFF_LABEL, DEFAULT_ON_LABEL};
pub use switch::{Status, Switch, SwitchChanged};
