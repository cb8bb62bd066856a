/// Controls how click events propagate and trigger default behaviors.
pub mod click_behavior;

/// Support for painting overlays above their siblings.
pub mod deferrable;
