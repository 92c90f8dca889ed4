//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. ControlSample (active control polls input, publishes crosshair state)
//! 2. SimStep (fixed-rate balloon/bullet/cloud stepping)
//! 3. VisualSync (screen-space fields written into sprite transforms)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ControlSampleSet; // input polled before anything reads CrosshairState

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimStepSet; // fixed-timestep gameplay stepping

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct VisualSyncSet; // transforms/visibility derived from sim state
