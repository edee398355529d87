pub mod bezier;
pub mod clock;
pub mod color;
pub mod config;
pub mod fish;
pub mod geometry;
pub mod motion;
pub mod planner;
pub mod pose;
pub mod rng;
pub mod shape;
pub mod simulation;
pub mod skeleton;
pub mod snapshot;
pub mod tween;
