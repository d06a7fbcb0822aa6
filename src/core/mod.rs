// Copyright 2020 @TwoCookingMice

pub mod computation_node;
pub mod emitter;
pub mod integrator;
pub mod interaction;
pub mod material;
pub mod rng;
pub mod scene;
pub mod sensor;
pub mod shape;
