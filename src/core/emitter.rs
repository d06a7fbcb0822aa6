// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::EmitterInteraction;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

pub trait Emitter: ComputationNode + Send + Sync {
    // Draw a point on the emitting surface for the interaction's
    // origin and return the radiance already divided by the recorded
    // solid-angle pdf.
    fn sample(&self, u: &Vector3f, ei: &mut EmitterInteraction) -> RGBSpectrum;

    // Recompute the solid-angle pdf for a pre-populated configuration
    // without resampling and return the emitted radiance. The density
    // must agree with sample() for the same configuration.
    fn eval(&self, ei: &mut EmitterInteraction) -> RGBSpectrum;
}
