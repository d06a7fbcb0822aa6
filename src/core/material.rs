// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceInteraction;
use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBSpectrum;

// Stochastic surface model. sample() chooses the outgoing local
// direction, writes it into the interaction and returns the throughput
// weight with the sampling density already divided out. A black return
// value terminates the path.
pub trait Material: ComputationNode + Send + Sync {
    fn sample(&self, u: &Vector2f, si: &mut SurfaceInteraction) -> RGBSpectrum;

    fn emission(&self) -> RGBSpectrum {
        RGBSpectrum::default()
    }
}
