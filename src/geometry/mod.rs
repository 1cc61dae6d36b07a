pub(crate) mod displace;
pub(crate) mod edge;
pub(crate) mod noise_coords;
pub(crate) mod sampler;
