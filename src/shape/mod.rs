pub(crate) mod heights;
pub(crate) mod static_waves;
pub(crate) mod wave;
