pub(crate) mod animation;
pub(crate) mod headless;
pub(crate) mod host;
pub(crate) mod state;
