pub(crate) mod artifact;
pub(crate) mod capture;
pub(crate) mod static_svg;
pub(crate) mod video;
