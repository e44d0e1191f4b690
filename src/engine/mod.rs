pub(crate) mod kolam;
