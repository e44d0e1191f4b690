pub(crate) mod kolam_session;
