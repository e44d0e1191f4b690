pub(crate) mod dots;
