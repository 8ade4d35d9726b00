pub(crate) const MAGENTA: &str = "\x1b[35m";
pub(crate) const RESET: &str = "\x1b[0m";
