mod common;
mod signals;
