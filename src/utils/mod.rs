pub mod binary;
pub mod io;
pub mod sequence;
