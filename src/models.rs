mod city;
mod terrain;
mod tile;

pub use city::*;
pub use terrain::*;
pub use tile::*;
