/*!
# Representations

Storage backends for weighted graphs. Currently a single adjacency-array
representation [`WeightedAdjArray`] (aliased as [`Graph`]) is provided; it is what the
`.gr` loader produces.
*/

use crate::{ops::*, *};

mod weighted;

pub use weighted::*;
