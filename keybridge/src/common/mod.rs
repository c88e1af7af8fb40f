mod codec;
mod constants;
mod util;

pub use codec::*;
pub use constants::*;
pub use util::*;
