#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "tstd")]
#[macro_use]
extern crate sgxlib as std;

mod error;
pub use error::*;
mod ring_vec;
pub use ring_vec::*;
mod iter;
pub use iter::*;
mod cursor;
pub use cursor::*;
mod list;
pub use list::*;
mod deque;
pub use deque::*;
