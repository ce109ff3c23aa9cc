//! Random-number sources for the treap priorities in `ordered-forest`.
//!
//! Two generators implement [`RandomInt`]:
//!
//! - [`UniformRandom`]: xoshiro256**, seeded explicitly or from the OS.
//! - [`MinStdRandom`]: the Park–Miller minimal standard generator.

pub mod min_std;
pub mod uniform;

pub use min_std::MinStdRandom;
pub use uniform::UniformRandom;

/// A source of approximately uniform non-negative integers.
pub trait RandomInt {
    fn next_int(&mut self) -> u32;
}

impl<R: RandomInt + ?Sized> RandomInt for &mut R {
    fn next_int(&mut self) -> u32 {
        (**self).next_int()
    }
}

impl<R: RandomInt + ?Sized> RandomInt for Box<R> {
    fn next_int(&mut self) -> u32 {
        (**self).next_int()
    }
}
