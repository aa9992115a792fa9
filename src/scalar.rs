//! Element types the kernels can multiply.

use crate::config::OverflowPolicy;
use num_traits::Num;
use std::fmt::Debug;

/// A numeric element of a sparse matrix or dense vector.
///
/// The accumulator is `Self`, so every step is a multiply-accumulate
/// `acc + a * b`. Integers get three flavours of that step, one per
/// [`OverflowPolicy`]; floats use plain IEEE arithmetic for all three.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// `acc + a * b`, or `None` if the product or the sum overflows.
    fn checked_mul_acc(self, a: Self, b: Self) -> Option<Self>;

    fn wrapping_mul_acc(self, a: Self, b: Self) -> Self;

    fn saturating_mul_acc(self, a: Self, b: Self) -> Self;

    /// One accumulation step under `policy`. `None` only for [`OverflowPolicy::Fail`].
    #[inline(always)]
    fn mul_acc(self, a: Self, b: Self, policy: OverflowPolicy) -> Option<Self> {
        match policy {
            OverflowPolicy::Fail => self.checked_mul_acc(a, b),
            OverflowPolicy::Wrap => Some(self.wrapping_mul_acc(a, b)),
            OverflowPolicy::Saturate => Some(self.saturating_mul_acc(a, b)),
        }
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn checked_mul_acc(self, a: Self, b: Self) -> Option<Self> {
                    a.checked_mul(b).and_then(|p| self.checked_add(p))
                }

                #[inline(always)]
                fn wrapping_mul_acc(self, a: Self, b: Self) -> Self {
                    self.wrapping_add(a.wrapping_mul(b))
                }

                #[inline(always)]
                fn saturating_mul_acc(self, a: Self, b: Self) -> Self {
                    self.saturating_add(a.saturating_mul(b))
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn checked_mul_acc(self, a: Self, b: Self) -> Option<Self> {
                    Some(self + a * b)
                }

                #[inline(always)]
                fn wrapping_mul_acc(self, a: Self, b: Self) -> Self {
                    self + a * b
                }

                #[inline(always)]
                fn saturating_mul_acc(self, a: Self, b: Self) -> Self {
                    self + a * b
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);
