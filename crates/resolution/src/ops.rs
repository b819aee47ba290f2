//! Arithmetic on resolutions.
//!
//! The operand types take different paths:
//!
//! | Operands               | `+` / `-`                      | `*` / `/`        |
//! |------------------------|--------------------------------|------------------|
//! | resolution, resolution | integer                        | float, truncated |
//! | resolution, integer    | integer                        | float, rounded   |
//! | resolution, float      | scalar truncated, then integer | float, rounded   |
//!
//! Rounding is half away from zero. Integer `+` and `-` saturate at the
//! `i64` bounds, matching the saturating float-to-integer conversion.
//! Scalars may also appear on the left of `+`, `-`, and `*`; `s - r` is
//! computed as `(r - s) * -1`.
//!
//! Every result is a [`Resolution3D::Raw`].

use std::ops::{Add, Div, Mul, Sub};

use crate::{Raw, Resolution3D};

impl Add for Resolution3D {
    type Output = Resolution3D;

    fn add(self, rhs: Resolution3D) -> Resolution3D {
        Resolution3D::from_raw(self.raw().zip_with(rhs.raw(), i64::saturating_add))
    }
}

impl Sub for Resolution3D {
    type Output = Resolution3D;

    fn sub(self, rhs: Resolution3D) -> Resolution3D {
        Resolution3D::from_raw(self.raw().zip_with(rhs.raw(), i64::saturating_sub))
    }
}

impl Mul for Resolution3D {
    type Output = Resolution3D;

    fn mul(self, rhs: Resolution3D) -> Resolution3D {
        Resolution3D::from_raw(Raw::truncated(self.vector() * rhs.vector()))
    }
}

impl Div for Resolution3D {
    type Output = Resolution3D;

    fn div(self, rhs: Resolution3D) -> Resolution3D {
        Resolution3D::from_raw(Raw::truncated(self.vector() / rhs.vector()))
    }
}

/// A number that can scale or offset a resolution.
trait Scalar: Copy {
    const NEG_ONE: Self;

    /// Integer offset used by `+` and `-`.
    fn truncate(self) -> i64;

    /// Float factor used by `*` and `/`.
    fn widen(self) -> f64;
}

impl Scalar for i64 {
    const NEG_ONE: Self = -1;

    fn truncate(self) -> i64 {
        self
    }

    fn widen(self) -> f64 {
        self as f64
    }
}

impl Scalar for i32 {
    const NEG_ONE: Self = -1;

    fn truncate(self) -> i64 {
        i64::from(self)
    }

    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const NEG_ONE: Self = -1.0;

    fn truncate(self) -> i64 {
        self as i64
    }

    fn widen(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const NEG_ONE: Self = -1.0;

    fn truncate(self) -> i64 {
        self as i64
    }

    fn widen(self) -> f64 {
        f64::from(self)
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {$(
        impl Add<$scalar> for Resolution3D {
            type Output = Resolution3D;

            fn add(self, rhs: $scalar) -> Resolution3D {
                let offset = rhs.truncate();
                Resolution3D::from_raw(self.raw().map(|c| c.saturating_add(offset)))
            }
        }

        impl Sub<$scalar> for Resolution3D {
            type Output = Resolution3D;

            fn sub(self, rhs: $scalar) -> Resolution3D {
                let offset = rhs.truncate();
                Resolution3D::from_raw(self.raw().map(|c| c.saturating_sub(offset)))
            }
        }

        impl Mul<$scalar> for Resolution3D {
            type Output = Resolution3D;

            fn mul(self, rhs: $scalar) -> Resolution3D {
                Resolution3D::from_raw(Raw::rounded(self.vector() * rhs.widen()))
            }
        }

        impl Div<$scalar> for Resolution3D {
            type Output = Resolution3D;

            fn div(self, rhs: $scalar) -> Resolution3D {
                Resolution3D::from_raw(Raw::rounded(self.vector() / rhs.widen()))
            }
        }

        impl Add<Resolution3D> for $scalar {
            type Output = Resolution3D;

            fn add(self, rhs: Resolution3D) -> Resolution3D {
                rhs + self
            }
        }

        impl Sub<Resolution3D> for $scalar {
            type Output = Resolution3D;

            fn sub(self, rhs: Resolution3D) -> Resolution3D {
                (rhs - self) * <$scalar as Scalar>::NEG_ONE
            }
        }

        impl Mul<Resolution3D> for $scalar {
            type Output = Resolution3D;

            fn mul(self, rhs: Resolution3D) -> Resolution3D {
                rhs * self
            }
        }
    )*};
}

impl_scalar_ops!(i64, i32, f64, f32);
