// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Turn unwrap panics back into an empty or error return value.
//!
//! A function that produces an `Optional` or `Outcome` declares its output
//! up front, then computes it inside [`catch_unwrap`]. Any library
//! `unwrap`/`expect` that fails while doing so resets the output to
//! `None` or `Err(Error::FailedUnwrap)` and the panic stops there. Panics that
//! did not come from this crate's unwraps are re-raised untouched. That
//! includes plain `panic!`s and the not-null precondition of missing handles.
//!
//! ```
//! use optres::{catch_unwrap, Error, Optional, Outcome};
//!
//! fn double(input: Optional<i32>) -> Outcome<i32> {
//!     let mut res = Outcome::failure(Error::Unset);
//!     catch_unwrap(&mut res, |res| *res = Outcome::success(input.unwrap() * 2));
//!     res
//! }
//!
//! assert_eq!(double(Optional::some(4)).unwrap(), 8);
//! assert!(double(Optional::none()).is_err());
//! ```
//!
//! The default panic hook still reports the caught panic on stderr.

use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::optional::Optional;
use crate::outcome::Outcome;
use crate::panic::UnwrapPanic;

mod private {
    /// Forces a destination into its empty or error state. Kept out of reach
    /// of other crates so nothing outside unwrap recovery can call it.
    pub trait Reset {
        /// Returns `false` when there is no destination to reset.
        fn reset(&mut self) -> bool;
    }
}

use private::Reset;

/// Destinations [`catch_unwrap`] can reset.
///
/// Implemented for `Optional<T>` and `Outcome<T>`, and for the pointer forms
/// `Box<C>`, `&mut C` and `Option<C>`. A `None` destination cannot be reset,
/// so the original panic propagates.
pub trait CatchTarget: Reset {}

impl<T> Reset for Optional<T> {
    fn reset(&mut self) -> bool {
        self.reset_to_none();
        true
    }
}

impl<T> Reset for Outcome<T> {
    fn reset(&mut self) -> bool {
        self.reset_to_err(Error::FailedUnwrap);
        true
    }
}

impl<C: Reset + ?Sized> Reset for Box<C> {
    fn reset(&mut self) -> bool {
        (**self).reset()
    }
}

impl<C: Reset + ?Sized> Reset for &mut C {
    fn reset(&mut self) -> bool {
        (**self).reset()
    }
}

impl<C: Reset> Reset for Option<C> {
    fn reset(&mut self) -> bool {
        match self {
            Some(target) => target.reset(),
            None => false,
        }
    }
}

impl<T> CatchTarget for Optional<T> {}
impl<T> CatchTarget for Outcome<T> {}
impl<C: CatchTarget + ?Sized> CatchTarget for Box<C> {}
impl<C: CatchTarget + ?Sized> CatchTarget for &mut C {}
impl<C: CatchTarget> CatchTarget for Option<C> {}

/// Run `body` against `output`, converting library unwrap panics into an
/// empty/error `output`.
pub fn catch_unwrap<C, F>(output: &mut C, body: F)
where
    C: CatchTarget + ?Sized,
    F: FnOnce(&mut C),
{
    let payload = match panic::catch_unwind(AssertUnwindSafe(|| body(&mut *output))) {
        Ok(()) => return,
        Err(payload) => payload,
    };

    if let Some(marker) = payload.downcast_ref::<UnwrapPanic>() {
        if output.reset() {
            tracing::debug!(
                kind = ?marker.kind(),
                message = marker.message(),
                "recovered from unwrap panic"
            );
            return;
        }
        tracing::warn!(
            message = marker.message(),
            "unwrap panic with no destination to reset"
        );
    }

    panic::resume_unwind(payload)
}

/// Compute a container, returning `seed` reset to empty/error if a library
/// unwrap panics along the way.
pub fn recover<C, F>(seed: C, body: F) -> C
where
    C: CatchTarget,
    F: FnOnce() -> C,
{
    let mut output = seed;
    catch_unwrap(&mut output, |out| *out = body());
    output
}
