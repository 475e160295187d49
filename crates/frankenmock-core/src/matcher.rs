//! Positional equality patterns over argument tuples.
//!
//! A pattern constrains some argument positions of a recorded call and
//! leaves the rest unconstrained. Patterns are option-tuples: a `Some(v)`
//! slot requires positional equality with `v`, a `None` slot matches
//! anything. The unit pattern `()` constrains nothing and matches every
//! call regardless of arity.
//!
//! Equality is plain `PartialEq` on each position's static type. Matching
//! is total: it never fails, it only answers. There is no wildcard or
//! predicate language beyond the `None` slot; richer matching would hang
//! off this trait.
//!
//! A pattern slot beyond the fake's arity does not typecheck, so that
//! whole class of setup mistakes never reaches runtime.

/// Pattern over an argument tuple `Args`.
pub trait ArgPattern<Args> {
    /// Returns `true` if every constrained position equals the recorded
    /// argument at that position.
    fn matches(&self, args: &Args) -> bool;
}

/// The unconstrained pattern: matches any recorded call.
impl<Args> ArgPattern<Args> for () {
    fn matches(&self, _args: &Args) -> bool {
        true
    }
}

macro_rules! impl_option_tuple_pattern {
    ($($ty:ident / $idx:tt),+) => {
        impl<$($ty: PartialEq,)+> ArgPattern<($($ty,)+)> for ($(Option<$ty>,)+) {
            fn matches(&self, args: &($($ty,)+)) -> bool {
                $(
                    if let Some(expected) = &self.$idx {
                        if expected != &args.$idx {
                            return false;
                        }
                    }
                )+
                true
            }
        }
    };
}

impl_option_tuple_pattern!(A0 / 0);
impl_option_tuple_pattern!(A0 / 0, A1 / 1);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2, A3 / 3);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2, A3 / 3, A4 / 4);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2, A3 / 3, A4 / 4, A5 / 5);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2, A3 / 3, A4 / 4, A5 / 5, A6 / 6);
impl_option_tuple_pattern!(A0 / 0, A1 / 1, A2 / 2, A3 / 3, A4 / 4, A5 / 5, A6 / 6, A7 / 7);
