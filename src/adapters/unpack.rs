/// Calls a function with the fields of a tuple as separate arguments.
///
/// Implemented for tuples of up to eight elements; this is what lets
/// `star_map` accept `|a, b| a + b` over a sequence of pairs.
pub trait Unpack<F> {
    type Output;

    fn unpack_into(self, f: &mut F) -> Self::Output;
}

macro_rules! impl_unpack {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Unpack<F> for ($($arg,)*)
        where
            F: FnMut($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn unpack_into(self, f: &mut F) -> R {
                let ($($arg,)*) = self;
                f($($arg),*)
            }
        }
    };
}

impl_unpack!();
impl_unpack!(A);
impl_unpack!(A, B);
impl_unpack!(A, B, C);
impl_unpack!(A, B, C, D);
impl_unpack!(A, B, C, D, E);
impl_unpack!(A, B, C, D, E, G);
impl_unpack!(A, B, C, D, E, G, H);
impl_unpack!(A, B, C, D, E, G, H, J);
