/// Distance to a vertex that cannot be reached.
pub const INFINITY: f64 = f64::INFINITY;

/// Edge properties that carry a numeric weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

macro_rules! impl_weighted {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weighted for $t {
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weighted!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
