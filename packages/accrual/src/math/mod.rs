pub mod bn;
pub mod casting;
pub mod helpers;
pub mod safe_math;
pub mod sqrt;
