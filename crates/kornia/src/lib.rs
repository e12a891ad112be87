#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use kornia_tensor as tensor;

#[doc(inline)]
pub use kornia_imgproc as imgproc;

#[doc(inline)]
pub use kornia_augmentation as augmentation;
