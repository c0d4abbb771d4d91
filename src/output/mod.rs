//! Output types for the quantization pipeline.

mod quantized_image;

pub use quantized_image::QuantizedImage;
