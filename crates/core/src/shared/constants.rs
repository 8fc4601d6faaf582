pub const MASK_PLUGIN_SLUG: &str = "mask";

pub const INCEPTION_V3_MODEL_ID: &str = "inception_v3_on_mafa_kaggle123";
pub const INCEPTION_V3_MODEL_NAME: &str = "inception_v3_on_mafa_kaggle123.onnx";

pub const MOBILENET_V2_MODEL_ID: &str = "mobilenet_v2_on_mafa_kaggle123";
pub const MOBILENET_V2_MODEL_NAME: &str = "mobilenet_v2_on_mafa_kaggle123.onnx";

/// Both checkpoints take RGB input.
pub const MODEL_INPUT_CHANNELS: usize = 3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
