pub mod face_resizer;
pub mod onnx_mask_model;
