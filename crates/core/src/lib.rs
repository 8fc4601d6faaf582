//! Face mask classification for cropped face images.
//!
//! [`MaskClassifierPlugin`](classification::mask_classifier_plugin::MaskClassifierPlugin)
//! resizes a face to the selected checkpoint's input resolution, runs the
//! network, and reports the most likely [`MaskLabel`](classification::domain::mask_label::MaskLabel)
//! with its score.

pub mod classification {
    pub mod domain {
        pub mod classify_error;
        pub mod face_plugin;
        pub mod mask_classification;
        pub mod mask_label;
        pub mod mask_model;
        pub mod model_variant;
    }
    pub mod infrastructure;
    pub mod mask_classifier_plugin;
}

pub mod input {
    pub mod domain {
        pub mod face_image_reader;
    }
    pub mod infrastructure {
        pub mod image_file_reader;
    }
}

pub mod pipeline {
    pub mod classify_faces_use_case;
}

pub mod shared {
    pub mod constants;
    pub mod face_image;
    pub mod model_resolver;
}
