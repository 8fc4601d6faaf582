use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::shared::constants::{
    INCEPTION_V3_MODEL_ID, INCEPTION_V3_MODEL_NAME, MOBILENET_V2_MODEL_ID,
    MOBILENET_V2_MODEL_NAME,
};

/// Target resolution a checkpoint expects its input resized to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputSize {
    pub width: u32,
    pub height: u32,
}

impl InputSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Pretrained mask-classification checkpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    #[default]
    InceptionV3,
    MobileNetV2,
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown model variant '{}' (expected one of: {})", .0, known_names())]
pub struct ParseVariantError(String);

struct VariantSpec {
    id: &'static str,
    alias: &'static str,
    file_name: &'static str,
    input_size: InputSize,
}

/// Indexed by `ModelVariant as usize`.
const VARIANTS: [VariantSpec; 2] = [
    VariantSpec {
        id: INCEPTION_V3_MODEL_ID,
        alias: "inception-v3",
        file_name: INCEPTION_V3_MODEL_NAME,
        input_size: InputSize::square(100),
    },
    VariantSpec {
        id: MOBILENET_V2_MODEL_ID,
        alias: "mobilenet-v2",
        file_name: MOBILENET_V2_MODEL_NAME,
        input_size: InputSize::square(128),
    },
];

impl ModelVariant {
    pub const ALL: [ModelVariant; 2] = [ModelVariant::InceptionV3, ModelVariant::MobileNetV2];

    fn spec(self) -> &'static VariantSpec {
        &VARIANTS[self as usize]
    }

    /// Checkpoint identifier as published with the model.
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn alias(self) -> &'static str {
        self.spec().alias
    }

    /// File name of the ONNX artifact.
    pub fn file_name(self) -> &'static str {
        self.spec().file_name
    }

    pub fn input_size(self) -> InputSize {
        self.spec().input_size
    }
}

impl FromStr for ModelVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.id() == s || v.alias() == s)
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn known_names() -> String {
    ModelVariant::ALL
        .iter()
        .map(|v| format!("{} ({})", v.id(), v.alias()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_inception() {
        assert_eq!(ModelVariant::default(), ModelVariant::InceptionV3);
    }

    #[rstest]
    #[case(ModelVariant::InceptionV3, 100)]
    #[case(ModelVariant::MobileNetV2, 128)]
    fn test_input_size(#[case] variant: ModelVariant, #[case] side: u32) {
        assert_eq!(variant.input_size(), InputSize::square(side));
    }

    #[test]
    fn test_table_rows_align_with_enum() {
        assert_eq!(ModelVariant::InceptionV3.id(), INCEPTION_V3_MODEL_ID);
        assert_eq!(ModelVariant::MobileNetV2.id(), MOBILENET_V2_MODEL_ID);
        assert_eq!(ModelVariant::InceptionV3.file_name(), INCEPTION_V3_MODEL_NAME);
        assert_eq!(ModelVariant::MobileNetV2.file_name(), MOBILENET_V2_MODEL_NAME);
    }

    #[rstest]
    #[case("inception_v3_on_mafa_kaggle123", ModelVariant::InceptionV3)]
    #[case("inception-v3", ModelVariant::InceptionV3)]
    #[case("mobilenet_v2_on_mafa_kaggle123", ModelVariant::MobileNetV2)]
    #[case("mobilenet-v2", ModelVariant::MobileNetV2)]
    fn test_parse(#[case] input: &str, #[case] expected: ModelVariant) {
        assert_eq!(input.parse::<ModelVariant>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_lists_known_variants() {
        let err = "resnet50".parse::<ModelVariant>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("resnet50"));
        assert!(message.contains("mobilenet-v2"));
        assert!(message.contains("inception_v3_on_mafa_kaggle123"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for variant in ModelVariant::ALL {
            assert_eq!(variant.to_string().parse::<ModelVariant>(), Ok(variant));
        }
    }
}
