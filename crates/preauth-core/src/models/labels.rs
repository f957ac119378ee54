//! Answer labels written onto the PA form.
//!
//! The serialized form of each variant is the exact label the form expects,
//! so a response CSV reads back into the same typed values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Affected body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyPart {
    #[serde(rename = "Upper Extremity")]
    UpperExtremity,
    #[serde(rename = "Lower Extremity")]
    LowerExtremity,
    #[serde(rename = "Spine/Trunk")]
    SpineTrunk,
    #[serde(rename = "Head/Face/Jaw")]
    HeadFaceJaw,
    /// More than one anatomical category matched.
    #[serde(rename = "Multiple Areas / Systemic")]
    MultipleAreas,
}

impl BodyPart {
    /// The four single-region categories, in lexicon declaration order.
    pub const ANATOMICAL: [BodyPart; 4] = [
        Self::UpperExtremity,
        Self::LowerExtremity,
        Self::SpineTrunk,
        Self::HeadFaceJaw,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperExtremity => "Upper Extremity",
            Self::LowerExtremity => "Lower Extremity",
            Self::SpineTrunk => "Spine/Trunk",
            Self::HeadFaceJaw => "Head/Face/Jaw",
            Self::MultipleAreas => "Multiple Areas / Systemic",
        }
    }

    /// Regions that are not meaningfully lateralized.
    pub const fn is_midline(self) -> bool {
        matches!(self, Self::SpineTrunk | Self::HeadFaceJaw)
    }
}

/// Affected side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
    Bilateral,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl Side {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Bilateral => "Bilateral",
            Self::NotApplicable => "Not Applicable",
        }
    }
}

/// Type of surgery, when surgery occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurgeryType {
    #[serde(rename = "Joint Replacement Surgery")]
    JointReplacement,
    #[serde(rename = "Arthroscopic/Minimally Invasive Joint Surgery")]
    Arthroscopic,
    #[serde(rename = "Spine Surgery")]
    Spine,
    #[serde(rename = "Fracture/Trauma Repair")]
    FractureTrauma,
    /// Surgery occurred but no keyword bucket matched.
    #[serde(rename = "Other Orthopedic/Soft Tissue Surgery")]
    Other,
}

impl SurgeryType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::JointReplacement => "Joint Replacement Surgery",
            Self::Arthroscopic => "Arthroscopic/Minimally Invasive Joint Surgery",
            Self::Spine => "Spine Surgery",
            Self::FractureTrauma => "Fracture/Trauma Repair",
            Self::Other => "Other Orthopedic/Soft Tissue Surgery",
        }
    }
}

/// A clinician-observed objective finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Finding {
    #[serde(rename = "Restricted ROM")]
    RestrictedRom,
    #[serde(rename = "Strength Deficits")]
    StrengthDeficits,
    #[serde(rename = "Pain/Swelling")]
    PainSwelling,
    #[serde(rename = "Balance/Gait Impaired")]
    BalanceGait,
    #[serde(rename = "Positive Special Tests")]
    PositiveSpecialTests,
}

impl Finding {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RestrictedRom => "Restricted ROM",
            Self::StrengthDeficits => "Strength Deficits",
            Self::PainSwelling => "Pain/Swelling",
            Self::BalanceGait => "Balance/Gait Impaired",
            Self::PositiveSpecialTests => "Positive Special Tests",
        }
    }
}

macro_rules! label_impls {
    ($ty:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                [$(Self::$variant),+]
                    .into_iter()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| CoreError::UnknownLabel {
                        kind: $kind,
                        label: s.to_string(),
                    })
            }
        }
    };
}

label_impls!(
    BodyPart,
    "body part",
    [UpperExtremity, LowerExtremity, SpineTrunk, HeadFaceJaw, MultipleAreas]
);
label_impls!(Side, "side", [Right, Left, Bilateral, NotApplicable]);
label_impls!(
    SurgeryType,
    "surgery type",
    [JointReplacement, Arthroscopic, Spine, FractureTrauma, Other]
);
label_impls!(
    Finding,
    "finding",
    [RestrictedRom, StrengthDeficits, PainSwelling, BalanceGait, PositiveSpecialTests]
);

/// Separator between finding tags in the rendered answer.
pub const FINDINGS_SEPARATOR: &str = "; ";

/// Ordered list of objective findings, rendered as one `"; "`-joined cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings(Vec<Finding>);

impl Findings {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self(findings)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Finding] {
        &self.0
    }
}

impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finding) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(FINDINGS_SEPARATOR)?;
            }
            f.write_str(finding.label())?;
        }
        Ok(())
    }
}

impl FromStr for Findings {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(Finding::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Serialize for Findings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Findings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
