use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Who is filling in the questionnaire. Only adults answering for
/// themselves take the adult self-report scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeGroup {
    /// 18 or over.
    Adult,
    /// A parent answering for a child under 18.
    Parent,
    /// A teacher or other professional answering for someone under 18.
    Professional,
    /// Under 18, answering for themselves.
    Minor,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Adult,
        AgeGroup::Parent,
        AgeGroup::Professional,
        AgeGroup::Minor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Adult => "I am 18 or over",
            Self::Parent => "I am a parent, doing this for my child under 18",
            Self::Professional => {
                "I am a teacher/other professional doing this for someone under 18"
            }
            Self::Minor => "I am under 18 - doing this for myself",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Region {
    #[default]
    England,
    NorthernIreland,
    Scotland,
    Wales,
    RestOfWorld,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::England,
        Region::NorthernIreland,
        Region::Scotland,
        Region::Wales,
        Region::RestOfWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::England => "England",
            Self::NorthernIreland => "Northern Ireland",
            Self::Scotland => "Scotland",
            Self::Wales => "Wales",
            Self::RestOfWorld => "Rest of World",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum EmploymentStatus {
    #[default]
    Employed,
    SelfEmployed,
    NotWorkingDisabled,
    NotWorkingUnemployed,
    Retired,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::NotWorkingDisabled,
        EmploymentStatus::NotWorkingUnemployed,
        EmploymentStatus::Retired,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed",
            Self::SelfEmployed => "Self-employed",
            Self::NotWorkingDisabled => "Not working (Disabled)",
            Self::NotWorkingUnemployed => "Not working (Unemployed)",
            Self::Retired => "Retired",
        }
    }
}

/// Contact details collected once the questions are done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasicInfo {
    pub full_name: String,
    pub email: String,
    pub region: Region,
    pub employment_status: EmploymentStatus,
}

impl BasicInfo {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("full_name", &self.full_name)?;
        require("email", &self.email)
    }
}

/// Details needed to forward the results to the respondent's GP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GpInfo {
    pub date_of_birth: jiff::civil::Date,
    pub gp_name: String,
    pub gp_address: String,
}

impl GpInfo {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("gp_name", &self.gp_name)?;
        require("gp_address", &self.gp_address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalInfo {
    pub basic: BasicInfo,
    pub gp: GpInfo,
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}
