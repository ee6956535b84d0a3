use crate::classify::LayoutTag;
use crate::error::EcadError;
use crate::model::DistributionRecord;
use crate::parsing::values::normalize_decimal;
use crate::parsing::{group, LineScanner};
use crate::profiles::compile_pattern;
use crate::profiles::schema::DistributionDef;
use regex::Regex;

/// Context carried between lines of a distribution statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionState {
    pub current_isrc: String,
    pub current_work: Option<String>,
}

/// Line grammar for financial distribution statements.
///
/// Every line is tested against all rules; an ISRC line may also be a
/// financial row, in which case the row already uses the new ISRC.
#[derive(Debug, Clone)]
pub struct DistributionScanner {
    default_isrc: String,
    isrc: Regex,
    work: Option<Regex>,
    row: Regex,
}

impl DistributionScanner {
    pub fn new(def: &DistributionDef) -> Result<Self, EcadError> {
        let isrc = compile_pattern("distribution.isrc", &def.isrc, &["isrc"])?;
        let work = def
            .work
            .as_ref()
            .map(|w| compile_pattern("distribution.work", w, &["work"]))
            .transpose()?;
        let row = compile_pattern(
            "distribution.row",
            &def.row,
            &["label", "gross", "share", "received"],
        )?;

        Ok(DistributionScanner {
            default_isrc: def.default_isrc.clone(),
            isrc,
            work,
            row,
        })
    }
}

impl LineScanner for DistributionScanner {
    type State = DistributionState;
    type Record = DistributionRecord;

    fn initial_state(&self) -> DistributionState {
        DistributionState {
            current_isrc: self.default_isrc.clone(),
            current_work: None,
        }
    }

    fn step(
        &self,
        mut state: DistributionState,
        line: &str,
    ) -> (DistributionState, Option<DistributionRecord>) {
        if let Some(caps) = self.isrc.captures(line) {
            let isrc = group(&caps, "isrc");
            if !isrc.is_empty() {
                state.current_isrc = isrc.to_string();
            }
        }

        if let Some(caps) = self.work.as_ref().and_then(|re| re.captures(line)) {
            let work = group(&caps, "work");
            if !work.is_empty() {
                state.current_work = Some(work.to_string());
            }
        }

        let record = self.row.captures(line).map(|caps| {
            let period = group(&caps, "period");
            DistributionRecord {
                isrc: state.current_isrc.clone(),
                work: state.current_work.clone(),
                rubric: group(&caps, "label").to_string(),
                period: (!period.is_empty()).then(|| period.to_string()),
                gross_value: normalize_decimal(group(&caps, "gross")),
                share_percent: normalize_decimal(group(&caps, "share")),
                received_value: normalize_decimal(group(&caps, "received")),
                report_type: LayoutTag::Distribution,
            }
        });

        (state, record)
    }
}
