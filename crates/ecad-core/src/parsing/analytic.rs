use crate::classify::LayoutTag;
use crate::error::EcadError;
use crate::model::AnalyticRecord;
use crate::parsing::values::normalize_decimal;
use crate::parsing::{group, LineScanner};
use crate::profiles::compile_pattern;
use crate::profiles::schema::AnalyticDef;
use regex::Regex;

/// Context carried between lines of an analytic report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticState {
    pub current_work_id: String,
    pub current_title: String,
}

/// Line grammar for connected-rightsholder analytic reports.
///
/// A work header line sets the current work and yields nothing. Holder lines
/// yield a record only once a work has been seen.
#[derive(Debug, Clone)]
pub struct AnalyticScanner {
    header: Regex,
    holder: Regex,
    title_stop: Option<String>,
}

impl AnalyticScanner {
    pub fn new(def: &AnalyticDef) -> Result<Self, EcadError> {
        let header = compile_pattern("analytic.header", &def.header, &["work"])?;
        let holder = compile_pattern(
            "analytic.holder",
            &def.holder,
            &["name", "association", "share"],
        )?;

        Ok(AnalyticScanner {
            header,
            holder,
            title_stop: def.title_stop.clone().filter(|s| !s.is_empty()),
        })
    }

    fn clean_title(&self, raw: &str) -> String {
        let title = match &self.title_stop {
            Some(stop) => raw.split(stop.as_str()).next().unwrap_or_default(),
            None => raw,
        };
        title.trim().to_string()
    }
}

impl LineScanner for AnalyticScanner {
    type State = AnalyticState;
    type Record = AnalyticRecord;

    fn initial_state(&self) -> AnalyticState {
        AnalyticState::default()
    }

    fn step(&self, state: AnalyticState, line: &str) -> (AnalyticState, Option<AnalyticRecord>) {
        if let Some(caps) = self.header.captures(line) {
            let next = AnalyticState {
                current_work_id: group(&caps, "work").to_string(),
                current_title: self.clean_title(group(&caps, "title")),
            };
            return (next, None);
        }

        if state.current_work_id.is_empty() {
            return (state, None);
        }

        let record = self.holder.captures(line).map(|caps| AnalyticRecord {
            work_id: state.current_work_id.clone(),
            work_title: state.current_title.clone(),
            rightsholder_name: group(&caps, "name").to_string(),
            association_code: group(&caps, "association").to_string(),
            quota_share: normalize_decimal(group(&caps, "share")),
            report_type: LayoutTag::Analytic,
        });

        (state, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::PageContent;
    use crate::parsing::scan;
    use crate::profiles::builtin::load_preset;
    use rust_decimal_macros::dec;

    fn scanner(preset: &str) -> AnalyticScanner {
        AnalyticScanner::new(&load_preset(preset).unwrap().analytic).unwrap()
    }

    #[test]
    fn test_header_then_holder() {
        let pages = vec![PageContent::new(
            1,
            "1234567 AB12345678 RELEASED Some Title\nJohn Doe ABC 12,50",
        )];
        let records = scan(&scanner("default"), &pages);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.work_id, "AB12345678");
        assert_eq!(r.work_title, "Some Title");
        assert_eq!(r.rightsholder_name, "John Doe");
        assert_eq!(r.association_code, "ABC");
        assert_eq!(r.quota_share, dec!(12.5));
        assert_eq!(r.report_type, LayoutTag::Analytic);
    }

    #[test]
    fn test_holders_before_any_header_are_dropped() {
        let pages = vec![PageContent::new(
            1,
            "John Doe ABC 12,50\n1234567 AB12345678 RELEASED Title\nJane Roe XYZ 87,50",
        )];
        let records = scan(&scanner("default"), &pages);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rightsholder_name, "Jane Roe");
    }

    #[test]
    fn test_work_changes_between_blocks() {
        let pages = vec![
            PageContent::new(
                1,
                "1234567 AB12345678 RELEASED First\nJohn Doe ABC 50,00\nJane Roe XYZ 50,00",
            ),
            PageContent::new(2, "7654321 ZX98765432 RELEASED Second\nMARY ANN SMITH ABC 100,00"),
        ];
        let records = scan(&scanner("default"), &pages);
        let summary: Vec<(&str, &str, &str)> = records
            .iter()
            .map(|r| (r.work_id.as_str(), r.work_title.as_str(), r.rightsholder_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("AB12345678", "First", "John Doe"),
                ("AB12345678", "First", "Jane Roe"),
                ("ZX98765432", "Second", "MARY ANN SMITH"),
            ]
        );
    }

    #[test]
    fn test_short_codes_do_not_open_a_work() {
        let pages = vec![PageContent::new(
            1,
            "123456 AB12345678 RELEASED Title\nJohn Doe ABC 12,50",
        )];
        assert!(scan(&scanner("default"), &pages).is_empty());
    }

    #[test]
    fn test_holder_requires_trailing_number() {
        let pages = vec![PageContent::new(
            1,
            "1234567 AB12345678 RELEASED Title\nJohn Doe ABC 12,50 extra\nJohn Doe ab 12,50",
        )];
        assert!(scan(&scanner("default"), &pages).is_empty());
    }

    #[test]
    fn test_pt_br_title_is_cut_at_stop_marker() {
        let pages = vec![PageContent::new(
            1,
            "0001234 BRABC2400001 LIBERADO AGUA DE BEBER NÃO CONFERIDO\n\
             12345 MARIA DA SILVA CA AU ABRAMUS 50,00",
        )];
        let records = scan(&scanner("pt-br"), &pages);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].work_id, "BRABC2400001");
        assert_eq!(records[0].work_title, "AGUA DE BEBER");
        assert_eq!(records[0].rightsholder_name, "MARIA DA SILVA");
        assert_eq!(records[0].association_code, "ABRAMUS");
        assert_eq!(records[0].quota_share, dec!(50));
    }
}
