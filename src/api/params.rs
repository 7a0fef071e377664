//! Typed request parameters for the e-Stat GET operations.
//!
//! Each operation gets an explicit struct with `Option` fields for
//! arguments that may be omitted: `None` means "not supplied" and the
//! key is dropped from the query, while explicitly supplied zeros or
//! empty strings are kept. Flag arguments are plain bools and always
//! serialize as the literal strings "Y"/"N".

const DEFAULT_START_POSITION: u32 = 1;
const DEFAULT_LIMIT: u32 = 100_000;

fn flag(value: bool) -> &'static str {
    if value { "Y" } else { "N" }
}

fn push_opt(pairs: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((key.to_string(), v.clone()));
    }
}

/// Parameters for the getStatsList operation.
///
/// Nothing is strictly required; the remote service treats an empty
/// filter as "everything" subject to pagination.
#[derive(Debug, Clone)]
pub struct StatsListParams {
    pub survey_years: Option<String>,
    pub open_years: Option<String>,
    pub stats_field: Option<String>,
    pub stats_code: Option<String>,
    pub search_word: Option<String>,
    pub search_kind: u32,
    pub collect_area: Option<String>,
    pub explanation_get_flg: bool,
    pub stats_name_list: bool,
    pub start_position: u32,
    pub limit: u32,
    pub updated_date: Option<String>,
    pub callback: Option<String>,
}

impl Default for StatsListParams {
    fn default() -> Self {
        Self {
            survey_years: None,
            open_years: None,
            stats_field: None,
            stats_code: None,
            search_word: None,
            search_kind: 1,
            collect_area: None,
            explanation_get_flg: true,
            stats_name_list: false,
            start_position: DEFAULT_START_POSITION,
            limit: DEFAULT_LIMIT,
            updated_date: None,
            callback: None,
        }
    }
}

impl StatsListParams {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "surveyYears", &self.survey_years);
        push_opt(&mut pairs, "openYears", &self.open_years);
        push_opt(&mut pairs, "statsField", &self.stats_field);
        push_opt(&mut pairs, "statsCode", &self.stats_code);
        push_opt(&mut pairs, "searchWord", &self.search_word);
        pairs.push(("searchKind".to_string(), self.search_kind.to_string()));
        push_opt(&mut pairs, "collectArea", &self.collect_area);
        pairs.push((
            "explanationGetFlg".to_string(),
            flag(self.explanation_get_flg).to_string(),
        ));
        pairs.push((
            "statsNameList".to_string(),
            flag(self.stats_name_list).to_string(),
        ));
        pairs.push(("startPosition".to_string(), self.start_position.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        push_opt(&mut pairs, "updatedDate", &self.updated_date);
        push_opt(&mut pairs, "callback", &self.callback);
        pairs
    }
}

/// Parameters for the getMetaInfo operation.
///
/// statsDataId is expected by the remote service but not enforced
/// locally.
#[derive(Debug, Clone, Default)]
pub struct MetaInfoParams {
    pub stats_data_id: Option<String>,
    pub explanation_get_flg: bool,
    pub callback: Option<String>,
}

impl MetaInfoParams {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "statsDataId", &self.stats_data_id);
        pairs.push((
            "explanationGetFlg".to_string(),
            flag(self.explanation_get_flg).to_string(),
        ));
        push_opt(&mut pairs, "callback", &self.callback);
        pairs
    }
}

/// Parameters for the getStatsData operation.
///
/// `section_header_flg` only applies to csv responses; the client drops
/// it for every other format before the request is assembled. `extra`
/// pairs are passed through verbatim after the named parameters, which
/// covers the long tail of cdCat/lvCat-style selection filters.
#[derive(Debug, Clone)]
pub struct StatsDataParams {
    pub data_set_id: Option<String>,
    pub stats_data_id: Option<String>,
    pub start_position: u32,
    pub limit: u32,
    pub meta_get_flg: bool,
    pub cnt_get_flg: bool,
    pub explanation_get_flg: bool,
    pub annotation_get_flg: bool,
    pub callback: Option<String>,
    pub section_header_flg: Option<u32>,
    pub extra: Vec<(String, String)>,
}

impl Default for StatsDataParams {
    fn default() -> Self {
        Self {
            data_set_id: None,
            stats_data_id: None,
            start_position: DEFAULT_START_POSITION,
            limit: DEFAULT_LIMIT,
            meta_get_flg: true,
            cnt_get_flg: false,
            explanation_get_flg: true,
            annotation_get_flg: true,
            callback: None,
            section_header_flg: Some(1),
            extra: Vec::new(),
        }
    }
}

impl StatsDataParams {
    /// Assemble the query pairs. `csv` reflects the client's response
    /// format; sectionHeaderFlg is emitted only for csv.
    pub fn query_pairs(&self, csv: bool) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "dataSetId", &self.data_set_id);
        push_opt(&mut pairs, "statsDataId", &self.stats_data_id);
        pairs.push(("startPosition".to_string(), self.start_position.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs.push((
            "metaGetFlg".to_string(),
            flag(self.meta_get_flg).to_string(),
        ));
        pairs.push(("cntGetFlg".to_string(), flag(self.cnt_get_flg).to_string()));
        pairs.push((
            "explanationGetFlg".to_string(),
            flag(self.explanation_get_flg).to_string(),
        ));
        pairs.push((
            "annotationGetFlg".to_string(),
            flag(self.annotation_get_flg).to_string(),
        ));
        push_opt(&mut pairs, "callback", &self.callback);
        if csv {
            if let Some(v) = self.section_header_flg {
                pairs.push(("sectionHeaderFlg".to_string(), v.to_string()));
            }
        }
        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_stats_list_defaults() {
        let pairs = StatsListParams::default().query_pairs();
        assert_eq!(lookup(&pairs, "searchKind"), Some("1"));
        assert_eq!(lookup(&pairs, "explanationGetFlg"), Some("Y"));
        assert_eq!(lookup(&pairs, "statsNameList"), Some("N"));
        assert_eq!(lookup(&pairs, "startPosition"), Some("1"));
        assert_eq!(lookup(&pairs, "limit"), Some("100000"));
        // Unset optionals are dropped, not sent as empty.
        assert_eq!(lookup(&pairs, "surveyYears"), None);
        assert_eq!(lookup(&pairs, "callback"), None);
    }

    #[test]
    fn test_stats_list_explicit_empty_string_is_kept() {
        let params = StatsListParams {
            search_word: Some(String::new()),
            ..Default::default()
        };
        let pairs = params.query_pairs();
        assert_eq!(lookup(&pairs, "searchWord"), Some(""));
    }

    #[test]
    fn test_flags_serialize_as_y_or_n_only() {
        let params = StatsListParams {
            explanation_get_flg: false,
            stats_name_list: true,
            ..Default::default()
        };
        let pairs = params.query_pairs();
        assert_eq!(lookup(&pairs, "explanationGetFlg"), Some("N"));
        assert_eq!(lookup(&pairs, "statsNameList"), Some("Y"));
    }

    #[test]
    fn test_meta_info_flag_defaults_to_n() {
        let pairs = MetaInfoParams::default().query_pairs();
        assert_eq!(lookup(&pairs, "explanationGetFlg"), Some("N"));
        assert_eq!(lookup(&pairs, "statsDataId"), None);
    }

    #[test]
    fn test_stats_data_defaults() {
        let pairs = StatsDataParams::default().query_pairs(true);
        assert_eq!(lookup(&pairs, "metaGetFlg"), Some("Y"));
        assert_eq!(lookup(&pairs, "cntGetFlg"), Some("N"));
        assert_eq!(lookup(&pairs, "explanationGetFlg"), Some("Y"));
        assert_eq!(lookup(&pairs, "annotationGetFlg"), Some("Y"));
        assert_eq!(lookup(&pairs, "sectionHeaderFlg"), Some("1"));
    }

    #[test]
    fn test_stats_data_section_header_dropped_for_non_csv() {
        let params = StatsDataParams {
            section_header_flg: Some(0),
            ..Default::default()
        };
        assert_eq!(lookup(&params.query_pairs(false), "sectionHeaderFlg"), None);
        // csv keeps the caller's value, including an explicit zero.
        assert_eq!(
            lookup(&params.query_pairs(true), "sectionHeaderFlg"),
            Some("0")
        );
    }

    #[test]
    fn test_stats_data_extra_pairs_pass_through() {
        let params = StatsDataParams {
            extra: vec![("cdCat01".to_string(), "001".to_string())],
            ..Default::default()
        };
        let pairs = params.query_pairs(false);
        assert_eq!(lookup(&pairs, "cdCat01"), Some("001"));
        // Extras come after the named parameters.
        assert_eq!(pairs.last().map(|(k, _)| k.as_str()), Some("cdCat01"));
    }
}
