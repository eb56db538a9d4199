//! Column name to semantic type dictionary.
//!
//! One global dictionary covers every table: a column name carries the same
//! type wherever it appears. The entries were worked out from sample BK3 files.
//! OUTOFSEQ is deliberately missing, it holds different kinds of values in the
//! project and activity tables.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Semantic type of a column, independent of its textual encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Token kept as-is; the type of every unregistered column
    Text,
    Numeric,
    Integer,
    DateTime,
    Time,
    Boolean,
    Duration,
    Identifier,
    ResourceClass,
}

/// Known columns and their types
pub const COLUMN_TYPES: &[(&str, DataType)] = &[
    ("ACT_PROBABILITY", DataType::Numeric),
    ("ACT_UID", DataType::Identifier),
    ("ACTIVEINDEX", DataType::Numeric),
    ("ACWP_LAB", DataType::Numeric),
    ("ACWP_MAT", DataType::Numeric),
    ("ACWP_ODC", DataType::Numeric),
    ("ACWP_QTY", DataType::Numeric),
    ("ACWP_SUB", DataType::Numeric),
    ("AFDATE", DataType::DateTime),
    ("ALT_RES_UID", DataType::Identifier),
    ("ASDATE", DataType::DateTime),
    ("ASG_UID", DataType::Identifier),
    ("AUTOANAL", DataType::Integer),
    ("AUTOPROGACT", DataType::Integer),
    ("AUTOPROGBASE", DataType::Integer),
    ("AUTOPROGCFB", DataType::Integer),
    ("AUTOPROGPPC", DataType::Integer),
    ("AUTOPROGPSB", DataType::Integer),
    ("AUTOPROGRES", DataType::Integer),
    ("AUTOPROGTYPE", DataType::Integer),
    ("AVL_UID", DataType::Identifier),
    ("BAC_LAB", DataType::Numeric),
    ("BAC_MAT", DataType::Numeric),
    ("BAC_ODC", DataType::Numeric),
    ("BAC_QTY", DataType::Numeric),
    ("BAC_SUB", DataType::Numeric),
    ("BCWP_LAB", DataType::Numeric),
    ("BCWP_MAT", DataType::Numeric),
    ("BCWP_ODC", DataType::Numeric),
    ("BCWP_QTY", DataType::Numeric),
    ("BCWP_SUB", DataType::Numeric),
    ("BCWS_LAB", DataType::Numeric),
    ("BCWS_MAT", DataType::Numeric),
    ("BCWS_ODC", DataType::Numeric),
    ("BCWS_QTY", DataType::Numeric),
    ("BCWS_SUB", DataType::Numeric),
    ("BFDATE", DataType::DateTime),
    ("BSDATE", DataType::DateTime),
    ("CALACTCST", DataType::Integer),
    ("CALBUDCST", DataType::Integer),
    ("CALCCOSTBASE", DataType::Integer),
    ("CALCSTESC", DataType::Integer),
    ("CALEVCST", DataType::Integer),
    ("CALREMCST", DataType::Integer),
    ("CLC_COST", DataType::Boolean),
    ("CLC_PROG", DataType::Boolean),
    ("CLD_UID", DataType::Identifier),
    ("CLH_UID", DataType::Identifier),
    ("COD_UID", DataType::Identifier),
    ("COMPSTAT", DataType::Integer),
    ("CRITICAL", DataType::Integer),
    ("CRITINDEX", DataType::Numeric),
    ("CST_ROLLUP", DataType::Integer),
    ("DEFACTDUR", DataType::Integer),
    ("DEFENDHR", DataType::Integer),
    ("DEFENDMN", DataType::Integer),
    ("DEFSTARTHR", DataType::Integer),
    ("DEFSTARTMN", DataType::Integer),
    ("DELAYRES_UID", DataType::Identifier),
    ("DHIGH", DataType::Duration),
    ("DIR_UID", DataType::Identifier),
    ("DLOW", DataType::Duration),
    ("EFDATE", DataType::DateTime),
    ("EFF_FACTOR", DataType::Numeric),
    ("ESDATE", DataType::DateTime),
    ("ETC_LAB", DataType::Numeric),
    ("ETC_MAT", DataType::Numeric),
    ("ETC_ODC", DataType::Numeric),
    ("ETC_QTY", DataType::Numeric),
    ("ETC_SUB", DataType::Numeric),
    ("FEDATE", DataType::DateTime),
    ("FINFREEFLT", DataType::Duration),
    ("FINTOTFLT", DataType::Duration),
    ("FREEFLOAT", DataType::Duration),
    ("HARDZERO", DataType::Integer),
    ("LASTUPDATE", DataType::DateTime),
    ("LFDATE", DataType::DateTime),
    ("LSDATE", DataType::DateTime),
    ("MEAN_EF", DataType::DateTime),
    ("MEAN_ES", DataType::DateTime),
    ("MEAN_FF", DataType::Duration),
    ("MEAN_LF", DataType::DateTime),
    ("MEAN_LS", DataType::DateTime),
    ("MEAN_TF", DataType::Duration),
    ("MINCALCDU", DataType::Integer),
    ("MINSPLITD", DataType::Duration),
    ("MNPERDAY", DataType::Integer),
    ("MNPERMON", DataType::Integer),
    ("MNPERWK", DataType::Integer),
    ("MSPUNIQUEID", DataType::Integer),
    ("MULTIEND", DataType::Integer),
    ("NO_LIST", DataType::Boolean),
    ("NRISKSIMULS", DataType::Integer),
    ("OPFINISH", DataType::Time),
    ("OPKEY", DataType::Boolean),
    ("OPSTART", DataType::Time),
    ("OPWORK", DataType::Boolean),
    ("ORIG_DUR", DataType::Duration),
    ("PALLOC_UID", DataType::Identifier),
    ("PCOMPLETE", DataType::Integer),
    ("POSITION_NUM", DataType::Integer),
    ("PPC", DataType::Numeric),
    ("PRED_ACT_UID", DataType::Identifier),
    ("PRJ_FLAG", DataType::Integer),
    ("PROGPRIO", DataType::Integer),
    ("RDS_UID", DataType::Identifier),
    ("REFDATE", DataType::DateTime),
    ("REL_FF", DataType::Duration),
    ("REL_LAG", DataType::Duration),
    ("REL_PROBABILITY", DataType::Numeric),
    ("REL_TF", DataType::Duration),
    ("REL_UID", DataType::Identifier),
    ("REM_DUR", DataType::Duration),
    ("REMAINING", DataType::Numeric),
    ("RES_CLASS", DataType::ResourceClass),
    ("RES_CST", DataType::Numeric),
    ("RES_DATE", DataType::DateTime),
    ("RES_ESC", DataType::Numeric),
    ("RES_LEVEL", DataType::Numeric),
    ("RES_OFFSET", DataType::Duration),
    ("RES_PERIOD", DataType::Duration),
    ("RES_SKL_UID", DataType::Identifier),
    ("RES_UID", DataType::Identifier),
    ("RES_USED", DataType::Numeric),
    ("RFDATE", DataType::DateTime),
    ("RISKSEED", DataType::Integer),
    ("ROLLCOST", DataType::Boolean),
    ("ROLLUP", DataType::Boolean),
    ("RS_ACTDATE", DataType::Integer),
    ("RS_ALTPRTY", DataType::Integer),
    ("RS_CONUSE", DataType::Integer),
    ("RS_FLOAT", DataType::Duration),
    ("RS_OVLLATE", DataType::Integer),
    ("RS_PRIORTY", DataType::Integer),
    ("RS_REPROF", DataType::Integer),
    ("RS_SUMDATE", DataType::Integer),
    ("RS_SUMMARY", DataType::Integer),
    ("RS_SUPRESS", DataType::Boolean),
    ("RSDATE", DataType::DateTime),
    ("RSK_CALSD", DataType::Integer),
    ("RSL_UID", DataType::Identifier),
    ("RSLDATE", DataType::DateTime),
    ("SCA_UID", DataType::Identifier),
    ("SCHED_DUR", DataType::Duration),
    ("SCHMETHOD", DataType::Integer),
    ("SDEV_EF", DataType::Duration),
    ("SDEV_ES", DataType::Duration),
    ("SDEV_FF", DataType::Duration),
    ("SDEV_LF", DataType::Duration),
    ("SDEV_LS", DataType::Duration),
    ("SDEV_TF", DataType::Duration),
    ("SEP_ASG", DataType::Boolean),
    ("SEQUENCE", DataType::Integer),
    ("SFDATE", DataType::DateTime),
    ("SMOOTHING", DataType::Integer),
    ("SSDATE", DataType::DateTime),
    ("SSINDEX", DataType::Numeric),
    ("STARTDATE", DataType::DateTime),
    ("STARTPC", DataType::Integer),
    ("STATDATE", DataType::DateTime),
    ("SUBPRJ_UID", DataType::Identifier),
    ("SUCC_ACT_UID", DataType::Identifier),
    ("SUPPRESS", DataType::Boolean),
    ("TA_BEFORE_RK", DataType::Integer),
    ("TA_SUBEND", DataType::Integer),
    ("TA_SUMMARY", DataType::Integer),
    ("TARGCOST", DataType::Numeric),
    ("THRESHOLD", DataType::Numeric),
    ("TIMEUNIT", DataType::Integer),
    ("TOTACT", DataType::Integer),
    ("TOTACTCOM", DataType::Integer),
    ("TOTACTPRG", DataType::Integer),
    ("TOTALFLOAT", DataType::Duration),
    ("TOTRELSHP", DataType::Integer),
    ("TOTRESO", DataType::Integer),
    ("TSDATE", DataType::DateTime),
    ("UNIT_COST", DataType::Numeric),
    ("USE_UID", DataType::Identifier),
    ("USER_DTE01", DataType::DateTime),
    ("USER_DTE02", DataType::DateTime),
    ("USER_DTE03", DataType::DateTime),
    ("USER_DTE04", DataType::DateTime),
    ("USER_DTE05", DataType::DateTime),
    ("USER_DTE06", DataType::DateTime),
    ("USER_DTE07", DataType::DateTime),
    ("USER_DTE08", DataType::DateTime),
    ("USER_DTE09", DataType::DateTime),
    ("USER_DTE10", DataType::DateTime),
    ("USER_NUM01", DataType::Numeric),
    ("USER_NUM02", DataType::Numeric),
    ("USER_NUM03", DataType::Numeric),
    ("USER_NUM04", DataType::Numeric),
    ("USER_NUM05", DataType::Numeric),
    ("USER_NUM06", DataType::Numeric),
    ("USER_NUM07", DataType::Numeric),
    ("USER_NUM08", DataType::Numeric),
    ("USER_NUM09", DataType::Numeric),
    ("USER_NUM10", DataType::Numeric),
];

static TYPE_MAP: Lazy<HashMap<&'static str, DataType>> =
    Lazy::new(|| COLUMN_TYPES.iter().copied().collect());

/// Semantic type of a column; `Text` for names not in the dictionary
pub fn lookup(column: &str) -> DataType {
    TYPE_MAP.get(column).copied().unwrap_or(DataType::Text)
}

/// Whether the column has an explicit dictionary entry
pub fn is_registered(column: &str) -> bool {
    TYPE_MAP.contains_key(column)
}
