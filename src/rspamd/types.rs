use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Verdict assigned by Rspamd, using its wire names.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    #[serde(rename = "no action")]
    NoAction,
    #[serde(rename = "greylist")]
    Greylist,
    #[serde(rename = "add header")]
    AddHeader,
    #[serde(rename = "rewrite subject")]
    RewriteSubject,
    #[serde(rename = "soft reject")]
    SoftReject,
    #[serde(rename = "reject")]
    Reject,
}

/// Score thresholds per action. Named actions beyond the three fixed ones
/// land in `other`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub reject: f64,
    #[serde(rename = "add header")]
    pub add_header: f64,
    pub greylist: f64,
    #[serde(flatten)]
    pub other: HashMap<String, f64>,
}

/// A rule that fired for the message.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub score: f64,
    pub metric_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MilterAddHeader {
    pub value: String,
    pub order: i64,
}

/// Header and envelope changes Rspamd asks an MTA to apply.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct MilterHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_headers: Option<HashMap<String, MilterAddHeader>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_headers: Option<HashMap<String, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_action: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_rcpt: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub del_rcpt: Option<Vec<String>>,
}

/// Response of `/checkv2`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CheckV2Response {
    pub is_skipped: bool,
    pub score: f64,
    pub required_score: f64,
    pub action: Action,
    pub thresholds: Thresholds,
    pub symbols: HashMap<String, Symbol>,
    pub messages: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(
        rename = "message-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milter: Option<MilterHeaders>,
}
