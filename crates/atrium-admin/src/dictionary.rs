//! Enum-backed dictionaries for select options.
//!
//! Wire codes are SCREAMING_SNAKE_CASE to match the backend; `label()`
//! returns the display text shown in tables and forms.

use serde::{Deserialize, Serialize};

/// Where a customer record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerSource {
    Tianyancha,
    Qichacha,
    Douyin,
    Taobao,
    Jianqicha,
    OutboundCall,
    Other,
}

impl CustomerSource {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tianyancha => "天眼查",
            Self::Qichacha => "企查查",
            Self::Douyin => "抖音",
            Self::Taobao => "淘宝",
            Self::Jianqicha => "建企查",
            Self::OutboundCall => "外呼",
            Self::Other => "其他",
        }
    }
}

/// What the customer is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerCategory {
    QualificationProcessing,
    QualificationMaintenance,
    TalentDemand,
    Other,
}

impl CustomerCategory {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QualificationProcessing => "资质办理",
            Self::QualificationMaintenance => "资质维护",
            Self::TalentDemand => "人才需求",
            Self::Other => "其他",
        }
    }
}

/// Follow-up pipeline state of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    PendingFollow,
    Following,
    Intention,
    NonIntention,
}

impl CustomerStatus {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingFollow => "待跟进",
            Self::Following => "跟进中",
            Self::Intention => "意向客户",
            Self::NonIntention => "非意向客户",
        }
    }
}

/// Channel of a follow-up record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowRecordType {
    Visit,
    PhoneCall,
    Wechat,
    Qq,
    Sms,
    Email,
    InternetCall,
    OutboundCall,
    Other,
}

impl FollowRecordType {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Visit => "到访",
            Self::PhoneCall => "电话",
            Self::Wechat => "微信",
            Self::Qq => "QQ",
            Self::Sms => "短信",
            Self::Email => "邮件",
            Self::InternetCall => "网络电话",
            Self::OutboundCall => "外呼",
            Self::Other => "其他",
        }
    }
}

/// Kind of change recorded in a lead's operation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationRecordType {
    Create,
    Update,
    Delete,
}

impl OperationRecordType {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "新增线索",
            Self::Update => "更新线索",
            Self::Delete => "删除线索",
        }
    }

    /// Timeline dot color for the history view.
    #[must_use]
    pub fn timeline_color(self) -> &'static str {
        match self {
            Self::Create => "green",
            Self::Update => "blue",
            Self::Delete => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_are_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&CustomerSource::OutboundCall).expect("serialize"),
            r#""OUTBOUND_CALL""#
        );
        assert_eq!(
            serde_json::to_string(&CustomerStatus::PendingFollow).expect("serialize"),
            r#""PENDING_FOLLOW""#
        );
    }

    #[test]
    fn wire_codes_roundtrip() {
        let status: CustomerStatus = serde_json::from_str(r#""NON_INTENTION""#).expect("parse");
        assert_eq!(status, CustomerStatus::NonIntention);
        assert_eq!(status.label(), "非意向客户");
    }

    #[test]
    fn operation_colors_match_kinds() {
        assert_eq!(OperationRecordType::Create.timeline_color(), "green");
        assert_eq!(OperationRecordType::Update.timeline_color(), "blue");
        assert_eq!(OperationRecordType::Delete.timeline_color(), "red");
    }
}
