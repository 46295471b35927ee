use crate::error::CoreError;
use crate::object::raw::RawObject;
use serde::Serialize;

/// A CloudWatch alarm CloudFormation monitors during the update.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackTrigger {
    pub arn: String,
    #[serde(rename = "Type")]
    pub trigger_type: String,
}

impl RollbackTrigger {
    fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("RollbackTrigger", value)?;
        Ok(Self {
            arn: raw.string("Arn")?,
            trigger_type: raw.string("Type")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackConfiguration {
    pub monitoring_time_in_minutes: u64,
    pub rollback_triggers: Vec<RollbackTrigger>,
}

impl RollbackConfiguration {
    pub(crate) fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("RollbackConfiguration", value)?;
        Ok(Self {
            monitoring_time_in_minutes: raw.u64("MonitoringTimeInMinutes")?,
            rollback_triggers: raw
                .array("RollbackTriggers")?
                .iter()
                .map(RollbackTrigger::parse)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub(crate) fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("Tag", value)?;
        Ok(Self {
            key: raw.string("Key")?,
            value: raw.string("Value")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rollback_configuration() {
        let rc = RollbackConfiguration::parse(&json!({
            "MonitoringTimeInMinutes": 10,
            "RollbackTriggers": [
                {"Arn": "arn:aws:cloudwatch:eu-west-1:123456789012:alarm:high-5xx", "Type": "AWS::CloudWatch::Alarm"}
            ]
        }))
        .unwrap();
        assert_eq!(rc.monitoring_time_in_minutes, 10);
        assert_eq!(rc.rollback_triggers[0].trigger_type, "AWS::CloudWatch::Alarm");
    }

    #[test]
    fn negative_monitoring_time_is_rejected() {
        let err = RollbackConfiguration::parse(&json!({
            "MonitoringTimeInMinutes": -1,
            "RollbackTriggers": []
        }))
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidFieldType { .. }));
    }

    #[test]
    fn tag_requires_value() {
        let err = Tag::parse(&json!({"Key": "team"})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField { entity: "Tag", field: "Value" }));
    }
}
