use sos_hide::AlertError;
use sos_hide::alert::{EmergencyAlert, Location, Urgency};

fn sample_alert() -> EmergencyAlert {
    EmergencyAlert {
        message: "Need insulin, road blocked".to_string(),
        name: "Sam Rivera".to_string(),
        phone: "+1 555 0100".to_string(),
        urgency_color: Urgency::Red,
        location: Location {
            latitude: Some(40.7128),
            longitude: Some(-74.006),
        },
    }
}

#[test]
fn test_payload_round_trip() -> anyhow::Result<()> {
    let alert = sample_alert();
    let payload = alert.to_payload()?;
    assert_eq!(EmergencyAlert::from_payload(&payload)?, alert);
    Ok(())
}

#[test]
fn test_payload_is_strict_json_in_field_order() -> anyhow::Result<()> {
    let payload = sample_alert().to_payload()?;
    let text = String::from_utf8(payload)?;

    assert!(text.starts_with(
        r#"{"message":"Need insulin, road blocked","name":"Sam Rivera","phone":"#
    ));
    assert!(text.contains(r#""urgency_color":"red""#));
    assert!(text.contains(r#""location":{"latitude":40.7128,"longitude":-74.006}"#));
    Ok(())
}

#[test]
fn test_request_style_json_is_accepted() -> anyhow::Result<()> {
    let json = r#"{
        "name": "Ana",
        "phoneNumber": "0123",
        "message": "Smoke in the stairwell",
        "urgency_color": "yellow"
    }"#;
    let alert: EmergencyAlert = serde_json::from_str(json)?;

    assert_eq!(alert.phone, "0123");
    assert_eq!(alert.urgency_color, Urgency::Yellow);
    assert_eq!(alert.location, Location::default());
    Ok(())
}

#[test]
fn test_unknown_urgency_is_rejected() {
    let json = r#"{"name":"Ana","phone":"0123","message":"hi","urgency_color":"blue"}"#;
    assert!(serde_json::from_str::<EmergencyAlert>(json).is_err());
}

#[test]
fn test_blank_required_field_is_rejected() {
    let mut alert = sample_alert();
    alert.name = "   ".to_string();

    assert!(matches!(alert.validate(), Err(AlertError::MissingField("name"))));
    assert!(matches!(alert.to_payload(), Err(AlertError::MissingField("name"))));
}

#[test]
fn test_garbage_payload_is_malformed() {
    assert!(matches!(
        EmergencyAlert::from_payload(b"{'message': 'python dict'}"),
        Err(AlertError::Malformed(_))
    ));
}

#[test]
fn test_urgency_display() {
    assert_eq!(Urgency::Green.to_string(), "green");
}
