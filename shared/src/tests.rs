use super::*;

#[test]
fn role_defaults_to_user_for_unknown_values() {
    let role: Role = serde_json::from_str("\"superuser\"").unwrap();
    assert_eq!(role, Role::User);
    assert!(!role.is_admin());

    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert!(role.is_admin());
}

#[test]
fn user_without_role_field_is_not_admin() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::User);
}

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        token: "tok-123".to_string(),
        user: User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
        },
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn status_enums_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&OrderStatus::Shipped).unwrap(), "\"shipped\"");
    assert_eq!(serde_json::to_string(&AlertLevel::Critical).unwrap(), "\"critical\"");
    assert_eq!(serde_json::to_string(&PlanTier::Pro).unwrap(), "\"pro\"");
    assert_eq!(OrderStatus::from_str_or_default("shipped"), OrderStatus::Shipped);
    assert_eq!(OrderStatus::from_str_or_default("???"), OrderStatus::Pending);
    assert_eq!(AlertLevel::from_str_or_default("warning"), AlertLevel::Warning);
}
