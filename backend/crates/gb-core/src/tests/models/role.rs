use crate::Role;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Workforce.as_str(), "workforce");
    assert_eq!(Role::Other.as_str(), "other");
}

#[test]
fn test_role_parse_known_roles() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("workforce"), Role::Workforce);
}

#[test]
fn test_role_parse_is_case_sensitive() {
    assert_eq!(Role::parse("Admin"), Role::Other);
    assert_eq!(Role::parse("WORKFORCE"), Role::Other);
}

#[test]
fn test_role_parse_unknown_falls_back_to_other() {
    assert_eq!(Role::parse(""), Role::Other);
    assert_eq!(Role::parse("accountant"), Role::Other);
    assert_eq!(Role::parse("admn"), Role::Other);
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Other);
}

#[test]
fn test_role_serde_uses_plain_strings() {
    let role: Role = serde_json::from_str("\"workforce\"").unwrap();
    assert_eq!(role, Role::Workforce);

    let role: Role = serde_json::from_str("\"manager\"").unwrap();
    assert_eq!(role, Role::Other);

    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}
